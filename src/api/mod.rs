// src/api/mod.rs
pub mod fetch;

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use reqwest::blocking::{multipart, Client, Response};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Breakdown, DatasetRecord, DatasetResult, FormType, Student, User};

pub use fetch::Query;

/// What went wrong with an API call, split the way the UI reports it:
/// the server answered with an error, the server never answered, or the
/// request could not be built in the first place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    Server { status: u16, message: String },
    NoResponse(String),
    Request(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Server { message, .. } => f.write_str(message),
            ApiError::NoResponse(_) => {
                f.write_str("No response from server. Please check if the server is running.")
            }
            ApiError::Request(_) => f.write_str("Failed to send request. Please try again."),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            ApiError::Request(err.to_string())
        } else if err.is_decode() {
            ApiError::Server {
                status: err.status().map_or(200, |status| status.as_u16()),
                message: "Invalid response from server".to_string(),
            }
        } else {
            ApiError::NoResponse(err.to_string())
        }
    }
}

/// Payload for `POST /api/create_user`. Leaving `user_type` unset lets the
/// server default it to a viewer account.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct AuthBody {
    user: User,
}

#[derive(Debug, Deserialize)]
struct UsersBody {
    users: Vec<User>,
}

#[derive(Debug, Deserialize)]
struct RecordsBody {
    records: Vec<DatasetRecord>,
}

#[derive(Debug, Deserialize)]
struct UploadBody {
    data: DatasetResult,
}

/// Blocking HTTP client for the guidance API. Cheap to clone; clones share
/// the underlying connection pool, so worker threads each grab their own.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("invalid API base URL: {base_url}"))?;
        let http = Client::builder()
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { http, base_url })
    }

    /// Join path segments onto the base URL. Segments are percent-encoded,
    /// so user-entered values like student names are safe here.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Pass 2xx responses through; turn anything else into a `Server`
    /// error carrying the body's message when one is present.
    fn check(resp: Response) -> Result<Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let message = resp
            .json::<MessageBody>()
            .ok()
            .map(|body| body.message)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| format!("Server error occurred ({status})"));
        Err(ApiError::Server {
            status: status.as_u16(),
            message,
        })
    }

    pub fn authenticate(&self, username: &str, password: &str) -> Result<User, ApiError> {
        let resp = self
            .http
            .get(self.endpoint(&["api", "auth"]))
            .query(&[("username", username), ("password", password)])
            .send()?;
        let body: AuthBody = Self::check(resp)?.json()?;
        Ok(body.user)
    }

    pub fn create_user(&self, user: &NewUser) -> Result<String, ApiError> {
        let resp = self
            .http
            .post(self.endpoint(&["api", "create_user"]))
            .json(user)
            .send()?;
        let body: MessageBody = Self::check(resp)?.json()?;
        Ok(body.message)
    }

    pub fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let resp = self.http.get(self.endpoint(&["api", "users"])).send()?;
        let body: UsersBody = Self::check(resp)?.json()?;
        Ok(body.users)
    }

    pub fn delete_user(&self, id: &str) -> Result<String, ApiError> {
        let resp = self
            .http
            .delete(self.endpoint(&["api", "users", id]))
            .send()?;
        let body: MessageBody = Self::check(resp)?.json()?;
        Ok(body.message)
    }

    /// Upload a survey CSV for processing. Failing to read the file is a
    /// `Request` error; nothing leaves the client in that case.
    pub fn upload_dataset(
        &self,
        username: &str,
        dataset_name: &str,
        form_type: FormType,
        file: &Path,
    ) -> Result<DatasetResult, ApiError> {
        let file_part = multipart::Part::file(file)
            .map_err(|err| ApiError::Request(format!("could not read {}: {err}", file.display())))?;
        let form = multipart::Form::new()
            .text("user", username.to_string())
            .text("datasetName", dataset_name.to_string())
            .text("kindOfData", form_type.as_str().to_string())
            .part("file", file_part);
        let resp = self
            .http
            .post(self.endpoint(&["api", "data"]))
            .multipart(form)
            .send()?;
        let body: UploadBody = Self::check(resp)?.json()?;
        Ok(body.data)
    }

    pub fn list_records(&self, username: &str) -> Result<Vec<DatasetRecord>, ApiError> {
        let resp = self
            .http
            .get(self.endpoint(&["api", "data"]))
            .query(&[("username", username)])
            .send()?;
        let body: RecordsBody = Self::check(resp)?.json()?;
        Ok(body.records)
    }

    pub fn dataset_result(
        &self,
        form_type: FormType,
        uuid: &Uuid,
    ) -> Result<DatasetResult, ApiError> {
        let resp = self
            .http
            .get(self.endpoint(&["api", "data", form_type.as_str(), &uuid.to_string()]))
            .send()?;
        let body: DatasetResult = Self::check(resp)?.json()?;
        Ok(body)
    }

    pub fn delete_record(&self, uuid: &Uuid) -> Result<String, ApiError> {
        let resp = self
            .http
            .delete(self.endpoint(&["api", "data", &uuid.to_string()]))
            .send()?;
        let body: MessageBody = Self::check(resp)?.json()?;
        Ok(body.message)
    }

    /// Filtered answer distribution for one dataset. Filter values use the
    /// literal `all` to mean unfiltered, matching the processing service.
    pub fn answer_summary(
        &self,
        uuid: &Uuid,
        form_type: FormType,
        cluster: &str,
        grade: &str,
        gender: &str,
    ) -> Result<Breakdown, ApiError> {
        let resp = self
            .http
            .get(self.endpoint(&["api", "answer_summary"]))
            .query(&[
                ("uuid", uuid.to_string().as_str()),
                ("form_type", form_type.as_str()),
                ("cluster", cluster),
                ("grade", grade),
                ("gender", gender),
            ])
            .send()?;
        let body: Breakdown = Self::check(resp)?.json()?;
        Ok(body)
    }

    /// Look a student up by exact name within a dataset. The server
    /// answers `false` for an unknown name, which surfaces here as a
    /// `Server` error with a not-found message.
    pub fn student(
        &self,
        uuid: &Uuid,
        form_type: FormType,
        name: &str,
    ) -> Result<Student, ApiError> {
        let resp = self
            .http
            .get(self.endpoint(&[
                "api",
                "student",
                "data",
                &uuid.to_string(),
                form_type.as_str(),
                name,
            ]))
            .send()?;
        let value: serde_json::Value = Self::check(resp)?.json()?;
        serde_json::from_value(value).map_err(|_| ApiError::Server {
            status: 200,
            message: "Student not found".to_string(),
        })
    }

    pub fn update_student_cluster(
        &self,
        uuid: &Uuid,
        form_type: FormType,
        name: &str,
        cluster: i64,
    ) -> Result<String, ApiError> {
        let resp = self
            .http
            .put(self.endpoint(&[
                "api",
                "student",
                "data",
                &uuid.to_string(),
                form_type.as_str(),
                name,
                &cluster.to_string(),
            ]))
            .send()?;
        let body: MessageBody = Self::check(resp)?.json()?;
        Ok(body.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_and_encodes_segments() {
        let api = ApiClient::new("http://localhost:5000").unwrap();
        let url = api.endpoint(&["api", "student", "data", "abc", "ASSI-A", "Riley Chen"]);
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/api/student/data/abc/ASSI-A/Riley%20Chen"
        );
    }

    #[test]
    fn endpoint_tolerates_trailing_slash_in_base() {
        let api = ApiClient::new("http://localhost:5000/").unwrap();
        let url = api.endpoint(&["api", "users"]);
        assert_eq!(url.as_str(), "http://localhost:5000/api/users");
    }

    #[test]
    fn display_messages_match_error_category() {
        let server = ApiError::Server {
            status: 401,
            message: "Authentication failed".into(),
        };
        assert_eq!(server.to_string(), "Authentication failed");
        assert_eq!(
            ApiError::NoResponse("connection refused".into()).to_string(),
            "No response from server. Please check if the server is running."
        );
        assert_eq!(
            ApiError::Request("bad part".into()).to_string(),
            "Failed to send request. Please try again."
        );
    }

    #[test]
    fn new_user_omits_unset_user_type() {
        let viewer = NewUser {
            username: "jo".into(),
            password: "pw".into(),
            first_name: "Jo".into(),
            last_name: "Ng".into(),
            user_type: None,
        };
        let json = serde_json::to_string(&viewer).unwrap();
        assert!(!json.contains("user_type"));

        let admin = NewUser {
            user_type: Some("admin".into()),
            ..viewer
        };
        let json = serde_json::to_string(&admin).unwrap();
        assert!(json.contains(r#""user_type":"admin""#));
    }
}

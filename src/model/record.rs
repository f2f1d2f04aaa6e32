// src/model/record.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::form::FormType;

/// One row from `GET /api/data?username=...`: an upload the user can
/// reopen or delete. `uuid` addresses the stored result; `id` is the
/// backing table's row id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRecord {
    pub id: i64,
    pub uuid: Uuid,
    pub name: String,
    pub username: String,
    #[serde(rename = "type")]
    pub form_type: FormType,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_api_row() {
        let json = r#"{
            "id": 3,
            "uuid": "7f2d1c9a-3c08-4a1e-9b92-cf1f2a6a7b01",
            "name": "Spring screening",
            "username": "counselor",
            "type": "ASSI-C",
            "created_at": "2024-04-02 09:15:00"
        }"#;
        let record: DatasetRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.form_type, FormType::AssiC);
        assert_eq!(record.name, "Spring screening");
        assert_eq!(record.id, 3);
    }
}

// src/model/student.rs
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One student's row from a processed dataset, as served by
/// `GET /api/student/data/...`. Wire keys are capitalized column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Student {
    pub name: String,
    #[serde(default)]
    pub grade: Option<i64>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub cluster: Option<i64>,
    #[serde(default)]
    pub questions: BTreeMap<String, AnswerValue>,
}

/// Survey answers arrive as whatever the CSV column held, usually a 1-7
/// rating but sometimes free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Int(value) => write!(f, "{value}"),
            AnswerValue::Float(value) => write!(f, "{value}"),
            AnswerValue::Text(value) => f.write_str(value),
        }
    }
}

impl Student {
    pub fn grade_label(&self) -> String {
        match self.grade {
            Some(grade) => grade.to_string(),
            None => "N/A".to_string(),
        }
    }

    pub fn gender_label(&self) -> &str {
        self.gender.as_deref().unwrap_or("N/A")
    }

    pub fn cluster_label(&self) -> String {
        match self.cluster {
            Some(cluster) => cluster.to_string(),
            None => "Unassigned".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_mixed_answer_values() {
        let json = r#"{
            "Name": "Riley Chen",
            "Grade": 9,
            "Gender": "Female",
            "Cluster": 2,
            "Questions": {
                "Worry a lot": 4,
                "Gender": "Female"
            }
        }"#;
        let student: Student = serde_json::from_str(json).unwrap();
        assert_eq!(student.name, "Riley Chen");
        assert_eq!(student.cluster, Some(2));
        assert_eq!(student.questions["Worry a lot"], AnswerValue::Int(4));
        assert_eq!(
            student.questions["Gender"],
            AnswerValue::Text("Female".into())
        );
    }

    #[test]
    fn null_fields_become_placeholders() {
        let json = r#"{"Name": "Sam", "Grade": null, "Gender": null, "Cluster": null, "Questions": {}}"#;
        let student: Student = serde_json::from_str(json).unwrap();
        assert_eq!(student.grade_label(), "N/A");
        assert_eq!(student.gender_label(), "N/A");
        assert_eq!(student.cluster_label(), "Unassigned");
    }
}

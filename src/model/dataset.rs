// src/model/dataset.rs
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::form::FormType;

/// Per-question answer distribution: question text -> answer label -> count.
/// BTreeMaps keep option order stable from frame to frame.
pub type Breakdown = BTreeMap<String, BTreeMap<String, u64>>;

/// A fully processed dataset as returned by `POST /api/data` and
/// `GET /api/data/{type}/{uuid}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetResult {
    pub id: Uuid,
    pub user: String,
    #[serde(rename = "type")]
    pub form_type: FormType,
    pub data_summary: DataSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSummary {
    pub answers_summary: AnswersSummary,
    pub cluster_summary: ClusterSummary,
    pub pca_summary: PcaSummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification_summary: Option<ClassificationSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswersSummary {
    pub full: Breakdown,
    #[serde(default)]
    pub per_cluster: Vec<ClusterBreakdown>,
}

/// One cluster's slice of the distribution. The wire shape is flat: a
/// `cluster_N` label next to one key per question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterBreakdown {
    pub cluster: String,
    #[serde(flatten)]
    pub questions: Breakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub optimal_k: u32,
    /// Cluster label -> number of students assigned to it.
    pub cluster_count: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PcaSummary {
    #[serde(alias = "optimal_pcs")]
    pub optimal_pc: u32,
}

/// Classifier evaluation attached to ASSI-C datasets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationSummary {
    pub model_name: String,
    pub accuracy: f64,
    /// Per-class metrics keyed by class label, plus aggregate rows. The
    /// `accuracy` key carries a bare number instead of a metrics object.
    pub report: BTreeMap<String, ReportEntry>,
    pub confusion_matrix: Vec<Vec<u64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportEntry {
    Metrics(ClassReport),
    Scalar(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassReport {
    pub precision: f64,
    pub recall: f64,
    #[serde(rename = "f1-score")]
    pub f1_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support: Option<f64>,
}

impl ClassificationSummary {
    /// Report rows worth tabulating: every metrics entry except the
    /// aggregate accuracy scalar.
    pub fn class_entries(&self) -> impl Iterator<Item = (&str, &ClassReport)> {
        self.report.iter().filter_map(|(label, entry)| match entry {
            ReportEntry::Metrics(metrics) if label != "accuracy" => {
                Some((label.as_str(), metrics))
            }
            _ => None,
        })
    }

    pub fn max_cell(&self) -> u64 {
        self.confusion_matrix
            .iter()
            .flatten()
            .copied()
            .max()
            .unwrap_or(0)
    }

    /// Shade strength for a confusion matrix cell, proportional to the
    /// largest cell. An all-zero matrix shades nothing.
    pub fn cell_intensity(&self, value: u64) -> f32 {
        let max = self.max_cell();
        if max == 0 {
            0.0
        } else {
            value as f32 / max as f32
        }
    }
}

/// Answer counts expressed as percentages of the question's total, in the
/// map's option order. A zero total yields all-zero percentages rather
/// than NaN.
pub fn answer_percentages(counts: &BTreeMap<String, u64>) -> Vec<(String, f64)> {
    let total: u64 = counts.values().sum();
    counts
        .iter()
        .map(|(option, &count)| {
            let pct = if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            };
            (option.clone(), pct)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, u64)]) -> BTreeMap<String, u64> {
        pairs
            .iter()
            .map(|(option, count)| (option.to_string(), *count))
            .collect()
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let pcts = answer_percentages(&counts(&[("1", 30), ("2", 45), ("3", 25)]));
        let sum: f64 = pcts.iter().map(|(_, pct)| pct).sum();
        assert!((sum - 100.0).abs() < 1e-9);
        assert_eq!(pcts[0], ("1".to_string(), 30.0));
    }

    #[test]
    fn zero_total_yields_zero_percentages() {
        let pcts = answer_percentages(&counts(&[("1", 0), ("2", 0)]));
        assert!(pcts.iter().all(|(_, pct)| *pct == 0.0));
    }

    #[test]
    fn report_accepts_bare_accuracy_entry() {
        let json = r#"{
            "model_name": "RandomForest",
            "accuracy": 0.87,
            "report": {
                "0": {"precision": 0.9, "recall": 0.8, "f1-score": 0.85, "support": 40.0},
                "1": {"precision": 0.7, "recall": 0.75, "f1-score": 0.72, "support": 22.0},
                "accuracy": 0.87,
                "macro avg": {"precision": 0.8, "recall": 0.78, "f1-score": 0.79, "support": 62.0}
            },
            "confusion_matrix": [[32, 8], [5, 17]]
        }"#;
        let summary: ClassificationSummary = serde_json::from_str(json).unwrap();
        let labels: Vec<&str> = summary.class_entries().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["0", "1", "macro avg"]);
        assert_eq!(summary.max_cell(), 32);
    }

    #[test]
    fn cell_intensity_scales_against_max() {
        let summary = ClassificationSummary {
            model_name: "RandomForest".into(),
            accuracy: 1.0,
            report: BTreeMap::new(),
            confusion_matrix: vec![vec![0, 10], vec![40, 20]],
        };
        assert_eq!(summary.cell_intensity(40), 1.0);
        assert_eq!(summary.cell_intensity(10), 0.25);
        assert_eq!(summary.cell_intensity(0), 0.0);

        let empty = ClassificationSummary {
            confusion_matrix: vec![vec![0, 0]],
            ..summary
        };
        assert_eq!(empty.cell_intensity(0), 0.0);
    }

    #[test]
    fn per_cluster_rows_flatten_question_maps() {
        let json = r#"[
            {"cluster": "cluster_1", "Gender": {"Female": 3, "Male": 2}},
            {"cluster": "cluster_2", "Gender": {"Female": 1}}
        ]"#;
        let rows: Vec<ClusterBreakdown> = serde_json::from_str(json).unwrap();
        assert_eq!(rows[0].cluster, "cluster_1");
        assert_eq!(rows[0].questions["Gender"]["Female"], 3);
        assert_eq!(rows[1].questions.len(), 1);
    }

    #[test]
    fn decodes_a_full_upload_result_body() {
        // The envelope `POST /api/data` returns, with the string cluster
        // tags the server puts on every per-cluster row.
        let json = r#"{
            "id": "7b7f0f2d-2f2e-4d57-9b2f-6a64e23a60a1",
            "user": "counselor",
            "type": "ASSI-A",
            "data_summary": {
                "answers_summary": {
                    "full": {"Gender": {"Female": 4, "Male": 2}},
                    "per_cluster": [
                        {"cluster": "cluster_1", "Gender": {"Female": 3}},
                        {"cluster": "cluster_2", "Gender": {"Female": 1, "Male": 2}}
                    ]
                },
                "cluster_summary": {
                    "optimal_k": 2,
                    "cluster_count": {"Cluster 1": 3, "Cluster 2": 3}
                },
                "pca_summary": {"optimal_pc": 3}
            }
        }"#;
        let result: DatasetResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.form_type, FormType::AssiA);
        let rows = &result.data_summary.answers_summary.per_cluster;
        assert_eq!(rows[0].cluster, "cluster_1");
        assert_eq!(rows[1].questions["Gender"]["Male"], 2);
        assert!(result.data_summary.classification_summary.is_none());
    }

    #[test]
    fn pca_summary_accepts_both_field_spellings() {
        let a: PcaSummary = serde_json::from_str(r#"{"optimal_pc": 4}"#).unwrap();
        let b: PcaSummary = serde_json::from_str(r#"{"optimal_pcs": 4}"#).unwrap();
        assert_eq!(a, b);
    }
}

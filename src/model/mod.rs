// src/model/mod.rs
pub mod cluster;
pub mod dataset;
pub mod form;
pub mod record;
pub mod student;
pub mod user;

pub use cluster::Cluster;
pub use dataset::{
    answer_percentages, AnswersSummary, Breakdown, ClassReport, ClassificationSummary,
    ClusterBreakdown, ClusterSummary, DataSummary, DatasetResult, PcaSummary, ReportEntry,
};
pub use form::FormType;
pub use record::DatasetRecord;
pub use student::{AnswerValue, Student};
pub use user::User;

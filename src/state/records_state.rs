// src/state/records_state.rs
use crate::api::Query;
use crate::model::{DatasetRecord, DatasetResult};

#[derive(Debug, Default)]
pub struct RecordsState {
    /// Set when the list fetch for this visit has been dispatched.
    /// Cleared on navigation and after a delete to force a refetch.
    pub requested: bool,
    pub list_query: Query<Vec<DatasetRecord>>,
    pub view_query: Query<DatasetResult>,
    pub delete_query: Query<String>,
}

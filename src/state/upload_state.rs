// src/state/upload_state.rs
use crate::api::Query;
use crate::model::{DatasetResult, FormType};

#[derive(Debug)]
pub struct UploadState {
    pub dataset_name: String,
    pub kind: FormType,
    pub query: Query<DatasetResult>,
}

impl Default for UploadState {
    fn default() -> Self {
        Self {
            dataset_name: String::new(),
            kind: FormType::AssiA,
            query: Query::new(),
        }
    }
}

impl UploadState {
    pub fn reset_form(&mut self) {
        self.dataset_name.clear();
        self.kind = FormType::AssiA;
    }
}

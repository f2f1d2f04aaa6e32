// src/state/student_state.rs
use std::collections::HashMap;

use crate::api::Query;
use crate::model::{FormType, Student};

#[derive(Debug, Default)]
pub struct StudentState {
    pub search: String,
    pub student: Option<Student>,
    /// Question/answer pairs in instrument order, ready for pagination.
    pub pairs: Vec<(String, String)>,
    pub question_index: usize,
    /// Cluster chosen in the selector, not yet necessarily saved.
    pub selected_cluster: i64,
    /// Cluster value to restore if an in-flight reassignment fails.
    pending_revert: Option<i64>,
    pub lookup: Query<Student>,
    pub update: Query<String>,
}

impl StudentState {
    pub fn reset(&mut self) {
        self.search.clear();
        self.student = None;
        self.pairs.clear();
        self.question_index = 0;
        self.selected_cluster = 0;
        self.pending_revert = None;
    }

    /// Install a fresh lookup result.
    pub fn set_student(&mut self, student: Student, form: FormType) {
        self.pairs = ordered_pairs(&student, form);
        self.question_index = 0;
        self.selected_cluster = student.cluster.unwrap_or(0);
        self.pending_revert = None;
        self.student = Some(student);
    }

    pub fn prev_question(&mut self) {
        if self.question_index > 0 {
            self.question_index -= 1;
        }
    }

    pub fn next_question(&mut self) {
        if self.question_index + 1 < self.pairs.len() {
            self.question_index += 1;
        }
    }

    /// Show the new cluster immediately while the write is in flight,
    /// remembering the old value in case the write fails.
    pub fn apply_optimistic(&mut self, cluster: i64) {
        if let Some(student) = &mut self.student {
            self.pending_revert = Some(student.cluster.unwrap_or(0));
            student.cluster = Some(cluster);
        }
        self.selected_cluster = cluster;
    }

    pub fn confirm_update(&mut self) {
        self.pending_revert = None;
    }

    /// Roll the optimistic value back after a failed write.
    pub fn revert_update(&mut self) {
        if let (Some(previous), Some(student)) = (self.pending_revert.take(), &mut self.student) {
            student.cluster = Some(previous);
            self.selected_cluster = previous;
        }
    }
}

fn ordered_pairs(student: &Student, form: FormType) -> Vec<(String, String)> {
    let positions: HashMap<&str, usize> = form
        .questions()
        .iter()
        .enumerate()
        .map(|(index, question)| (*question, index))
        .collect();
    let mut pairs: Vec<(String, String)> = student
        .questions
        .iter()
        .map(|(question, answer)| (question.clone(), answer.to_string()))
        .collect();
    // Unknown columns keep their alphabetical order after the known ones.
    pairs.sort_by_key(|(question, _)| {
        positions
            .get(question.as_str())
            .copied()
            .unwrap_or(usize::MAX)
    });
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnswerValue;
    use std::collections::BTreeMap;

    fn sample_student() -> Student {
        let mut questions = BTreeMap::new();
        questions.insert("Worry a lot".to_string(), AnswerValue::Int(3));
        questions.insert(
            "Complain of aches or pains".to_string(),
            AnswerValue::Int(1),
        );
        questions.insert("Gender".to_string(), AnswerValue::Text("Female".into()));
        Student {
            name: "Riley Chen".into(),
            grade: Some(9),
            gender: Some("Female".into()),
            cluster: Some(2),
            questions,
        }
    }

    #[test]
    fn pairs_follow_instrument_order() {
        let mut state = StudentState::default();
        state.set_student(sample_student(), FormType::AssiC);
        let questions: Vec<&str> = state.pairs.iter().map(|(q, _)| q.as_str()).collect();
        assert_eq!(
            questions,
            vec!["Gender", "Complain of aches or pains", "Worry a lot"]
        );
        assert_eq!(state.selected_cluster, 2);
    }

    #[test]
    fn pagination_is_bounds_checked() {
        let mut state = StudentState::default();
        state.set_student(sample_student(), FormType::AssiC);

        state.prev_question();
        assert_eq!(state.question_index, 0);

        state.next_question();
        state.next_question();
        state.next_question();
        assert_eq!(state.question_index, 2);
    }

    #[test]
    fn failed_update_rolls_back_to_previous_cluster() {
        let mut state = StudentState::default();
        state.set_student(sample_student(), FormType::AssiC);

        state.apply_optimistic(4);
        assert_eq!(state.student.as_ref().unwrap().cluster, Some(4));

        state.revert_update();
        assert_eq!(state.student.as_ref().unwrap().cluster, Some(2));
        assert_eq!(state.selected_cluster, 2);
    }

    #[test]
    fn confirmed_update_keeps_new_cluster() {
        let mut state = StudentState::default();
        state.set_student(sample_student(), FormType::AssiC);

        state.apply_optimistic(4);
        state.confirm_update();
        // A later revert has nothing to restore.
        state.revert_update();
        assert_eq!(state.student.as_ref().unwrap().cluster, Some(4));
    }
}

// src/state/answers_state.rs
use crate::api::Query;
use crate::model::Breakdown;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// Grades offered by the filter dropdown.
pub const GRADES: std::ops::RangeInclusive<u8> = 7..=12;

/// Active chart filters. `None` means "all"; the API expects the literal
/// string `all` in that position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnswerFilter {
    pub cluster: Option<u32>,
    pub grade: Option<u8>,
    pub gender: Option<Gender>,
}

impl AnswerFilter {
    pub fn is_unfiltered(&self) -> bool {
        self.cluster.is_none() && self.grade.is_none() && self.gender.is_none()
    }

    pub fn cluster_param(&self) -> String {
        match self.cluster {
            Some(cluster) => cluster.to_string(),
            None => "all".to_string(),
        }
    }

    pub fn grade_param(&self) -> String {
        match self.grade {
            Some(grade) => grade.to_string(),
            None => "all".to_string(),
        }
    }

    pub fn gender_param(&self) -> String {
        match self.gender {
            Some(gender) => gender.as_str().to_string(),
            None => "all".to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct AnswersState {
    pub question_index: usize,
    pub filter: AnswerFilter,
    /// Distribution snapshot for the filter combination last fetched.
    pub filtered: Option<Breakdown>,
    /// Which filter `filtered` (or the fetch in flight) belongs to.
    pub fetched_for: Option<AnswerFilter>,
    pub query: Query<Breakdown>,
}

impl AnswersState {
    pub fn reset(&mut self) {
        self.question_index = 0;
        self.filter = AnswerFilter::default();
        self.filtered = None;
        self.fetched_for = None;
    }

    /// Step back one question; a no-op at the first question.
    pub fn prev_question(&mut self) {
        if self.question_index > 0 {
            self.question_index -= 1;
        }
    }

    /// Step forward one question; a no-op at the last question.
    pub fn next_question(&mut self, question_count: usize) {
        if self.question_index + 1 < question_count {
            self.question_index += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_is_bounds_checked() {
        let mut state = AnswersState::default();

        state.prev_question();
        assert_eq!(state.question_index, 0);

        state.next_question(3);
        state.next_question(3);
        assert_eq!(state.question_index, 2);

        state.next_question(3);
        assert_eq!(state.question_index, 2);

        state.prev_question();
        assert_eq!(state.question_index, 1);
    }

    #[test]
    fn next_on_empty_list_is_a_no_op() {
        let mut state = AnswersState::default();
        state.next_question(0);
        assert_eq!(state.question_index, 0);
    }

    #[test]
    fn filter_params_use_all_sentinel() {
        let unfiltered = AnswerFilter::default();
        assert!(unfiltered.is_unfiltered());
        assert_eq!(unfiltered.cluster_param(), "all");
        assert_eq!(unfiltered.grade_param(), "all");
        assert_eq!(unfiltered.gender_param(), "all");

        let filtered = AnswerFilter {
            cluster: Some(2),
            grade: Some(9),
            gender: Some(Gender::Female),
        };
        assert!(!filtered.is_unfiltered());
        assert_eq!(filtered.cluster_param(), "2");
        assert_eq!(filtered.grade_param(), "9");
        assert_eq!(filtered.gender_param(), "Female");
    }

    #[test]
    fn reset_clears_filters_and_position() {
        let mut state = AnswersState {
            question_index: 5,
            filter: AnswerFilter {
                cluster: Some(1),
                ..AnswerFilter::default()
            },
            ..AnswersState::default()
        };
        state.reset();
        assert_eq!(state.question_index, 0);
        assert!(state.filter.is_unfiltered());
        assert!(state.filtered.is_none());
    }
}

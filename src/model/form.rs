// src/model/form.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// The two screening instruments a dataset can come from. The wire name
/// ("ASSI-A" / "ASSI-C") appears in upload forms, record rows and URL paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormType {
    #[serde(rename = "ASSI-A")]
    AssiA,
    #[serde(rename = "ASSI-C")]
    AssiC,
}

impl FormType {
    pub const ALL: [FormType; 2] = [FormType::AssiA, FormType::AssiC];

    pub fn as_str(self) -> &'static str {
        match self {
            FormType::AssiA => "ASSI-A",
            FormType::AssiC => "ASSI-C",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            FormType::AssiA => "ASSI-A (Academic Motivation)",
            FormType::AssiC => "ASSI-C (Pediatric Symptom Checklist)",
        }
    }

    /// Survey questions in instrument order. These strings mirror the CSV
    /// column headers the processing service aggregates by, embedded line
    /// breaks included, so they can be used directly as breakdown keys.
    pub fn questions(self) -> &'static [&'static str] {
        match self {
            FormType::AssiA => &ASSI_A_QUESTIONS,
            FormType::AssiC => &ASSI_C_QUESTIONS,
        }
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const ASSI_A_QUESTIONS: [&str; 29] = [
    "Gender",
    "Because I need at least a high-school degree in order to find a high-paying job later on.",
    "Because I experience pleasure and satisfaction while learning new things.",
    "Because I think that a high-school education will help me better prepare for the career I have chosen.",
    "Because I really like going to school.",
    "Honestly, I don't know; I really feel that I am wasting my time in school.",
    "For the pleasure I experience while surpassing myself in my studies.",
    "To prove to myself that I am capable of completing my high-school degree.",
    "In order to obtain a more prestigious job later on.",
    "For the pleasure I experience when I discover new things never seen before.",
    "Because eventually it will enable me to enter the job market in a field that I like.",
    "Because for me, school is fun.",
    "I once had good reasons for going to school; however, now I wonder whether I should continue.",
    "For the pleasure that I experience while I am surpassing myself in one of my personal accomplishments.",
    "Because of the fact that when I succeed in school I feel\r\nimportant.",
    "Because I want to have \"the good life\" later on.",
    "For the pleasure that I experience in broadening my\r\nknowledge about subjects which appeal to me.",
    "Because this will help me make a better choice regarding my career orientation.",
    "For the pleasure that I experience when I am taken by\r\ndiscussions with interesting teachers.",
    "I can't see why I go to school and frankly, I couldn't care\r\nless.",
    "For the satisfaction I feel when I am in the process of\r\naccomplishing difficult academic activities.",
    "To show myself that I am an intelligent person.",
    "In order to have a better salary later on.",
    "Because my studies allow me to continue to learn about\r\nmany things that interest me.",
    "Because I believe that my high school education will\r\nimprove my competence as a worker.",
    "For the \"high\" feeling that I experience while reading about various interesting subjects.",
    "I don't know; I can't understand what I am doing in school.",
    "Because high school allows me to experience a personal satisfaction in my quest for excellence in my studies.",
    "Because I want to show myself that I can succeed in my\r\nstudies.",
];

const ASSI_C_QUESTIONS: [&str; 36] = [
    "Gender",
    "Complain of aches or pains",
    "Spend more time alone",
    "Tire easily, little energy",
    "Fidgety, unable to sit still",
    "Have trouble with teacher",
    "Less interested in school",
    "Act as if driven by motor",
    "Daydream too much",
    "Distract easily",
    "Are afraid of new situations",
    "Feel sad, unhappy",
    "Are irritable, angry",
    "Feel hopeless",
    "Have trouble concentrating",
    "Less interested in friends",
    "Fight with other children",
    "Absent from school",
    "School grades dropping",
    "Down on yourself",
    "Visit doctor with doctor finding nothing\r\nwrong",
    "Have trouble sleeping",
    "Worry a lot",
    "Want to be with parent more than before",
    "Feel that you are bad",
    "Take unnecessary risks",
    "Get hurt frequently",
    "Seem to be having less fun",
    "Act younger than children your age",
    "Do not listen to rules",
    "Do not show feelings",
    "Do not understand other people's feelings",
    "Tease others",
    "Blame others for your troubles",
    "Take things that do not belong to you",
    "Refuse to share",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for form in FormType::ALL {
            let json = serde_json::to_string(&form).unwrap();
            assert_eq!(json, format!("\"{}\"", form.as_str()));
            let back: FormType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, form);
        }
    }

    #[test]
    fn question_lists_match_instrument_sizes() {
        assert_eq!(FormType::AssiA.questions().len(), 29);
        assert_eq!(FormType::AssiC.questions().len(), 36);
        assert_eq!(FormType::AssiA.questions()[0], "Gender");
        assert_eq!(FormType::AssiC.questions()[0], "Gender");
    }
}

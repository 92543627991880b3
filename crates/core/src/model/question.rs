use serde::{Deserialize, Serialize};

/// A single question as the backend expects it in the questions file.
///
/// The client never validates these files; the types exist to document the
/// shape and to render the reference examples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_answer: Option<String>,
}

/// Top-level shape of a questions file: `{ "questions": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    pub questions: Vec<Question>,
}

impl QuestionSet {
    /// A small, well-formed example for the format reference panel.
    #[must_use]
    pub fn example() -> Self {
        Self {
            questions: vec![
                Question {
                    id: "q1".to_string(),
                    question: "What is the main topic of the document?".to_string(),
                    expected_answer: None,
                },
                Question {
                    id: "q2".to_string(),
                    question: "Who is the intended audience?".to_string(),
                    expected_answer: None,
                },
            ],
        }
    }

    #[must_use]
    pub fn example_json() -> String {
        serde_json::to_string_pretty(&Self::example()).unwrap_or_default()
    }
}

/// One entry of the expected-answers file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedAnswer {
    pub id: String,
    pub question: String,
    pub expected_answer: String,
}

/// Top-level shape of an expected-answers file: `{ "answers": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedAnswerSet {
    pub answers: Vec<ExpectedAnswer>,
}

impl ExpectedAnswerSet {
    #[must_use]
    pub fn example() -> Self {
        Self {
            answers: vec![
                ExpectedAnswer {
                    id: "q1".to_string(),
                    question: "What is the main topic of the document?".to_string(),
                    expected_answer: "The document describes the quarterly product roadmap."
                        .to_string(),
                },
                ExpectedAnswer {
                    id: "q2".to_string(),
                    question: "Who is the intended audience?".to_string(),
                    expected_answer: "Engineering and product managers.".to_string(),
                },
            ],
        }
    }

    #[must_use]
    pub fn example_json() -> String {
        serde_json::to_string_pretty(&Self::example()).unwrap_or_default()
    }
}

use serde::{Deserialize, Serialize};

/// A generated answer for one question, as returned by `/process-rag`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_count: Option<u32>,
}

/// Successful body of `/process-rag`.
///
/// Only `answers` is required; everything else is informational.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RagResponse {
    pub answers: Vec<Answer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_questions: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_info: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_body_parses_to_single_answer() {
        let raw = r#"{ "answers": [{"question":"Q1","answer":"A1","confidence":0.9}] }"#;
        let parsed: RagResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            parsed.answers,
            vec![Answer {
                id: None,
                question: "Q1".to_string(),
                answer: "A1".to_string(),
                confidence: Some(0.9),
                source_count: None,
            }]
        );
        assert!(parsed.total_questions.is_none());
    }

    #[test]
    fn full_backend_body_keeps_extra_fields() {
        let raw = r#"{
            "status": "success",
            "answers": [{"id":"q1","question":"Q1","answer":"A1","confidence":0.5,"source_count":3}],
            "total_questions": 1,
            "pdf_info": {"chunks": 12}
        }"#;
        let parsed: RagResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.answers[0].id.as_deref(), Some("q1"));
        assert_eq!(parsed.answers[0].source_count, Some(3));
        assert_eq!(parsed.total_questions, Some(1));
        assert_eq!(parsed.pdf_info.unwrap()["chunks"], 12);
    }

    #[test]
    fn missing_answers_key_is_rejected() {
        let raw = r#"{ "status": "success" }"#;
        assert!(serde_json::from_str::<RagResponse>(raw).is_err());
    }
}

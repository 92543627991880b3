use review_core::model::{AgentInfo, AskResponse};
use serde_json::Value;

use crate::vm::percent_fmt::format_ratio_percent;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AskAnswerVm {
    pub question: String,
    pub answer: String,
    pub confidence_label: Option<String>,
    pub sources_label: Option<String>,
    pub sources: Vec<String>,
}

#[must_use]
pub fn map_ask_answer(reply: &AskResponse) -> AskAnswerVm {
    AskAnswerVm {
        question: reply.question.clone(),
        answer: reply.answer.clone(),
        confidence_label: reply.confidence.map(format_ratio_percent),
        sources_label: reply.source_count.map(|count| match count {
            1 => "1 source".to_string(),
            n => format!("{n} sources"),
        }),
        sources: reply.sources.clone(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentInfoVm {
    pub status: String,
    pub loaded: bool,
    /// `(label, value)` rows, sorted by key.
    pub rows: Vec<(String, String)>,
}

#[must_use]
pub fn map_document_info(info: &AgentInfo) -> DocumentInfoVm {
    DocumentInfoVm {
        status: info.status.clone(),
        loaded: info.has_document(),
        rows: info
            .details
            .iter()
            .map(|(key, value)| (key.replace('_', " "), display_value(value)))
            .collect(),
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn ask_answer_formats_confidence_and_sources() {
        let vm = map_ask_answer(&AskResponse {
            question: "Q".to_string(),
            answer: "A".to_string(),
            confidence: Some(0.456),
            source_count: Some(1),
            sources: vec!["excerpt".to_string()],
        });
        assert_eq!(vm.confidence_label.as_deref(), Some("45.6%"));
        assert_eq!(vm.sources_label.as_deref(), Some("1 source"));
        assert_eq!(vm.sources, vec!["excerpt".to_string()]);
    }

    #[test]
    fn document_rows_are_readable() {
        let mut details = BTreeMap::new();
        details.insert("vectorstore_type".to_string(), Value::from("ChromaDB"));
        details.insert("chunk_size".to_string(), Value::from(1000));
        let vm = map_document_info(&AgentInfo {
            status: "Document loaded".to_string(),
            details,
        });

        assert!(vm.loaded);
        assert_eq!(
            vm.rows,
            vec![
                ("chunk size".to_string(), "1000".to_string()),
                ("vectorstore type".to_string(), "ChromaDB".to_string()),
            ]
        );
    }
}

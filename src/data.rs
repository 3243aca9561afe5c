// src/data.rs

use crate::error::LoadError;
use crate::model::Question;
use serde::Deserialize;

#[derive(Deserialize)]
struct QuizEnvelope {
    data: QuizPayload,
}

#[derive(Deserialize)]
struct QuizPayload {
    questions: Vec<Question>,
}

/// Parsea `{ "data": { "questions": [...] } }`. Cualquier otra forma es error.
pub fn parse_questions(body: &str) -> Result<Vec<Question>, LoadError> {
    let envelope: QuizEnvelope = serde_json::from_str(body)?;
    Ok(envelope.data.questions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_expected_shape() {
        let body = r#"{
            "status": "SUCCESS",
            "data": {
                "testId": "oily-ranch",
                "questions": [
                    {
                        "questionId": "1",
                        "question": "The _____________ dog _____________ at the _____________ _____________.",
                        "options": ["big", "barked", "mailman", "loudly"],
                        "correctAnswer": ["big", "barked", "loudly", "mailman"]
                    }
                ]
            }
        }"#;
        let questions = parse_questions(body).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options.len(), 4);
        assert_eq!(questions[0].blank_count(), 4);
    }

    #[test]
    fn missing_questions_is_malformed() {
        let err = parse_questions(r#"{ "data": {} }"#).unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
    }

    #[test]
    fn missing_data_is_malformed() {
        let err = parse_questions(r#"{ "questions": [] }"#).unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
    }

    #[test]
    fn non_json_is_malformed() {
        let err = parse_questions("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
        assert_eq!(err.user_message(), crate::error::LOAD_FAILED_MESSAGE);
    }

    #[test]
    fn empty_question_list_parses() {
        let questions = parse_questions(r#"{ "data": { "questions": [] } }"#).unwrap();
        assert!(questions.is_empty());
    }
}

use serde::{Deserialize, Serialize};

/// Marca de hueco dentro del texto de la pregunta.
pub const PLACEHOLDER: &str = "_____________";

/// Palabras que admite cada respuesta.
pub const MAX_WORDS: usize = 4;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,        // Texto con los huecos
    pub options: Vec<String>,    // Palabras disponibles, en orden de pantalla
    pub correct_answer: Vec<String>,
}

impl Question {
    /// Trozos de texto entre huecos. Hay un hueco entre cada par de trozos consecutivos.
    pub fn segments(&self) -> Vec<&str> {
        self.question.split(PLACEHOLDER).collect()
    }

    pub fn blank_count(&self) -> usize {
        self.segments().len().saturating_sub(1)
    }

    pub fn has_option(&self, word: &str) -> bool {
        self.options.iter().any(|o| o == word)
    }
}

/// Respuesta del usuario para una pregunta (0..=4 palabras).
pub type UserAnswer = Vec<String>;

/// Una respuesta por pregunta, mismo orden que el banco.
pub type AnswerSet = Vec<UserAnswer>;

pub fn empty_answers(questions: &[Question]) -> AnswerSet {
    questions.iter().map(|_| Vec::new()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Start,
    Quiz,
    Result,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Loading,
    LoadFailed(String),
    Ready(Screen),
}

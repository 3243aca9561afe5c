// src/view_models.rs

/// Trozo de frase para pintar: texto fijo o un hueco.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SentencePart {
    Text(String),
    Blank {
        word: Option<String>,
        matches: bool, // coincide con la palabra esperada en ese hueco
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRow {
    pub number: usize, // 1-based
    pub correct: bool,
    pub given: Vec<SentencePart>,
    pub expected: Vec<SentencePart>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartInfo {
    pub seconds_per_question: i64,
    pub total_questions: usize,
    pub coins: u32,
    pub can_start: bool,
}

impl ResultRow {
    pub fn verdict(&self) -> &'static str {
        if self.correct { "Correct" } else { "Incorrect" }
    }
}

impl SentencePart {
    pub fn label(&self) -> &str {
        match self {
            SentencePart::Text(text) => text,
            SentencePart::Blank { word: Some(w), .. } => w,
            SentencePart::Blank { word: None, .. } => "[blank]",
        }
    }
}

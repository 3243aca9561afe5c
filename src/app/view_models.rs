use super::*;
use crate::scoring::{blank_matches, is_correct};

/// Intercala los trozos de texto con un hueco por cada separación.
fn sentence(question: &Question, words: &[String], check: bool) -> Vec<SentencePart> {
    let segments = question.segments();
    let last = segments.len().saturating_sub(1);
    let mut parts = Vec::with_capacity(segments.len() * 2);

    for (i, segment) in segments.iter().enumerate() {
        if !segment.is_empty() {
            parts.push(SentencePart::Text(segment.to_string()));
        }
        if i < last {
            parts.push(SentencePart::Blank {
                word: words.get(i).cloned(),
                matches: !check || blank_matches(question, words, i),
            });
        }
    }
    parts
}

impl QuizApp {
    pub fn start_info(&self) -> StartInfo {
        StartInfo {
            seconds_per_question: self.config.seconds_per_question,
            total_questions: self.questions.len(),
            coins: self.config.coins,
            can_start: !self.questions.is_empty(),
        }
    }

    /// Frase de la pregunta activa con lo elegido hasta ahora.
    pub fn current_sentence(&self) -> Vec<SentencePart> {
        match self.current_question() {
            Some(q) => sentence(q, self.selected_words(), false),
            None => Vec::new(),
        }
    }

    /// Segmentos de la barra de progreso: true en la pregunta activa.
    pub fn progress_segments(&self) -> Vec<bool> {
        (0..self.questions.len()).map(|i| i == self.current).collect()
    }

    pub fn result_rows(&self) -> Vec<ResultRow> {
        self.questions
            .iter()
            .enumerate()
            .map(|(i, q)| {
                let given = self.answers.get(i).map(Vec::as_slice).unwrap_or(&[]);
                ResultRow {
                    number: i + 1,
                    correct: is_correct(q, given),
                    given: sentence(q, given, true),
                    expected: sentence(q, &q.correct_answer, false),
                }
            })
            .collect()
    }
}

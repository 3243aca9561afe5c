use crate::model::{MAX_WORDS, Question};

/// Palabras elegidas para la pregunta activa.
/// Las opciones libres se derivan siempre de `selected`, nunca se guardan aparte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerBuilder {
    options: Vec<String>,
    selected: Vec<String>,
}

impl AnswerBuilder {
    pub fn new(question: &Question) -> Self {
        Self::seeded(question, &[])
    }

    /// Parte de una respuesta ya registrada (volver a una pregunta conserva lo elegido).
    /// Se descartan palabras repetidas o ajenas a la pregunta.
    pub fn seeded(question: &Question, previous: &[String]) -> Self {
        let mut builder = Self {
            options: question.options.clone(),
            selected: Vec::with_capacity(MAX_WORDS),
        };
        for word in previous {
            builder.select(word);
        }
        builder
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.selected.len() == MAX_WORDS
    }

    pub fn is_selected(&self, word: &str) -> bool {
        self.selected.iter().any(|w| w == word)
    }

    /// Opciones que aún se pueden pulsar, en el orden original.
    pub fn available(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|o| !self.is_selected(o))
            .map(String::as_str)
            .collect()
    }

    /// Añade una palabra al final. Devuelve false si no hubo cambio.
    pub fn select(&mut self, word: &str) -> bool {
        if self.selected.len() >= MAX_WORDS || self.is_selected(word) {
            return false;
        }
        if !self.options.iter().any(|o| o == word) {
            return false;
        }
        self.selected.push(word.to_string());
        true
    }

    /// Quita la palabra de esa posición y desplaza el resto a la izquierda.
    pub fn deselect(&mut self, position: usize) -> Option<String> {
        if position >= self.selected.len() {
            return None;
        }
        Some(self.selected.remove(position))
    }
}

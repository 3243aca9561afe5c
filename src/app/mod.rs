use crate::answer_builder::AnswerBuilder;
use crate::config::Config;
use crate::model::{AnswerSet, AppState, Question, Screen};
use crate::remote::{FetchResult, spawn_question_fetch};
use crate::timer::Countdown;
use std::sync::mpsc::Receiver;

// Submódulos
pub mod actions;
pub mod loading;
pub mod navigation;
pub mod resets;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{ResultRow, SentencePart, StartInfo};

/// Qué pasó al avanzar desde la pregunta activa.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Advance {
    NextQuestion(usize), // índice de la nueva pregunta activa
    Finished,            // era la última: ya estamos en resultados
}

/// Pregunta en pantalla: su cuenta atrás y las palabras elegidas.
#[derive(Debug, Clone)]
pub struct ActiveQuestion {
    pub index: usize,
    pub builder: AnswerBuilder,
    pub timer: Countdown,
}

pub struct QuizApp {
    pub config: Config,
    pub state: AppState,
    pub questions: Vec<Question>,
    pub answers: AnswerSet,
    pub current: usize,
    pub score: usize,
    pub active: Option<ActiveQuestion>,
    pub confirm_quit: bool,
    loader: Option<Receiver<FetchResult>>,
    clock: Option<f64>, // último `InputState::time` visto
}

impl QuizApp {
    /// Arranca la app y lanza la carga del banco de preguntas.
    pub fn new(config: Config) -> Self {
        let rx = spawn_question_fetch(config.endpoint.clone());
        Self::loading(config, rx)
    }

    /// Estado de carga esperando el resultado por `rx`.
    pub fn loading(config: Config, rx: Receiver<FetchResult>) -> Self {
        Self::blank(config, Some(rx))
    }

    /// Banco ya disponible: empieza directamente en la pantalla de inicio.
    pub fn with_questions(config: Config, questions: Vec<Question>) -> Self {
        let mut app = Self::blank(config, None);
        app.install_questions(questions);
        app
    }

    fn blank(config: Config, loader: Option<Receiver<FetchResult>>) -> Self {
        Self {
            config,
            state: AppState::Loading,
            questions: Vec::new(),
            answers: Vec::new(),
            current: 0,
            score: 0,
            active: None,
            confirm_quit: false,
            loader,
            clock: None,
        }
    }

    pub fn screen(&self) -> Option<Screen> {
        match self.state {
            AppState::Ready(screen) => Some(screen),
            _ => None,
        }
    }

    pub fn is_on(&self, screen: Screen) -> bool {
        self.screen() == Some(screen)
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.active
            .as_ref()
            .and_then(|a| self.questions.get(a.index))
    }

    pub fn selected_words(&self) -> &[String] {
        self.active
            .as_ref()
            .map(|a| a.builder.selected())
            .unwrap_or(&[])
    }

    pub fn remaining_display(&self) -> String {
        self.active
            .as_ref()
            .map(|a| a.timer.display())
            .unwrap_or_else(|| crate::timer::format_mm_ss(0))
    }
}

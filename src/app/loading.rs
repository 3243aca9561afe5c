use super::*;
use crate::error::LoadError;
use crate::model::empty_answers;
use std::sync::mpsc::TryRecvError;

impl QuizApp {
    /// Consulta el canal de carga sin bloquear. Solo actúa una vez.
    pub fn poll_loader(&mut self) {
        let polled = match self.loader.as_ref() {
            Some(rx) => match rx.try_recv() {
                Ok(result) => Some(result),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => Some(Err(LoadError::Disconnected)),
            },
            None => None,
        };

        if let Some(result) = polled {
            self.loader = None;
            self.finish_loading(result);
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state == AppState::Loading
    }

    fn finish_loading(&mut self, result: FetchResult) {
        match result {
            Ok(questions) => {
                log::info!("Banco cargado: {} preguntas", questions.len());
                self.install_questions(questions);
            }
            Err(err) => {
                log::error!("Error cargando preguntas: {err}");
                self.state = AppState::LoadFailed(err.user_message().to_string());
            }
        }
    }

    pub(crate) fn install_questions(&mut self, questions: Vec<Question>) {
        if questions.is_empty() {
            log::warn!("El banco de preguntas está vacío; no se podrá empezar");
        }
        self.answers = empty_answers(&questions);
        self.questions = questions;
        self.current = 0;
        self.score = 0;
        self.state = AppState::Ready(Screen::Start);
    }
}

use super::*;
use crate::model::empty_answers;
use crate::scoring::score;

impl QuizApp {
    /// Inicio -> Quiz. Respuestas vacías, una por pregunta.
    pub fn start_quiz(&mut self) {
        if !self.is_on(Screen::Start) {
            log::debug!("start_quiz ignorado en estado {:?}", self.state);
            return;
        }
        if self.questions.is_empty() {
            log::warn!("No hay preguntas: no se puede empezar");
            return;
        }

        self.answers = empty_answers(&self.questions);
        self.score = 0;
        self.confirm_quit = false;
        self.state = AppState::Ready(Screen::Quiz);
        self.activate_question(0);
        log::info!("Quiz iniciado con {} preguntas", self.questions.len());
    }

    /// Quiz -> Resultados tras la última pregunta. La puntuación se recalcula entera.
    pub fn finish_quiz(&mut self) {
        if !self.is_on(Screen::Quiz) {
            log::debug!("finish_quiz ignorado en estado {:?}", self.state);
            return;
        }
        self.drop_active();
        self.score = score(&self.questions, &self.answers);
        self.state = AppState::Ready(Screen::Result);
        log::info!(
            "Quiz terminado: {} de {} correctas",
            self.score,
            self.questions.len()
        );
    }

    /// Resultados -> Inicio. Se conserva el banco, se descarta todo lo demás.
    pub fn restart_quiz(&mut self) {
        if !self.is_on(Screen::Result) {
            log::debug!("restart_quiz ignorado en estado {:?}", self.state);
            return;
        }
        self.current = 0;
        self.answers = empty_answers(&self.questions);
        self.score = 0;
        self.state = AppState::Ready(Screen::Start);
        log::info!("Vuelta a la pantalla de inicio");
    }

    /// Cambia la pregunta activa. La cuenta atrás anterior se cancela antes de crear la nueva.
    pub(crate) fn activate_question(&mut self, index: usize) {
        self.drop_active();

        let Some(question) = self.questions.get(index) else {
            log::warn!("Pregunta {index} fuera de rango");
            return;
        };
        let previous = self.answers.get(index).cloned().unwrap_or_default();

        self.active = Some(ActiveQuestion {
            index,
            builder: AnswerBuilder::seeded(question, &previous),
            timer: Countdown::new(self.config.seconds_per_question),
        });
        self.current = index;
        self.clock = None;
        log::debug!("Pregunta {} activa", index + 1);
    }

    pub(crate) fn drop_active(&mut self) {
        if let Some(mut previous) = self.active.take() {
            previous.timer.cancel();
        }
        self.clock = None;
    }
}

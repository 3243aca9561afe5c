use super::*;
use std::time::Duration;

impl QuizApp {
    /// Elige una palabra para el siguiente hueco libre.
    pub fn select_word(&mut self, word: &str) {
        if !self.is_on(Screen::Quiz) {
            return;
        }
        let changed = self
            .active
            .as_mut()
            .map(|a| a.builder.select(word))
            .unwrap_or(false);
        if changed {
            self.record_current();
        }
    }

    /// Vacía el hueco `position` (click sobre una palabra ya puesta).
    pub fn deselect_word(&mut self, position: usize) {
        if !self.is_on(Screen::Quiz) {
            return;
        }
        let removed = self
            .active
            .as_mut()
            .and_then(|a| a.builder.deselect(position));
        if removed.is_some() {
            self.record_current();
        }
    }

    /// "Next" solo se habilita con las cuatro palabras puestas.
    pub fn can_go_next(&self) -> bool {
        self.is_on(Screen::Quiz)
            && !self.confirm_quit
            && self
                .active
                .as_ref()
                .map(|a| a.builder.is_complete())
                .unwrap_or(false)
    }

    pub fn go_next(&mut self) -> Option<Advance> {
        if !self.can_go_next() {
            return None;
        }
        Some(self.record_and_advance())
    }

    /// Alimenta la cuenta atrás con el reloj de egui (segundos desde el arranque).
    pub fn advance_clock(&mut self, now: f64) -> Option<Advance> {
        let previous = self.clock.replace(now);
        let elapsed = previous.map(|p| now - p).unwrap_or(0.0);
        if elapsed <= 0.0 {
            return None;
        }
        let elapsed = Duration::try_from_secs_f64(elapsed).ok()?;
        self.advance_timer(elapsed)
    }

    /// La cuenta no avanza mientras el diálogo de salida está abierto.
    pub fn advance_timer(&mut self, elapsed: Duration) -> Option<Advance> {
        if !self.is_on(Screen::Quiz) || self.confirm_quit {
            return None;
        }
        let expired = self
            .active
            .as_mut()
            .map(|a| a.timer.advance(elapsed))
            .unwrap_or(false);
        if expired {
            Some(self.on_timer_expired())
        } else {
            None
        }
    }

    /// Al agotarse el tiempo se guarda lo que haya (completo o no) y se avanza.
    fn on_timer_expired(&mut self) -> Advance {
        let picked = self.selected_words().len();
        if self.can_go_next() {
            log::info!("Tiempo agotado en la pregunta {}: respuesta completa", self.current + 1);
        } else {
            log::info!(
                "Tiempo agotado en la pregunta {} con {picked} palabras: se guarda parcial",
                self.current + 1
            );
        }
        self.record_and_advance()
    }

    fn record_and_advance(&mut self) -> Advance {
        self.record_current();
        let next = self.current + 1;
        if next < self.questions.len() {
            self.activate_question(next);
            Advance::NextQuestion(next)
        } else {
            self.finish_quiz();
            Advance::Finished
        }
    }

    /// Copia la selección actual al AnswerSet.
    fn record_current(&mut self) {
        let Some(active) = self.active.as_ref() else {
            return;
        };
        if let Some(slot) = self.answers.get_mut(active.index) {
            *slot = active.builder.selected().to_vec();
        }
    }
}

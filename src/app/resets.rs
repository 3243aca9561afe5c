use super::*;
use crate::model::empty_answers;

pub const QUIT_PROMPT: &str = "Are you sure you want to quit? Your progress will be lost.";

impl QuizApp {
    /// Abre la confirmación de salida. La cuenta atrás queda en pausa.
    pub fn request_quit(&mut self) {
        if self.is_on(Screen::Quiz) {
            self.confirm_quit = true;
        }
    }

    pub fn cancel_quit(&mut self) {
        self.confirm_quit = false;
        // Sin esto el primer frame tras cerrar contaría el tiempo de pausa.
        self.clock = None;
    }

    /// Salir confirmado: respuestas vacías, puntuación 0 y directo a resultados.
    pub fn confirm_quit(&mut self) {
        if !self.is_on(Screen::Quiz) || !self.confirm_quit {
            return;
        }
        self.confirm_quit = false;
        self.drop_active();
        self.current = 0;
        self.answers = empty_answers(&self.questions);
        self.score = 0;
        self.state = AppState::Ready(Screen::Result);
        log::info!("Quiz abandonado: puntuación 0");
    }

    pub fn quit_dialog(&mut self, ctx: &egui::Context) {
        egui::Window::new("Quit quiz")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(QUIT_PROMPT);
                ui.horizontal(|ui| {
                    if ui.button("Yes, quit").clicked() {
                        self.confirm_quit();
                    }
                    if ui.button("No").clicked() {
                        self.cancel_quit();
                    }
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn started(n: usize) -> QuizApp {
        let bank = (0..n)
            .map(|_| Question {
                question: "_____________ _____________ _____________ _____________".into(),
                options: words(&["I", "run", "fast", "today"]),
                correct_answer: words(&["I", "run", "fast", "today"]),
            })
            .collect();
        let mut app = QuizApp::with_questions(Config::default(), bank);
        app.start_quiz();
        app
    }

    #[test]
    fn quit_needs_confirmation() {
        let mut app = started(2);
        app.select_word("I");
        app.confirm_quit();
        assert!(app.is_on(Screen::Quiz));
        assert_eq!(app.answers[0], words(&["I"]));
    }

    #[test]
    fn declining_quit_resumes_unchanged() {
        let mut app = started(2);
        app.select_word("I");
        app.request_quit();
        assert!(!app.can_go_next());
        app.cancel_quit();
        assert!(!app.confirm_quit);
        assert!(app.is_on(Screen::Quiz));
        assert_eq!(app.selected_words(), ["I"]);
    }

    #[test]
    fn timer_is_paused_while_confirming() {
        let mut app = started(1);
        app.request_quit();
        assert_eq!(app.advance_timer(Duration::from_secs(120)), None);
        assert_eq!(app.remaining_display(), "00:30");
    }

    #[test]
    fn confirmed_quit_zeroes_everything() {
        let mut app = started(2);
        for w in ["I", "run", "fast", "today"] {
            app.select_word(w);
        }
        app.go_next();
        app.request_quit();
        app.confirm_quit();

        assert!(app.is_on(Screen::Result));
        assert_eq!(app.score, 0);
        assert_eq!(app.current, 0);
        assert!(app.answers.iter().all(Vec::is_empty));
        assert!(app.active.is_none());
    }

    #[test]
    fn request_quit_outside_quiz_does_nothing() {
        let mut app = QuizApp::with_questions(Config::default(), Vec::new());
        app.request_quit();
        assert!(!app.confirm_quit);
    }
}

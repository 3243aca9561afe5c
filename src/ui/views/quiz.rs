use crate::QuizApp;
use crate::ui::helpers::{blank_button, progress_bar};
use crate::ui::layout::centered_panel;
use crate::view_models::SentencePart;
use egui::{Align, Button, Context, Layout, RichText, Vec2};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let Some(question) = app.current_question().cloned() else {
        return;
    };

    centered_panel(ctx, 420.0, 720.0, |ui| {
        // Tiempo y botón de salir
        ui.horizontal(|ui| {
            ui.label(RichText::new(app.remaining_display()).monospace().size(24.0));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("Quit").clicked() {
                    app.request_quit();
                }
            });
        });
        ui.add_space(8.0);
        progress_bar(ui, &app.progress_segments());
        ui.add_space(20.0);

        ui.vertical_centered(|ui| {
            ui.heading("Select the missing words in the correct order");
        });
        ui.add_space(20.0);

        // Frase con huecos: pulsar un hueco lleno lo vacía
        let mut remove = None;
        ui.horizontal_wrapped(|ui| {
            let mut blank = 0;
            for part in app.current_sentence() {
                match part {
                    SentencePart::Text(text) => {
                        ui.label(RichText::new(text).size(16.0));
                    }
                    SentencePart::Blank { word, .. } => {
                        if blank_button(ui, word.as_deref()) {
                            remove = Some(blank);
                        }
                        blank += 1;
                    }
                }
            }
        });
        if let Some(position) = remove {
            app.deselect_word(position);
        }
        ui.add_space(20.0);

        // Opciones: las ya elegidas quedan deshabilitadas
        let mut pick = None;
        ui.horizontal_wrapped(|ui| {
            for option in &question.options {
                let taken = app.selected_words().iter().any(|w| w == option);
                let button = Button::new(option.as_str()).min_size(Vec2::new(90.0, 36.0));
                if ui.add_enabled(!taken, button).clicked() {
                    pick = Some(option.clone());
                }
            }
        });
        if let Some(word) = pick {
            app.select_word(&word);
        }
        ui.add_space(20.0);

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let next = Button::new("Next ➡").min_size(Vec2::new(110.0, 36.0));
            if ui.add_enabled(app.can_go_next(), next).clicked() {
                app.go_next();
            }
        });
    });
}

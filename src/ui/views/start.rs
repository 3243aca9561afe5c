use crate::QuizApp;
use crate::ui::layout::centered_panel;
use egui::{Button, Context, Grid, RichText};

pub fn ui_start(app: &mut QuizApp, ctx: &Context) {
    let info = app.start_info();

    centered_panel(ctx, 260.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("✏").size(24.0));
            ui.heading("Sentence Construction");
            ui.add_space(6.0);
            ui.label(
                "Select the correct words to complete the sentence by arranging \
                 the provided options in the right order.",
            );
            ui.add_space(14.0);

            Grid::new("start_details")
                .num_columns(3)
                .spacing([24.0, 4.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("Time Per Question").strong());
                    ui.label(RichText::new("Total Questions").strong());
                    ui.label(RichText::new("Coins").strong());
                    ui.end_row();

                    ui.label(format!("{} sec", info.seconds_per_question));
                    ui.label(info.total_questions.to_string());
                    ui.label(info.coins.to_string());
                    ui.end_row();
                });

            ui.add_space(18.0);
            if !info.can_start {
                ui.label("No questions available.");
                ui.add_space(6.0);
            }
            let start = ui.add_enabled(info.can_start, Button::new("Start").min_size([120.0, 36.0].into()));
            if start.clicked() {
                app.start_quiz();
            }
        });
    });
}

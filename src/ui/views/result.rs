use crate::QuizApp;
use crate::ui::helpers::{BAD, GOOD, sentence_row};
use crate::ui::layout::scroll_panel;
use egui::{Button, Color32, Context, Frame, RichText};

pub fn ui_result(app: &mut QuizApp, ctx: &Context) {
    let rows = app.result_rows();
    let total = app.questions.len();
    let score = app.score;

    scroll_panel(ctx, 720.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format!("{score}/{total}"))
                    .size(28.0)
                    .strong()
                    .color(GOOD),
            );
            ui.add_space(8.0);
            ui.heading(format!(
                "Congratulations! You've completed the Sentence Construction test and scored {score} out of {total}."
            ));
            ui.add_space(12.0);
            let again = Button::new(RichText::new("Take Another Quiz").color(Color32::WHITE))
                .fill(Color32::from_rgb(236, 72, 153))
                .min_size([160.0, 32.0].into());
            if ui.add(again).clicked() {
                app.restart_quiz();
            }
        });
        ui.add_space(16.0);

        for row in &rows {
            Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new(format!("Question {}", row.number)).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let color = if row.correct { GOOD } else { BAD };
                        ui.label(RichText::new(row.verdict()).color(color));
                    });
                });
                sentence_row(ui, &row.given);
                if !row.correct {
                    ui.add_space(4.0);
                    ui.label(RichText::new("Correct answer:").strong());
                    sentence_row(ui, &row.expected);
                }
            });
            ui.add_space(8.0);
        }
    });
}

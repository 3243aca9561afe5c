use crate::ui::helpers::BAD;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText, Spinner};

pub fn ui_loading(ctx: &Context) {
    centered_panel(ctx, 120.0, 400.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.add(Spinner::new());
            ui.add_space(10.0);
            ui.label("Loading...");
        });
    });
}

/// Estado terminal: no hay reintento, hay que reiniciar la app.
pub fn ui_load_failed(ctx: &Context, message: &str) {
    centered_panel(ctx, 120.0, 520.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(message).color(BAD).heading());
        });
    });
}

mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::{AppState, Screen};
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};
use std::time::Duration;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Carga pendiente: mirar el canal en cada frame
        if self.is_loading() {
            self.poll_loader();
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        // Cuenta atrás: el reloj de egui sirve igual en nativo y en web
        if self.is_on(Screen::Quiz) {
            let now = ctx.input(|i| i.time);
            if let Some(advance) = self.advance_clock(now) {
                log::debug!("Avance automático: {advance:?}");
            }
            ctx.request_repaint_after(Duration::from_millis(200));
        }

        top_panel(ctx);
        bottom_panel(ctx);

        // Dispatch por estado a las funciones en views/
        match self.state.clone() {
            AppState::Loading => views::loading::ui_loading(ctx),
            AppState::LoadFailed(message) => views::loading::ui_load_failed(ctx, &message),
            AppState::Ready(Screen::Start) => views::start::ui_start(self, ctx),
            AppState::Ready(Screen::Quiz) => views::quiz::ui_quiz(self, ctx),
            AppState::Ready(Screen::Result) => views::result::ui_result(self, ctx),
        }

        if self.confirm_quit {
            self.quit_dialog(ctx);
        }
    }
}

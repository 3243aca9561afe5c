// src/ui/helpers.rs
use crate::view_models::SentencePart;
use egui::{Button, Color32, CornerRadius, RichText, Sense, Ui, Vec2};

pub const ACCENT: Color32 = Color32::from_rgb(245, 158, 11);
pub const GOOD: Color32 = Color32::from_rgb(34, 197, 94);
pub const BAD: Color32 = Color32::from_rgb(239, 68, 68);

/// Hueco de la frase. Devuelve true si se pulsó para vaciarlo.
pub fn blank_button(ui: &mut Ui, word: Option<&str>) -> bool {
    let button = Button::new(word.unwrap_or("")).min_size(Vec2::new(120.0, 26.0));
    match word {
        Some(_) => ui
            .add(button)
            .on_hover_text("Click to remove this word")
            .clicked(),
        None => {
            ui.add_enabled(false, button);
            false
        }
    }
}

/// Barra segmentada: un tramo por pregunta, resaltado el activo.
pub fn progress_bar(ui: &mut Ui, segments: &[bool]) {
    if segments.is_empty() {
        return;
    }
    let gap = 6.0;
    let n = segments.len() as f32;
    let seg_w = ((ui.available_width() - gap * (n - 1.0)) / n).max(2.0);

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = gap;
        for &active in segments {
            let (rect, _) = ui.allocate_exact_size(Vec2::new(seg_w, 4.0), Sense::hover());
            let color = if active { ACCENT } else { Color32::GRAY };
            ui.painter().rect_filled(rect, CornerRadius::same(2), color);
        }
    });
}

/// Frase de resultados: cada hueco en verde o rojo según coincida.
pub fn sentence_row(ui: &mut Ui, parts: &[SentencePart]) {
    ui.horizontal_wrapped(|ui| {
        for part in parts {
            match part {
                SentencePart::Text(text) => {
                    ui.label(text.as_str());
                }
                SentencePart::Blank { matches, .. } => {
                    let color = if *matches { GOOD } else { BAD };
                    ui.label(RichText::new(part.label()).strong().color(color));
                }
            }
        }
    });
}

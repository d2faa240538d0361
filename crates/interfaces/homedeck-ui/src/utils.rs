use crate::theme::*;
use eframe::egui;
use eframe::egui::Color32;

pub fn section_label(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(10.0)
            .color(COL_TEXT_DIM)
            .strong(),
    );
}

/// Outlined button in `accent`. Busy commands show a spinner in its place.
pub fn cmd_button(ui: &mut egui::Ui, label: &str, accent: Color32) -> egui::Response {
    let text = egui::RichText::new(label).size(11.0).color(accent);

    let btn = egui::Button::new(text)
        .min_size(egui::vec2(56.0, 22.0))
        .fill(Color32::TRANSPARENT)
        .stroke(egui::Stroke::new(1.0, accent));

    ui.add(btn)
}

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

pub fn cmd_button(ui: &mut egui::Ui, label: &str, variant: &str, enabled: bool) -> egui::Response {
    let (fill, stroke_col, text_col) = match variant {
        "primary" => (COL_ACCENT, COL_ACCENT, COL_TEXT),
        "danger" => (COL_DANGER, COL_DANGER, COL_TEXT),
        "outline" => (Color32::TRANSPARENT, COL_BORDER, COL_TEXT),
        "ghost" => (Color32::TRANSPARENT, Color32::TRANSPARENT, COL_TEXT_DIM),
        _ => (Color32::TRANSPARENT, COL_BORDER, COL_TEXT),
    };

    let text =
        egui::RichText::new(label)
            .size(12.0)
            .color(if enabled { text_col } else { COL_TEXT_DIM });

    let btn = egui::Button::new(text)
        .min_size(egui::vec2(88.0, 28.0))
        .corner_radius(egui::CornerRadius::same(6))
        .fill(if enabled { fill } else { Color32::TRANSPARENT })
        .stroke(egui::Stroke::new(
            1.0,
            if enabled { stroke_col } else { COL_BORDER },
        ));

    ui.add_enabled(enabled, btn)
}

/// Small colored status dot used next to status labels and the toast.
pub fn status_dot(ui: &mut egui::Ui, color: Color32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(8.0, 8.0), egui::Sense::hover());
    ui.painter().circle_filled(rect.center(), 4.0, color);
}

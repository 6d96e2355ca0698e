use crate::theme::*;
use crate::utils::section_label;
use eframe::egui;
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

fn field_shell<'a>(tui: impl TuiBuilderLogic<'a>, content: impl FnOnce(&mut egui_taffy::Tui)) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(4.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .add(content);
}

pub fn text_field<'a>(
    tui: impl TuiBuilderLogic<'a>,
    label: &str,
    value: &mut String,
    hint: &str,
) -> bool {
    let mut changed = false;
    field_shell(tui, |tui| {
        tui.ui(|ui| section_label(ui, label));
        changed = tui
            .ui_add(
                egui::TextEdit::singleline(value)
                    .hint_text(hint)
                    .desired_width(f32::INFINITY),
            )
            .changed();
    });
    changed
}

pub fn password_field<'a>(
    tui: impl TuiBuilderLogic<'a>,
    label: &str,
    value: &mut String,
) -> bool {
    let mut changed = false;
    field_shell(tui, |tui| {
        tui.ui(|ui| section_label(ui, label));
        changed = tui
            .ui_add(
                egui::TextEdit::singleline(value)
                    .password(true)
                    .desired_width(f32::INFINITY),
            )
            .changed();
    });
    changed
}

/// Non-editable field used for fixed values like the framework preset.
pub fn locked_field<'a>(tui: impl TuiBuilderLogic<'a>, label: &str, value: &str) {
    field_shell(tui, |tui| {
        tui.ui(|ui| section_label(ui, label));
        let mut text = value.to_owned();
        tui.ui(|ui| {
            ui.add_enabled(
                false,
                egui::TextEdit::singleline(&mut text).desired_width(f32::INFINITY),
            )
        });
    });
}

pub fn error_label<'a>(tui: impl TuiBuilderLogic<'a>, message: &str) {
    tui.label(egui::RichText::new(message).size(12.0).color(COL_ERROR));
}

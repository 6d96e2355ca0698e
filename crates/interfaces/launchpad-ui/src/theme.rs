use eframe::egui::{self, Color32, FontFamily, FontId, Stroke, TextStyle, Visuals};

// Zinc / indigo palette
pub const COL_BG: Color32 = Color32::from_rgb(9, 9, 11);
pub const COL_BG_RAISED: Color32 = Color32::from_rgb(24, 24, 27);
pub const COL_BORDER: Color32 = Color32::from_rgb(39, 39, 42);
pub const COL_TEXT: Color32 = Color32::from_rgb(244, 244, 245);
pub const COL_TEXT_DIM: Color32 = Color32::from_rgb(161, 161, 170);
pub const COL_ACCENT: Color32 = Color32::from_rgb(99, 102, 241);
pub const COL_WARN: Color32 = Color32::from_rgb(251, 191, 36);
pub const COL_DANGER: Color32 = Color32::from_rgb(248, 113, 113);
pub const COL_SUCCESS: Color32 = Color32::from_rgb(52, 211, 153);

pub fn setup(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = COL_BG;
    visuals.panel_fill = COL_BG;

    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, COL_BORDER);
    visuals.widgets.inactive.bg_fill = COL_BG_RAISED;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, COL_TEXT_DIM);

    visuals.widgets.hovered.bg_fill = COL_ACCENT.linear_multiply(0.1);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, COL_ACCENT);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, COL_TEXT);

    visuals.widgets.active.bg_fill = COL_ACCENT;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, COL_TEXT);

    visuals.selection.bg_fill = COL_ACCENT.linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, COL_ACCENT);

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.text_styles = [
        (TextStyle::Heading, FontId::new(18.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(13.0, FontFamily::Proportional)),
        (
            TextStyle::Monospace,
            FontId::new(12.0, FontFamily::Monospace),
        ),
        (TextStyle::Button, FontId::new(12.0, FontFamily::Proportional)),
        (TextStyle::Small, FontId::new(10.0, FontFamily::Proportional)),
    ]
    .into();

    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.window_margin = egui::Margin::same(0);
    style.visuals.button_frame = true;

    ctx.set_style(style);
}

pub const COL_ERROR: Color32 = COL_DANGER;

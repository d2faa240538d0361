use eframe::egui::{self, Color32, FontFamily, FontId, Stroke, TextStyle, Visuals};

pub const COL_BG: Color32 = Color32::from_rgb(17, 24, 39);
pub const COL_SURFACE: Color32 = Color32::from_rgb(31, 41, 55);
pub const COL_BORDER: Color32 = Color32::from_rgb(55, 65, 81);
pub const COL_TEXT: Color32 = Color32::from_rgb(243, 244, 246);
pub const COL_TEXT_DIM: Color32 = Color32::from_rgb(156, 163, 175);
pub const COL_ACCENT: Color32 = Color32::from_rgb(52, 211, 153);
pub const COL_EDIT: Color32 = Color32::from_rgb(251, 191, 36);
pub const COL_DANGER: Color32 = Color32::from_rgb(248, 113, 113);

pub fn setup(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = COL_SURFACE;
    visuals.panel_fill = COL_BG;

    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, COL_BORDER);
    visuals.widgets.inactive.bg_fill = COL_SURFACE;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, COL_TEXT);

    visuals.widgets.hovered.bg_fill = COL_ACCENT.linear_multiply(0.15);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, COL_ACCENT);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, COL_ACCENT);

    visuals.widgets.active.bg_fill = COL_ACCENT;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, COL_BG);

    visuals.selection.bg_fill = COL_ACCENT.linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, COL_ACCENT);

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.text_styles = [
        (TextStyle::Heading, FontId::new(18.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(13.0, FontFamily::Proportional)),
        (
            TextStyle::Monospace,
            FontId::new(11.0, FontFamily::Monospace),
        ),
        (TextStyle::Button, FontId::new(11.0, FontFamily::Proportional)),
        (TextStyle::Small, FontId::new(10.0, FontFamily::Proportional)),
    ]
    .into();
    style.spacing.item_spacing = egui::vec2(8.0, 8.0);

    ctx.set_style(style);
}

use crate::theme::*;
use crate::utils::cmd_button;
use eframe::egui;
use homedeck_app_core::TileView;
use homedeck_core::{App, NamePosition, ServiceCommand, TileMode};

pub const TILE_WIDTH: f32 = 200.0;

#[derive(Default)]
pub struct TileResponse {
    pub body_clicked: bool,
    pub command: Option<ServiceCommand>,
}

fn name_label(ui: &mut egui::Ui, app: &App, view: &TileView) {
    let appearance = &app.appearance;
    let text = egui::RichText::new(&view.name)
        .size(appearance.app_name_font_size)
        .color(COL_TEXT)
        .strong();

    let mut label = egui::Label::new(text);
    if appearance.line_clamp_app_name <= 1 {
        label = label.truncate();
    }
    ui.add(label.selectable(false));
}

fn body(ui: &mut egui::Ui, app: &App, view: &TileView) {
    let add_name = |ui: &mut egui::Ui| {
        if app.shows_name_inline() {
            name_label(ui, app, view);
        }
    };

    let mode = match view.interaction.mode {
        TileMode::Link => "LINK",
        TileMode::Button => "SERVICE",
    };
    let badge = |ui: &mut egui::Ui| {
        ui.label(egui::RichText::new(mode).size(9.0).color(COL_TEXT_DIM));
    };

    match app.appearance.position_app_name {
        NamePosition::Column => {
            ui.vertical(|ui| {
                add_name(ui);
                badge(ui);
            });
        }
        NamePosition::ColumnReverse => {
            ui.vertical(|ui| {
                badge(ui);
                add_name(ui);
            });
        }
        NamePosition::Row => {
            ui.horizontal(|ui| {
                add_name(ui);
                badge(ui);
            });
        }
        NamePosition::RowReverse => {
            ui.horizontal(|ui| {
                badge(ui);
                add_name(ui);
            });
        }
    }
}

pub fn draw(ui: &mut egui::Ui, app: &App, view: &TileView) -> TileResponse {
    let mut resp = TileResponse::default();
    let stroke = if view.interaction.interactive {
        COL_BORDER
    } else {
        COL_EDIT
    };

    // The body is registered first so the command buttons stay on top of it.
    let sense = if view.interaction.interactive {
        egui::Sense::click()
    } else {
        egui::Sense::hover()
    };
    let scope = ui.scope_builder(egui::UiBuilder::new().sense(sense), |ui| {
        egui::Frame::new()
            .fill(COL_SURFACE)
            .stroke(egui::Stroke::new(1.0, stroke))
            .corner_radius(egui::CornerRadius::same(6))
            .inner_margin(egui::Margin::same(10))
            .show(ui, |ui| {
                ui.set_width(TILE_WIDTH);
                body(ui, app, view);

                ui.horizontal(|ui| {
                    for command in ServiceCommand::ALL {
                        if *view.pending.get(command) {
                            ui.add(egui::Spinner::new());
                            continue;
                        }
                        let accent = match command {
                            ServiceCommand::Stop => COL_DANGER,
                            _ => COL_ACCENT,
                        };
                        if cmd_button(ui, command.label(), accent).clicked() {
                            resp.command = Some(command);
                        }
                    }
                });
            });
    });

    let mut frame_resp = scope.response;
    if view.link.is_some() {
        frame_resp = frame_resp.on_hover_cursor(egui::CursorIcon::PointingHand);
    }
    resp.body_clicked = frame_resp.clicked();
    if let Some(tooltip) = &view.tooltip {
        frame_resp.on_hover_text(tooltip);
    }

    resp
}

use crate::theme::*;
use crate::utils::cmd_button;
use eframe::egui;
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

pub struct HeaderResponse {
    pub edit_toggled: bool,
}

pub fn draw<'a>(
    tui: impl TuiBuilderLogic<'a>,
    edit_mode: bool,
    busy: usize,
    base_url: &str,
) -> HeaderResponse {
    let mut edit_toggled = false;

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        justify_content: Some(taffy::JustifyContent::SpaceBetween),
        align_items: Some(taffy::AlignItems::Center),
        padding: length(6.0),
        size: taffy::Size {
            width: percent(1.),
            height: percent(1.),
        },
        ..Default::default()
    })
    .add(|tui| {
        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            align_items: Some(taffy::AlignItems::Center),
            gap: length(8.0),
            ..Default::default()
        })
        .add(|tui| {
            tui.label(
                egui::RichText::new("HOMEDECK")
                    .size(14.0)
                    .extra_letter_spacing(2.0)
                    .strong()
                    .color(COL_TEXT),
            );
            tui.label(egui::RichText::new(base_url).size(10.0).color(COL_TEXT_DIM));
        });

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            align_items: Some(taffy::AlignItems::Center),
            gap: length(6.0),
            ..Default::default()
        })
        .add(|tui| {
            if busy > 0 {
                tui.ui_add(egui::Spinner::new());
                tui.label(
                    egui::RichText::new(format!("{busy} IN FLIGHT"))
                        .color(COL_TEXT_DIM)
                        .size(10.0),
                );
            }

            let (label, accent) = if edit_mode {
                ("DONE", COL_EDIT)
            } else {
                ("EDIT", COL_ACCENT)
            };
            edit_toggled |= tui.ui(|ui| cmd_button(ui, label, accent)).clicked();
        });
    });

    HeaderResponse { edit_toggled }
}

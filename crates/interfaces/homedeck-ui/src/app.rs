use std::time::Duration;

use crate::components::{header, tile};
use crate::notices::{EguiNavigator, ModalNotifier, NoticeBoard};
use crate::theme::*;
use crate::utils::section_label;
use eframe::egui;
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, tui, TuiBuilderLogic};

use homedeck_app_core::http::http_lifecycle_client;
use homedeck_app_core::{
    command_runtime, AppTile, BoardStore, EditModeStore, ExternalUrlResolver, Settings,
    TileClick, TileServices, TileView,
};
use homedeck_core::{Board, ServiceCommand};
use homedeck_infra::HttpLifecycleClient;

type DeskTile = AppTile<HttpLifecycleClient, ModalNotifier, EguiNavigator, ExternalUrlResolver>;

pub struct HomedeckUiApp {
    edit_mode: EditModeStore,
    tiles: Vec<DeskTile>,
    notices: NoticeBoard,
    base_url: String,
    load_error: Option<String>,
}

fn load_board(settings: &Settings) -> Result<Board, String> {
    let store = BoardStore::resolve(settings.board_path.as_deref()).map_err(|e| e.to_string())?;
    tracing::info!("Loading board from {}", store.path().display());
    store.load().map_err(|e| e.to_string())
}

impl HomedeckUiApp {
    pub fn new(ctx: &egui::Context, settings: Settings) -> Self {
        let edit_mode = EditModeStore::default();
        let (notifier, notice_rx) = ModalNotifier::new(ctx.clone());
        let base_url = settings.credentials.base_url.clone();

        let (board, mut load_error) = match load_board(&settings) {
            Ok(board) => (board, None),
            Err(e) => {
                tracing::error!("Failed to load board: {e}");
                (Board::default(), Some(e))
            }
        };

        let tiles = match http_lifecycle_client(settings.credentials) {
            Ok(client) => TileServices::new(
                client,
                notifier,
                EguiNavigator::new(ctx.clone()),
                ExternalUrlResolver::new(settings.dashboard_origin),
                edit_mode.subscribe(),
            )
            .tiles(&board),
            Err(e) => {
                tracing::error!("Failed to build HTTP client: {e}");
                load_error = Some(format!("HTTP client unavailable: {e}"));
                Vec::new()
            }
        };

        Self {
            edit_mode,
            tiles,
            notices: NoticeBoard::new(notice_rx),
            base_url,
            load_error,
        }
    }

    fn open(&self, index: usize) {
        let Some(tile) = self.tiles.get(index) else {
            return;
        };
        match tile.click() {
            TileClick::Navigated(target) => {
                tracing::debug!("Opened {} ({})", target.url, target.window.as_attr())
            }
            TileClick::Ignored | TileClick::Inert => {}
        }
    }

    fn run_command(&self, index: usize, command: ServiceCommand) {
        let Some(tile) = self.tiles.get(index) else {
            return;
        };
        match command_runtime() {
            // Detached; the tile tracks the pending state and the notifier reports the result.
            Ok(runtime) => drop(tile.spawn_command(command, runtime.handle())),
            Err(e) => tracing::error!("Failed to run {command} for {}: {e}", tile.app().name),
        }
    }
}

impl eframe::App for HomedeckUiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let views: Vec<TileView> = self.tiles.iter().map(AppTile::view).collect();
        let busy: usize = views
            .iter()
            .map(|view| {
                ServiceCommand::ALL
                    .into_iter()
                    .filter(|command| *view.pending.get(*command))
                    .count()
            })
            .sum();

        let mut edit_toggled = false;
        let mut opened = None;
        let mut requested = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            tui(ui, ui.id().with("root"))
                .reserve_available_space()
                .style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Column,
                    size: percent(1.),
                    gap: length(8.0),
                    ..Default::default()
                })
                .show(|tui| {
                    tui.style(taffy::Style {
                        size: taffy::Size {
                            width: percent(1.),
                            height: length(32.0),
                        },
                        flex_shrink: 0.0,
                        ..Default::default()
                    })
                    .add(|tui| {
                        let resp =
                            header::draw(tui, self.edit_mode.is_enabled(), busy, &self.base_url);
                        edit_toggled = resp.edit_toggled;
                    });

                    if let Some(err) = &self.load_error {
                        tui.colored_label(COL_DANGER, err.as_str());
                    }
                    if self.edit_mode.is_enabled() {
                        tui.ui(|ui| section_label(ui, "EDIT MODE: LINKS ARE LOCKED"));
                    }

                    if self.tiles.is_empty() {
                        tui.colored_label(COL_TEXT_DIM, "NO APPS ON THE BOARD");
                        return;
                    }

                    tui.style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Row,
                        flex_wrap: taffy::FlexWrap::Wrap,
                        align_items: Some(taffy::AlignItems::Start),
                        gap: length(12.0),
                        size: taffy::Size {
                            width: percent(1.),
                            height: auto(),
                        },
                        flex_grow: 1.0,
                        overflow: taffy::Point {
                            x: taffy::Overflow::Hidden,
                            y: taffy::Overflow::Scroll,
                        },
                        ..Default::default()
                    })
                    .add(|tui| {
                        for (index, (desk_tile, view)) in self.tiles.iter().zip(&views).enumerate()
                        {
                            let resp = tui.ui(|ui| tile::draw(ui, desk_tile.app(), view));
                            if resp.body_clicked {
                                opened = Some(index);
                            }
                            if let Some(command) = resp.command {
                                requested = Some((index, command));
                            }
                        }
                    });
                });
        });

        if edit_toggled {
            let enabled = self.edit_mode.toggle();
            tracing::info!("Edit mode {}", if enabled { "on" } else { "off" });
        }
        if let Some(index) = opened {
            self.open(index);
        }
        if let Some((index, command)) = requested {
            self.run_command(index, command);
        }

        self.notices.show(ctx);

        if busy > 0 || requested.is_some() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

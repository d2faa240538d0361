//! Blocking notifications rendered as a modal dialog.
//!
//! The notifier runs on a worker thread. It hands each message to the UI
//! thread and blocks until the user dismisses the dialog.

use std::collections::VecDeque;
use std::sync::mpsc;

use eframe::egui;
use homedeck_app_core::{Navigator, Notifier};
use homedeck_core::LinkTarget;

use crate::theme::*;

pub struct Notice {
    pub message: String,
    ack: mpsc::Sender<()>,
}

impl Notice {
    fn acknowledge(self) {
        let _ = self.ack.send(());
    }
}

pub struct ModalNotifier {
    tx: mpsc::Sender<Notice>,
    ctx: egui::Context,
}

impl ModalNotifier {
    pub fn new(ctx: egui::Context) -> (Self, mpsc::Receiver<Notice>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx, ctx }, rx)
    }
}

impl Notifier for ModalNotifier {
    fn notify(&self, message: &str) {
        let (ack, acked) = mpsc::channel();
        let notice = Notice {
            message: message.to_string(),
            ack,
        };
        if self.tx.send(notice).is_err() {
            tracing::warn!("Window closed before showing: {message}");
            return;
        }
        self.ctx.request_repaint();

        // Disconnects when the window goes away with the notice unread.
        let _ = acked.recv();
    }
}

/// Notices waiting for acknowledgement, oldest first.
pub struct NoticeBoard {
    rx: mpsc::Receiver<Notice>,
    queue: VecDeque<Notice>,
}

impl NoticeBoard {
    pub fn new(rx: mpsc::Receiver<Notice>) -> Self {
        Self {
            rx,
            queue: VecDeque::new(),
        }
    }

    fn poll(&mut self) {
        while let Ok(notice) = self.rx.try_recv() {
            self.queue.push_back(notice);
        }
    }

    fn current(&self) -> Option<&str> {
        self.queue.front().map(|n| n.message.as_str())
    }

    /// Releases the worker waiting on the oldest notice.
    fn dismiss(&mut self) {
        if let Some(notice) = self.queue.pop_front() {
            notice.acknowledge();
        }
    }

    /// Shows the oldest notice; one dialog at a time.
    pub fn show(&mut self, ctx: &egui::Context) {
        self.poll();

        let Some(message) = self.current() else {
            return;
        };

        let mut dismissed = false;
        let modal = egui::Modal::new(egui::Id::new("outcome_notice")).show(ctx, |ui| {
            ui.set_width(320.0);
            ui.label(egui::RichText::new(message).color(COL_TEXT));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    dismissed |= ui
                        .add(egui::Button::new(egui::RichText::new("OK").color(COL_ACCENT)))
                        .clicked();
                });
            });
        });

        if dismissed || modal.should_close() {
            self.dismiss();
        }
    }
}

/// Opens tile links in the system browser.
pub struct EguiNavigator {
    ctx: egui::Context,
}

impl EguiNavigator {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl Navigator for EguiNavigator {
    fn navigate(&self, target: &LinkTarget) {
        self.ctx.open_url(egui::OpenUrl {
            url: target.url.clone(),
            new_tab: target.window.is_new_tab(),
        });
    }
}

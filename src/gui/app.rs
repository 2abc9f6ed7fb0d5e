// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc::{Receiver, TryRecvError}, Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{options::DataSource, state::AppState},
    controller::Controller,
    loader::{self, LoadError, LoadResult},
};

use super::{components, progress::GuiProgress};

pub fn run(options: eframe::NativeOptions, source: DataSource) -> Result<(), Box<dyn Error>> {
    let mut state = AppState::default();
    state.options.source = source;

    eframe::run_native(
        "District Absenteeism Lookup",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(&cc.egui_ctx, state)))),
    )?;
    Ok(())
}

pub struct App {
    // options + layout state (UI thread only)
    pub state: AppState,

    // rows, query, selection, chart
    pub controller: Controller,

    // text edit buffer; mirrored into the controller on change
    pub search_text: String,

    // status line (loader thread writes here)
    pub status: Arc<Mutex<String>>,

    // in-flight dataset load, until its result is applied
    pending: Option<Receiver<LoadResult>>,
}

impl App {
    pub fn new(ctx: &egui::Context, state: AppState) -> Self {
        let status = Arc::new(Mutex::new(s!("Idle")));

        let repaint = ctx.clone();
        let pending = loader::spawn_load(
            state.options.source.clone(),
            GuiProgress::new(status.clone()),
            move || repaint.request_repaint(),
        );

        logf!("Init: source={}", state.options.source);

        Self {
            state,
            controller: Controller::new(),
            search_text: s!(),
            status,
            pending: Some(pending),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Apply the load result once it arrives.
    fn poll_load(&mut self) {
        let Some(rx) = &self.pending else { return };
        let res = match rx.try_recv() {
            Ok(res) => res,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => Err(LoadError::Fetch {
                source: self.state.options.source.to_string(),
                msg: s!("loader stopped without a result"),
            }),
        };
        self.pending = None;
        self.controller.finish_load(res);

        if let Some(msg) = self.controller.load_error() {
            self.status(msg);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status_text());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Chronic Absenteeism by District");

            if let Some(msg) = self.controller.load_error() {
                ui.colored_label(egui::Color32::from_rgb(0xDC, 0x26, 0x26), msg);
            }

            components::search_box::draw(ui, self);

            ui.separator();

            components::detail::draw(ui, self);
        });
    }
}

// src/gui/components/detail.rs
//
// Selected district: heading, newest-first table on the left, chart on the right.

use eframe::egui;
use crate::controller::LoadState;
use crate::gui::app::App;

use super::{chart_view, stats_table};

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let Some(sel) = app.controller.selection() else {
        if *app.controller.load_state() == LoadState::Ready {
            ui.weak("Pick a district from the suggestions to see its history.");
        }
        return;
    };

    ui.heading(&sel.name);
    ui.add_space(4.0);

    let gui = &app.state.gui;
    ui.horizontal_top(|ui| {
        ui.vertical(|ui| {
            ui.set_width(gui.table_width);
            stats_table::draw(ui, &sel.series);
        });

        ui.separator();

        ui.vertical(|ui| {
            if let Some(handle) = app.controller.chart() {
                chart_view::draw(ui, handle, gui.chart_min_h);
            }
        });
    });
}

// src/gui/components/stats_table.rs
//
// Period → rate table, newest first. Purely a view over the series.

use eframe::egui::{self, Align, Layout, RichText};
use egui_extras::{Column, TableBuilder};

use crate::series::{Reading, Series};

pub fn draw(ui: &mut egui::Ui, series: &Series) {
    let rows: Vec<_> = series.newest_first().collect();

    TableBuilder::new(ui)
        .id_salt("stats_table")
        .striped(true)
        .column(Column::initial(110.0).at_least(80.0))
        .column(Column::remainder().at_least(60.0))
        .header(22.0, |mut header| {
            header.col(|ui| { ui.strong("School Year"); });
            header.col(|ui| {
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| { ui.strong("Rate"); });
            });
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let point = rows[row.index()];
                row.col(|ui| { ui.label(&point.label); });
                row.col(|ui| {
                    let text = point.reading.to_string();
                    let rt = match point.reading {
                        Reading::Available(_) => RichText::new(text).strong(),
                        Reading::NotAvailable => RichText::new(text).weak(),
                    };
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| { ui.label(rt); });
                });
            });
        });
}

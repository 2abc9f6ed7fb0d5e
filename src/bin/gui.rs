// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use district_lookup::{config::{options::DataSource, state::GuiState}, gui};
use eframe::egui::{ IconData, ViewportBuilder };
use image::{ Rgba, RgbaImage };

const ICON_SIZE: u32 = 32;

/// Three rising blue bars on white, drawn at startup.
fn app_icon() -> IconData {
    let bars = [(4, 12, 18), (13, 19, 11), (22, 28, 4)];
    let rgba = RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
        let on_bar = bars.iter().any(|&(x0, x1, top)| x >= x0 && x < x1 && y >= top && y < 28);
        if on_bar { Rgba([0x25, 0x63, 0xEB, 0xFF]) } else { Rgba([0xFF, 0xFF, 0xFF, 0xFF]) }
    });
    let (w, h) = rgba.dimensions();
    IconData { rgba: rgba.into_raw(), width: w, height: h }
}

fn main() {
    let source = match std::env::args().nth(1) {
        Some(arg) => match DataSource::parse(&arg) {
            Ok(src) => src,
            Err(e) => {
                eprintln!("Bad data source: {}", e);
                std::process::exit(2);
            }
        },
        None => DataSource::default(),
    };

    let layout = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_icon(app_icon())
            .with_inner_size([layout.window_w, layout.window_h]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, source) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}

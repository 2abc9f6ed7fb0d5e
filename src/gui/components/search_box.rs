// src/gui/components/search_box.rs
//
// Search input plus the live suggestion list beneath it.
// Typing re-runs the matcher; clicking a suggestion selects that district;
// clicking anywhere else closes the list.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let edit = ui.add(
        egui::TextEdit::singleline(&mut app.search_text)
            .hint_text("Start typing a district name…")
            .desired_width(f32::INFINITY),
    );

    if edit.changed() {
        app.controller.set_query(&app.search_text);
        logd!(
            "UI: Query {:?} → {} suggestion(s)",
            app.search_text,
            app.controller.suggestion_names().len()
        );
    }

    if !app.controller.has_suggestions() {
        return;
    }

    // Overlay under the input; the detail view below does not move.
    let mut picked: Option<usize> = None;
    let list = egui::Area::new(edit.id.with("suggestions"))
        .order(egui::Order::Foreground)
        .fixed_pos(edit.rect.left_bottom())
        .show(ui.ctx(), |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_min_width(edit.rect.width());
                for (n, name) in app.controller.suggestion_names().into_iter().enumerate() {
                    if ui.selectable_label(false, name).clicked() {
                        picked = Some(n);
                    }
                }
            });
        })
        .response;

    if let Some(n) = picked {
        if let Some(sel) = app.controller.select_suggestion(n) {
            app.search_text = sel.name.clone();
            logf!("UI: Selected {:?}", sel.name);
        }
        return;
    }

    let clicked = ui.input(|i| i.pointer.any_click());
    if clicked && !edit.contains_pointer() && !list.contains_pointer() {
        app.controller.dismiss_suggestions();
        logd!("UI: Suggestions dismissed");
    }
}

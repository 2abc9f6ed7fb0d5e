// src/gui/components/chart_view.rs
//
// Line chart drawn with the egui painter. x = school years oldest → newest,
// y = percent from 0 to the model's suggested max. Missing readings break
// the line (and its fill) instead of being drawn through.

use eframe::egui::{
    self, epaint::TextShape, pos2, vec2, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke,
};

use crate::chart::ChartHandle;
use crate::config::consts::{X_AXIS_TITLE, Y_AXIS_TITLE};

const LINE: Color32 = Color32::from_rgb(0x25, 0x63, 0xEB);
// LINE at ~10% opacity, premultiplied
const FILL: Color32 = Color32::from_rgba_premultiplied(4, 10, 24, 26);
const Y_TICKS: usize = 5;

pub fn draw(ui: &mut egui::Ui, handle: &ChartHandle, min_h: f32) {
    // Per-handle id scope: hover state never carries over to the next chart.
    ui.push_id(("chart", handle.id()), |ui| paint(ui, handle, min_h));
}

fn paint(ui: &mut egui::Ui, handle: &ChartHandle, min_h: f32) {
    let model = handle.model();
    let size = vec2(ui.available_width().max(240.0), ui.available_height().max(min_h));
    let (resp, painter) = ui.allocate_painter(size, Sense::hover());
    let rect = resp.rect;

    let visuals = ui.visuals();
    let text_color = visuals.text_color();
    let grid = visuals.widgets.noninteractive.bg_stroke.color;
    let small = FontId::proportional(11.0);

    // Room for legend (top), tick labels + titles (left, bottom)
    let plot = Rect::from_min_max(rect.min + vec2(58.0, 30.0), rect.max - vec2(16.0, 44.0));
    let y_max = model.y_max.max(1.0);
    let n = model.values.len();

    // Legend
    let legend_y = rect.top() + 12.0;
    painter.line_segment(
        [pos2(plot.center().x - 120.0, legend_y), pos2(plot.center().x - 96.0, legend_y)],
        Stroke::new(3.0, LINE),
    );
    painter.text(pos2(plot.center().x - 90.0, legend_y), Align2::LEFT_CENTER, &model.title, small.clone(), text_color);

    // Y grid + ticks
    for k in 0..Y_TICKS {
        let v = y_max * k as f64 / (Y_TICKS - 1) as f64;
        let y = y_for(v, y_max, plot.bottom(), plot.height());
        painter.line_segment([pos2(plot.left(), y), pos2(plot.right(), y)], Stroke::new(1.0, grid));
        painter.text(pos2(plot.left() - 6.0, y), Align2::RIGHT_CENTER, format_tick(v), small.clone(), text_color);
    }

    // X labels
    for (i, label) in model.labels.iter().enumerate() {
        let x = x_for(i, n, plot.left(), plot.width());
        painter.text(pos2(x, plot.bottom() + 6.0), Align2::CENTER_TOP, label, small.clone(), text_color);
    }

    // Axis titles
    let title_font = FontId::proportional(12.0);
    painter.text(
        pos2(plot.center().x, rect.bottom() - 4.0),
        Align2::CENTER_BOTTOM,
        X_AXIS_TITLE,
        title_font.clone(),
        text_color,
    );
    let galley = painter.layout_no_wrap(s!(Y_AXIS_TITLE), title_font, text_color);
    let y_title_pos = pos2(rect.left() + 2.0, plot.center().y + galley.size().x / 2.0);
    painter.add(TextShape::new(y_title_pos, galley, text_color).with_angle(-std::f32::consts::FRAC_PI_2));

    // Fill, then line segments between consecutive present points
    let to_screen = |i: usize, v: f64| pos2(x_for(i, n, plot.left(), plot.width()), y_for(v, y_max, plot.bottom(), plot.height()));
    for seg in model.segments() {
        let pts: Vec<Pos2> = seg.iter().map(|&(i, v)| to_screen(i, v)).collect();
        for quad in fill_quads(&pts, plot.bottom()) {
            painter.add(Shape::convex_polygon(quad.to_vec(), FILL, Stroke::NONE));
        }
        if pts.len() > 1 {
            painter.add(Shape::line(pts.clone(), Stroke::new(3.0, LINE)));
        }
        for p in pts {
            painter.circle_filled(p, 5.0, Color32::WHITE);
            painter.circle_stroke(p, 5.0, Stroke::new(2.0, LINE));
        }
    }

    // Hover: nearest period by x
    if let Some(pos) = resp.hover_pos() {
        if let Some(ix) = nearest_index(pos.x, n, plot.left(), plot.width()) {
            if let (Some(text), Some(v)) = (model.tooltip(ix), model.values[ix]) {
                painter.circle_filled(to_screen(ix, v), 7.0, LINE);
                let label = model.labels.get(ix).map(|l| join!(l, "\n", &text)).unwrap_or(text);
                resp.on_hover_text_at_pointer(label);
            }
        }
    }
}

/// Screen x of the `i`th of `n` evenly spaced periods.
fn x_for(i: usize, n: usize, left: f32, width: f32) -> f32 {
    if n <= 1 {
        return left + width / 2.0;
    }
    left + width * i as f32 / (n - 1) as f32
}

/// Screen y of value `v` on a 0..y_max axis; out-of-range values pin to the edges.
fn y_for(v: f64, y_max: f64, bottom: f32, height: f32) -> f32 {
    let t = (v / y_max).clamp(0.0, 1.0) as f32;
    bottom - t * height
}

/// Trapezoids between each pair of neighbouring points and the x axis.
/// Each one is convex, unlike the area under the whole segment.
fn fill_quads(pts: &[Pos2], base: f32) -> Vec<[Pos2; 4]> {
    pts.windows(2)
        .map(|w| [w[0], w[1], pos2(w[1].x, base), pos2(w[0].x, base)])
        .collect()
}

fn nearest_index(x: f32, n: usize, left: f32, width: f32) -> Option<usize> {
    if n == 0 {
        return None;
    }
    if n == 1 {
        return Some(0);
    }
    let step = width / (n - 1) as f32;
    let raw = ((x - left) / step).round();
    Some(raw.clamp(0.0, (n - 1) as f32) as usize)
}

fn format_tick(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{v:.0}%")
    } else {
        format!("{v:.1}%")
    }
}

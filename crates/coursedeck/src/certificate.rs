use chrono::Local;
use eframe::egui;

/// Reference canvas the certificate is designed against. Drawing scales
/// uniformly to whatever rect it is given.
pub const CANVAS_WIDTH: f32 = 1200.0;
pub const CANVAS_HEIGHT: f32 = 800.0;

const GROUND: egui::Color32 = egui::Color32::WHITE;
const OUTER_BORDER: egui::Color32 = egui::Color32::from_rgb(0xE6, 0xE9, 0xEF);
const INNER_RULE: egui::Color32 = egui::Color32::from_rgb(0xF3, 0xF5, 0xF9);
const ACCENT: egui::Color32 = egui::Color32::from_rgb(0x2C, 0x7B, 0xE5);
const TITLE_INK: egui::Color32 = egui::Color32::from_rgb(0x11, 0x18, 0x27);
const MUTED_INK: egui::Color32 = egui::Color32::from_rgb(0x6B, 0x72, 0x80);
const NAME_INK: egui::Color32 = egui::Color32::from_rgb(0x0F, 0x17, 0x2A);
const BODY_INK: egui::Color32 = egui::Color32::from_rgb(0x37, 0x41, 0x51);
const SIGNATURE_RULE: egui::Color32 = egui::Color32::from_rgb(0xD1, 0xD5, 0xDB);

/// Geometry of one certificate, scaled to a target rect.
#[derive(Debug, Clone)]
pub struct Layout {
    pub outer_border: egui::Rect,
    pub inner_rule: egui::Rect,
    pub accent_bar: egui::Rect,
    pub title_y: f32,
    pub lead_in_y: f32,
    pub name_y: f32,
    pub course_y: f32,
    pub date_y: f32,
    pub signature_line: [egui::Pos2; 2],
    pub signature_label_y: f32,
    pub scale: f32,
}

pub fn layout(rect: egui::Rect) -> Layout {
    let scale = (rect.width() / CANVAS_WIDTH).min(rect.height() / CANVAS_HEIGHT);
    let at = |x: f32, y: f32| egui::pos2(rect.left() + x * scale, rect.top() + y * scale);

    Layout {
        outer_border: egui::Rect::from_min_max(
            at(30.0, 30.0),
            at(CANVAS_WIDTH - 30.0, CANVAS_HEIGHT - 30.0),
        ),
        inner_rule: egui::Rect::from_min_max(
            at(60.0, 60.0),
            at(CANVAS_WIDTH - 60.0, CANVAS_HEIGHT - 60.0),
        ),
        accent_bar: egui::Rect::from_min_max(at(80.0, 100.0), at(220.0, 106.0)),
        title_y: rect.top() + 140.0 * scale,
        lead_in_y: rect.top() + 215.0 * scale,
        name_y: rect.top() + 265.0 * scale,
        course_y: rect.top() + 345.0 * scale,
        date_y: rect.top() + 405.0 * scale,
        signature_line: [
            at(CANVAS_WIDTH - 420.0, 620.0),
            at(CANVAS_WIDTH - 220.0, 620.0),
        ],
        signature_label_y: rect.top() + 635.0 * scale,
        scale,
    }
}

/// Today's date the way the certificate prints it, e.g. "August 31, 2026".
pub fn completion_date() -> String {
    Local::now().format("%B %-d, %Y").to_string()
}

/// Draw the full certificate into `rect`.
pub fn draw(ui: &egui::Ui, rect: egui::Rect, name: &str, course: &str, date: &str) {
    let painter = ui.painter();
    let l = layout(rect);
    let s = l.scale;

    painter.rect_filled(rect, 0.0, GROUND);
    painter.rect_stroke(
        l.outer_border,
        0.0,
        egui::Stroke::new(6.0 * s, OUTER_BORDER),
        egui::StrokeKind::Inside,
    );
    painter.rect_stroke(
        l.inner_rule,
        0.0,
        egui::Stroke::new(2.0 * s, INNER_RULE),
        egui::StrokeKind::Inside,
    );
    painter.rect_filled(l.accent_bar, 0.0, ACCENT);

    centered_text(
        ui,
        rect,
        l.title_y,
        "Certificate of Completion",
        egui::FontId::proportional(48.0 * s),
        TITLE_INK,
    );
    centered_text(
        ui,
        rect,
        l.lead_in_y,
        "This certificate is presented to",
        egui::FontId::proportional(18.0 * s),
        MUTED_INK,
    );
    centered_text(
        ui,
        rect,
        l.name_y,
        name,
        egui::FontId::proportional(42.0 * s),
        NAME_INK,
    );
    centered_text(
        ui,
        rect,
        l.course_y,
        &format!("For successfully completing {course}"),
        egui::FontId::proportional(18.0 * s),
        BODY_INK,
    );
    centered_text(
        ui,
        rect,
        l.date_y,
        date,
        egui::FontId::proportional(16.0 * s),
        MUTED_INK,
    );

    painter.line_segment(
        l.signature_line,
        egui::Stroke::new(1.0 * s, SIGNATURE_RULE),
    );
    let signature_center =
        (l.signature_line[0].x + l.signature_line[1].x) / 2.0;
    let label = ui.painter().layout_no_wrap(
        "Instructor".to_string(),
        egui::FontId::proportional(16.0 * s),
        BODY_INK,
    );
    ui.painter().galley(
        egui::pos2(
            signature_center - label.rect.width() / 2.0,
            l.signature_label_y,
        ),
        label,
        BODY_INK,
    );
}

fn centered_text(
    ui: &egui::Ui,
    rect: egui::Rect,
    y: f32,
    text: &str,
    font: egui::FontId,
    color: egui::Color32,
) {
    let galley = ui
        .painter()
        .layout_no_wrap(text.to_string(), font, color);
    let pos = egui::pos2(rect.center().x - galley.rect.width() / 2.0, y);
    ui.painter().galley(pos, galley, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_rect() -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(0.0, 0.0),
            egui::vec2(CANVAS_WIDTH, CANVAS_HEIGHT),
        )
    }

    #[test]
    fn layout_fits_inside_the_canvas() {
        let rect = reference_rect();
        let l = layout(rect);
        assert!(rect.contains_rect(l.outer_border));
        assert!(l.outer_border.contains_rect(l.inner_rule));
        assert!(l.inner_rule.contains_rect(l.accent_bar));
        assert!(l.signature_line[0].x < l.signature_line[1].x);
        assert!(l.title_y < l.lead_in_y && l.lead_in_y < l.name_y);
        assert!(l.date_y < l.signature_line[0].y);
    }

    #[test]
    fn layout_scales_uniformly() {
        let half = egui::Rect::from_min_size(
            egui::pos2(0.0, 0.0),
            egui::vec2(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0),
        );
        let l = layout(half);
        assert!((l.scale - 0.5).abs() < 1e-6);
        assert!((l.accent_bar.height() - 3.0).abs() < 1e-4);
    }

    #[test]
    fn layout_centers_within_wide_rects() {
        // Wider than 3:2: scale is height-limited, content hugs the left edge
        // at reference proportions
        let wide = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(2400.0, 800.0));
        let l = layout(wide);
        assert!((l.scale - 1.0).abs() < 1e-6);
        assert!((l.outer_border.top() - 30.0).abs() < 1e-4);
    }

    #[test]
    fn completion_date_is_long_form() {
        let date = completion_date();
        // "Month D, YYYY": contains a comma and no zero-padded day
        assert!(date.contains(", "));
        assert!(!date.contains(" 0"));
    }
}

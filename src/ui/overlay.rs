//! Overlay-Painting: Zeichnet eine `OverlayScene` mit dem egui-Painter.

use eframe::egui;
use glam::Vec2;

use crate::core::shortened_segment;
use crate::shared::{HandleMarker, OverlayOptions, OverlayScene};

/// Zeichnet Schenkel, Griffe und Label.
///
/// Gibt die Ausdehnung des gezeichneten Labels (inkl. Innenabstand) zurück,
/// die der Hit-Test als Label-Rechteck verwendet.
pub fn paint_overlay(painter: &egui::Painter, scene: &OverlayScene) -> Vec2 {
    let options = &scene.options;
    let light = egui::Stroke::new(options.light_pen_width, color32(options.light_pen_color));
    let dark = egui::Stroke::new(options.dark_pen_width, color32(options.dark_pen_color));

    // Jede Linie zweimal: helle Unterlage, dunkle Deck-Linie
    for pen in [light, dark] {
        for arm in &scene.arms {
            painter.line_segment([to_pos2(arm.start), to_pos2(arm.end)], pen);
        }
    }

    for handle in &scene.handles {
        let top_pen = if handle.active {
            egui::Stroke::new(options.dark_pen_width, color32(options.active_handle_color))
        } else {
            dark
        };
        paint_handle(painter, handle, light, top_pen);
    }

    paint_label(painter, scene, options)
}

/// Zeichnet einen Griff: Kreis plus vier diagonale Fadenkreuz-Striche.
fn paint_handle(painter: &egui::Painter, handle: &HandleMarker, light: egui::Stroke, dark: egui::Stroke) {
    let center = handle.center;
    let reach = handle.radius * 2.0;
    let gap = handle.radius + 1.0;
    let corners = [
        Vec2::new(-reach, -reach),
        Vec2::new(-reach, reach),
        Vec2::new(reach, reach),
        Vec2::new(reach, -reach),
    ];

    for pen in [light, dark] {
        for corner in corners {
            if let Some((a, b)) = shortened_segment(center, center + corner, gap, 0.0) {
                painter.line_segment([to_pos2(a), to_pos2(b)], pen);
            }
        }
        painter.circle_stroke(to_pos2(center), handle.radius, pen);
    }

    painter.circle_filled(to_pos2(center), dark.width * 0.5, dark.color);
}

/// Zeichnet das Winkel-Label mittig auf dem Anker und liefert seine Ausdehnung.
fn paint_label(painter: &egui::Painter, scene: &OverlayScene, options: &OverlayOptions) -> Vec2 {
    let text_color = color32(options.dark_pen_color);
    let galley = painter.layout_no_wrap(
        scene.label.text.clone(),
        egui::FontId::proportional(options.label_font_size),
        text_color,
    );

    let padding = egui::Vec2::splat(options.label_padding);
    let rect = egui::Rect::from_center_size(to_pos2(scene.label.anchor), galley.size() + padding * 2.0);

    painter.rect_filled(rect, 0.0, color32(options.label_background_color));
    painter.galley(rect.min + padding, galley, text_color);

    Vec2::new(rect.width(), rect.height())
}

fn to_pos2(v: Vec2) -> egui::Pos2 {
    egui::pos2(v.x, v.y)
}

/// RGBA-Optionen (0.0–1.0) → egui-Farbe.
fn color32(c: [f32; 4]) -> egui::Color32 {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(channel(c[0]), channel(c[1]), channel(c[2]), channel(c[3]))
}

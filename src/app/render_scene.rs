//! Builder für Overlay-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::{shortened_segment, DragTarget, PointId};
use crate::shared::{ArmSegment, HandleMarker, LabelScene, OverlayScene};

/// Baut eine OverlayScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> OverlayScene {
    let geometry = &state.geometry;
    let options = &state.options;
    let points = geometry.points();
    let active = state.drag.active_target();

    // Linien enden knapp außerhalb der Griff-Kreise
    let trim = options.handle_radius + 1.0;
    let arms = geometry
        .arm_segments()
        .iter()
        .filter_map(|&(start, end)| shortened_segment(start, end, trim, trim))
        .map(|(start, end)| ArmSegment { start, end })
        .collect();

    let handles = PointId::ALL.map(|id| HandleMarker {
        center: points.get(id),
        radius: options.handle_radius,
        active: active == DragTarget::from(id) || active == DragTarget::WholeGroup,
    });

    OverlayScene {
        arms,
        handles,
        label: LabelScene {
            text: format_angle(state.displayed_angle_degrees()),
            anchor: geometry.label_anchor(options.label_offset),
        },
        options: options.clone(),
    }
}

/// Formatiert einen Winkel für das Label, z.B. `"90.00 °"`.
pub fn format_angle(degrees: f32) -> String {
    format!("{:.2} °", degrees)
}

#[cfg(test)]
mod tests {
    use super::{build, format_angle};
    use crate::app::AppState;
    use crate::core::{GeometryModel, PointerEvent};
    use glam::Vec2;

    fn right_angle_state() -> AppState {
        let mut state = AppState::new();
        state.geometry = GeometryModel::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(0.0, 100.0),
        );
        state
    }

    #[test]
    fn build_shortens_arms_around_handles() {
        let state = right_angle_state();
        let scene = build(&state);

        assert_eq!(scene.arms.len(), 2);
        let trim = state.options.handle_radius + 1.0;
        assert!((scene.arms[0].start.x - trim).abs() < 1e-4);
        assert!((scene.arms[0].end.x - (100.0 - trim)).abs() < 1e-4);
    }

    #[test]
    fn build_omits_arm_shorter_than_handles() {
        let mut state = right_angle_state();
        state.geometry = GeometryModel::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(5.0, 0.0),
            Vec2::new(0.0, 100.0),
        );
        let scene = build(&state);
        assert_eq!(scene.arms.len(), 1);
    }

    #[test]
    fn build_formats_label_and_follows_supplement() {
        let mut state = right_angle_state();
        state.geometry.set_point(crate::core::PointId::ArmB, Vec2::new(100.0, 100.0));

        assert_eq!(build(&state).label.text, "45.00 °");
        state.show_supplement = true;
        assert_eq!(build(&state).label.text, "135.00 °");
    }

    #[test]
    fn build_marks_dragged_handle_active() {
        let mut state = right_angle_state();
        let hit = state.hit_tester();
        state
            .drag
            .on_pointer_event(PointerEvent::down(Vec2::new(100.0, 0.0)), &mut state.geometry, &hit);

        let scene = build(&state);
        let active: Vec<bool> = scene.handles.iter().map(|h| h.active).collect();
        assert_eq!(active, vec![false, true, false]);
    }

    #[test]
    fn degenerate_geometry_still_builds_a_scene() {
        let mut state = right_angle_state();
        state.geometry = GeometryModel::new(Vec2::ZERO, Vec2::ZERO, Vec2::ZERO);
        let scene = build(&state);
        assert!(scene.arms.is_empty());
        assert_eq!(scene.label.text, "0.00 °");
        assert!(scene.label.anchor.is_finite());
    }

    #[test]
    fn format_angle_uses_two_decimals() {
        assert_eq!(format_angle(7.0), "7.00 °");
        assert_eq!(format_angle(179.996), "180.00 °");
    }

    #[test]
    fn far_apart_points_render_a_numeric_label() {
        let mut state = right_angle_state();
        state.geometry = GeometryModel::new(
            Vec2::new(-3e38, 0.0),
            Vec2::new(3e38, 0.0),
            Vec2::new(-3e38, 5.0),
        );

        let scene = build(&state);
        assert_eq!(scene.label.text, "90.00 °");
        assert!(scene.label.anchor.is_finite());
        assert!(scene
            .arms
            .iter()
            .all(|arm| arm.start.is_finite() && arm.end.is_finite()));
    }
}

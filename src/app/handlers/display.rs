//! Handler für Anzeige-Zustand: Ergänzungswinkel, Label-Maße, Reset.

use crate::app::state::default_geometry;
use crate::app::AppState;
use crate::core::PointerEvent;

/// Schaltet zwischen Winkel und Ergänzungswinkel im Label um.
pub fn toggle_supplement(state: &mut AppState) {
    state.show_supplement = !state.show_supplement;
    log::info!(
        "Ergänzungswinkel-Anzeige: {}",
        if state.show_supplement { "an" } else { "aus" }
    );
}

/// Übernimmt die gemessene Label-Ausdehnung für den Hit-Test.
pub fn set_label_extent(state: &mut AppState, size: glam::Vec2) {
    state.label_extent = Some(size.abs());
}

/// Setzt die Geometrie auf das Start-Layout zurück.
///
/// Ein laufender Drag wird vorher abgebrochen, damit er nicht auf der
/// neuen Geometrie weiterläuft.
pub fn reset_geometry(state: &mut AppState) {
    if state.drag.is_dragging() {
        super::pointer::apply_event(state, PointerEvent::cancel());
    }
    state.geometry = default_geometry(&state.options);
    log::info!("Geometrie zurückgesetzt");
}

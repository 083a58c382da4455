//! Handler für Zeiger-Ereignisse (Drag des Winkelmessers).

use crate::app::AppState;
use crate::core::{PointerEvent, PointerOutcome};

/// Reicht ein Zeiger-Ereignis an die Drag-Zustandsmaschine weiter.
///
/// Der Hit-Tester wird vor der Mutation aus dem aktuellen Zustand gebaut,
/// damit das Label-Rechteck zur Geometrie zum Druckzeitpunkt passt.
pub fn apply_event(state: &mut AppState, event: PointerEvent) -> PointerOutcome {
    let hit_tester = state.hit_tester();
    let outcome = state
        .drag
        .on_pointer_event(event, &mut state.geometry, &hit_tester);

    if let PointerOutcome::Started(target) = outcome {
        log::debug!(
            "Greife {:?}, Winkel aktuell {:.2}°",
            target,
            state.geometry.angle_degrees()
        );
    }
    outcome
}

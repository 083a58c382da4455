//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::PointerEvent;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { pos } => pointer_command(PointerEvent::down(pos)),
        AppIntent::PointerMoved { pos } => {
            // Hover ohne Drag erzeugt keinen Command (hält das Command-Log schlank)
            if !state.drag.is_dragging() {
                return Vec::new();
            }
            pointer_command(PointerEvent::moved(pos))
        }
        AppIntent::PointerReleased { pos } => pointer_command(PointerEvent::up(pos)),
        AppIntent::PointerCancelled => {
            if state.drag.is_dragging() {
                vec![AppCommand::ApplyPointerEvent {
                    event: PointerEvent::cancel(),
                }]
            } else {
                Vec::new()
            }
        }
        AppIntent::SupplementToggleRequested { pos } => {
            if pos.is_finite() && state.is_interactive(pos) {
                vec![AppCommand::ToggleSupplement]
            } else {
                Vec::new()
            }
        }
        AppIntent::LabelMeasured { size } => {
            let unchanged = state.label_extent == Some(size);
            if unchanged || !size.is_finite() {
                Vec::new()
            } else {
                vec![AppCommand::SetLabelExtent { size }]
            }
        }
        AppIntent::ResetGeometryRequested => vec![AppCommand::ResetGeometry],
        AppIntent::ReloadOptionsRequested => vec![AppCommand::ReloadOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

fn pointer_command(event: PointerEvent) -> Vec<AppCommand> {
    if !event.position.is_finite() {
        log::trace!("Zeiger-Ereignis mit ungültiger Position verworfen: {event:?}");
        return Vec::new();
    }
    vec![AppCommand::ApplyPointerEvent { event }]
}

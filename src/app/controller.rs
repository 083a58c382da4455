//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::OverlayScene;

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Zeiger / Drag ===
            AppCommand::ApplyPointerEvent { event } => {
                handlers::pointer::apply_event(state, event);
            }

            // === Anzeige ===
            AppCommand::ToggleSupplement => handlers::display::toggle_supplement(state),
            AppCommand::SetLabelExtent { size } => handlers::display::set_label_extent(state, size),
            AppCommand::ResetGeometry => handlers::display::reset_geometry(state),

            // === Optionen ===
            AppCommand::ReloadOptions => handlers::options::reload_options(state)?,

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Overlay-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> OverlayScene {
        render_scene::build(state)
    }
}

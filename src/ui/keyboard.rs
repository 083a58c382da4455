//! Keyboard-Shortcuts des Overlays.
//!
//! Escape beendet, R setzt den Winkelmesser auf das Start-Layout zurück,
//! F5 liest die Optionen-Datei neu ein.

use eframe::egui;

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub fn collect_keyboard_intents(ctx: &egui::Context) -> Vec<AppIntent> {
    let (key_escape_pressed, key_r_pressed, key_f5_pressed) = ctx.input(|i| {
        (
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::R),
            i.key_pressed(egui::Key::F5),
        )
    });

    let mut events = Vec::new();

    if key_r_pressed {
        events.push(AppIntent::ResetGeometryRequested);
    }

    if key_f5_pressed {
        events.push(AppIntent::ReloadOptionsRequested);
    }

    if key_escape_pressed {
        events.push(AppIntent::ExitRequested);
    }

    events
}

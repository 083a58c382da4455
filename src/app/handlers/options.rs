//! Handler für Laufzeit-Optionen.

use anyhow::Context;

use crate::app::AppState;
use crate::shared::OverlayOptions;

/// Liest die Optionen-Datei neu ein.
///
/// Fehlt die Datei, werden die aktuellen Optionen als Vorlage geschrieben.
/// Eine fehlerhafte Datei lässt die laufenden Optionen unverändert.
/// Die Geometrie bleibt unberührt; ein neuer `start_vertex` gilt ab dem nächsten Reset.
pub fn reload_options(state: &mut AppState) -> anyhow::Result<()> {
    let path = state
        .options_path
        .clone()
        .ok_or_else(|| anyhow::anyhow!("Kein Pfad für die Optionen-Datei gesetzt"))?;

    if !path.exists() {
        state.options.save_to_file(&path)?;
        return Ok(());
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Optionen-Datei nicht lesbar: {}", path.display()))?;
    state.options = OverlayOptions::from_toml_str(&content)
        .with_context(|| format!("Optionen-Datei fehlerhaft: {}", path.display()))?;

    log::info!("Optionen neu geladen aus: {}", path.display());
    Ok(())
}

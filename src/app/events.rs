//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use crate::core::PointerEvent;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Primärtaste gedrückt (Fensterkoordinaten)
    PointerPressed { pos: glam::Vec2 },
    /// Zeiger bewegt
    PointerMoved { pos: glam::Vec2 },
    /// Primärtaste losgelassen
    PointerReleased { pos: glam::Vec2 },
    /// Zeiger hat das Fenster verlassen oder Fokus verloren
    PointerCancelled,
    /// Doppelklick: Ergänzungswinkel umschalten
    SupplementToggleRequested { pos: glam::Vec2 },
    /// Renderer hat die Label-Ausdehnung gemessen
    LabelMeasured { size: glam::Vec2 },
    /// Geometrie auf Start-Layout zurücksetzen
    ResetGeometryRequested,
    /// Optionen-Datei neu einlesen
    ReloadOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Zeiger-Ereignis an die Drag-Zustandsmaschine geben
    ApplyPointerEvent { event: PointerEvent },
    /// Ergänzungswinkel-Anzeige umschalten
    ToggleSupplement,
    /// Label-Ausdehnung für den Hit-Test übernehmen
    SetLabelExtent { size: glam::Vec2 },
    /// Geometrie zurücksetzen (bricht laufenden Drag ab)
    ResetGeometry,
    /// Optionen aus der Datei übernehmen (fehlende Datei wird angelegt)
    ReloadOptions,
    /// Anwendung beenden
    RequestExit,
}

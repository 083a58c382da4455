//! Overlay-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie zeichnet.

use super::options::OverlayOptions;
use glam::Vec2;

/// Ein sichtbarer Schenkel-Abschnitt (bereits um die Griff-Kreise gekürzt).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmSegment {
    pub start: Vec2,
    pub end: Vec2,
}

/// Griff-Markierung eines der drei Punkte.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleMarker {
    /// Mittelpunkt in Fensterkoordinaten
    pub center: Vec2,
    /// Kreisradius
    pub radius: f32,
    /// Wird dieser Punkt gerade gezogen?
    pub active: bool,
}

/// Winkel-Label: Text und Mittelpunkt.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelScene {
    pub text: String,
    pub anchor: Vec2,
}

/// Read-only Daten für einen Overlay-Frame.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayScene {
    /// Sichtbare Schenkel; zu kurze Schenkel fehlen
    pub arms: Vec<ArmSegment>,
    /// Griffe in der Reihenfolge Scheitel, A, B
    pub handles: [HandleMarker; 3],
    /// Winkel-Label
    pub label: LabelScene,
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: OverlayOptions,
}

//! Zentrale Konfiguration für das Winkelmesser-Overlay.
//!
//! `OverlayOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Hit-Test ────────────────────────────────────────────────────────

/// Greifradius um Scheitel und Schenkel-Endpunkte (Pixel).
pub const POINT_RADIUS: f32 = 10.0;
/// Maximaler Lotabstand zu einer Schenkel-Linie, die noch greift (Pixel).
pub const LINE_HIT_WIDTH: f32 = 8.0;

// ── Geometrie ───────────────────────────────────────────────────────

/// Schenkellänge der Start-Geometrie.
pub const DEFAULT_ARM_LENGTH: f32 = 150.0;
/// Scheitelposition der Start-Geometrie (links oben).
pub const START_VERTEX: [f32; 2] = [50.0, 200.0];
/// Abstand des Label-Ankers vom Scheitel entlang der Winkelhalbierenden.
pub const LABEL_OFFSET: f32 = 40.0;

// ── Darstellung ─────────────────────────────────────────────────────

/// Radius der Griff-Kreise (31 px Griff / 4).
pub const HANDLE_RADIUS: f32 = 7.75;
/// Schriftgröße des Winkel-Labels.
pub const LABEL_FONT_SIZE: f32 = 20.0;
/// Innenabstand zwischen Label-Text und Label-Hintergrund.
pub const LABEL_PADDING: f32 = 2.0;
/// Helle Unterlage-Linie (RGBA: Weiß).
pub const LIGHT_PEN_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Dunkle Deck-Linie (RGBA: Schwarz).
pub const DARK_PEN_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Linienstärke der hellen Unterlage.
pub const LIGHT_PEN_WIDTH: f32 = 2.0;
/// Linienstärke der dunklen Deck-Linie.
pub const DARK_PEN_WIDTH: f32 = 1.0;
/// Hintergrund des Labels (RGBA: Weiß).
pub const LABEL_BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Farbe eines gerade gezogenen Griffs (RGBA: Hellblau).
pub const ACTIVE_HANDLE_COLOR: [f32; 4] = [0.2, 0.5, 1.0, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Overlay-Optionen.
/// Wird als `screen_protractor.toml` neben der Binary gelesen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OverlayOptions {
    // ── Hit-Test ────────────────────────────────────────────────
    /// Greifradius um die drei Punkte
    pub point_radius: f32,
    /// Greifbreite der Schenkel-Linien
    pub line_hit_width: f32,

    // ── Geometrie ───────────────────────────────────────────────
    /// Schenkellänge beim Start und nach Reset
    pub default_arm_length: f32,
    /// Scheitelposition beim Start und nach Reset
    pub start_vertex: [f32; 2],
    /// Label-Abstand vom Scheitel
    pub label_offset: f32,

    // ── Darstellung ─────────────────────────────────────────────
    /// Radius der Griff-Kreise
    pub handle_radius: f32,
    /// Schriftgröße des Labels
    pub label_font_size: f32,
    /// Innenabstand des Labels
    pub label_padding: f32,
    /// Farbe der hellen Unterlage-Linie
    pub light_pen_color: [f32; 4],
    /// Farbe der dunklen Deck-Linie
    pub dark_pen_color: [f32; 4],
    /// Stärke der hellen Unterlage-Linie
    pub light_pen_width: f32,
    /// Stärke der dunklen Deck-Linie
    pub dark_pen_width: f32,
    /// Hintergrundfarbe des Labels
    pub label_background_color: [f32; 4],
    /// Farbe eines aktiv gezogenen Griffs
    pub active_handle_color: [f32; 4],
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            point_radius: POINT_RADIUS,
            line_hit_width: LINE_HIT_WIDTH,

            default_arm_length: DEFAULT_ARM_LENGTH,
            start_vertex: START_VERTEX,
            label_offset: LABEL_OFFSET,

            handle_radius: HANDLE_RADIUS,
            label_font_size: LABEL_FONT_SIZE,
            label_padding: LABEL_PADDING,
            light_pen_color: LIGHT_PEN_COLOR,
            dark_pen_color: DARK_PEN_COLOR,
            light_pen_width: LIGHT_PEN_WIDTH,
            dark_pen_width: DARK_PEN_WIDTH,
            label_background_color: LABEL_BACKGROUND_COLOR,
            active_handle_color: ACTIVE_HANDLE_COLOR,
        }
    }
}

impl OverlayOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content).unwrap_or_else(|e| {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML; fehlende Schlüssel erhalten Standardwerte.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        log::info!("Optionen geladen");
        Ok(opts.sanitized())
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("screen-protractor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("screen_protractor.toml")
    }

    /// Scheitelposition der Start-Geometrie als Vektor.
    pub fn start_vertex(&self) -> glam::Vec2 {
        glam::Vec2::from(self.start_vertex)
    }

    /// Ersetzt negative oder nicht-endliche Größenangaben durch Standardwerte.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let fix = |value: &mut f32, fallback: f32| {
            if !value.is_finite() || *value < 0.0 {
                log::warn!("Ungültiger Optionswert {value}, verwende {fallback}");
                *value = fallback;
            }
        };
        fix(&mut self.point_radius, defaults.point_radius);
        fix(&mut self.line_hit_width, defaults.line_hit_width);
        fix(&mut self.default_arm_length, defaults.default_arm_length);
        fix(&mut self.label_offset, defaults.label_offset);
        fix(&mut self.handle_radius, defaults.handle_radius);
        fix(&mut self.label_font_size, defaults.label_font_size);
        fix(&mut self.label_padding, defaults.label_padding);
        fix(&mut self.light_pen_width, defaults.light_pen_width);
        fix(&mut self.dark_pen_width, defaults.dark_pen_width);
        if !glam::Vec2::from(self.start_vertex).is_finite() {
            self.start_vertex = defaults.start_vertex;
        }
        self
    }
}

//! Application State: zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{DragController, GeometryModel, HitTester, LabelBounds};
use crate::shared::OverlayOptions;
use glam::Vec2;
use std::path::PathBuf;

/// Haupt-Anwendungszustand des Overlays
pub struct AppState {
    /// Die drei Punkte des Winkelmessers
    pub geometry: GeometryModel,
    /// Drag-Zustandsmaschine (einziger Schreiber auf `geometry` während eines Drags)
    pub drag: DragController,
    /// Laufzeit-Optionen
    pub options: OverlayOptions,
    /// Optionen-Datei für Neu-Laden (None: kein Dateizugriff)
    pub options_path: Option<PathBuf>,
    /// Zuletzt gemessene Label-Ausdehnung (None bis zum ersten Frame)
    pub label_extent: Option<Vec2>,
    /// Label zeigt den Ergänzungswinkel (180° − Winkel)
    pub show_supplement: bool,
    /// Anwendung soll beendet werden
    pub should_exit: bool,
    /// Protokoll ausgeführter Commands
    pub command_log: CommandLog,
}

impl AppState {
    /// Erstellt den Startzustand mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(OverlayOptions::default())
    }

    /// Erstellt den Startzustand; die Start-Geometrie kommt aus den Optionen.
    pub fn with_options(options: OverlayOptions) -> Self {
        Self {
            geometry: default_geometry(&options),
            drag: DragController::new(),
            options,
            options_path: None,
            label_extent: None,
            show_supplement: false,
            should_exit: false,
            command_log: CommandLog::new(),
        }
    }

    /// Label-Rechteck um den aktuellen Anker, sobald eine Ausdehnung bekannt ist.
    pub fn label_bounds(&self) -> Option<LabelBounds> {
        let anchor = self.geometry.label_anchor(self.options.label_offset);
        self.label_extent
            .map(|extent| LabelBounds::from_center_size(anchor, extent))
    }

    /// Hit-Tester mit den aktuellen Optionen und dem aktuellen Label-Rechteck.
    pub fn hit_tester(&self) -> HitTester {
        HitTester::new(self.options.point_radius, self.options.line_hit_width)
            .with_label_bounds(self.label_bounds())
    }

    /// Ob `pos` zum greifbaren Teil des Overlays gehört.
    pub fn is_interactive(&self, pos: Vec2) -> bool {
        self.hit_tester().is_interactive(&self.geometry, pos)
    }

    /// Gewünschter Maus-Durchlass für die Zeigerposition `pointer`.
    ///
    /// Während eines Drags nie, ohne bekannte Position keine Aussage (`None`).
    pub fn wants_passthrough(&self, pointer: Option<Vec2>) -> Option<bool> {
        if self.drag.is_dragging() {
            return Some(false);
        }
        pointer.map(|pos| !self.is_interactive(pos))
    }

    /// Im Label angezeigter Winkel in Grad.
    pub fn displayed_angle_degrees(&self) -> f32 {
        let angle = self.geometry.angle_degrees();
        if self.show_supplement {
            180.0 - angle
        } else {
            angle
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Start-Geometrie laut Optionen.
pub fn default_geometry(options: &OverlayOptions) -> GeometryModel {
    GeometryModel::with_default_layout(options.start_vertex(), options.default_arm_length)
}

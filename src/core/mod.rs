//! Core-Domänentypen: Geometrie-Modell, Hit-Test und Drag-Zustandsmaschine.
//!
//! Frei von egui-Abhängigkeiten. Die Module kennen weder Fenster noch Renderer.

pub mod drag;
pub mod geometry;

pub use drag::{DragController, DragSession, DragState, PointerEvent, PointerEventKind, PointerOutcome};
pub use geometry::{
    shortened_segment, GeometryModel, PointId, ProtractorPoints, DEGENERATE_ANGLE_DEGREES,
    DEGENERATE_EPSILON,
};
pub use hit_test::{distance_to_segment, DragTarget, HitTester, LabelBounds};

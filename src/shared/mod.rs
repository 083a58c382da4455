//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::OverlayOptions;
pub use render_scene::{ArmSegment, HandleMarker, LabelScene, OverlayScene};

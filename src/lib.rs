//! Screen Protractor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState};
pub use core::{
    DragController, DragSession, DragState, DragTarget, GeometryModel, HitTester, LabelBounds,
    PointId, PointerEvent, PointerEventKind, PointerOutcome,
};
pub use shared::{OverlayOptions, OverlayScene};

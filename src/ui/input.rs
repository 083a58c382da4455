//! Fenster-Input-Handling: egui-Zeigerereignisse → AppIntent,
//! Klick-Durchlass und Cursor-Form.

use std::time::Duration;

use eframe::egui;
use glam::Vec2;
use mouse_position::mouse_position::Mouse;

use crate::app::{AppIntent, AppState};
use crate::core::DragTarget;

/// Abfrage-Intervall der globalen Zeigerposition bei aktivem Durchlass.
const CURSOR_POLL_INTERVAL: Duration = Duration::from_millis(30);

/// macOS meldet die globale Zeigerposition bereits in Punkten, X11 und Windows in Pixeln.
const CURSOR_IN_PHYSICAL_PIXELS: bool = !cfg!(target_os = "macos");

/// Quelle der systemweiten Zeigerposition.
///
/// Bei aktivem Durchlass liefert das Fenster keine Zeiger-Ereignisse mehr;
/// nur über diese Quelle lässt sich erkennen, wann der Zeiger zurückkehrt.
pub trait CursorSource {
    /// Zeigerposition in Bildschirmkoordinaten, `None` wenn nicht ermittelbar.
    fn screen_position(&self) -> Option<Vec2>;
}

/// Systemweite Zeigerposition über das Betriebssystem.
pub struct SystemCursor;

impl CursorSource for SystemCursor {
    fn screen_position(&self) -> Option<Vec2> {
        match Mouse::get_mouse_position() {
            Mouse::Position { x, y } => Some(Vec2::new(x as f32, y as f32)),
            Mouse::Error => None,
        }
    }
}

/// Verwaltet den Input-Zustand des Overlay-Fensters
pub struct InputState {
    /// Zuletzt an das Fenster gemeldeter Durchlass-Zustand (None = noch nie gesetzt)
    passthrough: Option<bool>,
    cursor: Box<dyn CursorSource>,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    /// Erstellt einen neuen Input-Zustand mit der System-Zeigerquelle.
    pub fn new() -> Self {
        Self::with_cursor_source(Box::new(SystemCursor))
    }

    /// Erstellt einen Input-Zustand mit eigener Zeigerquelle.
    pub fn with_cursor_source(cursor: Box<dyn CursorSource>) -> Self {
        Self {
            passthrough: None,
            cursor,
        }
    }

    /// Sammelt Zeiger-Ereignisse dieses Frames in Ankunftsreihenfolge.
    ///
    /// Es zählt nur die Primärtaste. Fokusverlust und das Verlassen des
    /// Fensters brechen einen laufenden Drag ab.
    pub fn collect_pointer_intents(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let (events, double_click_pos) = ctx.input(|i| {
            let double_click_pos = if i.pointer.button_double_clicked(egui::PointerButton::Primary) {
                i.pointer.interact_pos()
            } else {
                None
            };
            (i.events.clone(), double_click_pos)
        });

        let mut intents = Vec::new();
        for event in events {
            match event {
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    let pos = to_vec2(pos);
                    intents.push(if pressed {
                        AppIntent::PointerPressed { pos }
                    } else {
                        AppIntent::PointerReleased { pos }
                    });
                }
                egui::Event::PointerMoved(pos) => {
                    intents.push(AppIntent::PointerMoved { pos: to_vec2(pos) });
                }
                egui::Event::PointerGone | egui::Event::WindowFocused(false) => {
                    intents.push(AppIntent::PointerCancelled);
                }
                _ => {}
            }
        }

        if let Some(pos) = double_click_pos {
            intents.push(AppIntent::SupplementToggleRequested { pos: to_vec2(pos) });
        }

        intents
    }

    /// Schaltet den Maus-Durchlass des Fensters anhand des Hit-Tests.
    ///
    /// Solange der Durchlass aktiv ist, wird die globale Zeigerposition
    /// periodisch abgefragt, damit der Winkelmesser wieder greifbar wird,
    /// sobald der Zeiger über ihn fährt. Nur Änderungen werden gesendet.
    pub fn sync_passthrough(&mut self, ctx: &egui::Context, state: &AppState) {
        let (hover, pixels_per_point, window_min) = ctx.input(|i| {
            (
                i.pointer.hover_pos().map(to_vec2),
                i.pixels_per_point(),
                i.viewport().inner_rect.map(|rect| to_vec2(rect.min)),
            )
        });
        let global = window_min.and_then(|min| {
            self.cursor
                .screen_position()
                .map(|pos| screen_to_window(pos, pixels_per_point, min))
        });

        if let Some(passthrough) = decide_passthrough(state, hover, global, self.passthrough) {
            if self.note_passthrough(passthrough) {
                log::debug!("Maus-Durchlass: {}", if passthrough { "an" } else { "aus" });
                ctx.send_viewport_cmd(egui::ViewportCommand::MousePassthrough(passthrough));
            }
        }

        if self.passthrough == Some(true) {
            ctx.request_repaint_after(CURSOR_POLL_INTERVAL);
        }
    }

    /// Merkt sich den Durchlass-Zustand; `true` wenn er sich geändert hat.
    fn note_passthrough(&mut self, passthrough: bool) -> bool {
        if self.passthrough == Some(passthrough) {
            return false;
        }
        self.passthrough = Some(passthrough);
        true
    }
}

/// Entscheidet über den Maus-Durchlass.
///
/// `hover` ist die egui-Zeigerposition, `global` die fensterlokal umgerechnete
/// Systemposition. Bei aktivem Durchlass ist `hover` veraltet und zählt nicht.
/// Durchlass wird nur eingeschaltet, wenn `global` verfügbar ist; sonst
/// käme das Fenster nie wieder an Zeiger-Ereignisse.
fn decide_passthrough(
    state: &AppState,
    hover: Option<Vec2>,
    global: Option<Vec2>,
    current: Option<bool>,
) -> Option<bool> {
    let pointer = if current == Some(true) {
        global
    } else {
        hover.or(global)
    };

    match state.wants_passthrough(pointer) {
        Some(true) if global.is_none() => Some(false),
        Some(wanted) => Some(wanted),
        None if current == Some(true) => Some(false),
        None => None,
    }
}

/// Bildschirmposition → fensterlokale egui-Punkte.
fn screen_to_window(screen: Vec2, pixels_per_point: f32, window_min: Vec2) -> Vec2 {
    let points = if CURSOR_IN_PHYSICAL_PIXELS && pixels_per_point > 0.0 {
        screen / pixels_per_point
    } else {
        screen
    };
    points - window_min
}

/// Setzt die Cursor-Form passend zum Ziel unter dem Zeiger.
pub fn update_cursor(ctx: &egui::Context, state: &AppState) {
    let target = if state.drag.is_dragging() {
        state.drag.active_target()
    } else {
        ctx.input(|i| i.pointer.hover_pos())
            .map(|pos| state.hit_tester().classify(&state.geometry, to_vec2(pos)))
            .unwrap_or(DragTarget::None)
    };

    let icon = match target {
        DragTarget::Vertex | DragTarget::ArmA | DragTarget::ArmB => egui::CursorIcon::Crosshair,
        DragTarget::WholeGroup if state.drag.is_dragging() => egui::CursorIcon::Grabbing,
        DragTarget::WholeGroup => egui::CursorIcon::Grab,
        DragTarget::None => return,
    };
    ctx.set_cursor_icon(icon);
}

fn to_vec2(pos: egui::Pos2) -> Vec2 {
    Vec2::new(pos.x, pos.y)
}

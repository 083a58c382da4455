//! Drag-Zustandsmaschine: Press/Move/Release/Cancel → Mutationen am GeometryModel.
//!
//! Zustände: `Idle` und `Dragging(session)`. Ereignisse außerhalb der
//! gültigen Übergänge sind No-ops.

use super::geometry::GeometryModel;
use super::hit_test::{DragTarget, HitTester};
use glam::Vec2;

/// Art eines Zeiger-Ereignisses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    /// Primärtaste gedrückt
    Down,
    /// Zeiger bewegt
    Move,
    /// Primärtaste losgelassen
    Up,
    /// Drag abbrechen (Fokusverlust, Zeiger hat das Fenster verlassen)
    Cancel,
}

/// Toolkit-unabhängiges Zeiger-Ereignis in Fensterkoordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Vec2,
}

impl PointerEvent {
    pub fn down(position: Vec2) -> Self {
        Self {
            kind: PointerEventKind::Down,
            position,
        }
    }

    pub fn moved(position: Vec2) -> Self {
        Self {
            kind: PointerEventKind::Move,
            position,
        }
    }

    pub fn up(position: Vec2) -> Self {
        Self {
            kind: PointerEventKind::Up,
            position,
        }
    }

    /// Abbruch trägt keine sinnvolle Position.
    pub fn cancel() -> Self {
        Self {
            kind: PointerEventKind::Cancel,
            position: Vec2::ZERO,
        }
    }
}

/// Laufender Drag: gegriffenes Ziel und Greif-Offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Gegriffenes Ziel (nie [`DragTarget::None`])
    pub target: DragTarget,
    /// Punkt minus Zeiger zum Zeitpunkt des Drucks.
    /// Bei `WholeGroup` bezogen auf den Scheitel als Gruppenanker.
    pub grab_offset: Vec2,
}

impl DragSession {
    /// Position, die der gegriffene Punkt (bzw. Gruppenanker) bei `pointer` einnimmt.
    pub fn anchor_at(&self, pointer: Vec2) -> Vec2 {
        pointer + self.grab_offset
    }
}

/// Zustand des Drag-Controllers
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Ergebnis der Verarbeitung eines Zeiger-Ereignisses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    /// Drag auf dem Ziel gestartet
    Started(DragTarget),
    /// Gegriffener Punkt/Gruppe nachgeführt
    Moved,
    /// Drag mit finaler Position beendet
    Finished,
    /// Drag ohne weitere Änderung verworfen
    Cancelled,
    /// Nichts passiert; das Ereignis gehört dem Fenster darunter
    Ignored,
}

impl PointerOutcome {
    /// Ob das Ereignis vom Overlay verbraucht wurde.
    pub fn is_consumed(self) -> bool {
        self != PointerOutcome::Ignored
    }
}

/// Einziger Schreiber auf das GeometryModel.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    /// Erstellt einen Controller im Zustand `Idle`.
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Aktive Session, falls ein Drag läuft.
    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Ziel des laufenden Drags oder [`DragTarget::None`].
    pub fn active_target(&self) -> DragTarget {
        self.session()
            .map(|session| session.target)
            .unwrap_or(DragTarget::None)
    }

    /// Zentraler Einstieg für alle Zeiger-Ereignisse.
    pub fn on_pointer_event(
        &mut self,
        event: PointerEvent,
        geometry: &mut GeometryModel,
        hit_tester: &HitTester,
    ) -> PointerOutcome {
        match (self.state, event.kind) {
            (DragState::Idle, PointerEventKind::Down) => {
                self.begin(event.position, geometry, hit_tester)
            }
            (DragState::Dragging(session), PointerEventKind::Move) => {
                apply(&session, event.position, geometry);
                PointerOutcome::Moved
            }
            (DragState::Dragging(session), PointerEventKind::Up) => {
                apply(&session, event.position, geometry);
                self.state = DragState::Idle;
                log::debug!("Drag beendet: {:?}", session.target);
                PointerOutcome::Finished
            }
            (DragState::Dragging(session), PointerEventKind::Cancel) => {
                self.state = DragState::Idle;
                log::debug!("Drag abgebrochen: {:?}", session.target);
                PointerOutcome::Cancelled
            }
            (state, kind) => {
                log::trace!("Zeiger-Ereignis {kind:?} im Zustand {state:?} ignoriert");
                PointerOutcome::Ignored
            }
        }
    }

    fn begin(
        &mut self,
        pointer: Vec2,
        geometry: &GeometryModel,
        hit_tester: &HitTester,
    ) -> PointerOutcome {
        let target = hit_tester.classify(geometry, pointer);
        let anchor = if target == DragTarget::WholeGroup {
            geometry.points().vertex
        } else if let Some(id) = target.point_id() {
            geometry.point(id)
        } else {
            return PointerOutcome::Ignored;
        };

        self.state = DragState::Dragging(DragSession {
            target,
            grab_offset: anchor - pointer,
        });
        log::debug!("Drag gestartet: {target:?} bei {pointer:?}");
        PointerOutcome::Started(target)
    }
}

fn apply(session: &DragSession, pointer: Vec2, geometry: &mut GeometryModel) {
    let anchor = session.anchor_at(pointer);
    match session.target {
        DragTarget::WholeGroup => {
            let delta = anchor - geometry.points().vertex;
            geometry.translate_all(delta);
        }
        target => {
            if let Some(id) = target.point_id() {
                geometry.set_point(id, anchor);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PointId;
    use approx::assert_relative_eq;

    fn right_angle() -> GeometryModel {
        GeometryModel::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(0.0, 100.0),
        )
    }

    fn tester() -> HitTester {
        HitTester::new(10.0, 8.0)
    }

    #[test]
    fn press_on_empty_area_stays_idle() {
        let mut geometry = right_angle();
        let mut drag = DragController::new();

        let outcome = drag.on_pointer_event(PointerEvent::down(Vec2::new(60.0, 60.0)), &mut geometry, &tester());

        assert_eq!(outcome, PointerOutcome::Ignored);
        assert!(!outcome.is_consumed());
        assert_eq!(drag.state(), DragState::Idle);
    }

    #[test]
    fn vertex_drag_keeps_grab_offset_and_leaves_arms_alone() {
        let mut geometry = right_angle();
        let mut drag = DragController::new();
        let hit = tester();

        // 3 px neben dem Scheitel greifen
        let press = Vec2::new(3.0, -2.0);
        assert_eq!(
            drag.on_pointer_event(PointerEvent::down(press), &mut geometry, &hit),
            PointerOutcome::Started(DragTarget::Vertex)
        );
        // Druck allein verschiebt nichts
        assert_eq!(geometry.points().vertex, Vec2::ZERO);

        let delta = Vec2::new(20.0, 30.0);
        drag.on_pointer_event(PointerEvent::moved(press + delta), &mut geometry, &hit);
        drag.on_pointer_event(PointerEvent::up(press + delta), &mut geometry, &hit);

        let points = geometry.points();
        assert_eq!(points.vertex, delta);
        assert_eq!(points.arm_a, Vec2::new(100.0, 0.0));
        assert_eq!(points.arm_b, Vec2::new(0.0, 100.0));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn arm_endpoint_drag_moves_only_that_arm() {
        let mut geometry = right_angle();
        let mut drag = DragController::new();
        let hit = tester();

        drag.on_pointer_event(PointerEvent::down(Vec2::new(0.0, 100.0)), &mut geometry, &hit);
        drag.on_pointer_event(PointerEvent::moved(Vec2::new(50.0, 50.0)), &mut geometry, &hit);
        drag.on_pointer_event(PointerEvent::up(Vec2::new(100.0, 0.0)), &mut geometry, &hit);

        assert_eq!(geometry.point(PointId::ArmB), Vec2::new(100.0, 0.0));
        assert_eq!(geometry.point(PointId::ArmA), Vec2::new(100.0, 0.0));
        assert_eq!(geometry.angle_degrees(), 0.0);
    }

    #[test]
    fn whole_group_drag_translates_and_keeps_angle() {
        let mut geometry = GeometryModel::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(70.0, 70.0),
        );
        let before = geometry.angle_degrees();
        let mut drag = DragController::new();
        let hit = tester();

        let press = Vec2::new(50.0, 1.0);
        assert_eq!(
            drag.on_pointer_event(PointerEvent::down(press), &mut geometry, &hit),
            PointerOutcome::Started(DragTarget::WholeGroup)
        );
        drag.on_pointer_event(PointerEvent::moved(press + Vec2::new(4.0, 4.0)), &mut geometry, &hit);
        drag.on_pointer_event(PointerEvent::up(press + Vec2::new(10.0, 10.0)), &mut geometry, &hit);

        let points = geometry.points();
        assert_eq!(points.vertex, Vec2::new(10.0, 10.0));
        assert_eq!(points.arm_a, Vec2::new(110.0, 10.0));
        assert_eq!(points.arm_b, Vec2::new(80.0, 80.0));
        assert_relative_eq!(geometry.angle_degrees(), before, epsilon = 1e-4);
    }

    #[test]
    fn cancel_returns_to_idle_without_applying_pending_move() {
        let mut geometry = right_angle();
        let mut drag = DragController::new();
        let hit = tester();

        drag.on_pointer_event(PointerEvent::down(Vec2::new(100.0, 0.0)), &mut geometry, &hit);
        drag.on_pointer_event(PointerEvent::moved(Vec2::new(120.0, 5.0)), &mut geometry, &hit);
        let committed = geometry.clone();

        let outcome = drag.on_pointer_event(PointerEvent::cancel(), &mut geometry, &hit);

        assert_eq!(outcome, PointerOutcome::Cancelled);
        assert_eq!(drag.state(), DragState::Idle);
        assert_eq!(geometry, committed);

        // Nachzügler-Move nach dem Abbruch ändert nichts mehr
        drag.on_pointer_event(PointerEvent::moved(Vec2::new(400.0, 400.0)), &mut geometry, &hit);
        assert_eq!(geometry, committed);
    }

    #[test]
    fn cancel_right_after_press_leaves_geometry_untouched() {
        let mut geometry = right_angle();
        let before = geometry.clone();
        let mut drag = DragController::new();
        let hit = tester();

        drag.on_pointer_event(PointerEvent::down(Vec2::new(50.0, 2.0)), &mut geometry, &hit);
        drag.on_pointer_event(PointerEvent::cancel(), &mut geometry, &hit);

        assert_eq!(geometry, before);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn out_of_order_events_are_no_ops() {
        let mut geometry = right_angle();
        let before = geometry.clone();
        let mut drag = DragController::new();
        let hit = tester();

        for event in [
            PointerEvent::moved(Vec2::new(1.0, 1.0)),
            PointerEvent::up(Vec2::new(1.0, 1.0)),
            PointerEvent::cancel(),
        ] {
            assert_eq!(drag.on_pointer_event(event, &mut geometry, &hit), PointerOutcome::Ignored);
        }
        assert_eq!(geometry, before);

        // Zweiter Druck während eines Drags wechselt das Ziel nicht
        drag.on_pointer_event(PointerEvent::down(Vec2::ZERO), &mut geometry, &hit);
        let outcome = drag.on_pointer_event(PointerEvent::down(Vec2::new(100.0, 0.0)), &mut geometry, &hit);
        assert_eq!(outcome, PointerOutcome::Ignored);
        assert_eq!(drag.active_target(), DragTarget::Vertex);
    }

    #[test]
    fn non_finite_move_keeps_previous_position() {
        let mut geometry = right_angle();
        let mut drag = DragController::new();
        let hit = tester();

        drag.on_pointer_event(PointerEvent::down(Vec2::new(50.0, 0.0)), &mut geometry, &hit);
        drag.on_pointer_event(PointerEvent::moved(Vec2::new(f32::NAN, 3.0)), &mut geometry, &hit);

        assert_eq!(geometry, right_angle());
        assert!(drag.is_dragging());
    }
}

//! Geometrie-Modell des Winkelmessers: Scheitelpunkt, zwei Schenkel-Endpunkte
//! und die daraus abgeleiteten Größen (Winkel, Label-Anker, Schenkel-Segmente).

use glam::{DVec2, Vec2};

/// Längen unterhalb dieser Schwelle gelten als entartet (Schenkel liegt auf dem Scheitel).
pub const DEGENERATE_EPSILON: f32 = 1e-6;

/// Rückgabewert von [`GeometryModel::angle_degrees`] bei entarteten Schenkeln.
pub const DEGENERATE_ANGLE_DEGREES: f32 = 0.0;

/// Einer der drei verschiebbaren Punkte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointId {
    /// Gemeinsamer Scheitelpunkt beider Schenkel
    Vertex,
    /// Endpunkt des ersten Schenkels
    ArmA,
    /// Endpunkt des zweiten Schenkels
    ArmB,
}

impl PointId {
    /// Alle Punkte in Hit-Test-Reihenfolge.
    pub const ALL: [PointId; 3] = [PointId::Vertex, PointId::ArmA, PointId::ArmB];
}

/// Read-only Kopie der drei Punktpositionen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProtractorPoints {
    pub vertex: Vec2,
    pub arm_a: Vec2,
    pub arm_b: Vec2,
}

impl ProtractorPoints {
    /// Position eines einzelnen Punkts.
    pub fn get(&self, which: PointId) -> Vec2 {
        match which {
            PointId::Vertex => self.vertex,
            PointId::ArmA => self.arm_a,
            PointId::ArmB => self.arm_b,
        }
    }
}

/// Besitzt die drei Punkte des Winkelmessers.
///
/// Alle Positionen sind fensterlokal und immer endlich: nicht-endliche
/// Eingaben werden stillschweigend verworfen.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryModel {
    points: ProtractorPoints,
}

impl GeometryModel {
    /// Erstellt ein Modell aus drei Punkten.
    ///
    /// Nicht-endliche Koordinaten werden durch den Scheitel (bzw. den Ursprung)
    /// ersetzt, damit das Modell nie einen ungültigen Zustand enthält.
    pub fn new(vertex: Vec2, arm_a: Vec2, arm_b: Vec2) -> Self {
        let vertex = if vertex.is_finite() { vertex } else { Vec2::ZERO };
        let sanitize = |p: Vec2| if p.is_finite() { p } else { vertex };
        Self {
            points: ProtractorPoints {
                vertex,
                arm_a: sanitize(arm_a),
                arm_b: sanitize(arm_b),
            },
        }
    }

    /// Standard-Geometrie: 45°-Öffnung, beide Schenkel mit Länge `arm_length`.
    ///
    /// Schenkel A zeigt nach rechts, Schenkel B nach rechts oben
    /// (Bildschirm-Y wächst nach unten).
    pub fn with_default_layout(vertex: Vec2, arm_length: f32) -> Self {
        let diagonal = Vec2::new(1.0, -1.0).normalize();
        Self::new(
            vertex,
            vertex + Vec2::X * arm_length,
            vertex + diagonal * arm_length,
        )
    }

    /// Liefert alle drei Punkte (reiner Lesezugriff).
    pub fn points(&self) -> ProtractorPoints {
        self.points
    }

    /// Position eines einzelnen Punkts.
    pub fn point(&self, which: PointId) -> Vec2 {
        self.points.get(which)
    }

    /// Überschreibt einen Punkt. Nicht-endliche Positionen werden ignoriert.
    pub fn set_point(&mut self, which: PointId, position: Vec2) {
        if !position.is_finite() {
            log::trace!("set_point({which:?}) ignoriert: {position:?} ist nicht endlich");
            return;
        }
        match which {
            PointId::Vertex => self.points.vertex = position,
            PointId::ArmA => self.points.arm_a = position,
            PointId::ArmB => self.points.arm_b = position,
        }
    }

    /// Verschiebt alle drei Punkte um denselben Offset (Winkel bleibt exakt erhalten).
    ///
    /// Ein Offset, der einen Punkt nicht-endlich machen würde, wird komplett verworfen.
    pub fn translate_all(&mut self, delta: Vec2) {
        let moved = ProtractorPoints {
            vertex: self.points.vertex + delta,
            arm_a: self.points.arm_a + delta,
            arm_b: self.points.arm_b + delta,
        };
        if !(moved.vertex.is_finite() && moved.arm_a.is_finite() && moved.arm_b.is_finite()) {
            log::trace!("translate_all ignoriert: {delta:?} ergibt nicht-endliche Punkte");
            return;
        }
        self.points = moved;
    }

    /// Vektor Scheitel → Schenkel A.
    pub fn arm_a_vector(&self) -> Vec2 {
        self.points.arm_a - self.points.vertex
    }

    /// Vektor Scheitel → Schenkel B.
    pub fn arm_b_vector(&self) -> Vec2 {
        self.points.arm_b - self.points.vertex
    }

    /// Schenkel-Vektoren in f64: weit auseinanderliegende, endliche Punkte
    /// würden in f32 zu ∞ überlaufen.
    fn precise_arm_vectors(&self) -> (DVec2, DVec2) {
        let vertex = self.points.vertex.as_dvec2();
        (
            self.points.arm_a.as_dvec2() - vertex,
            self.points.arm_b.as_dvec2() - vertex,
        )
    }

    /// `true` wenn mindestens ein Schenkel (nahezu) auf dem Scheitel liegt.
    pub fn is_degenerate(&self) -> bool {
        let (a, b) = self.precise_arm_vectors();
        let epsilon = f64::from(DEGENERATE_EPSILON);
        a.length() < epsilon || b.length() < epsilon
    }

    /// Ungerichteter Winkel zwischen beiden Schenkeln in Grad, Bereich [0°, 180°].
    ///
    /// `|atan2(cross(vA, vB), dot(vA, vB))|`. Bei entartetem Schenkel:
    /// [`DEGENERATE_ANGLE_DEGREES`].
    pub fn angle_degrees(&self) -> f32 {
        if self.is_degenerate() {
            return DEGENERATE_ANGLE_DEGREES;
        }
        let (a, b) = self.precise_arm_vectors();
        let angle = a.perp_dot(b).atan2(a.dot(b)).abs().to_degrees() as f32;
        if angle.is_finite() {
            angle
        } else {
            DEGENERATE_ANGLE_DEGREES
        }
    }

    /// Ankerpunkt für das Winkel-Label.
    ///
    /// Liegt um `offset` vom Scheitel entfernt auf der Winkelhalbierenden.
    /// Bei entgegengesetzten Schenkeln senkrecht zu Schenkel A, ohne brauchbare
    /// Schenkel direkt unterhalb des Scheitels.
    pub fn label_anchor(&self, offset: f32) -> Vec2 {
        self.points.vertex + self.bisector_direction() * offset
    }

    fn bisector_direction(&self) -> Vec2 {
        let (a, b) = self.precise_arm_vectors();
        let unit_a = a.normalize_or_zero();
        let unit_b = b.normalize_or_zero();

        let sum = unit_a + unit_b;
        if sum.length() >= f64::from(DEGENERATE_EPSILON) {
            return sum.normalize().as_vec2();
        }

        // Antiparallel (oder beide entartet): senkrecht zu einem Schenkel ausweichen
        let fallback_arm = if unit_a != DVec2::ZERO { unit_a } else { unit_b };
        if fallback_arm == DVec2::ZERO {
            return Vec2::Y;
        }
        fallback_arm.perp().as_vec2()
    }

    /// Die beiden Schenkel als Segmente `[Scheitel, Endpunkt]`.
    pub fn arm_segments(&self) -> [(Vec2, Vec2); 2] {
        [
            (self.points.vertex, self.points.arm_a),
            (self.points.vertex, self.points.arm_b),
        ]
    }
}

/// Kürzt ein Segment an beiden Enden um die angegebenen Längen.
///
/// Gibt `None` zurück, wenn vom Segment nichts übrig bleibt.
pub fn shortened_segment(start: Vec2, end: Vec2, trim_start: f32, trim_end: f32) -> Option<(Vec2, Vec2)> {
    let origin = start.as_dvec2();
    let diff = end.as_dvec2() - origin;
    let length = diff.length();
    let (trim_start, trim_end) = (f64::from(trim_start), f64::from(trim_end));
    if length < f64::from(DEGENERATE_EPSILON) || trim_start + trim_end >= length {
        return None;
    }
    let t_start = (trim_start / length).clamp(0.0, 1.0);
    let t_end = 1.0 - (trim_end / length).clamp(0.0, 1.0);
    Some((
        (origin + diff * t_start).as_vec2(),
        (origin + diff * t_end).as_vec2(),
    ))
}

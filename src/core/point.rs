//! Punkt-Datentypen und Winkel-Helfer.
//!
//! Konvention: Bodenebene ist X/Z (`Vec2` = (x, z)), Y ist die Höhe.
//! Winkel intern in Radiant, an der Oberfläche Grad in [0, 360).

use glam::{Vec2, Vec3};

/// Rolle eines Kontrollpunkts innerhalb eines Pfad-Modus.
///
/// Ein Pfad-Modus hält höchstens einen Punkt pro Rolle; eine Rolle
/// existiert erst nach ihrem auslösenden Klick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlRole {
    /// Pfad-Anfang (Straight/Curve)
    Start,
    /// Pfad-Ende (Straight/Curve)
    End,
    /// Mittlerer Steuerpunkt der Drei-Punkt-Kurve
    Elbow,
    /// Kreis-Mittelpunkt
    Center,
    /// Punkt auf dem Kreis (definiert den Radius)
    Radius,
}

/// Ein generierter Platzierungspunkt.
///
/// Wird bei jeder Neuberechnung vollständig neu erzeugt, nie in-place
/// über Frames hinweg mutiert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointData {
    /// Weltposition (Y = Terrainhöhe)
    pub position: Vec3,
    /// Rotation um die Hochachse in Grad, [0, 360)
    pub rotation_deg: f32,
}

impl PointData {
    /// Erstellt einen Platzierungspunkt aus Bodenposition, Höhe und Rotation.
    pub fn new(ground: Vec2, height: f32, rotation_deg: f32) -> Self {
        Self {
            position: Vec3::new(ground.x, height, ground.y),
            rotation_deg: normalize_deg(rotation_deg),
        }
    }

    /// Bodenposition (X/Z) des Punkts.
    pub fn ground(&self) -> Vec2 {
        Vec2::new(self.position.x, self.position.z)
    }
}

/// Normalisiert einen Winkel (Grad) in [0, 360).
pub fn normalize_deg(deg: f32) -> f32 {
    deg.rem_euclid(360.0)
}

/// Gier-Winkel (Grad, [0, 360)) einer Bodenrichtung.
///
/// Konvention: +X → 0°, +Z → 90°.
pub fn yaw_deg(dir: Vec2) -> f32 {
    normalize_deg(dir.y.atan2(dir.x).to_degrees())
}

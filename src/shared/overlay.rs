//! Overlay-Szene: Guide-Linien, Kontrollpunkt-Marker und Mess-Tooltips.
//!
//! Reine Daten für den Host-Renderer — wird jeden Tick vollständig neu
//! aufgebaut, nie inkrementell mutiert.

use crate::core::ControlRole;
use glam::Vec2;

/// Eine Guide-Polyline in Welt-Bodenkoordinaten (X/Z).
#[derive(Debug, Clone, Default)]
pub struct GuideLine {
    /// Stützpunkte der Polyline (Reihenfolge = Zeichenreihenfolge)
    pub points: Vec<Vec2>,
}

impl GuideLine {
    /// Erstellt eine Guide-Linie aus zwei Endpunkten.
    pub fn segment(a: Vec2, b: Vec2) -> Self {
        Self { points: vec![a, b] }
    }
}

/// Ein draggbarer Kontrollpunkt-Marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlMarker {
    /// Welt-Bodenposition des Markers
    pub position: Vec2,
    /// Rolle des Kontrollpunkts (Start, End, Elbow, Center, Radius)
    pub role: ControlRole,
}

/// Messwert eines Tooltips.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureValue {
    /// Distanz in Metern
    Distance(f32),
    /// Winkel in Grad
    Angle(f32),
}

/// Ein Mess-Tooltip für die On-Screen-Anzeige.
///
/// Werte werden intern in voller Präzision geführt und erst bei der
/// Formatierung auf eine Nachkommastelle gerundet.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipInfo {
    /// Ankerposition in Welt-Bodenkoordinaten
    pub anchor: Vec2,
    /// Ausrichtung des Tooltips (normalisiert, z.B. Pfadrichtung)
    pub direction: Vec2,
    /// Anzeige-Label (z.B. "Gesamtlänge")
    pub label: &'static str,
    /// Messwert
    pub value: MeasureValue,
}

impl TooltipInfo {
    /// Formatiert den Messwert für die UI (eine Nachkommastelle).
    pub fn format_value(&self) -> String {
        match self.value {
            MeasureValue::Distance(m) => format!("{m:.1} m"),
            MeasureValue::Angle(deg) => format!("{deg:.1}°"),
        }
    }
}

/// Vollständige Overlay-Szene eines Ticks.
#[derive(Debug, Clone, Default)]
pub struct OverlayScene {
    /// Guide-Linien (Pfadverlauf, Radiuslinie, …)
    pub guide_lines: Vec<GuideLine>,
    /// Draggbare Kontrollpunkt-Marker
    pub markers: Vec<ControlMarker>,
    /// Mess-Tooltips
    pub tooltips: Vec<TooltipInfo>,
}

impl OverlayScene {
    /// Leert die Szene (vor dem Neuaufbau eines Ticks).
    pub fn clear(&mut self) {
        self.guide_lines.clear();
        self.markers.clear();
        self.tooltips.clear();
    }
}

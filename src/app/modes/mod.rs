//! Pfad-Modi: Gerade, Drei-Punkt-Kurve und Kreis.
//!
//! Die Modi sind als Summen-Typ (`PathMode`) modelliert und werden über
//! einen einzigen Satz von Operationen pro Kontrakt dispatcht — jede
//! Variante trägt ihre eigenen rollen-getaggten Kontrollpunkte. Die
//! Zeigerposition steht bei allen Operationen für den noch nicht
//! bestätigten letzten Kontrollpunkt.
//!
//! Aufgeteilt in:
//! - `common`   — Bézier/LUT-Geometrie und Punkt-Materialisierung
//! - `straight` — gerade Strecke (Start → Ende)
//! - `curve`    — quadratische Bézier (Start → Elbow → Ende)
//! - `circle`   — Kreis (Mittelpunkt → Radius-Punkt)

pub(crate) mod common;
mod circle;
mod curve;
mod straight;

pub use circle::CircleMode;
pub use curve::CurveMode;
pub use straight::StraightMode;

use crate::app::spacing::SpacingConfig;
use crate::core::{ControlRole, HeightSampler, PointData};
use crate::shared::{ControlMarker, GuideLine, PathModeKind, TooltipInfo};
use glam::Vec2;

/// Aktiver Pfad-Modus mit seinen Kontrollpunkten.
#[derive(Debug, Clone)]
pub enum PathMode {
    /// Gerade Strecke
    Straight(StraightMode),
    /// Drei-Punkt-Kurve
    Curve(CurveMode),
    /// Kreis
    Circle(CircleMode),
}

impl Default for PathMode {
    fn default() -> Self {
        PathMode::Straight(StraightMode::default())
    }
}

impl PathMode {
    /// Erstellt einen frischen Modus der gewünschten Form.
    pub fn new(kind: PathModeKind) -> Self {
        match kind {
            PathModeKind::Straight => PathMode::Straight(StraightMode::default()),
            PathModeKind::Curve => PathMode::Curve(CurveMode::default()),
            PathModeKind::Circle => PathMode::Circle(CircleMode::default()),
        }
    }

    /// Form des aktiven Modus.
    pub fn kind(&self) -> PathModeKind {
        match self {
            PathMode::Straight(_) => PathModeKind::Straight,
            PathMode::Curve(_) => PathModeKind::Curve,
            PathMode::Circle(_) => PathModeKind::Circle,
        }
    }

    /// Wechselt die Form und übernimmt den letzten Endpunkt des alten
    /// Modus als Verkettungs-Anker des neuen.
    pub fn switch_to(&self, kind: PathModeKind) -> Self {
        let carried = self.last_endpoint();
        let mut next = Self::new(kind);
        match &mut next {
            PathMode::Straight(mode) => mode.last_endpoint = carried,
            PathMode::Curve(mode) => mode.last_endpoint = carried,
            PathMode::Circle(mode) => mode.last_endpoint = carried,
        }
        next
    }

    /// Existiert bereits ein Start-/Anker-Punkt?
    pub fn has_start(&self) -> bool {
        match self {
            PathMode::Straight(mode) => mode.has_start(),
            PathMode::Curve(mode) => mode.has_start(),
            PathMode::Circle(mode) => mode.has_start(),
        }
    }

    /// Alle Pflicht-Rollen gesetzt — der nächste Klick platziert.
    pub fn ready_to_commit(&self) -> bool {
        match self {
            PathMode::Straight(mode) => mode.ready_to_commit(),
            PathMode::Curve(mode) => mode.ready_to_commit(),
            PathMode::Circle(mode) => mode.ready_to_commit(),
        }
    }

    /// Klick verarbeiten: rückt genau eine Rolle weiter.
    /// Gibt `true` zurück wenn dieser Klick platziert.
    pub fn handle_click(&mut self, pos: Vec2) -> bool {
        match self {
            PathMode::Straight(mode) => mode.handle_click(pos),
            PathMode::Curve(mode) => mode.handle_click(pos),
            PathMode::Circle(mode) => mode.handle_click(pos),
        }
    }

    /// Überschreibt während eines Drags die Position der gegriffenen Rolle.
    pub fn handle_drag(&mut self, role: ControlRole, pos: Vec2) {
        match self {
            PathMode::Straight(mode) => mode.handle_drag(role, pos),
            PathMode::Curve(mode) => mode.handle_drag(role, pos),
            PathMode::Circle(mode) => mode.handle_drag(role, pos),
        }
    }

    /// Hit-Test gegen alle existierenden Kontrollpunkte.
    /// Nächstgelegener Punkt gewinnt; `None` wenn keiner in Reichweite.
    pub fn check_drag_hit(&self, pos: Vec2, pick_radius: f32) -> Option<ControlRole> {
        match self {
            PathMode::Straight(mode) => mode.check_drag_hit(pos, pick_radius),
            PathMode::Curve(mode) => mode.check_drag_hit(pos, pick_radius),
            PathMode::Circle(mode) => mode.check_drag_hit(pos, pick_radius),
        }
    }

    /// Friert den terminalen Kontrollpunkt (Ende bzw. Radius-Punkt) ein.
    pub fn freeze_terminal(&mut self, pos: Vec2) {
        match self {
            PathMode::Straight(mode) => mode.freeze_terminal(pos),
            PathMode::Curve(mode) => mode.freeze_terminal(pos),
            PathMode::Circle(mode) => mode.freeze_terminal(pos),
        }
    }

    /// Effektive Terminal-Position: eingefrorener Punkt oder Zeiger.
    pub fn terminal_or(&self, pointer: Option<Vec2>) -> Option<Vec2> {
        match self {
            PathMode::Straight(mode) => mode.terminal_or(pointer),
            PathMode::Curve(mode) => mode.terminal_or(pointer),
            PathMode::Circle(mode) => mode.terminal_or(pointer),
        }
    }

    /// Hook direkt nach einem erfolgreichen Platzierungs-Klick.
    /// Gibt `true` zurück wenn der Anker-Punkt erhalten bleiben soll.
    pub fn items_placed(&mut self, commit_pos: Vec2) -> bool {
        match self {
            PathMode::Straight(mode) => mode.items_placed(commit_pos),
            PathMode::Curve(mode) => mode.items_placed(commit_pos),
            PathMode::Circle(mode) => mode.items_placed(commit_pos),
        }
    }

    /// Setzt die Kontrollpunkte zurück; bei Verkettung wird das vorherige
    /// Ende (bzw. der Kreis-Mittelpunkt) als neuer Start übernommen.
    pub fn reset(&mut self, continuation: bool) {
        match self {
            PathMode::Straight(mode) => mode.reset(continuation),
            PathMode::Curve(mode) => mode.reset(continuation),
            PathMode::Circle(mode) => mode.reset(continuation),
        }
    }

    /// Letzter Endpunkt (für Verkettung und Modus-Wechsel).
    pub fn last_endpoint(&self) -> Option<Vec2> {
        match self {
            PathMode::Straight(mode) => mode.last_endpoint,
            PathMode::Curve(mode) => mode.last_endpoint,
            PathMode::Circle(mode) => mode.last_endpoint,
        }
    }

    /// Kern-Algorithmus: materialisiert Punkte und Mess-Tooltips.
    ///
    /// No-op (leere Ausgabe) ohne Start-Punkt oder bei degenerierter
    /// Geometrie. Die Ausgaben werden vorher geleert — pro Neuberechnung
    /// entsteht eine vollständig frische Liste.
    pub fn calculate_points(
        &self,
        terminal: Vec2,
        config: &SpacingConfig,
        sampler: &dyn HeightSampler,
        points: &mut Vec<PointData>,
        tooltips: &mut Vec<TooltipInfo>,
    ) {
        points.clear();
        tooltips.clear();
        match self {
            PathMode::Straight(mode) => {
                mode.calculate_points(terminal, config, sampler, points, tooltips)
            }
            PathMode::Curve(mode) => {
                mode.calculate_points(terminal, config, sampler, points, tooltips)
            }
            PathMode::Circle(mode) => {
                mode.calculate_points(terminal, config, sampler, points, tooltips)
            }
        }
    }

    /// Guide-Geometrie für den Host-Renderer (reine Funktion des Zustands).
    pub fn guide_lines(&self, terminal: Vec2) -> Vec<GuideLine> {
        match self {
            PathMode::Straight(mode) => mode.guide_lines(terminal),
            PathMode::Curve(mode) => mode.guide_lines(terminal),
            PathMode::Circle(mode) => mode.guide_lines(terminal),
        }
    }

    /// Kontrollpunkt-Marker für den Host-Renderer.
    pub fn control_markers(&self) -> Vec<ControlMarker> {
        match self {
            PathMode::Straight(mode) => mode.control_markers(),
            PathMode::Curve(mode) => mode.control_markers(),
            PathMode::Circle(mode) => mode.control_markers(),
        }
    }
}

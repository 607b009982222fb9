//! Gerade Strecke: zwei Klicks definieren Start und Ende, die Punkte
//! werden gleichmäßig entlang der Verbindungslinie verteilt.

use super::common::{self, PathTopology};
use crate::app::spacing::{self, SpacingConfig};
use crate::core::{ControlRole, HeightSampler, PointData};
use crate::shared::options::LENGTH_EPSILON;
use crate::shared::{ControlMarker, GuideLine, MeasureValue, TooltipInfo};
use glam::Vec2;

/// Zustand des Gerade-Strecke-Modus.
#[derive(Debug, Clone, Default)]
pub struct StraightMode {
    /// Pfad-Anfang (1. Klick)
    pub(crate) start: Option<Vec2>,
    /// Pfad-Ende — nur gesetzt in fixierter Vorschau oder per Drag
    pub(crate) end: Option<Vec2>,
    /// Endpunkt der letzten Platzierung (für Verkettung)
    pub(crate) last_endpoint: Option<Vec2>,
}

impl StraightMode {
    pub(crate) fn has_start(&self) -> bool {
        self.start.is_some()
    }

    /// Alle Pflicht-Rollen gesetzt — der nächste Klick platziert.
    pub(crate) fn ready_to_commit(&self) -> bool {
        self.start.is_some()
    }

    /// Klick verarbeiten. Gibt `true` zurück wenn jetzt platziert wird.
    pub(crate) fn handle_click(&mut self, pos: Vec2) -> bool {
        if self.start.is_none() {
            self.start = Some(pos);
            false
        } else {
            self.end = Some(pos);
            true
        }
    }

    pub(crate) fn handle_drag(&mut self, role: ControlRole, pos: Vec2) {
        match role {
            ControlRole::Start => self.start = Some(pos),
            ControlRole::End => self.end = Some(pos),
            _ => {}
        }
    }

    pub(crate) fn check_drag_hit(&self, pos: Vec2, pick_radius: f32) -> Option<ControlRole> {
        let mut candidates = Vec::with_capacity(2);
        if let Some(start) = self.start {
            candidates.push((ControlRole::Start, start.distance(pos)));
        }
        if let Some(end) = self.end {
            candidates.push((ControlRole::End, end.distance(pos)));
        }
        common::closest_target(&candidates, pick_radius)
    }

    /// Friert das Pfad-Ende auf der übergebenen Position ein.
    pub(crate) fn freeze_terminal(&mut self, pos: Vec2) {
        self.end = Some(pos);
    }

    /// Effektives Pfad-Ende: eingefrorener Punkt oder Zeigerposition.
    pub(crate) fn terminal_or(&self, pointer: Option<Vec2>) -> Option<Vec2> {
        self.end.or(pointer)
    }

    /// Hook nach erfolgreichem Platzierungs-Klick.
    /// Merkt sich das Ende für eine mögliche Verkettung.
    pub(crate) fn items_placed(&mut self, commit_pos: Vec2) -> bool {
        self.last_endpoint = Some(self.end.unwrap_or(commit_pos));
        false
    }

    /// Setzt alle Kontrollpunkte zurück. Bei Verkettung wird das vorherige
    /// Ende als neuer Start übernommen.
    pub(crate) fn reset(&mut self, continuation: bool) {
        self.start = if continuation { self.last_endpoint } else { None };
        self.end = None;
    }

    pub(crate) fn calculate_points(
        &self,
        terminal: Vec2,
        config: &SpacingConfig,
        sampler: &dyn HeightSampler,
        points: &mut Vec<PointData>,
        tooltips: &mut Vec<TooltipInfo>,
    ) {
        let Some(start) = self.start else {
            return;
        };
        let end = self.end.unwrap_or(terminal);
        let delta = end - start;
        let length = delta.length();
        if length < LENGTH_EPSILON {
            return;
        }
        let dir = delta / length;

        let plan = spacing::plan_open_path(config, length);
        common::materialize_points(
            &plan,
            length,
            PathTopology::Open,
            config,
            sampler,
            |offset| (start + dir * offset, dir),
            points,
        );

        tooltips.push(TooltipInfo {
            anchor: start + delta * 0.5,
            direction: dir,
            label: "Gesamtlänge",
            value: MeasureValue::Distance(length),
        });
        tooltips.push(TooltipInfo {
            anchor: start + dir * (plan.effective_spacing * 0.5),
            direction: dir,
            label: "Abstand",
            value: MeasureValue::Distance(plan.effective_spacing),
        });
    }

    pub(crate) fn guide_lines(&self, terminal: Vec2) -> Vec<GuideLine> {
        let Some(start) = self.start else {
            return Vec::new();
        };
        let end = self.end.unwrap_or(terminal);
        vec![GuideLine::segment(start, end)]
    }

    pub(crate) fn control_markers(&self) -> Vec<ControlMarker> {
        let mut markers = Vec::with_capacity(2);
        if let Some(position) = self.start {
            markers.push(ControlMarker {
                position,
                role: ControlRole::Start,
            });
        }
        if let Some(position) = self.end {
            markers.push(ControlMarker {
                position,
                role: ControlRole::End,
            });
        }
        markers
    }
}

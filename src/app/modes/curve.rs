//! Drei-Punkt-Kurve: quadratische Bézier durch Start → Elbow → Ende.
//!
//! Der dritte Klick platziert; bis dahin steht die Zeigerposition für
//! das noch nicht bestätigte Ende. Die Punktverteilung läuft über eine
//! Arc-Length-LUT, damit die Abstände auf der Kurve (nicht im
//! Parameterraum) gleichmäßig sind.

use super::common::{self, PathTopology};
use crate::app::spacing::{self, SpacingConfig};
use crate::core::{ControlRole, HeightSampler, PointData};
use crate::shared::options::{CURVE_LUT_SAMPLES, GUIDE_CURVE_SAMPLES, LENGTH_EPSILON};
use crate::shared::{ControlMarker, GuideLine, MeasureValue, TooltipInfo};
use glam::Vec2;

/// Zustand des Drei-Punkt-Kurven-Modus.
#[derive(Debug, Clone, Default)]
pub struct CurveMode {
    /// Pfad-Anfang (1. Klick)
    pub(crate) start: Option<Vec2>,
    /// Mittlerer Steuerpunkt (2. Klick)
    pub(crate) elbow: Option<Vec2>,
    /// Pfad-Ende — nur gesetzt in fixierter Vorschau oder per Drag
    pub(crate) end: Option<Vec2>,
    /// Endpunkt der letzten Platzierung (für Verkettung)
    pub(crate) last_endpoint: Option<Vec2>,
}

impl CurveMode {
    pub(crate) fn has_start(&self) -> bool {
        self.start.is_some()
    }

    /// Alle Pflicht-Rollen gesetzt — der nächste Klick platziert.
    pub(crate) fn ready_to_commit(&self) -> bool {
        self.start.is_some() && self.elbow.is_some()
    }

    /// Klick verarbeiten: 1. Start, 2. Elbow, 3. platziert.
    pub(crate) fn handle_click(&mut self, pos: Vec2) -> bool {
        if self.start.is_none() {
            self.start = Some(pos);
            false
        } else if self.elbow.is_none() {
            self.elbow = Some(pos);
            false
        } else {
            self.end = Some(pos);
            true
        }
    }

    pub(crate) fn handle_drag(&mut self, role: ControlRole, pos: Vec2) {
        match role {
            ControlRole::Start => self.start = Some(pos),
            ControlRole::Elbow => self.elbow = Some(pos),
            ControlRole::End => self.end = Some(pos),
            _ => {}
        }
    }

    pub(crate) fn check_drag_hit(&self, pos: Vec2, pick_radius: f32) -> Option<ControlRole> {
        let mut candidates = Vec::with_capacity(3);
        if let Some(start) = self.start {
            candidates.push((ControlRole::Start, start.distance(pos)));
        }
        if let Some(elbow) = self.elbow {
            candidates.push((ControlRole::Elbow, elbow.distance(pos)));
        }
        if let Some(end) = self.end {
            candidates.push((ControlRole::End, end.distance(pos)));
        }
        common::closest_target(&candidates, pick_radius)
    }

    pub(crate) fn freeze_terminal(&mut self, pos: Vec2) {
        self.end = Some(pos);
    }

    pub(crate) fn terminal_or(&self, pointer: Option<Vec2>) -> Option<Vec2> {
        self.end.or(pointer)
    }

    /// Hook nach erfolgreichem Platzierungs-Klick.
    pub(crate) fn items_placed(&mut self, commit_pos: Vec2) -> bool {
        self.last_endpoint = Some(self.end.unwrap_or(commit_pos));
        false
    }

    pub(crate) fn reset(&mut self, continuation: bool) {
        self.start = if continuation { self.last_endpoint } else { None };
        self.elbow = None;
        self.end = None;
    }

    /// Kontrollpunkte der Kurve, Ende ggf. aus der Zeigerposition.
    fn control_points(&self, terminal: Vec2) -> Option<(Vec2, Vec2, Vec2)> {
        let start = self.start?;
        let elbow = self.elbow?;
        let end = self.end.unwrap_or(terminal);
        Some((start, elbow, end))
    }

    pub(crate) fn calculate_points(
        &self,
        terminal: Vec2,
        config: &SpacingConfig,
        sampler: &dyn HeightSampler,
        points: &mut Vec<PointData>,
        tooltips: &mut Vec<TooltipInfo>,
    ) {
        let Some((start, elbow, end)) = self.control_points(terminal) else {
            return;
        };

        let lut = common::ArcLengthLut::build(
            |t| common::quadratic_bezier(start, elbow, end, t),
            CURVE_LUT_SAMPLES,
        );
        let length = lut.total_length();
        if length < LENGTH_EPSILON {
            return;
        }

        let plan = spacing::plan_open_path(config, length);
        common::materialize_points(
            &plan,
            length,
            PathTopology::Open,
            config,
            sampler,
            |offset| {
                let t = lut.t_at_length(offset);
                (
                    common::quadratic_bezier(start, elbow, end, t),
                    common::quadratic_bezier_tangent(start, elbow, end, t),
                )
            },
            points,
        );

        let mid = common::quadratic_bezier(start, elbow, end, 0.5);
        let mid_tangent = common::quadratic_bezier_tangent(start, elbow, end, 0.5);
        tooltips.push(TooltipInfo {
            anchor: mid,
            direction: mid_tangent,
            label: "Gesamtlänge",
            value: MeasureValue::Distance(length),
        });
        tooltips.push(TooltipInfo {
            anchor: common::quadratic_bezier(start, elbow, end, 0.25),
            direction: common::quadratic_bezier_tangent(start, elbow, end, 0.25),
            label: "Abstand",
            value: MeasureValue::Distance(plan.effective_spacing),
        });

        // Eingeschlossener Winkel am Elbow zwischen den beiden Schenkeln
        let leg_a = start - elbow;
        let leg_b = end - elbow;
        if leg_a.length_squared() > f32::EPSILON && leg_b.length_squared() > f32::EPSILON {
            let included = leg_a.angle_to(leg_b).abs().to_degrees();
            tooltips.push(TooltipInfo {
                anchor: elbow,
                direction: (leg_a + leg_b).normalize_or(Vec2::X),
                label: "Winkel",
                value: MeasureValue::Angle(included),
            });
        }
    }

    pub(crate) fn guide_lines(&self, terminal: Vec2) -> Vec<GuideLine> {
        let Some(start) = self.start else {
            return Vec::new();
        };
        // Vor dem Elbow-Klick ist die Guide eine gerade Linie zum Zeiger
        let Some(elbow) = self.elbow else {
            return vec![GuideLine::segment(start, terminal)];
        };
        let end = self.end.unwrap_or(terminal);

        let curve = (0..=GUIDE_CURVE_SAMPLES)
            .map(|i| {
                let t = i as f32 / GUIDE_CURVE_SAMPLES as f32;
                common::quadratic_bezier(start, elbow, end, t)
            })
            .collect();

        vec![
            GuideLine { points: curve },
            GuideLine::segment(start, elbow),
            GuideLine::segment(elbow, end),
        ]
    }

    pub(crate) fn control_markers(&self) -> Vec<ControlMarker> {
        let mut markers = Vec::with_capacity(3);
        if let Some(position) = self.start {
            markers.push(ControlMarker {
                position,
                role: ControlRole::Start,
            });
        }
        if let Some(position) = self.elbow {
            markers.push(ControlMarker {
                position,
                role: ControlRole::Elbow,
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

//! Kreis-Modus: erster Klick setzt den Mittelpunkt, die Zeiger-Distanz
//! definiert den Radius, der zweite Klick platziert.
//!
//! Der Mittelpunkt bleibt nach einer Platzierung erhalten, damit sofort
//! ein neuer Radius (konzentrischer Ring) gewählt werden kann.

use super::common::{self, PathTopology};
use crate::app::spacing::{self, SpacingConfig};
use crate::core::{ControlRole, HeightSampler, PointData};
use crate::shared::options::{GUIDE_CIRCLE_SAMPLES, LENGTH_EPSILON};
use crate::shared::{ControlMarker, GuideLine, MeasureValue, TooltipInfo};
use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, TAU};

/// Zustand des Kreis-Modus.
#[derive(Debug, Clone, Default)]
pub struct CircleMode {
    /// Kreis-Mittelpunkt (1. Klick)
    pub(crate) center: Option<Vec2>,
    /// Radius-Punkt — nur gesetzt in fixierter Vorschau oder per Drag
    pub(crate) radius_point: Option<Vec2>,
    /// Mittelpunkt der letzten Platzierung (für Verkettung)
    pub(crate) last_endpoint: Option<Vec2>,
}

impl CircleMode {
    pub(crate) fn has_start(&self) -> bool {
        self.center.is_some()
    }

    /// Mittelpunkt gesetzt — der nächste Klick platziert.
    pub(crate) fn ready_to_commit(&self) -> bool {
        self.center.is_some()
    }

    /// Klick verarbeiten: 1. Mittelpunkt, 2. platziert (Radius aus Distanz).
    pub(crate) fn handle_click(&mut self, pos: Vec2) -> bool {
        if self.center.is_none() {
            self.center = Some(pos);
            false
        } else {
            self.radius_point = Some(pos);
            true
        }
    }

    pub(crate) fn handle_drag(&mut self, role: ControlRole, pos: Vec2) {
        match role {
            ControlRole::Center => self.center = Some(pos),
            ControlRole::Radius => self.radius_point = Some(pos),
            _ => {}
        }
    }

    pub(crate) fn check_drag_hit(&self, pos: Vec2, pick_radius: f32) -> Option<ControlRole> {
        let mut candidates = Vec::with_capacity(2);
        if let Some(center) = self.center {
            candidates.push((ControlRole::Center, center.distance(pos)));
        }
        if let Some(radius_point) = self.radius_point {
            candidates.push((ControlRole::Radius, radius_point.distance(pos)));
        }
        common::closest_target(&candidates, pick_radius)
    }

    pub(crate) fn freeze_terminal(&mut self, pos: Vec2) {
        self.radius_point = Some(pos);
    }

    pub(crate) fn terminal_or(&self, pointer: Option<Vec2>) -> Option<Vec2> {
        self.radius_point.or(pointer)
    }

    /// Hook nach erfolgreichem Platzierungs-Klick.
    ///
    /// Der Kreis rückt seinen Start bewusst nicht weiter: der Mittelpunkt
    /// bleibt als Anker erhalten (Rückgabe `true`).
    pub(crate) fn items_placed(&mut self, _commit_pos: Vec2) -> bool {
        self.last_endpoint = self.center;
        true
    }

    pub(crate) fn reset(&mut self, continuation: bool) {
        self.center = if continuation { self.last_endpoint } else { None };
        self.radius_point = None;
    }

    pub(crate) fn calculate_points(
        &self,
        terminal: Vec2,
        config: &SpacingConfig,
        sampler: &dyn HeightSampler,
        points: &mut Vec<PointData>,
        tooltips: &mut Vec<TooltipInfo>,
    ) {
        let Some(center) = self.center else {
            return;
        };
        let radius_point = self.radius_point.unwrap_or(terminal);
        let radial = radius_point - center;
        let radius = radial.length();
        if radius < LENGTH_EPSILON {
            return;
        }
        let circumference = TAU * radius;
        let base_angle = radial.y.atan2(radial.x);

        let plan = spacing::plan_closed_loop(config, circumference);
        common::materialize_points(
            &plan,
            circumference,
            PathTopology::Closed,
            config,
            sampler,
            |offset| {
                let angle = base_angle + offset / radius;
                let ground = center + radius * Vec2::from_angle(angle);
                let tangent = Vec2::from_angle(angle + FRAC_PI_2);
                (ground, tangent)
            },
            points,
        );

        let radial_dir = radial / radius;
        tooltips.push(TooltipInfo {
            anchor: center + radial * 0.5,
            direction: radial_dir,
            label: "Radius",
            value: MeasureValue::Distance(radius),
        });
        tooltips.push(TooltipInfo {
            anchor: radius_point,
            direction: Vec2::from_angle(base_angle + FRAC_PI_2),
            label: "Abstand",
            value: MeasureValue::Distance(plan.effective_spacing),
        });
        if !plan.offsets.is_empty() {
            let segment_angle = 360.0 / plan.offsets.len() as f32;
            tooltips.push(TooltipInfo {
                anchor: center,
                direction: radial_dir,
                label: "Winkel",
                value: MeasureValue::Angle(segment_angle),
            });
        }
    }

    pub(crate) fn guide_lines(&self, terminal: Vec2) -> Vec<GuideLine> {
        let Some(center) = self.center else {
            return Vec::new();
        };
        let radius_point = self.radius_point.unwrap_or(terminal);
        let radial = radius_point - center;
        let radius = radial.length();
        if radius < LENGTH_EPSILON {
            return Vec::new();
        }
        let base_angle = radial.y.atan2(radial.x);

        let ring = (0..=GUIDE_CIRCLE_SAMPLES)
            .map(|i| {
                let angle = base_angle + TAU * i as f32 / GUIDE_CIRCLE_SAMPLES as f32;
                center + radius * Vec2::from_angle(angle)
            })
            .collect();

        vec![
            GuideLine { points: ring },
            GuideLine::segment(center, radius_point),
        ]
    }

    pub(crate) fn control_markers(&self) -> Vec<ControlMarker> {
        let mut markers = Vec::with_capacity(2);
        if let Some(position) = self.center {
            markers.push(ControlMarker {
                position,
                role: ControlRole::Center,
            });
        }
        if let Some(position) = self.radius_point {
            markers.push(ControlMarker {
                position,
                role: ControlRole::Radius,
            });
        }
        markers
    }
}

#[cfg(test)]
mod tests;

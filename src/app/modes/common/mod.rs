//! Gemeinsame Hilfsfunktionen für Pfad-Modi.
//!
//! Aufgeteilt in:
//! - `geometry`    — rein-mathematische Funktionen (Bézier, Arc-Length-LUT)
//! - Materialisierung der Platzierungspunkte aus einem Abstands-Plan

mod geometry;

pub(crate) use geometry::{quadratic_bezier, quadratic_bezier_tangent, ArcLengthLut};

use crate::app::spacing::jitter::{
    position_seed, rand_range, SALT_OFFSET, SALT_ROTATION, SALT_SPACING,
};
use crate::app::spacing::{SpacingConfig, SpacingPlan};
use crate::core::{yaw_deg, HeightSampler, PointData};
use crate::shared::options::LENGTH_EPSILON;
use crate::shared::RotationMode;
use glam::Vec2;

/// Topologie des Pfads — steuert Rand-Behandlung der Abstands-Streuung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PathTopology {
    /// Offener Pfad (Strecke, Kurve): Streuung wird auf [0, Länge] geclampt
    Open,
    /// Geschlossener Kreis: Streuung wickelt um den Umfang
    Closed,
}

/// Hit-Test-Auswahl: nächstgelegener Kandidat innerhalb des Pick-Radius.
///
/// Deterministischer Tie-Break wenn mehrere Punkte in Reichweite sind.
pub(crate) fn closest_target<T: Copy>(candidates: &[(T, f32)], pick_radius: f32) -> Option<T> {
    candidates
        .iter()
        .filter(|(_, dist)| *dist <= pick_radius)
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(target, _)| *target)
}

/// Materialisiert die Platzierungspunkte eines Abstands-Plans.
///
/// `eval` liefert pro Bogenlängen-Offset die Bodenposition und die
/// normalisierte Tangente. Pro Punkt werden angewandt:
/// Abstands-Streuung (Seed = unverschobene Schritt-Position), seitliche
/// Verschiebung senkrecht zur Tangente (Seed = verschobene Position),
/// Rotations-Regel (fester Offset zur Tangente oder Zufall aus der
/// finalen Position) und Terrainhöhe.
pub(crate) fn materialize_points(
    plan: &SpacingPlan,
    length: f32,
    topology: PathTopology,
    config: &SpacingConfig,
    sampler: &dyn HeightSampler,
    eval: impl Fn(f32) -> (Vec2, Vec2),
    out: &mut Vec<PointData>,
) {
    out.reserve(plan.offsets.len());

    for &base in &plan.offsets {
        let mut offset = base;

        // Start (und bei offenen Pfaden das exakte Ende) bleiben verankert
        let perturbable = base > LENGTH_EPSILON
            && (topology == PathTopology::Closed || base < length - LENGTH_EPSILON);
        if config.random_spacing > 0.0 && perturbable {
            let (anchor, _) = eval(base);
            let shift = rand_range(
                position_seed(anchor),
                SALT_SPACING,
                -config.random_spacing,
                config.random_spacing,
            );
            offset = match topology {
                PathTopology::Open => (base + shift).clamp(0.0, length),
                PathTopology::Closed => (base + shift).rem_euclid(length),
            };
        }

        let (mut ground, tangent) = eval(offset);

        if config.random_offset > 0.0 {
            let lateral = rand_range(
                position_seed(ground),
                SALT_OFFSET,
                -config.random_offset,
                config.random_offset,
            );
            let perp = Vec2::new(-tangent.y, tangent.x);
            ground += perp * lateral;
        }

        let rotation = match config.rotation {
            RotationMode::Fixed(deg) => yaw_deg(tangent) + deg,
            RotationMode::Random => {
                rand_range(position_seed(ground), SALT_ROTATION, 0.0, 360.0)
            }
        };

        let height = sampler.sample_height(ground.x, ground.y);
        out.push(PointData::new(ground, height, rotation));
    }
}

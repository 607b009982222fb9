use super::jitter::{position_seed, rand_range, rand_unit, SALT_OFFSET, SALT_SPACING};
use super::{plan_closed_loop, plan_open_path, SpacingConfig};
use crate::core::ObjectFootprint;
use crate::shared::SpacingPolicy;
use approx::assert_relative_eq;
use glam::Vec2;
use std::f32::consts::TAU;

// ── Offene Pfade ─────────────────────────────────────────────

#[test]
fn test_manual_spacing_excludes_endpoint() {
    // Länge 100, Abstand 20 → Offsets 0, 20, 40, 60, 80 (Endpunkt frei)
    let plan = plan_open_path(&SpacingConfig::manual(20.0), 100.0);
    assert_eq!(plan.offsets, vec![0.0, 20.0, 40.0, 60.0, 80.0]);
    assert_relative_eq!(plan.effective_spacing, 20.0);
}

#[test]
fn test_manual_spacing_last_segment_shorter_never_longer() {
    let plan = plan_open_path(&SpacingConfig::manual(20.0), 95.0);
    assert_eq!(plan.offsets.len(), 5);
    for pair in plan.offsets.windows(2) {
        assert_relative_eq!(pair[1] - pair[0], 20.0, epsilon = 1e-4);
    }
    // Restsegment 95 − 80 = 15 < 20
    assert!(95.0 - plan.offsets.last().unwrap() < 20.0);
}

#[test]
fn test_manual_spacing_floors_to_footprint() {
    let mut config = SpacingConfig::manual(3.0);
    config.footprint = ObjectFootprint::new(8.0, 4.0);
    let plan = plan_open_path(&config, 40.0);
    assert_relative_eq!(plan.effective_spacing, 8.0);
}

#[test]
fn test_fence_mode_forces_length_extent() {
    // Objekt-Länge 8, gewünschter Abstand 3 → erzwungen 8
    let mut config = SpacingConfig::manual(3.0);
    config.policy = SpacingPolicy::FenceMode;
    config.footprint = ObjectFootprint::new(8.0, 4.0);
    let plan = plan_open_path(&config, 40.0);
    assert_relative_eq!(plan.effective_spacing, 8.0);
}

#[test]
fn test_wall_mode_forces_width_extent() {
    let mut config = SpacingConfig::manual(3.0);
    config.policy = SpacingPolicy::WallMode;
    config.footprint = ObjectFootprint::new(8.0, 4.0);
    let plan = plan_open_path(&config, 40.0);
    assert_relative_eq!(plan.effective_spacing, 4.0);
}

#[test]
fn test_full_length_integral_segments() {
    // Länge 95, Wunsch 20 → round(4.75) = 5 Segmente,
    // effektiv 19.0, genau 6 Punkte inklusive beider Enden
    let mut config = SpacingConfig::manual(20.0);
    config.policy = SpacingPolicy::FullLength;
    let plan = plan_open_path(&config, 95.0);
    assert_relative_eq!(plan.effective_spacing, 19.0);
    assert_eq!(plan.offsets.len(), 6);
    assert_relative_eq!(*plan.offsets.last().unwrap(), 95.0, epsilon = 1e-3);
}

#[test]
fn test_full_length_spacing_divides_length() {
    let mut config = SpacingConfig::manual(7.3);
    config.policy = SpacingPolicy::FullLength;
    for &length in &[10.0f32, 33.3, 95.0, 120.7, 400.0] {
        let plan = plan_open_path(&config, length);
        let segments = length / plan.effective_spacing;
        assert_relative_eq!(segments, segments.round(), epsilon = 1e-3);
    }
}

#[test]
fn test_full_length_nearest_not_always_up() {
    // Länge 41, Wunsch 20 → round(2.05) = 2 Segmente, effektiv 20.5 > Wunsch
    let mut config = SpacingConfig::manual(20.0);
    config.policy = SpacingPolicy::FullLength;
    let plan = plan_open_path(&config, 41.0);
    assert_relative_eq!(plan.effective_spacing, 20.5);
}

#[test]
fn test_full_length_clamps_to_one_segment() {
    let mut config = SpacingConfig::manual(50.0);
    config.policy = SpacingPolicy::FullLength;
    let plan = plan_open_path(&config, 10.0);
    assert_eq!(plan.offsets.len(), 2);
    assert_relative_eq!(plan.effective_spacing, 10.0);
}

#[test]
fn test_zero_length_path_yields_empty_plan() {
    let plan = plan_open_path(&SpacingConfig::manual(5.0), 0.0);
    assert!(plan.offsets.is_empty());
}

// ── Geschlossener Kreis ──────────────────────────────────────

#[test]
fn test_circle_count_rounds_up() {
    // Radius 50, Abstand 20 → ceil(2π·50/20) = 16 Punkte
    let circumference = TAU * 50.0;
    let plan = plan_closed_loop(&SpacingConfig::manual(20.0), circumference);
    assert_eq!(plan.offsets.len(), 16);
    // Letzter Punkt strikt vor der vollen Umdrehung
    assert!(*plan.offsets.last().unwrap() < circumference - 1e-3);
}

#[test]
fn test_circle_effective_never_exceeds_requested() {
    for &radius in &[3.0f32, 10.0, 50.0, 123.4] {
        for &spacing in &[1.5f32, 7.0, 20.0] {
            let plan = plan_closed_loop(&SpacingConfig::manual(spacing), TAU * radius);
            assert!(
                plan.effective_spacing <= spacing + 1e-4,
                "Radius {radius}, Wunsch {spacing}: effektiv {}",
                plan.effective_spacing
            );
        }
    }
}

#[test]
fn test_circle_count_times_spacing_is_circumference() {
    let circumference = TAU * 42.0;
    let plan = plan_closed_loop(&SpacingConfig::manual(9.0), circumference);
    let total = plan.offsets.len() as f32 * plan.effective_spacing;
    assert_relative_eq!(total, circumference, epsilon = 1e-2);
}

#[test]
fn test_circle_full_length_rounds_nearest() {
    // Umfang 41 → round(41/20) = 2 Punkte, effektiv 20.5 > Wunsch:
    // FullLength rundet am Kreis zur nächsten Anzahl, nicht immer auf
    let mut config = SpacingConfig::manual(20.0);
    config.policy = SpacingPolicy::FullLength;
    let plan = plan_closed_loop(&config, 41.0);
    assert_eq!(plan.offsets.len(), 2);
    assert_relative_eq!(plan.effective_spacing, 20.5);
}

#[test]
fn test_circle_zero_radius_yields_empty_plan() {
    let plan = plan_closed_loop(&SpacingConfig::manual(5.0), 0.0);
    assert!(plan.offsets.is_empty());
}

// ── Deterministische Streuung ────────────────────────────────

#[test]
fn test_jitter_stable_for_same_position() {
    let p = Vec2::new(17.25, -302.5);
    let a = rand_range(position_seed(p), SALT_SPACING, -2.0, 2.0);
    let b = rand_range(position_seed(p), SALT_SPACING, -2.0, 2.0);
    assert_eq!(a, b);
}

#[test]
fn test_jitter_differs_between_salts() {
    let seed = position_seed(Vec2::new(5.0, 5.0));
    assert_ne!(rand_unit(seed, SALT_SPACING), rand_unit(seed, SALT_OFFSET));
}

#[test]
fn test_rand_unit_in_half_open_range() {
    for i in 0..256u32 {
        let v = rand_unit(i.wrapping_mul(2654435761), SALT_SPACING);
        assert!((0.0..1.0).contains(&v));
    }
}

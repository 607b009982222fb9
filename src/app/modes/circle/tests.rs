use super::CircleMode;
use crate::app::spacing::SpacingConfig;
use crate::core::{ControlRole, FlatGround};
use crate::shared::SpacingPolicy;
use approx::assert_relative_eq;
use glam::Vec2;
use std::f32::consts::TAU;

fn calculate(
    mode: &CircleMode,
    terminal: Vec2,
    config: &SpacingConfig,
) -> Vec<crate::core::PointData> {
    let mut points = Vec::new();
    let mut tooltips = Vec::new();
    mode.calculate_points(terminal, config, &FlatGround(0.0), &mut points, &mut tooltips);
    points
}

// ── Klick-Flow ───────────────────────────────────────────────

#[test]
fn test_click_flow_two_clicks_commit() {
    let mut mode = CircleMode::default();
    assert!(!mode.handle_click(Vec2::ZERO));
    assert!(mode.ready_to_commit());
    assert!(mode.handle_click(Vec2::new(50.0, 0.0)));
}

#[test]
fn test_center_survives_placement() {
    // Nach der Platzierung bleibt der Mittelpunkt als Anker erhalten —
    // der nächste Radius ergibt einen konzentrischen Ring.
    let mut mode = CircleMode::default();
    mode.handle_click(Vec2::new(10.0, 20.0));
    mode.handle_click(Vec2::new(60.0, 20.0));
    let keep = mode.items_placed(Vec2::new(60.0, 20.0));
    assert!(keep);
    mode.reset(keep);
    assert_eq!(mode.center, Some(Vec2::new(10.0, 20.0)));
    assert_eq!(mode.radius_point, None);
}

#[test]
fn test_reset_without_continuation_clears_center() {
    let mut mode = CircleMode::default();
    mode.handle_click(Vec2::new(10.0, 20.0));
    mode.reset(false);
    assert!(!mode.has_start());
}

// ── Punkt-Generierung ────────────────────────────────────────

#[test]
fn test_endtoend_ring_point_count() {
    // Radius 50, Abstand 20 → Umfang ≈ 314,16 m,
    // aufgerundet auf 16 gleichmäßig verteilte Punkte
    let mut mode = CircleMode::default();
    mode.handle_click(Vec2::ZERO);

    let points = calculate(&mode, Vec2::new(50.0, 0.0), &SpacingConfig::manual(20.0));
    assert_eq!(points.len(), 16);
    for point in &points {
        assert_relative_eq!(point.ground().length(), 50.0, epsilon = 1e-2);
    }
}

#[test]
fn test_first_point_sits_on_radius_point() {
    let mut mode = CircleMode::default();
    mode.handle_click(Vec2::new(5.0, -3.0));

    let points = calculate(&mode, Vec2::new(5.0, 27.0), &SpacingConfig::manual(10.0));
    assert!(!points.is_empty());
    assert_relative_eq!(points[0].position.x, 5.0, epsilon = 1e-3);
    assert_relative_eq!(points[0].position.z, 27.0, epsilon = 1e-3);
}

#[test]
fn test_no_duplicate_at_full_revolution() {
    let mut mode = CircleMode::default();
    mode.handle_click(Vec2::ZERO);

    let points = calculate(&mode, Vec2::new(50.0, 0.0), &SpacingConfig::manual(20.0));
    let first = points.first().unwrap().ground();
    let last = points.last().unwrap().ground();
    assert!(first.distance(last) > 1.0);
}

#[test]
fn test_ring_spacing_is_uniform() {
    let mut mode = CircleMode::default();
    mode.handle_click(Vec2::ZERO);

    let points = calculate(&mode, Vec2::new(30.0, 0.0), &SpacingConfig::manual(7.0));
    let expected_chord = points[0].ground().distance(points[1].ground());
    for (i, point) in points.iter().enumerate() {
        let next = &points[(i + 1) % points.len()];
        let chord = point.ground().distance(next.ground());
        assert_relative_eq!(chord, expected_chord, epsilon = 1e-2);
    }
}

#[test]
fn test_effective_spacing_never_exceeds_requested() {
    let mut mode = CircleMode::default();
    mode.handle_click(Vec2::ZERO);

    for radius in [7.0f32, 13.0, 25.0, 50.0, 120.0] {
        let points = calculate(&mode, Vec2::new(radius, 0.0), &SpacingConfig::manual(9.0));
        let circumference = TAU * radius;
        let effective = circumference / points.len() as f32;
        assert!(
            effective <= 9.0 + 1e-3,
            "r = {radius}: effektiv {effective} > 9.0"
        );
    }
}

#[test]
fn test_full_length_rounds_to_nearest_count() {
    let mut mode = CircleMode::default();
    mode.handle_click(Vec2::ZERO);

    let mut config = SpacingConfig::manual(20.0);
    config.policy = SpacingPolicy::FullLength;
    // Umfang ≈ 314,16, 314,16 / 20 = 15,7 → 16 Punkte auch hier
    let points = calculate(&mode, Vec2::new(50.0, 0.0), &config);
    assert_eq!(points.len(), 16);
}

#[test]
fn test_zero_radius_yields_no_points() {
    let mut mode = CircleMode::default();
    mode.handle_click(Vec2::new(4.0, 4.0));
    let points = calculate(&mode, Vec2::new(4.0, 4.0), &SpacingConfig::manual(5.0));
    assert!(points.is_empty());
}

#[test]
fn test_rotation_follows_ring_tangent() {
    let mut mode = CircleMode::default();
    mode.handle_click(Vec2::ZERO);

    let points = calculate(&mode, Vec2::new(50.0, 0.0), &SpacingConfig::manual(20.0));
    // Am Radius-Punkt (+X vom Zentrum) zeigt die Tangente in +Z → 90°
    assert_relative_eq!(points[0].rotation_deg, 90.0, epsilon = 1e-2);
}

// ── Drag ─────────────────────────────────────────────────────

#[test]
fn test_drag_center_translates_ring() {
    let mut mode = CircleMode::default();
    mode.handle_click(Vec2::ZERO);
    mode.freeze_terminal(Vec2::new(20.0, 0.0));

    mode.handle_drag(ControlRole::Center, Vec2::new(100.0, 0.0));
    let points = calculate(&mode, Vec2::ZERO, &SpacingConfig::manual(10.0));
    // Radius jetzt 80, alle Punkte um den neuen Mittelpunkt
    for point in &points {
        let dist = point.ground().distance(Vec2::new(100.0, 0.0));
        assert_relative_eq!(dist, 80.0, epsilon = 1e-2);
    }
}

#[test]
fn test_drag_hit_prefers_closer_role() {
    let mut mode = CircleMode::default();
    mode.handle_click(Vec2::ZERO);
    mode.freeze_terminal(Vec2::new(4.0, 0.0));

    assert_eq!(
        mode.check_drag_hit(Vec2::new(1.0, 0.0), 3.0),
        Some(ControlRole::Center)
    );
    assert_eq!(
        mode.check_drag_hit(Vec2::new(3.5, 0.0), 3.0),
        Some(ControlRole::Radius)
    );
}

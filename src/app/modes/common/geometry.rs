//! Rein-mathematische Kurven-Helfer: quadratische Bézier und
//! Arc-Length-Parametrisierung.

use glam::Vec2;

/// B(t) = (1-t)²·P0 + 2(1-t)t·P1 + t²·P2
pub fn quadratic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    inv * inv * p0 + 2.0 * inv * t * p1 + t * t * p2
}

/// B'(t) = 2(1-t)·(P1−P0) + 2t·(P2−P1), normalisiert.
///
/// Degeneriert die Ableitung (z.B. P0 = P1 = P2), fällt die Richtung auf
/// die Sehne P0→P2 zurück.
pub fn quadratic_bezier_tangent(p0: Vec2, p1: Vec2, p2: Vec2, t: f32) -> Vec2 {
    let derivative = 2.0 * (1.0 - t) * (p1 - p0) + 2.0 * t * (p2 - p1);
    if derivative.length_squared() > f32::EPSILON {
        derivative.normalize()
    } else {
        (p2 - p0).normalize_or(Vec2::X)
    }
}

/// Arc-Length-Lookup-Tabelle: Bogenlängen-Offset → Kurvenparameter t.
///
/// Kumulierte Sehnenlängen an `samples + 1` gleichverteilten t-Werten;
/// die Rückabbildung interpoliert linear zwischen den Stützstellen.
pub struct ArcLengthLut {
    lengths: Vec<f32>,
    samples: usize,
}

impl ArcLengthLut {
    /// Baut die LUT für eine parametrische Kurve über t ∈ [0, 1].
    pub fn build(eval: impl Fn(f32) -> Vec2, samples: usize) -> Self {
        let mut lengths = Vec::with_capacity(samples + 1);
        let mut prev = eval(0.0);
        let mut cumulative = 0.0f32;
        lengths.push(0.0f32);
        for i in 1..=samples {
            let t = i as f32 / samples as f32;
            let p = eval(t);
            cumulative += prev.distance(p);
            lengths.push(cumulative);
            prev = p;
        }
        Self { lengths, samples }
    }

    /// Gesamte Bogenlänge der Kurve.
    pub fn total_length(&self) -> f32 {
        *self.lengths.last().unwrap_or(&0.0)
    }

    /// Kurvenparameter t für einen Bogenlängen-Offset (geclampt auf [0, 1]).
    pub fn t_at_length(&self, target_length: f32) -> f32 {
        if target_length <= 0.0 {
            return 0.0;
        }
        if target_length >= self.total_length() {
            return 1.0;
        }

        let idx = self
            .lengths
            .partition_point(|&len| len < target_length)
            .min(self.samples)
            .max(1);

        let len_before = self.lengths[idx - 1];
        let len_after = self.lengths[idx];
        let frac = if (len_after - len_before).abs() > f32::EPSILON {
            (target_length - len_before) / (len_after - len_before)
        } else {
            0.0
        };

        ((idx - 1) as f32 + frac) / self.samples as f32
    }
}

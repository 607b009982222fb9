//! Deterministische Zufallsstreuung, geseedet aus Punkt-Positionen.
//!
//! Vorschau und finale Platzierung müssen bei unveränderten Eingaben über
//! Frames hinweg stabil bleiben — deshalb kein globaler RNG-Zustand,
//! sondern ein Positions-Hash durch einen splitmix32-Mixer.

use glam::Vec2;

/// Salt für die Abstands-Streuung entlang des Pfads.
pub(crate) const SALT_SPACING: u32 = 0x51;
/// Salt für die seitliche Verschiebung quer zum Pfad.
pub(crate) const SALT_OFFSET: u32 = 0x0F;
/// Salt für die Zufallsrotation pro Punkt.
pub(crate) const SALT_ROTATION: u32 = 0xA7;

/// splitmix32-Mixer: ein Durchlauf der Finalisierungsfunktion.
pub(crate) fn splitmix32(mut value: u32) -> u32 {
    value = value.wrapping_add(0x9E37_79B9);
    let mut z = value;
    z = (z ^ (z >> 16)).wrapping_mul(0x85EB_CA6B);
    z = (z ^ (z >> 13)).wrapping_mul(0xC2B2_AE35);
    z ^ (z >> 16)
}

/// Seed aus einer Bodenposition (bit-exakt, gleiche Position → gleicher Seed).
pub(crate) fn position_seed(p: Vec2) -> u32 {
    splitmix32(p.x.to_bits() ^ p.y.to_bits().rotate_left(16))
}

/// Gleichverteilter Wert in [0, 1).
pub(crate) fn rand_unit(seed: u32, salt: u32) -> f32 {
    let mixed = splitmix32(seed ^ salt);
    let top = mixed >> 8;
    top as f32 / ((1u32 << 24) as f32)
}

/// Gleichverteilter Wert in [min, max).
pub(crate) fn rand_range(seed: u32, salt: u32, min: f32, max: f32) -> f32 {
    min + (max - min) * rand_unit(seed, salt)
}

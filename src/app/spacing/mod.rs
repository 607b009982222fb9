//! Abstands-Engine: leitet aus Pfadlänge und Abstands-Regel die geordneten
//! Bogenlängen-Offsets der Platzierungspunkte ab.
//!
//! Offene Pfade (Strecke, Kurve) laufen vom Start in Schritten des
//! effektiven Abstands bis die Länge erschöpft ist; der Kreis verteilt
//! eine ganze Punkt-Anzahl über den Umfang und platziert nie einen Punkt
//! hinter der vollen Umdrehung.

pub(crate) mod jitter;

use crate::core::ObjectFootprint;
use crate::shared::options::{LENGTH_EPSILON, MIN_EFFECTIVE_SPACING};
use crate::shared::{RotationMode, SpacingPolicy};

/// Vollständige Abstands-Konfiguration eines Neuberechnungs-Schritts.
///
/// Wird pro Tick aus den Session-Optionen und dem aktuellen
/// Objekt-Footprint zusammengesetzt; die Engine liest sie nur.
#[derive(Debug, Clone, Copy)]
pub struct SpacingConfig {
    /// Abstands-Regel
    pub policy: SpacingPolicy,
    /// Gewünschter Abstand (Meter)
    pub spacing: f32,
    /// Rotations-Regel
    pub rotation: RotationMode,
    /// Amplitude der Abstands-Streuung (Meter, ≥ 0)
    pub random_spacing: f32,
    /// Amplitude der seitlichen Verschiebung (Meter, ≥ 0)
    pub random_offset: f32,
    /// Bounding-Ausdehnung des gewählten Objekts
    pub footprint: ObjectFootprint,
}

impl SpacingConfig {
    /// Einfache Konfiguration für Tests: Manual-Abstand ohne Streuung.
    pub fn manual(spacing: f32) -> Self {
        Self {
            policy: SpacingPolicy::Manual,
            spacing,
            rotation: RotationMode::Fixed(0.0),
            random_spacing: 0.0,
            random_offset: 0.0,
            footprint: ObjectFootprint::default(),
        }
    }
}

/// Ergebnis der Abstands-Planung für einen Pfad.
#[derive(Debug, Clone, PartialEq)]
pub struct SpacingPlan {
    /// Tatsächlich verwendeter Abstand zwischen den Punkten
    pub effective_spacing: f32,
    /// Geordnete Bogenlängen-Offsets ab Pfad-Start
    pub offsets: Vec<f32>,
}

impl SpacingPlan {
    fn empty() -> Self {
        Self {
            effective_spacing: 0.0,
            offsets: Vec::new(),
        }
    }
}

/// Effektiver Basis-Abstand für offene Pfade.
///
/// Manual wird auf den Objekt-Footprint längs der Pfadrichtung
/// aufgerundet (verhindert Platzierungen dichter als die eigene
/// Ausdehnung); Fence/Wall erzwingen den jeweiligen Footprint-Wert.
fn base_spacing(config: &SpacingConfig) -> f32 {
    let spacing = match config.policy {
        SpacingPolicy::Manual => config.spacing.max(config.footprint.length_extent),
        SpacingPolicy::FenceMode => config.footprint.length_extent,
        SpacingPolicy::WallMode => config.footprint.width_extent,
        SpacingPolicy::FullLength => config.spacing,
    };
    spacing.max(MIN_EFFECTIVE_SPACING)
}

/// Plant die Offsets für einen offenen Pfad (Strecke, Kurve).
///
/// - `FullLength`: Abstand = Länge / round(Länge / Wunsch), mindestens ein
///   Segment — liefert genau `Segmente + 1` Punkte inklusive beider Enden.
/// - Sonst: Schrittweite = effektiver Abstand, gelaufen wird solange
///   `offset < Länge` (das letzte Segment darf kürzer sein, nie länger;
///   der Endpunkt selbst wird nicht belegt).
pub fn plan_open_path(config: &SpacingConfig, length: f32) -> SpacingPlan {
    if length < LENGTH_EPSILON {
        return SpacingPlan::empty();
    }

    match config.policy {
        SpacingPolicy::FullLength => {
            let segments = (length / base_spacing(config)).round().max(1.0);
            let effective = length / segments;
            let count = segments as usize;
            let offsets = (0..=count).map(|i| i as f32 * effective).collect();
            SpacingPlan {
                effective_spacing: effective,
                offsets,
            }
        }
        _ => {
            let effective = base_spacing(config);
            let mut offsets = Vec::new();
            let mut offset = 0.0f32;
            while offset < length - LENGTH_EPSILON {
                offsets.push(offset);
                offset += effective;
            }
            SpacingPlan {
                effective_spacing: effective,
                offsets,
            }
        }
    }
}

/// Plant die Offsets für einen geschlossenen Kreis-Pfad.
///
/// Die Punkt-Anzahl wird so gerundet, dass eine ganzzahlige Segment-Anzahl
/// den Umfang füllt. Rundungsrichtung nach Regel:
/// - `FullLength`: nächstgelegene Anzahl (wie bei offenen Pfaden),
/// - sonst: **aufgerundet** (`ceil`) — der effektive Abstand überschreitet
///   den gewünschten nie; Unterdichte wirkt auf einem geschlossenen Ring
///   schlechter als leichte Überdichte.
///
/// Liefert genau `Anzahl` Offsets; der Start-Winkel wird nie doppelt
/// belegt (kein Punkt nach der vollen Umdrehung).
pub fn plan_closed_loop(config: &SpacingConfig, circumference: f32) -> SpacingPlan {
    if circumference < LENGTH_EPSILON {
        return SpacingPlan::empty();
    }

    let base = base_spacing(config);
    let count = match config.policy {
        SpacingPolicy::FullLength => (circumference / base).round().max(1.0) as usize,
        _ => (circumference / base).ceil().max(1.0) as usize,
    };
    let effective = circumference / count as f32;
    let offsets = (0..count).map(|i| i as f32 * effective).collect();

    SpacingPlan {
        effective_spacing: effective,
        offsets,
    }
}

#[cfg(test)]
mod tests;

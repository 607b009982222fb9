//! Zentrale Konfiguration für das Line-Placement-Tool.
//!
//! `PlacementOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ── Interaktion ─────────────────────────────────────────────────────

/// Pick-Radius (Welteinheiten): Klick innerhalb dieses Radius greift einen Kontrollpunkt.
pub const DRAG_PICK_RADIUS: f32 = 3.0;

// ── Geometrie ───────────────────────────────────────────────────────

/// Sample-Anzahl der Arc-Length-LUT (Offset → Kurvenparameter).
pub const CURVE_LUT_SAMPLES: usize = 256;
/// Sample-Anzahl für die Kurven-Guide-Polyline im Overlay.
pub const GUIDE_CURVE_SAMPLES: usize = 48;
/// Sample-Anzahl für die Kreis-Guide-Polyline im Overlay.
pub const GUIDE_CIRCLE_SAMPLES: usize = 64;

/// Längen unterhalb dieses Werts gelten als degeneriert (leere Ausgabe).
pub const LENGTH_EPSILON: f32 = 1e-4;
/// Unterer Schutzwert für den effektiven Abstand (verhindert Endlosschleifen
/// bei Footprint 0 und Abstand ~0).
pub const MIN_EFFECTIVE_SPACING: f32 = 0.01;

// ── Defaults ────────────────────────────────────────────────────────

/// Standard-Abstand zwischen platzierten Objekten (Meter).
pub const DEFAULT_SPACING: f32 = 10.0;
/// Standard-Wuchsstufe für Bäume, wenn kein `GrowthStateProvider` injiziert ist.
pub const DEFAULT_GROWTH_STATE: u8 = 0;

// ── Auswahl-Enums (UI-seitig gesetzt, serialisierbar) ───────────────

/// Regel für den effektiven Abstand zwischen platzierten Punkten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpacingPolicy {
    /// Fester, vom User konfigurierter Abstand (mindestens Objekt-Footprint)
    #[default]
    Manual,
    /// Abstand = Objekt-Länge — Objekte berühren sich Stirn an Stirn ("Zaun")
    FenceMode,
    /// Abstand = Objekt-Breite — Objekte berühren sich Seite an Seite ("Mauer")
    WallMode,
    /// Abstand so gewählt, dass eine ganze Segment-Anzahl die Pfadlänge füllt
    FullLength,
}

/// Rotations-Regel für platzierte Objekte.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RotationMode {
    /// Fester Winkel-Offset (Grad) relativ zur Pfad-Tangente
    Fixed(f32),
    /// Zufallswinkel [0, 360) pro Punkt, deterministisch aus der Punkt-Position
    Random,
}

impl Default for RotationMode {
    fn default() -> Self {
        RotationMode::Fixed(0.0)
    }
}

/// Aktiver Pfad-Modus (Form-Strategie).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PathModeKind {
    /// Gerade Strecke zwischen zwei Punkten
    #[default]
    Straight,
    /// Drei-Punkt-Kurve (quadratische Bézier durch Start/Elbow/End)
    Curve,
    /// Kreis um einen Mittelpunkt mit Radius aus der Zeiger-Distanz
    Circle,
}

// ── Laufzeit-Optionen (serialisierbar) ──────────────────────────────

/// Alle zur Laufzeit änderbaren Tool-Optionen.
/// Wird als `fs25_line_placement.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementOptions {
    /// Gewünschter Abstand zwischen Punkten (Meter)
    pub spacing: f32,
    /// Abstands-Regel
    pub policy: SpacingPolicy,
    /// Rotations-Regel
    pub rotation: RotationMode,
    /// Amplitude der Abstands-Zufallsstreuung (Meter, ≥ 0)
    pub random_spacing: f32,
    /// Amplitude der seitlichen Zufallsverschiebung (Meter, ≥ 0)
    pub random_offset: f32,
    /// Aktiver Pfad-Modus
    pub mode: PathModeKind,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            policy: SpacingPolicy::default(),
            rotation: RotationMode::default(),
            random_spacing: 0.0,
            random_offset: 0.0,
            mode: PathModeKind::default(),
        }
    }
}

impl PlacementOptions {
    /// Lädt Optionen aus einer TOML-Datei.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Optionen nicht lesbar: {}", path.display()))?;
        let options: Self = toml::from_str(&content)
            .with_context(|| format!("Optionen nicht parsebar: {}", path.display()))?;
        Ok(options)
    }

    /// Lädt Optionen, fällt bei Fehlern auf Defaults zurück (mit Log-Warnung).
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(options) => options,
            Err(err) => {
                log::warn!("Optionen nicht geladen ({err:#}), verwende Defaults");
                Self::default()
            }
        }
    }

    /// Speichert die Optionen als TOML-Datei.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Optionen nicht serialisierbar")?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen nicht schreibbar: {}", path.display()))?;
        log::info!("Optionen gespeichert: {}", path.display());
        Ok(())
    }
}

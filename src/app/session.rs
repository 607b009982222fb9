//! Explizite Session: Optionen, Objekt-Footprint, Capabilities.
//!
//! Alles, was die UI zur Laufzeit ändern darf, läuft über Setter, die
//! das Dirty-Flag setzen — der Controller rechnet im nächsten Tick neu.

use crate::app::spacing::SpacingConfig;
use crate::core::{GrowthStateProvider, ObjectFootprint};
use crate::shared::options::{PathModeKind, RotationMode, SpacingPolicy, DEFAULT_GROWTH_STATE};
use crate::shared::PlacementOptions;

/// Laufzeit-Zustand einer Platzierungs-Session.
pub struct PlacementSession {
    options: PlacementOptions,
    footprint: ObjectFootprint,
    growth: Option<Box<dyn GrowthStateProvider>>,
    dirty: bool,
}

impl Default for PlacementSession {
    fn default() -> Self {
        Self::new(PlacementOptions::default())
    }
}

impl PlacementSession {
    /// Erstellt eine Session aus (geladenen) Optionen.
    pub fn new(options: PlacementOptions) -> Self {
        Self {
            options,
            footprint: ObjectFootprint::default(),
            growth: None,
            dirty: true,
        }
    }

    /// Injiziert die optionale Wuchsstufen-Capability.
    pub fn with_growth_provider(mut self, provider: Box<dyn GrowthStateProvider>) -> Self {
        self.growth = Some(provider);
        self
    }

    // ── Lese-Zugriff ────────────────────────────────────────────

    /// Aktuelle Optionen (z. B. zum Speichern).
    pub fn options(&self) -> &PlacementOptions {
        &self.options
    }

    /// Footprint des aktuell gewählten Objekts.
    pub fn footprint(&self) -> ObjectFootprint {
        self.footprint
    }

    /// Aktiver Pfad-Modus laut Optionen.
    pub fn mode_kind(&self) -> PathModeKind {
        self.options.mode
    }

    /// Wuchsstufe für neu platzierte Bäume (Capability oder Default).
    pub fn growth_state(&self) -> u8 {
        self.growth
            .as_ref()
            .map(|p| p.desired_growth_state())
            .unwrap_or(DEFAULT_GROWTH_STATE)
    }

    /// Abstands-Konfiguration für den nächsten Neuberechnungs-Schritt.
    pub fn spacing_config(&self) -> SpacingConfig {
        SpacingConfig {
            policy: self.options.policy,
            spacing: self.options.spacing,
            rotation: self.options.rotation,
            random_spacing: self.options.random_spacing,
            random_offset: self.options.random_offset,
            footprint: self.footprint,
        }
    }

    // ── UI-Setter (markieren die Pipeline dirty) ────────────────

    /// Setzt den gewünschten Abstand (Meter).
    pub fn set_spacing(&mut self, spacing: f32) {
        self.options.spacing = spacing;
        self.dirty = true;
    }

    /// Setzt die Abstands-Regel.
    pub fn set_policy(&mut self, policy: SpacingPolicy) {
        self.options.policy = policy;
        self.dirty = true;
    }

    /// Setzt die Rotations-Regel.
    pub fn set_rotation(&mut self, rotation: RotationMode) {
        self.options.rotation = rotation;
        self.dirty = true;
    }

    /// Setzt die Amplitude der Abstands-Streuung.
    pub fn set_random_spacing(&mut self, amplitude: f32) {
        self.options.random_spacing = amplitude.max(0.0);
        self.dirty = true;
    }

    /// Setzt die Amplitude der seitlichen Verschiebung.
    pub fn set_random_offset(&mut self, amplitude: f32) {
        self.options.random_offset = amplitude.max(0.0);
        self.dirty = true;
    }

    /// Wählt den Pfad-Modus; der Controller wechselt im nächsten Tick.
    pub fn set_mode_kind(&mut self, kind: PathModeKind) {
        self.options.mode = kind;
        self.dirty = true;
    }

    /// Übernimmt den Footprint des neu gewählten Objekts.
    pub fn set_footprint(&mut self, footprint: ObjectFootprint) {
        self.footprint = footprint;
        self.dirty = true;
    }

    /// Konsumiert das Dirty-Flag (einmal pro Tick vom Controller).
    pub(crate) fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

//! Objekt-Footprint, Wuchsstufen-Capability und Platzierungs-Senke.
//!
//! Schmale Verträge zu den externen Kollaborateuren: Prefab-Metadaten
//! liefern den Footprint, der Host instanziiert die eigentlichen
//! Szenen-Objekte.

use crate::core::PointData;

/// Bounding-Ausdehnung des gewählten Objekts entlang seiner Achsen.
///
/// Wird vom Prefab-Metadaten-Kollaborateur geliefert und steuert
/// Fence-/Wall-Abstand sowie den Mindest-Abstand im Manual-Modus.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ObjectFootprint {
    /// Ausdehnung längs der Pfadrichtung (Meter)
    pub length_extent: f32,
    /// Ausdehnung quer zur Pfadrichtung (Meter)
    pub width_extent: f32,
}

impl ObjectFootprint {
    /// Erstellt einen Footprint aus Länge und Breite.
    pub fn new(length_extent: f32, width_extent: f32) -> Self {
        Self {
            length_extent,
            width_extent,
        }
    }
}

/// Optionale Capability: gewünschte Wuchsstufe für Baum-Objekte.
///
/// Wird beim Start von der Kompositionsschicht injiziert; fehlt der
/// Provider, gilt ein fester Default statt eines Laufzeit-Lookups.
pub trait GrowthStateProvider {
    /// Gewünschte Wuchsstufe für neu platzierte Bäume.
    fn desired_growth_state(&self) -> u8;
}

/// Platzierungs-Senke: erhält die finale Punktliste beim Commit.
///
/// Der Host ist für Erzeugen/Zerstören/Hervorheben der eigentlichen
/// Szenen-Objekte verantwortlich; dieser Core erzeugt selbst keine
/// persistenten Objekte.
pub trait PlacementSink {
    /// Platziert die übergebenen Punkte (Reihenfolge = Laufrichtung ab Start).
    fn place(&mut self, points: &[PointData], growth_state: u8);
}

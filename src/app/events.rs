//! Kanten-erkannte Eingabe-Events pro Update-Tick.
//!
//! Der Host detektiert Flanken ("in diesem Tick gedrückt/losgelassen")
//! und reicht sie als geordnete Queue herein — der Controller pollt
//! keinen Geräte-Zustand.

use glam::Vec2;

/// Ein einzelnes Eingabe-Event (bereits flanken-erkannt).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primär-Klick (Apply) in diesem Tick gedrückt
    PrimaryApply,
    /// Modifier + Primär-Klick in diesem Tick gedrückt
    ModifierApply,
    /// Modifier + Primär-Klick in diesem Tick losgelassen
    ModifierRelease,
    /// Abbruch-Aktion in diesem Tick gedrückt
    Cancel,
}

/// Gesamte Eingabe eines Update-Ticks.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Raycast-Treffer des Zeigers auf der Bodenebene (`None` = kein Treffer)
    pub pointer: Option<Vec2>,
    /// Flanken-Events dieses Ticks, in Eingangs-Reihenfolge
    pub events: Vec<InputEvent>,
    /// Verkettungs-Modifier ist in diesem Tick gehalten
    pub continuation_held: bool,
}

impl TickInput {
    /// Tick ohne Events, nur mit Zeigerposition.
    pub fn pointer_at(pointer: Vec2) -> Self {
        Self {
            pointer: Some(pointer),
            ..Self::default()
        }
    }

    /// Hängt ein Event an (Builder-Stil für Hosts und Tests).
    pub fn with_event(mut self, event: InputEvent) -> Self {
        self.events.push(event);
        self
    }

    /// Setzt den Verkettungs-Modifier.
    pub fn with_continuation(mut self) -> Self {
        self.continuation_held = true;
        self
    }
}

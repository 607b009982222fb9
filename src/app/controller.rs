//! Interaktions-Controller: Phasen-Maschine und Tick-Pipeline.
//!
//! Pro Update-Tick: Eingabe-Events → Modus-Mutationen → (bei Änderung)
//! Neuberechnung der Punkte und vollständiger Neuaufbau der
//! Overlay-Szene. Die Neuberechnung ist idempotent und rein in
//! (Kontrollpunkte, Zeiger, Optionen) — das Dirty-Flag ist nur eine
//! Effizienz-Abkürzung, nie Korrektheits-Bedingung.

use crate::app::events::{InputEvent, TickInput};
use crate::app::modes::PathMode;
use crate::app::session::PlacementSession;
use crate::core::{ControlRole, HeightSampler, PlacementSink, PointData};
use crate::shared::{OverlayScene, DRAG_PICK_RADIUS};
use glam::Vec2;

/// Interaktions-Phase des Controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionPhase {
    /// Kein vollständiger Pfad — Klicks setzen Rollen
    #[default]
    Idle,
    /// Alle Pflicht-Rollen gesetzt, Zeiger frei — der nächste Klick platziert
    AwaitingCommit,
    /// Terminal-Punkt eingefroren — Klicks hit-testen zuerst Kontrollpunkte
    FixedPreview,
    /// Ein Kontrollpunkt folgt dem Zeiger
    Dragging(ControlRole),
}

/// Zentrale Tick-Pipeline des Line-Placement-Tools.
#[derive(Default)]
pub struct PlacementController {
    mode: PathMode,
    phase: InteractionPhase,
    points: Vec<PointData>,
    overlay: OverlayScene,
    last_pointer: Option<Vec2>,
    needs_recompute: bool,
}

impl PlacementController {
    /// Erstellt einen Controller im Leerlauf.
    pub fn new() -> Self {
        Self {
            needs_recompute: true,
            ..Self::default()
        }
    }

    /// Aktuelle Interaktions-Phase.
    pub fn phase(&self) -> InteractionPhase {
        self.phase
    }

    /// Aktiver Pfad-Modus (nur lesend, z. B. für die UI-Statuszeile).
    pub fn mode(&self) -> &PathMode {
        &self.mode
    }

    /// Vorschau-Punkte der letzten Neuberechnung.
    pub fn points(&self) -> &[PointData] {
        &self.points
    }

    /// Overlay-Szene der letzten Neuberechnung.
    pub fn overlay(&self) -> &OverlayScene {
        &self.overlay
    }

    /// Verarbeitet einen Update-Tick.
    pub fn tick(
        &mut self,
        session: &mut PlacementSession,
        input: &TickInput,
        sampler: &dyn HeightSampler,
        sink: &mut dyn PlacementSink,
    ) {
        let mut dirty = session.take_dirty();

        // Modus-Wechsel aus den Session-Optionen übernehmen; der letzte
        // Endpunkt wandert als Verkettungs-Anker mit.
        if session.mode_kind() != self.mode.kind() {
            self.mode = self.mode.switch_to(session.mode_kind());
            self.phase = InteractionPhase::Idle;
            dirty = true;
        }

        // Laufender Drag folgt dem Zeiger, unabhängig von Events.
        if let InteractionPhase::Dragging(role) = self.phase {
            if let Some(pointer) = input.pointer {
                self.mode.handle_drag(role, pointer);
                dirty = true;
            }
        }

        // Höchstens ein Commit pro Tick (Schutz gegen Doppel-Verarbeitung
        // mehrerer Klick-Flanken im selben Frame).
        let mut committed = false;
        for &event in &input.events {
            match event {
                InputEvent::Cancel => {
                    self.mode.reset(false);
                    self.phase = InteractionPhase::Idle;
                    dirty = true;
                }
                InputEvent::ModifierRelease => {
                    // Drag-Ende: zurück in die fixierte Vorschau
                    if matches!(self.phase, InteractionPhase::Dragging(_)) {
                        self.phase = InteractionPhase::FixedPreview;
                        dirty = true;
                    }
                }
                InputEvent::ModifierApply => match self.phase {
                    InteractionPhase::AwaitingCommit => {
                        if let Some(pointer) = input.pointer {
                            self.mode.freeze_terminal(pointer);
                            self.phase = InteractionPhase::FixedPreview;
                            dirty = true;
                        }
                    }
                    InteractionPhase::FixedPreview => {
                        dirty |= self.click_in_fixed_preview(
                            session, input, sampler, sink, &mut committed,
                        );
                    }
                    _ => {
                        dirty |=
                            self.plain_click(session, input, sampler, sink, &mut committed);
                    }
                },
                InputEvent::PrimaryApply => match self.phase {
                    InteractionPhase::Dragging(_) => {
                        // Re-Klick beendet den Drag (konsumiert, platziert nicht)
                        self.phase = InteractionPhase::FixedPreview;
                        dirty = true;
                    }
                    InteractionPhase::FixedPreview => {
                        dirty |= self.click_in_fixed_preview(
                            session, input, sampler, sink, &mut committed,
                        );
                    }
                    _ => {
                        dirty |=
                            self.plain_click(session, input, sampler, sink, &mut committed);
                    }
                },
            }
        }

        if input.pointer != self.last_pointer {
            self.last_pointer = input.pointer;
            dirty = true;
        }

        if dirty || self.needs_recompute {
            self.recompute(session, sampler);
            self.needs_recompute = false;
        }
    }

    /// Klick außerhalb der fixierten Vorschau: rückt die Klick-Maschine
    /// des Modus genau eine Rolle weiter; der Commit-Klick platziert.
    fn plain_click(
        &mut self,
        session: &mut PlacementSession,
        input: &TickInput,
        sampler: &dyn HeightSampler,
        sink: &mut dyn PlacementSink,
        committed: &mut bool,
    ) -> bool {
        let Some(pointer) = input.pointer else {
            return false;
        };
        if *committed {
            return false;
        }
        if self.mode.handle_click(pointer) {
            self.commit(session, input, sampler, sink, pointer);
            *committed = true;
        } else {
            self.phase = if self.mode.ready_to_commit() {
                InteractionPhase::AwaitingCommit
            } else {
                InteractionPhase::Idle
            };
        }
        true
    }

    /// Klick in der fixierten Vorschau: Hit-Test zuerst. Treffer startet
    /// einen Drag und konsumiert den Klick; daneben wird mit der
    /// eingefrorenen Geometrie platziert.
    fn click_in_fixed_preview(
        &mut self,
        session: &mut PlacementSession,
        input: &TickInput,
        sampler: &dyn HeightSampler,
        sink: &mut dyn PlacementSink,
        committed: &mut bool,
    ) -> bool {
        let Some(pointer) = input.pointer else {
            return false;
        };
        if let Some(role) = self.mode.check_drag_hit(pointer, DRAG_PICK_RADIUS) {
            self.phase = InteractionPhase::Dragging(role);
            return true;
        }
        if *committed {
            return false;
        }
        // Daneben geklickt: Commit mit der eingefrorenen Geometrie, der
        // Zeiger überschreibt den Terminal-Punkt nicht mehr.
        let commit_pos = self
            .mode
            .terminal_or(Some(pointer))
            .unwrap_or(pointer);
        self.commit(session, input, sampler, sink, commit_pos);
        *committed = true;
        true
    }

    /// Commit-Pipeline: Punkte final berechnen, an die Senke übergeben,
    /// Modus-Hook und Reset (mit Verkettung) ausführen.
    fn commit(
        &mut self,
        session: &mut PlacementSession,
        input: &TickInput,
        sampler: &dyn HeightSampler,
        sink: &mut dyn PlacementSink,
        commit_pos: Vec2,
    ) {
        let config = session.spacing_config();
        let mut tooltips = Vec::new();
        self.mode
            .calculate_points(commit_pos, &config, sampler, &mut self.points, &mut tooltips);

        if self.points.is_empty() {
            log::debug!("Commit ohne Punkte (degenerierte Geometrie), verworfen");
        } else {
            sink.place(&self.points, session.growth_state());
            log::info!(
                "{} Punkte platziert ({:?}-Modus)",
                self.points.len(),
                self.mode.kind()
            );
        }

        let keep_anchor = self.mode.items_placed(commit_pos);
        self.mode.reset(input.continuation_held || keep_anchor);
        self.phase = if self.mode.ready_to_commit() {
            InteractionPhase::AwaitingCommit
        } else {
            InteractionPhase::Idle
        };
    }

    /// Baut Punkte und Overlay-Szene vollständig neu auf.
    fn recompute(&mut self, session: &PlacementSession, sampler: &dyn HeightSampler) {
        self.overlay.clear();

        let Some(terminal) = self.mode.terminal_or(self.last_pointer) else {
            self.points.clear();
            return;
        };

        let config = session.spacing_config();
        let mut tooltips = Vec::new();
        self.mode
            .calculate_points(terminal, &config, sampler, &mut self.points, &mut tooltips);

        self.overlay.guide_lines = self.mode.guide_lines(terminal);
        self.overlay.markers = self.mode.control_markers();
        self.overlay.tooltips = tooltips;
    }
}

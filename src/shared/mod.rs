//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und dem Host-Renderer geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod overlay;

pub use options::PlacementOptions;
pub use options::{PathModeKind, RotationMode, SpacingPolicy};
pub use options::{DEFAULT_GROWTH_STATE, DRAG_PICK_RADIUS};
pub use overlay::{ControlMarker, GuideLine, MeasureValue, OverlayScene, TooltipInfo};

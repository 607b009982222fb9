//! FS25 Line Placement Library.
//! Pfad-Definition und Punkt-Generierung als Library exportiert für
//! Tests, Benchmarks und Host-Integration.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    InputEvent, InteractionPhase, PathMode, PlacementController, PlacementSession, SpacingConfig,
    TickInput,
};
pub use core::{
    ControlRole, FlatGround, GrowthStateProvider, HeightSampler, Heightmap, ObjectFootprint,
    PlacementSink, PointData, WorldBounds,
};
pub use shared::{
    ControlMarker, GuideLine, MeasureValue, OverlayScene, PathModeKind, PlacementOptions,
    RotationMode, SpacingPolicy, TooltipInfo,
};

//! Core-Domänentypen: Punkte, Rollen, Terrain-Sampling, Objekt-Footprints.

pub mod heightmap;
pub mod object;
pub mod point;

pub use heightmap::{FlatGround, HeightSampler, Heightmap, WorldBounds};
pub use object::{GrowthStateProvider, ObjectFootprint, PlacementSink};
pub use point::{normalize_deg, yaw_deg, ControlRole, PointData};

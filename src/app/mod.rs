//! Application-Layer: Controller, Session, Events, Pfad-Modi und
//! Abstands-Engine.

pub mod controller;
pub mod events;
pub mod modes;
pub mod session;
pub mod spacing;

pub use controller::{InteractionPhase, PlacementController};
pub use events::{InputEvent, TickInput};
pub use modes::{CircleMode, CurveMode, PathMode, StraightMode};
pub use session::PlacementSession;
pub use spacing::{plan_closed_loop, plan_open_path, SpacingConfig, SpacingPlan};

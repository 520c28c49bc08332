//! Plan Core
//!
//! Itinerary planning logic shared by the UI:
//! - model: Location, Container, Plan and Trip records
//! - registry / index: read-only projections over a Plan
//! - engine: the move operation, sole mutator of a Plan
//! - controller: drag gesture state machine that resolves drops into moves

mod controller;
mod engine;
mod error;
mod index;
mod model;
mod registry;

pub use controller::{apply_drop, DragController, DragState, DropOutcome, SkipReason};
pub use engine::{MoveOutcome, MoveRequest};
pub use error::{PlanError, PlanResult};
pub use index::ContainerIndex;
pub use model::{Container, ContainerKind, Location, Plan, Trip};
pub use registry::ItemRegistry;

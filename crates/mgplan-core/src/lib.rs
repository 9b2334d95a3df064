//! # mgplan-core: Microgrid Siting Core Model
//!
//! Provides the fundamental data structures shared across the mgplan
//! workspace: geographic coordinates and distances, the power-plant and
//! candidate-site domain model, and the unified error type.
//!
//! ## Design Philosophy
//!
//! The siting pipeline is a sequence of pure derivations:
//!
//! ```text
//! plants → bounds → candidate sites → cost matrices → model → solution
//! ```
//!
//! Each stage consumes immutable inputs and returns a new value, so there is
//! no long-lived mutable run state and no order-of-call hazard. The types in
//! this crate are the inputs to that pipeline; the derivations live in
//! `mgplan-algo`.
//!
//! ## Modules
//!
//! - [`geo`] - WGS-84 points, great-circle distances, bounding boxes
//! - [`model`] - Power plants and candidate microgrid sites
//! - [`error`] - Unified [`MgError`] for API boundaries

pub mod error;
pub mod geo;
pub mod model;

pub use error::{MgError, MgResult};
pub use geo::{GeoBounds, GeoPoint};
pub use model::{CandidateSite, PowerPlant};

//! # pendlab
//!
//! An interactive 3D pendulum lab. Grab the bob with the mouse, swing it,
//! pause it, turn gravity off, and watch a live breakdown of kinetic,
//! potential, and mechanical energy.
//!
//! # Quick start
//!
//! ```no_run
//! use pendlab::Session;
//!
//! fn main() {
//!     Session::new()
//!         .with_initial_angle(0.6)
//!         .run()
//!         .unwrap();
//! }
//! ```
//!
//! The simulation core (state, integrator, energy bookkeeping, picking,
//! drag handling) is plain CPU code with no GPU or window dependency, so
//! it can be driven headlessly in tests.

pub mod camera;
pub mod energy;
pub mod error;
pub mod input;
pub mod integrator;
pub mod interaction;
pub mod picking;
pub mod state;
pub mod time;

mod gpu;
mod session;
mod ui;

pub use session::Session;

// Re-export the math types used across the public API.
pub use glam::{Vec2, Vec3};

/// Common imports for driving the simulation.
pub mod prelude {
    pub use crate::camera::Camera;
    pub use crate::energy::{EnergyHistory, EnergySample};
    pub use crate::error::{GpuError, SessionError};
    pub use crate::integrator::Integrator;
    pub use crate::interaction::{pointer_down, pointer_move, pointer_up};
    pub use crate::picking::PointerRay;
    pub use crate::state::{bob_position, PendulumState, GRAB_RADIUS, ROD_LENGTH};
    pub use crate::Session;
    pub use glam::{Vec2, Vec3};
}

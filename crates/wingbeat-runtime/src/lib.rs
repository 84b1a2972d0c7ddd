//! Wingbeat Runtime - Frame loop infrastructure
//!
//! Provides the building blocks the host loop drives the flight system with:
//! - `GameClock` — frame timing with a fixed-timestep accumulator
//! - `UiEvent` / `EventBus` — queue of discrete UI interactions that feed bursts
//! - `RuntimeSystem` — trait for systems ticked by the loop

mod clock;
mod event;
mod event_bus;
mod system;

pub use clock::GameClock;
pub use event::UiEvent;
pub use event_bus::EventBus;
pub use system::RuntimeSystem;

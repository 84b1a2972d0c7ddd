//! Wingbeat Core - Foundational types for the Wingbeat flight system
//!
//! This crate provides the types that the other Wingbeat crates depend on:
//! - `ButterflyId` - Stable particle handles
//! - `Vec2`, `Color`, `Viewport` - Value types
//! - `curve` - Pure cubic bezier and easing math
//! - Error types and Result alias

mod curve;
mod error;
mod id;
mod types;

pub use curve::{cubic_bezier, cubic_bezier_scalar, ease_in_out_cubic, lerp};
pub use error::{Result, WingbeatError};
pub use id::ButterflyId;
pub use types::{Color, Vec2, Viewport};

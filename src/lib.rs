//! A two-dimensional `f32` vector, used as the position, displacement and velocity primitive of a
//! host engine.
//!
//! [Vector2] is a plain `Copy` value. Every operation has one named form that returns a new vector,
//! and the arithmetic operators are shorthand for those. Numeric edge cases never panic: dividing
//! by zero gives `inf`/`NaN` components and normalizing the zero vector leaves it untouched.
//!
//! # Example
//!
//! ```
//! use planar::Vector2;
//!
//! let position = Vector2::new(3.0, 4.0);
//! assert_eq!(position.length(), 5.0);
//!
//! // Walk a quarter of the way towards the origin
//! let target = Vector2::zero();
//! let step = position.lerp(target, 0.25);
//! assert_eq!(step, Vector2::new(2.25, 3.0));
//!
//! // Bounce off the floor
//! let velocity = Vector2::new(1.0, -1.0).reflect(Vector2::unit_y());
//! assert_eq!(velocity, Vector2::new(1.0, 1.0));
//!
//! // Normalizing the zero vector is a no-op
//! assert_eq!(Vector2::zero().normalized(), Vector2::zero());
//!
//! assert_eq!(Vector2::new(1.5, 2.0).to_string(), "X:1.5 Y:2");
//! let parsed: Vector2 = "X:1.5 Y:2".parse()?;
//! assert_eq!(parsed, Vector2::new(1.5, 2.0));
//! # Ok::<(), planar::ParseVector2Error>(())
//! ```
//!
//! # Features
//!
//! - `serde`: derive `Serialize` and `Deserialize` for [Vector2]. The fields are written as `x`
//!   then `y`.
//! - `mint`: conversions to and from `mint::Vector2<f32>`.
//!
//! Conversions to and from `vek::Vec2<f32>` are always available.

#![warn(missing_docs, clippy::broken_links)]

mod error;
mod math;

pub use self::{error::ParseVector2Error, math::Vector2};

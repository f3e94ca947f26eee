//! Deterministic spot pattern synthesis and sprite compositing
//!
//! A 32-bit seed decodes into four digit pairs, each placing one spot inside a
//! fixed anatomical container. Spots are rasterized onto a scratch canvas,
//! clipped by an optional head mask, and layered between base artwork and
//! facial overlays. Without artwork a simpler placeholder is drawn from the
//! same seed.

#![forbid(unsafe_code)]

/// Input/output operations, configuration, and error handling
pub mod io;
/// Spot containers and seed-driven placement
pub mod layout;
/// Rasterization, layers, and compositing
pub mod render;
/// Seed codec, storage eras, and randomization
pub mod seed;
/// Editing session over a creature record
pub mod session;

pub use io::error::{Result, SpotError};
pub use render::compositor::{RenderRequest, render};
pub use seed::codec::Seed;

//! Shared core crate for display-kit.
//!
//! This crate contains:
//! - Numeric helpers (clamp, lerp, range remapping)
//! - The vendor-prefixed fullscreen tables and the adapter that walks them
//! - Host traits the browser binding implements
//! - Adapter configuration and error types

mod config;
mod error;
pub mod fullscreen;
pub mod math;

pub use config::AdapterConfig;
pub use error::{ConfigError, HostError};
pub use fullscreen::{DisplaySurface, FullscreenAdapter, FullscreenHost, HostMethod, Toggle, Vendor};
pub use math::{Remap, clamp, inverse_lerp, lerp, lerp_vec2, map};

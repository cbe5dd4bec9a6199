//! camview library crate.
//!
//! This module exposes the internal components for integration testing.

pub mod camera;
pub mod render;
pub mod session;

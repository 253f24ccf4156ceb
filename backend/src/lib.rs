//! HMPI Backend Library
//!
//! This library exposes modules for testing and external use.
//! The main binary is in `src/main.rs`.

pub mod api;
pub mod config;
pub mod error;
/// Heavy metal pollution index calculation
pub mod hmpi;
/// Application state shared with handlers
pub mod state;

//! img2ascii library crate.
//!
//! This module exposes the conversion pipeline and CLI plumbing for the
//! binary and for integration testing.

pub mod ascii;
pub mod cli;
pub mod config;
pub mod pipeline;

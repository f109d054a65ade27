//! # ipsift common
//!
//! Shared building blocks for the expansion engine and its front ends.
//!
//! * **[`network`]**: the dotted-quad codec, inclusive address ranges and the
//!   classified output record.
//! * **[`config`]**: runtime knobs threaded into the engine.
//! * **[`error`]**: the error taxonomy shared across crates.

pub mod config;
pub mod error;
pub mod network;

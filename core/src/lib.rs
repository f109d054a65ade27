//! # ipsift core
//!
//! The IPv4 address-set expansion and classification engine.
//!
//! Data flows strictly downward:
//! raw text → lines → [`expand`]ed tokens → deduplicated tokens → [`classifier`] records.
//! [`batch::process`] runs the whole pipeline in one synchronous call and keeps
//! no state between calls.

pub mod batch;
pub mod classifier;
pub mod expand;

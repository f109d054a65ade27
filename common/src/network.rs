//! # Network Models
//!
//! * [`address`]: conversion between dotted-quad text and `u32`.
//! * [`range`]: inclusive ranges of IPv4 addresses.
//! * [`record`]: the classified output unit handed to callers.

pub mod address;
pub mod range;
pub mod record;

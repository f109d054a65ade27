//! End-to-end tests across `ipsift-common` and `ipsift-core`.

#[cfg(test)]
mod pipeline;

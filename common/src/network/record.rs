//! # Address Record
//!
//! The classified output unit. Created by the classifier, never mutated
//! afterwards, and owned by the caller once a batch returns.

/// One classified address token.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AddressRecord {
    /// The token exactly as it appeared in the input (or as produced by an expander).
    pub address: String,
    pub is_valid: bool,
    /// Present iff `is_valid`.
    pub integer_value: Option<u32>,
    /// Never `true` for an invalid token.
    pub is_private: bool,
}

impl AddressRecord {
    /// Record for a token that is not a dotted-quad literal.
    pub fn invalid(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            is_valid: false,
            integer_value: None,
            is_private: false,
        }
    }

    pub fn valid(address: impl Into<String>, integer_value: u32, is_private: bool) -> Self {
        Self {
            address: address.into(),
            is_valid: true,
            integer_value: Some(integer_value),
            is_private,
        }
    }
}

use crate::error::ConfigError;

/// Default cap on how many addresses one CIDR or range line may expand to.
pub const DEFAULT_EXPANSION_LIMIT: usize = 5000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of addresses a single CIDR or range token may produce.
    ///
    /// Applied per token, not per batch.
    pub expansion_limit: usize,
}

impl Config {
    pub fn new(expansion_limit: usize) -> Result<Self, ConfigError> {
        if expansion_limit == 0 {
            return Err(ConfigError::ZeroLimit);
        }
        Ok(Self { expansion_limit })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            expansion_limit: DEFAULT_EXPANSION_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit() {
        assert_eq!(Config::default().expansion_limit, 5000);
    }

    #[test]
    fn test_new_rejects_zero() {
        assert_eq!(Config::new(0), Err(ConfigError::ZeroLimit));
        assert_eq!(Config::new(16).map(|c| c.expansion_limit), Ok(16));
    }
}

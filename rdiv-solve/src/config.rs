/// Configuration for placing the lower-leg candidate window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Consecutive standard values generated from each decade start.
    pub window_len: usize,
    /// Number of decades, starting at the one containing `Vo / Imax`, that
    /// each contribute a run of [`Config::window_len`] values.
    pub decades: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_len: 96,
            decades: 2,
        }
    }
}

impl Config {
    /// Validates that the window is non-empty.
    ///
    /// # Errors
    ///
    /// Returns an error if either field is zero.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.window_len == 0 {
            return Err("window_len must be at least 1");
        }
        if self.decades == 0 {
            return Err("decades must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn empty_windows_are_invalid() {
        let config = Config {
            window_len: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            decades: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}

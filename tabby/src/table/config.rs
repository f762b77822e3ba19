use serde::{Deserialize, Serialize};

/// Strings used to lay out a table.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Appended to the right of a cell, once per missing column.
    #[serde(default = "Config::default_padding")]
    pub padding: String,

    /// Placed between adjacent cells, never after the last one.
    #[serde(default = "Config::default_spacing")]
    pub spacing: String,
}

impl Default for Config {
    fn default() -> Self {
        Self { padding: Self::default_padding(), spacing: Self::default_spacing() }
    }
}

impl Config {
    /// Returns the default padding, a single space.
    #[inline]
    #[must_use]
    pub fn default_padding() -> String { " ".to_string() }

    /// Returns the default spacing, two spaces.
    #[inline]
    #[must_use]
    pub fn default_spacing() -> String { "  ".to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.padding, " ");
        assert_eq!(config.spacing, "  ");
    }

    #[test]
    fn test_deserialize_fills_missing_fields() {
        let config: Config = serde_yaml::from_str("spacing: \" | \"").unwrap();
        assert_eq!(config, Config { padding: " ".to_string(), spacing: " | ".to_string() });
    }
}

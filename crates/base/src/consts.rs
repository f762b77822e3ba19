/// Environment variable naming the configuration file.
pub const CONFIG_FILE_PATH_ENV: &str = "TABBY_CONFIG_FILE_PATH";

/// Environment variable overriding the configured log level.
pub const LOG_LEVEL_ENV: &str = "TABBY_LOG_LEVEL";

/// Field separator of `tabby render` input.
pub const DEFAULT_DELIMITER: &str = "\t";

mod error;

use std::path::{Path, PathBuf};

use resolve_path::PathResolveExt;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use tabby_base::consts;
use tabby_cli::config::LogConfig;

pub use self::error::Error;

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub table: tabby::Config,

    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    #[serde(default = "LogConfig::default")]
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table: tabby::Config::default(),
            delimiter: default_delimiter(),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    /// Returns the first existing configuration file, if any.
    pub fn search_config_file_path() -> Option<PathBuf> {
        std::iter::once(Self::default_path())
            .chain(tabby_base::fallback_project_config_directories().into_iter().map(|mut path| {
                path.push(tabby_base::CLI_CONFIG_NAME);
                path
            }))
            .find(|path| path.try_exists().unwrap_or(false))
    }

    #[inline]
    pub fn default_path() -> PathBuf {
        [tabby_base::PROJECT_CONFIG_DIR.to_path_buf(), PathBuf::from(tabby_base::CLI_CONFIG_NAME)]
            .into_iter()
            .collect()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let mut config: Self = {
            let path =
                path.as_ref().try_resolve().map(|path| path.to_path_buf()).with_context(|_| {
                    error::ResolveFilePathSnafu { file_path: path.as_ref().to_path_buf() }
                })?;
            let data =
                std::fs::read(&path).context(error::OpenConfigSnafu { filename: path.clone() })?;
            serde_yaml::from_slice(&data).context(error::ParseConfigSnafu { filename: path })?
        };

        config.log.file_path = config
            .log
            .file_path
            .map(|path| {
                path.try_resolve()
                    .map(|path| path.to_path_buf())
                    .with_context(|_| error::ResolveFilePathSnafu { file_path: path.clone() })
            })
            .transpose()?;

        Ok(config)
    }

    /// Renders the default configuration as YAML.
    pub fn template_basic() -> Result<String, Error> {
        serde_yaml::to_string(&Self::default()).context(error::SerializeConfigSnafu)
    }
}

fn default_delimiter() -> String { consts::DEFAULT_DELIMITER.to_string() }

//! The `tabby` command-line program.
//!
//! # Examples
//!
//! ```bash
//! # Render tab-separated text, the first line being the header
//! printf 'NAME\tAGE\nAda\t36\n' | tabby render
//!
//! # Render a CSV file with dotted padding
//! tabby render --delimiter , --padding . people.csv
//!
//! # Show the demonstration tables
//! tabby demo
//! ```

mod demo;
pub mod error;
mod palette;
mod render;

use std::{io::Write, path::PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use snafu::ResultExt;
use tabby_base::{
    CLI_PROGRAM_NAME,
    consts::{CONFIG_FILE_PATH_ENV, LOG_LEVEL_ENV},
};

pub use self::error::Error;
use self::{demo::DemoCommand, palette::PaletteCommand, render::RenderCommand};
use crate::{config::Config, shadow};

/// `Cli` is the main entry point for the Tabby Command Line Interface.
#[derive(Parser)]
#[command(
    name = CLI_PROGRAM_NAME,
    author,
    version,
    long_version = shadow::CLAP_LONG_VERSION,
    about = "Tabby: left-aligned terminal tables that keep their shape with ANSI colors.",
    color = clap::ColorChoice::Always
)]
pub struct Cli {
    /// The subcommand to execute.
    #[clap(subcommand)]
    commands: Option<Commands>,

    /// Path to the configuration file.
    #[clap(
        long = "config",
        short = 'c',
        env = CONFIG_FILE_PATH_ENV,
        help = "Specify a configuration file. Defaults to ~/.config/tabby/config.yaml or \
                TABBY_CONFIG_FILE_PATH env var."
    )]
    config_file: Option<PathBuf>,

    /// Sets the logging level for the application.
    #[clap(
        long = "log-level",
        env = LOG_LEVEL_ENV,
        help = "Set the logging level (e.g., warn, info, debug, trace)."
    )]
    log_level: Option<tracing::Level>,
}

/// `Commands` enumerates the available subcommands for the Tabby CLI.
#[derive(Clone, Subcommand)]
pub enum Commands {
    #[command(about = "Display version information")]
    Version,

    /// Generates a shell completion script for the specified shell.
    #[command(about = "Generate shell completion script for the specified shell (bash, zsh, fish)")]
    Completions { shell: clap_complete::Shell },

    #[command(about = "Output the default configuration in YAML format")]
    DefaultConfig,

    #[command(alias = "r", about = "Render delimited text from a file or stdin as a table")]
    Render(RenderCommand),

    #[command(about = "Print demonstration tables with colored cells")]
    Demo(DemoCommand),

    #[command(about = "List the named ANSI sequences used by the demo")]
    Palette(PaletteCommand),
}

impl Default for Cli {
    fn default() -> Self { Self::parse() }
}

impl Cli {
    /// Loads the configuration, applying the `--log-level` override.
    ///
    /// An explicitly given configuration file must exist. Otherwise the first
    /// file found in the default locations is used, falling back to built-in
    /// defaults when there is none.
    ///
    /// # Errors
    ///
    /// Returns an `Error` if the configuration file cannot be loaded or
    /// parsed.
    fn load_config(&self) -> Result<Config, Error> {
        let mut config = match self.config_file.clone().or_else(Config::search_config_file_path) {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(log_level) = self.log_level {
            config.log.level = log_level;
        }

        Ok(config)
    }

    /// Runs the parsed command and returns the process exit code.
    ///
    /// # Errors
    ///
    /// Returns an `Error` if configuration loading or the subcommand fails.
    pub fn run(self) -> Result<i32, Error> {
        match self.commands {
            Some(Commands::Version) => {
                std::io::stdout()
                    .write_all(Self::command().render_long_version().as_bytes())
                    .context(error::WriteStdoutSnafu)?;
                return Ok(0);
            }
            Some(Commands::Completions { shell }) => {
                let mut app = Self::command();
                let bin_name = app.get_name().to_string();
                clap_complete::generate(shell, &mut app, bin_name, &mut std::io::stdout());
                return Ok(0);
            }
            Some(Commands::DefaultConfig) => {
                std::io::stdout()
                    .write_all(Config::template_basic()?.as_bytes())
                    .context(error::WriteStdoutSnafu)?;
                return Ok(0);
            }
            _ => {}
        }

        let config = self.load_config()?;
        config.log.registry();
        tracing::debug!(?config, "Configuration loaded");

        match self.commands {
            Some(Commands::Render(cmd)) => cmd.run(config)?,
            Some(Commands::Demo(cmd)) => cmd.run(config)?,
            Some(Commands::Palette(cmd)) => cmd.run(config)?,
            _ => {
                write_help(std::io::stderr().lock()).context(error::WriteStderrSnafu)?;
                return Ok(-1);
            }
        }

        Ok(0)
    }
}

fn write_help<W: Write>(mut writer: W) -> std::io::Result<()> {
    let help = Cli::command().render_long_help().ansi().to_string();
    writer.write_all(help.as_bytes())
}

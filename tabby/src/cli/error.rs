use std::path::PathBuf;

use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("{source}"))]
    Configuration { source: crate::config::Error },

    #[snafu(display("Invalid record on line {line}, error: {source}"))]
    BuildTable { line: usize, source: tabby::Error },

    #[snafu(display("Failed to build demo table, error: {source}"))]
    BuildDemoTable { source: tabby::Error },

    #[snafu(display("Failed to read input from {}, error: {source}", path.display()))]
    ReadInput { path: PathBuf, source: std::io::Error },

    #[snafu(display("Failed to read stdin, error: {source}"))]
    ReadStdin { source: std::io::Error },

    #[snafu(display("Delimiter must not be empty"))]
    EmptyDelimiter,

    #[snafu(display("Failed to write stdout, error: {source}"))]
    WriteStdout { source: std::io::Error },

    #[snafu(display("Failed to write stderr, error: {source}"))]
    WriteStderr { source: std::io::Error },
}

impl From<crate::config::Error> for Error {
    fn from(source: crate::config::Error) -> Self { Self::Configuration { source } }
}

use clap::Args;
use snafu::ResultExt;

use crate::{
    cli::{Error, error},
    config::Config,
    consts::ansi::PALETTE,
    ui::{self, table::PaletteExt},
};

/// Lists the named ANSI sequences known to the demo.
#[derive(Args, Clone)]
pub struct PaletteCommand {}

impl PaletteCommand {
    /// # Errors
    ///
    /// Returns an `Error` if standard output cannot be written.
    pub fn run(self, config: Config) -> Result<(), Error> {
        let table = PALETTE.to_table().context(error::BuildDemoTableSnafu)?;
        ui::write_lines(std::io::stdout().lock(), &table.print(Some(&config.table)))
            .context(error::WriteStdoutSnafu)
    }
}

use clap::Args;
use snafu::ResultExt;
use tabby::Table;

use crate::{
    cli::{Error, error},
    config::Config,
    consts::ansi::{RED, RESET, UNDERLINE, UNDERLINE_YELLOW},
    ui,
};

/// Prints sample tables mixing colored and plain cells.
#[derive(Args, Clone)]
pub struct DemoCommand {}

impl DemoCommand {
    /// # Errors
    ///
    /// Returns an `Error` if standard output cannot be written.
    pub fn run(self, config: Config) -> Result<(), Error> {
        let tables = demo_tables().context(error::BuildDemoTableSnafu)?;

        let mut lines = Vec::new();
        for (index, table) in tables.iter().enumerate() {
            if index > 0 {
                lines.push(String::new());
            }
            lines.extend(table.print(Some(&config.table)));
        }

        ui::write_lines(std::io::stdout().lock(), &lines).context(error::WriteStdoutSnafu)
    }
}

fn demo_tables() -> Result<[Table; 2], tabby::Error> {
    let mut colored_cells = Table::with_header([
        "something",
        "bnother",
        format!("one mo{RED}r{RESET}e").as_str(),
    ])?;
    colored_cells.append_row(["uno", "dos", "tres"])?;
    colored_cells.append_row(["jeden", format!("kl{RED}m{RESET}no67890").as_str(), "trzy"])?;

    let mut underlined_header = Table::with_header([
        format!("{UNDERLINE}FIRST{RESET}"),
        format!("{UNDERLINE}SECOND{RESET}"),
    ])?;
    underlined_header
        .append_row([format!("eins {UNDERLINE_YELLOW}zwei{RESET} drei"), "vier".to_string()])?;
    underlined_header.append_row(["fünf"])?;

    Ok([colored_cells, underlined_header])
}

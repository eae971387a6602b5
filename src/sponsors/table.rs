use std::io::Write;

use comfy_table::{presets::NOTHING, Attribute, Cell, ContentArrangement, Row, Table};

use super::{Sponsor, SponsorListRenderer};

const SPONSOR_HEADER: &str = "SPONSOR";

/// Where a table goes and how fancy it is allowed to be
pub struct TableOutput {
    pub out: Box<dyn Write>,
    /// On a terminal the header is bold and rows are cut to the terminal width
    pub is_terminal: bool,
}

impl TableOutput {
    /// Plain output, e.g. a pipe or a file
    pub fn plain(out: Box<dyn Write>) -> Self {
        Self {
            out,
            is_terminal: false,
        }
    }
}

/// Borderless single column table, one line per sponsor
fn sponsor_table(sponsors: &[Sponsor], is_terminal: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);

    if is_terminal {
        table
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![Cell::new(SPONSOR_HEADER).add_attribute(Attribute::Bold)]);
    } else {
        table
            .force_no_tty()
            .set_content_arrangement(ContentArrangement::Disabled)
            .set_header(vec![SPONSOR_HEADER]);
    }

    if let Some(column) = table.column_mut(0) {
        column.set_padding((0, 0));
    }

    for sponsor in sponsors {
        let mut row = Row::from(vec![sponsor.as_str()]);
        if is_terminal {
            row.max_height(1);
        }
        table.add_row(row);
    }

    table
}

fn write_table(table: &Table, out: &mut dyn Write) -> std::io::Result<()> {
    for line in table.lines() {
        writeln!(out, "{}", line.trim_end())?;
    }
    out.flush()
}

/// Renders sponsors as a single column table
pub struct TableRenderer {
    output: TableOutput,
}

impl TableRenderer {
    pub fn new(output: TableOutput) -> Self {
        Self { output }
    }
}

impl SponsorListRenderer for TableRenderer {
    fn render(&mut self, sponsors: &[Sponsor]) -> std::io::Result<()> {
        let table = sponsor_table(sponsors, self.output.is_terminal);
        write_table(&table, self.output.out.as_mut())
    }
}

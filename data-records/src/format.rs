use std::io::{self, Write};

use crate::chunk::{Record, RECORD_WIDTH};
use crate::config::Layout;

const INDENT: &str = "    ";

/// Write `records` to `writer` in the given layout.
///
/// Every record becomes one `(a, b, c),` line. The const layout indents
/// those lines and wraps them in an array declaration.
pub fn write_records<W: Write>(
    writer: &mut W,
    records: &[Record],
    layout: &Layout,
) -> io::Result<()> {
    match layout {
        Layout::Lines => write_lines(writer, records, ""),
        Layout::RustConst { name } => {
            if !records.iter().all(Record::is_full) {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "short records cannot be written into a const array",
                ));
            }
            let tuple = vec!["u8"; RECORD_WIDTH].join(", ");
            writeln!(
                writer,
                "pub const {}: [({}); {}] = [",
                name,
                tuple,
                records.len()
            )?;
            write_lines(writer, records, INDENT)?;
            writeln!(writer, "];")
        }
    }
}

fn write_lines<W: Write>(
    writer: &mut W,
    records: &[Record],
    indent: &str,
) -> io::Result<()> {
    for record in records {
        writeln!(writer, "{}{},", indent, record)?;
    }
    Ok(())
}

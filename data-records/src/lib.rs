//! Fixed-width byte records and their text form.
//!
//! [`dump`] reads a binary file, splits it into 3-byte records and writes
//! one `(a, b, c),` line per record into a new text file. [`pack`] does the
//! reverse. Neither of them ever overwrites an existing destination.

pub mod chunk;
pub mod config;
pub mod dump;
pub mod format;
pub mod pack;
pub mod parse;
pub mod utils;

pub use chunk::{chunk, Record, RECORD_WIDTH};
pub use config::{
    DumpConfig, Layout, PackConfig, RemainderPolicy, DEFAULT_DESTINATION,
};
pub use dump::{dump, DumpReport};
pub use format::write_records;
pub use pack::{pack, PackReport};
pub use parse::{parse_line, parse_records};

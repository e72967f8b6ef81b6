use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use data_error::{DataError, Result};

/// Output file name used when no destination is given
pub const DEFAULT_DESTINATION: &str = "pal.txt";

/// What to do with the bytes left over after the last full record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RemainderPolicy {
    /// Refuse the input before anything is written
    #[default]
    Error,
    /// Zero-fill the last record
    Pad,
    /// Drop the stray bytes
    Truncate,
    /// Write the short record as it is
    Keep,
}

impl FromStr for RemainderPolicy {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "pad" => Ok(Self::Pad),
            "truncate" => Ok(Self::Truncate),
            "keep" => Ok(Self::Keep),
            _ => Err(DataError::InvalidConfig(format!(
                "unknown remainder policy '{}'",
                s
            ))),
        }
    }
}

impl fmt::Display for RemainderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Pad => "pad",
            Self::Truncate => "truncate",
            Self::Keep => "keep",
        };
        f.write_str(name)
    }
}

/// Shape of the dumped text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Layout {
    /// One `(a, b, c),` line per record
    #[default]
    Lines,
    /// The same lines wrapped in a `pub const NAME: [(u8, u8, u8); N]`
    /// declaration, ready to paste into Rust source
    RustConst { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpConfig {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub remainder: RemainderPolicy,
    pub layout: Layout,
}

impl DumpConfig {
    pub fn new(
        source: impl AsRef<Path>,
        destination: impl AsRef<Path>,
    ) -> Self {
        Self {
            source: source.as_ref().to_path_buf(),
            destination: destination.as_ref().to_path_buf(),
            remainder: RemainderPolicy::default(),
            layout: Layout::default(),
        }
    }

    pub fn with_remainder(mut self, remainder: RemainderPolicy) -> Self {
        self.remainder = remainder;
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Reject combinations that cannot produce valid output.
    ///
    /// A const declaration has a fixed 3-tuple element type, so short
    /// records are not allowed in it, and its name has to be a Rust
    /// identifier.
    pub fn validate(&self) -> Result<()> {
        if let Layout::RustConst { name } = &self.layout {
            if !is_identifier(name) {
                return Err(DataError::InvalidConfig(format!(
                    "'{}' is not a valid constant name",
                    name
                )));
            }
            if self.remainder == RemainderPolicy::Keep {
                return Err(DataError::InvalidConfig(
                    "short records cannot be written into a const array"
                        .to_owned(),
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackConfig {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl PackConfig {
    pub fn new(
        source: impl AsRef<Path>,
        destination: impl AsRef<Path>,
    ) -> Self {
        Self {
            source: source.as_ref().to_path_buf(),
            destination: destination.as_ref().to_path_buf(),
        }
    }
}

/// Strict and reserved keywords of the 2021 edition
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const",
    "continue", "crate", "do", "dyn", "else", "enum", "extern", "false",
    "final", "fn", "for", "if", "impl", "in", "let", "loop", "macro", "match",
    "mod", "move", "mut", "override", "priv", "pub", "ref", "return", "self",
    "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while",
    "yield",
];

fn is_identifier(name: &str) -> bool {
    if KEYWORDS.contains(&name) {
        return false;
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        Some('_') if name.len() > 1 => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

use data_records::RemainderPolicy;

/// Command-line spelling of [`RemainderPolicy`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Remainder {
    /// Refuse inputs that are not a whole number of records
    #[default]
    Error,
    /// Zero-fill the last record
    Pad,
    /// Drop the stray bytes
    Truncate,
    /// Write the short last record as it is
    Keep,
}

impl From<Remainder> for RemainderPolicy {
    fn from(value: Remainder) -> Self {
        match value {
            Remainder::Error => RemainderPolicy::Error,
            Remainder::Pad => RemainderPolicy::Pad,
            Remainder::Truncate => RemainderPolicy::Truncate,
            Remainder::Keep => RemainderPolicy::Keep,
        }
    }
}

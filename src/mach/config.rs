//! Engine settings. Configuration only names choices; the runtime
//! enforces them.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Console byte that diverts `in` into the debug channel.
    pub sentinel: u8,

    /// Directory holding `<name>.state` and `<name>.mem` snapshot files.
    pub snapshot_dir: PathBuf,

    /// Snapshot name used by `save` and `load` without an argument.
    pub default_snapshot: String,

    /// Start with trace and info diagnostics enabled.
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sentinel: b'!',
            snapshot_dir: PathBuf::from("."),
            default_snapshot: "001".to_string(),
            verbose: false,
        }
    }
}

//! Path and text-file helpers
//!
//! Bare file names, longest common paths, config file location and
//! line-oriented text I/O with platform line endings.

pub mod error;
pub mod io;
pub mod locate;
pub mod path;
pub mod platform;
pub mod prefix;

pub use error::{Error, Result};
pub use io::{Utf8Lines, read_text_file, read_utf8_lines, write_text_file, write_text_file_for};
pub use locate::{ConfigFile, ConfigLocator, get_config_file, get_ini_file};
pub use path::{
    abs_path, barename, clean_path, file_exists, home_dir, is_dir, longest_common_path,
    longest_common_path_for, path_exists,
};
pub use platform::{LineEnding, Platform, PlatformKind};
pub use prefix::longest_common_prefix;

/// Owner read/write permission bits, for private files such as configs.
pub const MODE_URW: u32 = 0o600;

//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fsutil::{Platform, PlatformKind};

/// fsutil - Path and text-file helpers
#[derive(Parser, Debug)]
#[command(name = "fsutil")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Target platform conventions (unix, windows, macos)
    #[arg(long, global = true, env = "FSUTIL_PLATFORM")]
    pub platform: Option<PlatformKind>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Platform conventions selected on the command line, or the host's.
    pub fn target_platform(&self) -> Platform {
        self.platform.unwrap_or_else(PlatformKind::current).platform()
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the bare name (no directory, no extensions) of each path
    Barename {
        /// Paths to strip
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Print the longest common path of the given paths
    ///
    /// Examples:
    ///   fsutil common-path /home/a/x /home/a/y     # /home/a
    ///   fsutil --platform windows common-path 'C:\A' 'c:\a\b'
    CommonPath {
        /// Paths to compare
        paths: Vec<String>,
    },

    /// Locate an application's config file
    ///
    /// Prints the existing file, or where a new one should be saved.
    ConfigFile {
        /// Application name
        appname: String,

        /// Domain, e.g. "example.com"
        #[arg(short, long, default_value = "")]
        domain: String,

        /// File extension
        #[arg(short, long, default_value = ".toml")]
        ext: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,

        /// Create an empty file (and its directory) if none exists
        #[arg(long)]
        create: bool,
    },

    /// Locate an application's .ini file
    IniFile {
        /// Application name
        appname: String,

        /// Domain, e.g. "example.com"
        #[arg(short, long, default_value = "")]
        domain: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the absolute, cleaned form of a path
    Abs {
        /// Path to resolve
        path: PathBuf,
    },

    /// Print the home directory
    Home,

    /// Report whether each path is a file, a directory or missing
    Probe {
        /// Paths to check
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Print the lines of a text file
    Lines {
        /// File to read
        file: PathBuf,

        /// Prefix each line with its number
        #[arg(short, long)]
        number: bool,
    },

    /// Rewrite a text file with the target platform's line endings
    Convert {
        /// File to read
        input: PathBuf,

        /// File to write (may be the same as the input)
        output: PathBuf,
    },
}

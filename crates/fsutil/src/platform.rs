//! Target platform conventions.
//!
//! Separator, case sensitivity and line ending are carried in a [`Platform`]
//! value instead of being read from the running OS, so path and text logic
//! can be exercised against any platform from any host.

use std::str::FromStr;

/// End-of-line sequence written after every line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineEnding {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    /// Get the string representation of the line ending.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

impl std::fmt::Display for LineEnding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lf => write!(f, "LF"),
            Self::CrLf => write!(f, "CRLF"),
        }
    }
}

/// Named platform families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformKind {
    /// Linux, BSDs and other Unix-likes
    Unix,
    /// Windows
    Windows,
    /// macOS and iOS (case-insensitive by default)
    Macos,
}

impl PlatformKind {
    /// The platform family this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else if cfg!(any(target_os = "macos", target_os = "ios")) {
            Self::Macos
        } else {
            Self::Unix
        }
    }

    /// Get the string representation of the platform name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unix => "unix",
            Self::Windows => "windows",
            Self::Macos => "macos",
        }
    }

    /// The conventions of this platform family.
    pub fn platform(&self) -> Platform {
        match self {
            Self::Unix => Platform::unix(),
            Self::Windows => Platform::windows(),
            Self::Macos => Platform::macos(),
        }
    }
}

impl std::fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlatformKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unix" | "linux" => Ok(Self::Unix),
            "windows" | "win" => Ok(Self::Windows),
            "macos" | "darwin" | "mac" => Ok(Self::Macos),
            other => Err(format!("unknown platform: {other}")),
        }
    }
}

/// Path and text conventions of a target platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Platform {
    /// Path component separator
    pub separator: char,
    /// Whether paths compare equal regardless of case
    pub case_insensitive: bool,
    /// Line ending used when writing text files
    pub eol: LineEnding,
}

impl Platform {
    pub const fn unix() -> Self {
        Self {
            separator: '/',
            case_insensitive: false,
            eol: LineEnding::Lf,
        }
    }

    pub const fn windows() -> Self {
        Self {
            separator: '\\',
            case_insensitive: true,
            eol: LineEnding::CrLf,
        }
    }

    pub const fn macos() -> Self {
        Self {
            separator: '/',
            case_insensitive: true,
            eol: LineEnding::Lf,
        }
    }

    /// Conventions of the platform this binary was compiled for.
    pub fn current() -> Self {
        PlatformKind::current().platform()
    }

    /// Whether `c` separates path components on this platform.
    ///
    /// Backslash platforms also accept `/`.
    pub fn is_separator(&self, c: char) -> bool {
        c == self.separator || (self.separator == '\\' && c == '/')
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

//! Path string helpers and filesystem probes
//!
//! None of these functions return errors: string helpers degrade to an empty
//! or best-effort result, and the probes report `false` for anything they
//! cannot stat.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::Platform;
use crate::prefix::longest_common_prefix;

/// Return the file name of `path` with every extension removed.
///
/// Directory components are stripped at the last `/` or `\`, whichever comes
/// later, then everything from the first remaining `.` onwards is dropped:
/// `archive.tar.gz` becomes `archive`.
pub fn barename(path: &str) -> String {
    let name = match path.rfind(['/', '\\']) {
        Some(idx) => &path[idx + 1..],
        None => path,
    };
    match name.find('.') {
        Some(idx) => name[..idx].to_string(),
        None => name.to_string(),
    }
}

/// Longest common path of `paths` using the current platform's conventions.
///
/// See [`longest_common_path_for`].
pub fn longest_common_path<S: AsRef<str>>(paths: &[S]) -> String {
    longest_common_path_for(paths, &Platform::current())
}

/// Return the longest run of whole path components shared by all `paths`.
///
/// The result always ends on a component boundary: `/home/mark/app` and
/// `/home/mark/apps` share `/home/mark`, not `/home/mark/app`. When the only
/// thing in common is the root separator, the separator itself is returned;
/// when nothing is in common the result is empty.
///
/// On case-insensitive platforms the comparison (and therefore the result)
/// is lower-cased. The inputs themselves are never modified.
pub fn longest_common_path_for<S: AsRef<str>>(paths: &[S], platform: &Platform) -> String {
    let fold = |path: &str| {
        if platform.case_insensitive {
            path.to_lowercase()
        } else {
            path.to_string()
        }
    };

    match paths {
        [] => return String::new(),
        [only] => return fold(only.as_ref()),
        _ => {}
    }

    let folded: Vec<String> = paths.iter().map(|p| fold(p.as_ref())).collect();
    let prefix = longest_common_prefix(&folded);

    match prefix.rfind(|c: char| platform.is_separator(c)) {
        None => String::new(),
        // keep the root separator
        Some(0) => prefix[..1].to_string(),
        Some(idx) => prefix[..idx].to_string(),
    }
}

/// Lexically normalize a path.
///
/// Repeated separators and `.` components are removed and `..` is resolved
/// against the component before it. A `..` directly after the root is
/// dropped; leading `..` components of a relative path are kept. An empty
/// result becomes `.`. The filesystem is never consulted.
pub fn clean_path(path: impl AsRef<Path>) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.as_ref().components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

/// Return `path` made absolute against the current directory.
///
/// An empty path means the current directory. If the current directory
/// cannot be determined the cleaned input is returned instead; this function
/// never fails.
pub fn abs_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    let path = if path.as_os_str().is_empty() {
        Path::new(".")
    } else {
        path
    };
    match std::path::absolute(path) {
        Ok(absolute) => clean_path(dunce::simplified(&absolute)),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Could not make path absolute");
            clean_path(path)
        }
    }
}

/// Return the user's home directory.
///
/// Falls back to the absolute current directory when no home directory can
/// be resolved.
pub fn home_dir() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home,
        None => {
            tracing::warn!("Home directory not resolvable, using current directory");
            abs_path(".")
        }
    }
}

/// True if `path` exists and is not a directory.
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    let exists = fs::metadata(path.as_ref()).is_ok_and(|meta| !meta.is_dir());
    tracing::trace!(path = %path.as_ref().display(), exists, "file probe");
    exists
}

/// True if anything exists at `path`.
pub fn path_exists(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).is_ok()
}

/// True if `path` exists and is a directory.
pub fn is_dir(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).is_ok_and(|meta| meta.is_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn barename_of_dotfile_is_empty() {
        assert_eq!(barename(".bashrc"), "");
    }

    #[test]
    fn barename_of_trailing_separator_is_empty() {
        assert_eq!(barename("/"), "");
        assert_eq!(barename(""), "");
    }

    #[test]
    fn dots_in_directories_are_ignored() {
        assert_eq!(barename("/srv/www.example.com/index.html"), "index");
    }

    #[test]
    fn common_path_single_input_is_folded() {
        assert_eq!(
            longest_common_path_for(&["/Users/Mark"], &Platform::macos()),
            "/users/mark"
        );
        assert_eq!(
            longest_common_path_for(&["/Users/Mark"], &Platform::unix()),
            "/Users/Mark"
        );
    }

    #[test]
    fn common_path_does_not_touch_inputs() {
        let inputs = vec!["/Home/A/x".to_string(), "/Home/A/y".to_string()];
        let common = longest_common_path_for(&inputs, &Platform::windows());
        assert_eq!(common, "/home/a");
        assert_eq!(inputs[0], "/Home/A/x");
    }

    #[test]
    fn clean_path_resolves_dots() {
        assert_eq!(clean_path("a/./b/../c"), PathBuf::from("a/c"));
        assert_eq!(clean_path(""), PathBuf::from("."));
        assert_eq!(clean_path("a/.."), PathBuf::from("."));
        assert_eq!(clean_path("../a"), PathBuf::from("../a"));
    }

    #[cfg(unix)]
    #[test]
    fn clean_path_keeps_root() {
        assert_eq!(clean_path("/../a//b/"), PathBuf::from("/a/b"));
    }
}

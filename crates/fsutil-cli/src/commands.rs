//! Command implementations for fsutil-cli

use std::fs::OpenOptions;
use std::io::{self, ErrorKind, Write};
use std::path::Path;

use colored::Colorize;
use fsutil::{ConfigFile, Platform};

use crate::error::{CliError, Result};

pub fn run_barename(paths: &[String]) -> Result<()> {
    for path in paths {
        println!("{}", fsutil::barename(path));
    }
    Ok(())
}

pub fn run_common_path(paths: &[String], platform: &Platform) -> Result<()> {
    let common = fsutil::longest_common_path_for(paths, platform);
    tracing::debug!(count = paths.len(), %common, "Computed common path");
    println!("{common}");
    Ok(())
}

pub fn run_config_file(
    domain: &str,
    appname: &str,
    ext: &str,
    json: bool,
    create: bool,
) -> Result<()> {
    if appname.is_empty() {
        return Err(CliError::user("application name must not be empty"));
    }
    let config = fsutil::get_config_file(domain, appname, ext);
    if create && !config.found {
        create_config_file(&config)?;
    }
    print_config_file(&config, json)
}

pub fn run_ini_file(domain: &str, appname: &str, json: bool) -> Result<()> {
    if appname.is_empty() {
        return Err(CliError::user("application name must not be empty"));
    }
    print_config_file(&fsutil::get_ini_file(domain, appname), json)
}

fn print_config_file(config: &ConfigFile, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(config)?);
    } else {
        let status = if config.found {
            "found".green()
        } else {
            "new".yellow()
        };
        println!("{} ({})", config.path.display(), status);
    }
    Ok(())
}

/// Create the proposed config file, empty and private to the owner.
fn create_config_file(config: &ConfigFile) -> Result<()> {
    config.create_parent_dir()?;

    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(fsutil::MODE_URW);
    }
    options
        .open(&config.path)
        .map_err(|e| fsutil::Error::io(&config.path, e))?;

    tracing::info!(path = %config.path.display(), "Created config file");
    Ok(())
}

pub fn run_abs(path: &Path) -> Result<()> {
    println!("{}", fsutil::abs_path(path).display());
    Ok(())
}

pub fn run_home() -> Result<()> {
    println!("{}", fsutil::home_dir().display());
    Ok(())
}

/// Describe what exists at `path`.
pub fn probe(path: &Path) -> &'static str {
    if fsutil::is_dir(path) {
        "dir"
    } else if fsutil::file_exists(path) {
        "file"
    } else {
        "missing"
    }
}

pub fn run_probe(paths: &[std::path::PathBuf]) -> Result<()> {
    for path in paths {
        let kind = match probe(path) {
            "missing" => "missing".red(),
            other => other.green(),
        };
        println!("{}\t{}", kind, path.display());
    }
    Ok(())
}

pub fn run_lines(file: &Path, number: bool) -> Result<()> {
    let stdout = io::stdout();
    match write_lines(&mut stdout.lock(), file, number) {
        // reader hung up, e.g. `fsutil lines big.txt | head`
        Err(CliError::Io(e)) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

fn write_lines(out: &mut impl Write, file: &Path, number: bool) -> Result<()> {
    let lines = fsutil::read_utf8_lines(file);
    tracing::debug!(path = %lines.path().display(), "Streaming lines");

    for (idx, line) in lines.enumerate() {
        let line = line?;
        if number {
            writeln!(out, "{:>6}\t{}", idx + 1, line)?;
        } else {
            writeln!(out, "{line}")?;
        }
    }
    out.flush()?;
    Ok(())
}

pub fn run_convert(input: &Path, output: &Path, platform: &Platform) -> Result<()> {
    let lines = fsutil::read_text_file(input)?;
    fsutil::write_text_file_for(output, &lines, platform)?;
    println!(
        "{} {} lines to {} ({})",
        "Wrote".green(),
        lines.len(),
        output.display(),
        platform.eol
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn probe_reports_kind() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("a.txt");
        fs::write(&file, "x").unwrap();

        assert_eq!(probe(temp.path()), "dir");
        assert_eq!(probe(&file), "file");
        assert_eq!(probe(&temp.path().join("nope")), "missing");
    }

    #[test]
    fn create_config_file_makes_parent_and_file() {
        let temp = TempDir::new().unwrap();
        let config = ConfigFile {
            path: temp.path().join("example.com").join("app.toml"),
            found: false,
        };

        create_config_file(&config).unwrap();

        assert!(fsutil::file_exists(&config.path));
        assert_eq!(fs::metadata(&config.path).unwrap().len(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn created_config_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let config = ConfigFile {
            path: temp.path().join("app.toml"),
            found: false,
        };

        create_config_file(&config).unwrap();

        let mode = fs::metadata(&config.path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, fsutil::MODE_URW);
    }

    #[test]
    fn create_config_file_refuses_to_clobber() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("app.toml");
        fs::write(&path, "keep = true\n").unwrap();
        let config = ConfigFile { path, found: false };

        assert!(create_config_file(&config).is_err());
        assert_eq!(fs::read_to_string(&config.path).unwrap(), "keep = true\n");
    }

    /// Accepts `limit` writes, then fails like a closed pipe.
    struct ClosedAfter {
        limit: usize,
        written: Vec<u8>,
    }

    impl Write for ClosedAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.limit == 0 {
                return Err(io::Error::from(ErrorKind::BrokenPipe));
            }
            self.limit -= 1;
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_lines_numbers_output() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("in.txt");
        fs::write(&file, "first\r\nsecond").unwrap();

        let mut out = Vec::new();
        write_lines(&mut out, &file, true).unwrap();

        assert_eq!(out, b"     1\tfirst\n     2\tsecond\n");
    }

    #[test]
    fn write_lines_reports_closed_output_as_io_error() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("in.txt");
        let lines: Vec<String> = (0..100).map(|i| format!("line {i}")).collect();
        fsutil::write_text_file(&file, &lines).unwrap();

        let mut out = ClosedAfter {
            limit: 1,
            written: Vec::new(),
        };
        let err = write_lines(&mut out, &file, false).unwrap_err();

        assert!(matches!(err, CliError::Io(ref e) if e.kind() == ErrorKind::BrokenPipe));
        assert!(!out.written.is_empty());
    }

    #[test]
    fn convert_rewrites_line_endings() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("in.txt");
        let output = temp.path().join("out.txt");
        fs::write(&input, "a\nb").unwrap();

        run_convert(&input, &output, &Platform::windows()).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "a\r\nb\r\n");
    }
}

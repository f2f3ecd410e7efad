use std::path::PathBuf;
use thiserror::Error;

use crate::config::ViewerConfig;
use crate::navigation::NavigationPolicy;

pub const USAGE: &str = "\
Usage: pixterm [OPTIONS] <FILE|DIR>...

View images in your terminal.

Arguments:
  <FILE|DIR>...        an image file, or a directory containing image files

Options:
  -n, --nostatus       hide the status bar
  -w, --wrap           wrap around at the first and last image
  -c, --config <FILE>  read settings from a JSON file
  -h, --help           print this help
  -V, --version        print the version

Keys: q quit, l/right next, h/left previous, s toggle status bar";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("No files specified")]
    NoFiles,
    #[error("Unknown option '{0}'")]
    UnknownOption(String),
    #[error("Option '{0}' needs a value")]
    MissingValue(String),
}

/// Parsed command-line options for a viewing run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub paths: Vec<PathBuf>,
    pub no_status: bool,
    pub wrap: bool,
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    View(CliArgs),
    Help,
    Version,
}

/// Parse arguments (without the program name).
pub fn parse_args<I>(args: I) -> Result<CliCommand, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();
    let mut options_done = false;

    while let Some(arg) = args.next() {
        if options_done || !arg.starts_with('-') || arg == "-" {
            parsed.paths.push(PathBuf::from(arg));
            continue;
        }

        match arg.as_str() {
            "--" => options_done = true,
            "-n" | "--nostatus" => parsed.no_status = true,
            "-w" | "--wrap" => parsed.wrap = true,
            "-c" | "--config" => {
                let value = args.next().ok_or_else(|| CliError::MissingValue(arg.clone()))?;
                parsed.config = Some(PathBuf::from(value));
            }
            "-h" | "--help" => return Ok(CliCommand::Help),
            "-V" | "--version" => return Ok(CliCommand::Version),
            _ => return Err(CliError::UnknownOption(arg)),
        }
    }

    if parsed.paths.is_empty() {
        return Err(CliError::NoFiles);
    }
    Ok(CliCommand::View(parsed))
}

impl CliArgs {
    /// Command-line flags win over the config file.
    pub fn apply_to(&self, config: &mut ViewerConfig) {
        if self.no_status {
            config.show_status = false;
        }
        if self.wrap {
            config.navigation = NavigationPolicy::Wrap;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, CliError> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_paths_and_flags() {
        let command = parse(&["-n", "a.png", "photos", "--wrap"]).unwrap();
        let CliCommand::View(args) = command else {
            panic!("expected view command");
        };
        assert_eq!(args.paths, vec![PathBuf::from("a.png"), PathBuf::from("photos")]);
        assert!(args.no_status);
        assert!(args.wrap);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_long_nostatus_and_config() {
        let command = parse(&["--nostatus", "--config", "cfg.json", "x.jpg"]).unwrap();
        assert_eq!(
            command,
            CliCommand::View(CliArgs {
                paths: vec![PathBuf::from("x.jpg")],
                no_status: true,
                wrap: false,
                config: Some(PathBuf::from("cfg.json")),
            })
        );
    }

    #[test]
    fn test_no_files_is_an_error() {
        assert_eq!(parse(&[]), Err(CliError::NoFiles));
        assert_eq!(parse(&["-n"]), Err(CliError::NoFiles));
    }

    #[test]
    fn test_unknown_option() {
        assert_eq!(
            parse(&["--zoom", "a.png"]),
            Err(CliError::UnknownOption("--zoom".to_string()))
        );
    }

    #[test]
    fn test_config_needs_value() {
        assert_eq!(
            parse(&["a.png", "-c"]),
            Err(CliError::MissingValue("-c".to_string()))
        );
    }

    #[test]
    fn test_double_dash_ends_options() {
        let command = parse(&["--", "-n"]).unwrap();
        let CliCommand::View(args) = command else {
            panic!("expected view command");
        };
        assert_eq!(args.paths, vec![PathBuf::from("-n")]);
        assert!(!args.no_status);
    }

    #[test]
    fn test_help_and_version() {
        assert_eq!(parse(&["a.png", "--help"]), Ok(CliCommand::Help));
        assert_eq!(parse(&["-V"]), Ok(CliCommand::Version));
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = ViewerConfig::default();
        let args = CliArgs {
            paths: vec![PathBuf::from("a.png")],
            no_status: true,
            wrap: true,
            config: None,
        };
        args.apply_to(&mut config);
        assert!(!config.show_status);
        assert_eq!(config.navigation, NavigationPolicy::Wrap);
    }
}

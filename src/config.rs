//! Runner configuration
//!
//! Settings come from an optional TOML file and are then overridden by
//! command-line arguments.
//!
//! ```toml
//! pages = ["generics", "protocols"]
//! format = "json"
//! color = false
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, TourError};
use crate::tour::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = TourError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(TourError::UnknownFormat(s.to_string())),
        }
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = TourError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TourConfig {
    pub pages: Vec<Page>,
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for TourConfig {
    fn default() -> Self {
        TourConfig {
            pages: Page::all(),
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl TourConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| TourError::io(path, e))?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Applies command-line overrides. Positional pages replace the
    /// configured list rather than extending it.
    pub fn with_overrides(mut self, args: &CliArgs) -> Self {
        if !args.pages.is_empty() {
            self.pages = args.pages.clone();
        }
        if args.json {
            self.format = OutputFormat::Json;
        }
        if args.no_color {
            self.color = false;
        }
        self
    }
}

/// Parsed form of `guided_tour [PAGE...] [--json] [--no-color] [--config PATH]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub pages: Vec<Page>,
    pub json: bool,
    pub no_color: bool,
    pub config_path: Option<PathBuf>,
}

impl CliArgs {
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = CliArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => parsed.json = true,
                "--no-color" => parsed.no_color = true,
                "--config" => {
                    let path = args
                        .next()
                        .ok_or_else(|| TourError::MissingArgument(arg.clone()))?;
                    parsed.config_path = Some(PathBuf::from(path));
                }
                flag if flag.starts_with("--") => {
                    return Err(TourError::UnknownFlag(flag.to_string()));
                }
                page => parsed.pages.push(page.parse()?),
            }
        }

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = TourConfig::default();
        assert_eq!(config.pages, Page::all());
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.color);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        assert_eq!(TourConfig::from_toml_str("").unwrap(), TourConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let config = TourConfig::from_toml_str(
            r#"
            pages = ["protocols"]
            format = "json"
            color = false
            "#,
        )
        .unwrap();
        assert_eq!(config.pages, vec![Page::ProtocolsAndExtensions]);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.color);
    }

    #[test]
    fn test_unknown_page_in_toml() {
        let err = TourConfig::from_toml_str(r#"pages = ["closures"]"#).unwrap_err();
        assert!(matches!(err, TourError::Config(_)));
        assert!(err.to_string().contains("closures"));
    }

    #[test]
    fn test_unknown_key_in_toml() {
        let err = TourConfig::from_toml_str("colour = true").unwrap_err();
        assert!(matches!(err, TourError::Config(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = TourConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, TourError::Io { .. }));
    }

    #[test]
    fn test_parse_args() {
        let parsed = CliArgs::parse(args(&[
            "generics",
            "--json",
            "--no-color",
            "--config",
            "tour.toml",
        ]))
        .unwrap();
        assert_eq!(parsed.pages, vec![Page::Generics]);
        assert!(parsed.json);
        assert!(parsed.no_color);
        assert_eq!(parsed.config_path, Some(PathBuf::from("tour.toml")));
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(matches!(
            CliArgs::parse(args(&["--config"])),
            Err(TourError::MissingArgument(_))
        ));
        assert!(matches!(
            CliArgs::parse(args(&["--verbose"])),
            Err(TourError::UnknownFlag(_))
        ));
        assert!(matches!(
            CliArgs::parse(args(&["closures"])),
            Err(TourError::UnknownPage(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let cli = CliArgs {
            pages: vec![Page::Generics],
            json: true,
            no_color: true,
            config_path: None,
        };
        let config = TourConfig::default().with_overrides(&cli);
        assert_eq!(config.pages, vec![Page::Generics]);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.color);

        let untouched = TourConfig::default().with_overrides(&CliArgs::default());
        assert_eq!(untouched, TourConfig::default());
    }
}

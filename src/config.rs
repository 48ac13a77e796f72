//! Run configuration: which sources to read and where matches go.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

/// Public feeds aggregated when no sources are given.
pub const DEFAULT_SOURCES: &[&str] = &[
    "https://raw.githubusercontent.com/Epodonios/v2ray-configs/refs/heads/main/Config%20list1.txt",
    "https://raw.githubusercontent.com/barry-far/V2ray-Configs/refs/heads/main/Sub1.txt",
    "https://raw.githubusercontent.com/lagzian/SS-Collector/refs/heads/main/reality.txt",
    "https://raw.githubusercontent.com/soroushmirzaei/telegram-configs-collector/main/layers/ipv4",
    "https://raw.githubusercontent.com/soroushmirzaei/telegram-configs-collector/main/layers/ipv6",
    "https://raw.githubusercontent.com/M-logique/Proxies/refs/heads/main/proxies/tvc/configshub.txt",
    "https://raw.githubusercontent.com/NRi94/a1/refs/heads/main/svmes.txt",
    "https://raw.githubusercontent.com/Surfboardv2ray/TGParse/refs/heads/main/configtg.txt",
];

pub const DEFAULT_OUTPUT: &str = "output/xhttp.txt";

#[derive(Debug, Clone)]
pub struct Config {
    /// Processed strictly in this order.
    pub sources: Vec<String>,
    pub output_path: PathBuf,
    /// Per-request timeout; `None` blocks until the server answers.
    pub timeout: Option<Duration>,
    /// Create the output file's parent directory if it is missing.
    pub create_parent: bool,
}

impl Config {
    pub fn new(sources: Vec<String>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            sources,
            output_path: output_path.into(),
            timeout: None,
            create_parent: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(
            DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect(),
            DEFAULT_OUTPUT,
        )
    }
}

/// Parses a subscriptions list: one reference per line, `#` comments and blanks ignored.
pub fn parse_sources(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|s| s.to_string())
        .collect()
}

pub fn load_sources_file(path: &Path) -> Result<Vec<String>, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::SourcesFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_sources(&text))
}

/// Combines list-file entries and explicit references, falling back to
/// [`DEFAULT_SOURCES`] only when neither was supplied.
pub fn resolve_sources(from_file: Option<Vec<String>>, positional: Vec<String>) -> Vec<String> {
    match from_file {
        Some(mut sources) => {
            sources.extend(positional);
            sources
        }
        None if positional.is_empty() => DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect(),
        None => positional,
    }
}

//! Settings file for the boundary layer (size limit, cache, file walking).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings file names searched for in the current directory.
pub const DEFAULT_SETTINGS_NAMES: &[&str] = &["codelens.yaml", ".codelens.yaml"];

/// The template written by `codelens init`.
pub const DEFAULT_TEMPLATE: &str = include_str!("templates/default.yaml");

/// Top-level settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    /// Maximum input length in characters.
    #[serde(default = "default_max_content_chars")]
    pub max_content_chars: usize,
    #[serde(default)]
    pub cache: CacheSettings,
    /// Glob patterns for paths to exclude (e.g. "**/dist/**").
    #[serde(default)]
    pub excluded_paths: Vec<String>,
    /// Extensions collected from directories.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheSettings {
    #[serde(default = "default_cache_capacity")]
    pub capacity: usize,
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
}

fn default_max_content_chars() -> usize {
    1_000_000
}

fn default_cache_capacity() -> usize {
    100
}

fn default_cache_ttl() -> u64 {
    600
}

fn default_extensions() -> Vec<String> {
    [
        "py", "js", "jsx", "ts", "tsx", "java", "c", "h", "cpp", "hpp", "cs", "go", "rs", "rb",
        "php", "sh", "json", "yaml", "yml", "toml", "xml", "md",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            capacity: default_cache_capacity(),
            ttl_secs: default_cache_ttl(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_content_chars: default_max_content_chars(),
            cache: CacheSettings::default(),
            excluded_paths: Vec::new(),
            extensions: default_extensions(),
        }
    }
}

impl Settings {
    /// Parse settings from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::parse_str(&content)
    }

    pub fn parse_str(content: &str) -> anyhow::Result<Self> {
        // An empty file deserializes to null, which means "all defaults".
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Settings = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    /// Find a settings file in `dir`.
    pub fn discover(dir: &Path) -> Option<PathBuf> {
        DEFAULT_SETTINGS_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Load from an explicit path, else a discovered file, else defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::parse_file(path),
            None => match Self::discover(Path::new(".")) {
                Some(path) => {
                    log::debug!("using settings from {}", path.display());
                    Self::parse_file(path)
                }
                None => Ok(Self::default()),
            },
        }
    }

    /// Check if a path should be excluded based on excluded_paths patterns.
    /// Uses globset for matching, which supports `**` for recursive directory matching.
    pub fn is_path_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.excluded_paths.iter().any(|pattern| match globset::Glob::new(pattern) {
            Ok(glob) => glob.compile_matcher().is_match(&*path_str),
            Err(e) => {
                log::warn!("ignoring invalid exclusion glob {:?}: {}", pattern, e);
                false
            }
        })
    }

    /// Whether a file's extension is one we collect.
    pub fn wants_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.max_content_chars, 1_000_000);
        assert_eq!(s.cache.capacity, 100);
        assert_eq!(s.cache.ttl_secs, 600);
        assert!(s.excluded_paths.is_empty());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let s = Settings::parse_str("cache:\n  ttl_secs: 5\n").unwrap();
        assert_eq!(s.cache.ttl_secs, 5);
        assert_eq!(s.cache.capacity, 100);
        assert_eq!(s.max_content_chars, 1_000_000);
    }

    #[test]
    fn test_empty_file_is_default() {
        let s = Settings::parse_str("").unwrap();
        assert_eq!(s.max_content_chars, 1_000_000);
    }

    #[test]
    fn test_template_parses() {
        let s = Settings::parse_str(DEFAULT_TEMPLATE).unwrap();
        assert_eq!(s.max_content_chars, 1_000_000);
        assert!(s.extensions.iter().any(|e| e == "py"));
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(Settings::parse_str("max_content_chars: [").is_err());
    }

    #[test]
    fn test_excluded_paths() {
        let s = Settings {
            excluded_paths: vec!["**/dist/**".to_string()],
            ..Default::default()
        };
        assert!(s.is_path_excluded(Path::new("web/dist/app.js")));
        assert!(!s.is_path_excluded(Path::new("web/src/app.js")));
    }

    #[test]
    fn test_extensions() {
        let s = Settings::default();
        assert!(s.wants_extension(Path::new("a/b.PY")));
        assert!(!s.wants_extension(Path::new("a/b.png")));
        assert!(!s.wants_extension(Path::new("Makefile")));
    }

    #[test]
    fn test_discover() {
        let dir = TempDir::new().unwrap();
        assert!(Settings::discover(dir.path()).is_none());
        fs::write(dir.path().join(".codelens.yaml"), "extensions: [py]\n").unwrap();
        let found = Settings::discover(dir.path()).unwrap();
        assert_eq!(Settings::parse_file(found).unwrap().extensions, vec!["py"]);
    }
}

//! The analysis facade and the runner that feeds it.
//!
//! [`analyze`] is the pure core: detect the language, then derive structure,
//! ML signal, complexity, explanation and documented code from the same
//! `(text, label)` pair. [`Runner`] adds what a caller needs around it:
//! input size checks, result caching, file reading and parallel batches.

use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use walkdir::WalkDir;

use crate::analysis::{analyze_structure, detect_ml, MlSignal, Structure};
use crate::cache::AnalysisCache;
use crate::complexity::{self, ComplexityScores};
use crate::config::Settings;
use crate::document::document;
use crate::error::InputError;
use crate::explain::explain;
use crate::language::{self, Language};

/// Directory names never descended into.
const SKIPPED_DIRS: &[&str] = &["node_modules", "target", "vendor"];

/// Extensionless file names collected alongside the configured extensions.
const DOTFILE_NAMES: &[&str] = &[".env", ".gitignore", ".dockerignore"];

/// Everything computed for one input.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub language: Language,
    pub structure: Structure,
    pub explanation: String,
    pub documented_code: String,
    pub complexity: ComplexityScores,
    pub ml_info: MlSignal,
}

/// Analyze one input. Never fails; degraded inputs get fallback values.
pub fn analyze(filename: Option<&str>, content: &str) -> AnalysisResult {
    let language = language::detect(filename, content);
    let structure = analyze_structure(content, language);
    let ml_info = detect_ml(content);
    let complexity = complexity::estimate(content, &structure.metrics);
    let explanation = explain(language, &structure, &ml_info);
    let documented_code = document(content, language, &structure.metrics);

    AnalysisResult {
        language,
        structure,
        explanation,
        documented_code,
        complexity,
        ml_info,
    }
}

/// Validates, caches and batches analyses.
pub struct Runner {
    settings: Settings,
    cache: AnalysisCache,
}

impl Runner {
    /// Create a runner with a cache sized from `settings`.
    pub fn new(settings: Settings) -> Self {
        let cache = AnalysisCache::new(
            settings.cache.capacity,
            Duration::from_secs(settings.cache.ttl_secs),
        );
        Self { settings, cache }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn cache(&self) -> &AnalysisCache {
        &self.cache
    }

    /// Analyze in-memory content, rejecting it if it exceeds the size limit.
    pub fn analyze_content(
        &self,
        filename: Option<&str>,
        content: &str,
    ) -> Result<AnalysisResult, InputError> {
        let len = content.chars().count();
        if len > self.settings.max_content_chars {
            return Err(InputError::TooLarge {
                len,
                limit: self.settings.max_content_chars,
            });
        }

        let key = AnalysisCache::fingerprint(filename, content);
        if let Some(hit) = self.cache.get(&key) {
            return Ok(hit);
        }

        let result = analyze(filename, content);
        self.cache.set(key, result.clone());
        Ok(result)
    }

    /// Read a UTF-8 file and analyze it under its file name.
    pub fn analyze_file(&self, path: &Path) -> Result<AnalysisResult, InputError> {
        let bytes = std::fs::read(path).map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content = String::from_utf8(bytes).map_err(|_| InputError::NotUtf8 {
            path: path.to_path_buf(),
        })?;
        let filename = path.file_name().and_then(|n| n.to_str());
        self.analyze_content(filename, &content)
    }

    /// Analyze files in parallel. Results keep the order of `paths`.
    pub fn analyze_paths(
        &self,
        paths: &[PathBuf],
    ) -> Vec<(PathBuf, Result<AnalysisResult, InputError>)> {
        paths
            .par_iter()
            .map(|path| {
                let result = self.analyze_file(path);
                if let Err(e) = &result {
                    log::warn!("{}", e);
                }
                (path.clone(), result)
            })
            .collect()
    }

    /// Expand `root` into the files to analyze.
    ///
    /// A file is returned as-is. Directories are walked, skipping hidden
    /// and dependency directories, and filtered by extension and the
    /// exclusion globs.
    pub fn collect_files(&self, root: &Path) -> anyhow::Result<Vec<PathBuf>> {
        if root.is_file() {
            return Ok(vec![root.to_path_buf()]);
        }

        let mut files = Vec::new();
        let walker = WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                if e.depth() == 0 || !e.file_type().is_dir() {
                    return true;
                }
                let name = e.file_name().to_string_lossy();
                !name.starts_with('.') && !SKIPPED_DIRS.contains(&&*name)
            });

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let name = entry.file_name().to_string_lossy();
            if !self.settings.wants_extension(path) && !DOTFILE_NAMES.contains(&&*name) {
                continue;
            }
            if self.settings.is_path_excluded(path) {
                log::debug!("skipping excluded {}", path.display());
                continue;
            }
            files.push(path.to_path_buf());
        }

        Ok(files)
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_analyze_empty_input() {
        let r = analyze(None, "");
        assert_eq!(r.language, Language::Unknown);
        assert_eq!(r.structure.metrics.total_lines, 1);
        assert_eq!(r.complexity.cyclomatic_complexity, 1);
        assert_eq!(r.complexity.maintainability_index, 100.0);
        assert!(!r.ml_info.is_ml_code);
    }

    #[test]
    fn test_json_keys() {
        let value = serde_json::to_value(analyze(Some("app.js"), "console.log(1)")).unwrap();
        for key in ["language", "structure", "explanation", "documented_code", "complexity", "ml_info"] {
            assert!(value.get(key).is_some(), "missing {}", key);
        }
        // Metrics are flattened into the structure object.
        assert!(value["structure"]["total_lines"].is_number());
    }

    #[test]
    fn test_size_limit_counts_characters() {
        let settings = Settings {
            max_content_chars: 3,
            ..Default::default()
        };
        let runner = Runner::new(settings);
        // Three characters, more than three bytes.
        assert!(runner.analyze_content(None, "äöü").is_ok());
        match runner.analyze_content(None, "abcd") {
            Err(InputError::TooLarge { len, limit }) => assert_eq!((len, limit), (4, 3)),
            other => panic!("expected TooLarge, got {:?}", other.map(|r| r.language)),
        }
    }

    #[test]
    fn test_results_are_cached() {
        let runner = Runner::default();
        let first = runner.analyze_content(Some("a.py"), "def f():\n    pass").unwrap();
        assert_eq!(runner.cache().len(), 1);
        let second = runner.analyze_content(Some("a.py"), "def f():\n    pass").unwrap();
        assert_eq!(first.documented_code, second.documented_code);
        assert_eq!(runner.cache().len(), 1);
    }

    #[test]
    fn test_collect_and_analyze_paths() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("b.py"), "import os\n").unwrap();
        std::fs::write(dir.path().join("a.js"), "let x = 1;\n").unwrap();
        std::fs::write(dir.path().join(".env"), "KEY=1\n").unwrap();
        std::fs::write(dir.path().join("image.png"), "not code").unwrap();
        std::fs::create_dir(dir.path().join("node_modules")).unwrap();
        std::fs::write(dir.path().join("node_modules").join("dep.js"), "x").unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        std::fs::write(dir.path().join(".git").join("hook.sh"), "x").unwrap();

        let runner = Runner::default();
        let files = runner.collect_files(dir.path()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec![".env", "a.js", "b.py"]);

        let results = runner.analyze_paths(&files);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].0, files[0]);
        let env = results[0].1.as_ref().unwrap();
        assert_eq!(env.language, Language::EnvironmentVariables);
        let py = results[2].1.as_ref().unwrap();
        assert_eq!(py.structure.metrics.import_statements, 1);
    }

    #[test]
    fn test_non_utf8_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bin.py");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        let err = Runner::default().analyze_file(&path).unwrap_err();
        assert!(matches!(err, InputError::NotUtf8 { .. }));
    }
}

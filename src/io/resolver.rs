//! Resolution of file and directory arguments into data files
//!
//! Directories are walked with `walkdir`; the result is filtered by
//! extension, hidden-ness and exclude patterns, de-duplicated and sorted so
//! multi-file output is stable.

use crate::error::{PeekError, Result};
use crate::io::reader::DocumentFormat;
use log::trace;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Configuration for file resolution
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Follow symbolic links
    pub follow_links: bool,
    /// Maximum recursion depth for directory traversal
    pub max_depth: Option<usize>,
    /// Include hidden files (starting with .)
    pub include_hidden: bool,
    /// Extensions picked up inside directories (lowercase, without the dot)
    pub extensions: Vec<String>,
    /// Glob-style patterns (`*`, `?`) matched against the full path
    pub exclude_patterns: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            follow_links: false,
            max_depth: None,
            include_hidden: false,
            extensions: DocumentFormat::extensions()
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            exclude_patterns: Vec::new(),
        }
    }
}

/// File resolver for handling multiple files and directories
#[derive(Debug)]
pub struct FileResolver {
    config: ResolverConfig,
    excludes: Vec<Regex>,
}

impl FileResolver {
    /// Create a new resolver with default configuration
    pub fn new() -> Self {
        Self {
            config: ResolverConfig::default(),
            excludes: Vec::new(),
        }
    }

    /// Create a new resolver with custom configuration
    ///
    /// Fails if an exclude pattern does not compile.
    pub fn with_config(config: ResolverConfig) -> Result<Self> {
        let excludes = config
            .exclude_patterns
            .iter()
            .map(|pattern| glob_to_regex(pattern))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { config, excludes })
    }

    /// Resolve paths to a sorted, de-duplicated list of files
    ///
    /// Files named explicitly are kept whatever their extension; extension
    /// filtering only applies to files found inside directories.
    pub fn resolve_paths<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Vec<PathBuf>> {
        let mut files = BTreeSet::new();

        for path in paths {
            let path = path.as_ref();
            if path.is_file() {
                if !self.is_excluded(path) {
                    files.insert(path.to_path_buf());
                }
            } else if path.is_dir() {
                files.extend(self.traverse_directory(path)?);
            } else {
                return Err(PeekError::file_not_found(path));
            }
        }

        Ok(files.into_iter().collect())
    }

    fn traverse_directory(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut found = Vec::new();

        let walker = WalkDir::new(dir)
            .follow_links(self.config.follow_links)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX));

        for entry in walker {
            let entry = entry.map_err(|e| {
                PeekError::path_resolution(format!("Error traversing directory: {}", e))
            })?;
            let path = entry.path();

            if !entry.file_type().is_file() {
                continue;
            }

            let relative = path.strip_prefix(dir).unwrap_or(path);
            if !self.config.include_hidden && is_hidden(relative) {
                trace!("skipping hidden file {}", path.display());
                continue;
            }

            if !self.has_wanted_extension(path) || self.is_excluded(path) {
                continue;
            }

            found.push(path.to_path_buf());
        }

        Ok(found)
    }

    fn has_wanted_extension(&self, path: &Path) -> bool {
        if self.config.extensions.is_empty() {
            return true;
        }
        let ext = path
            .extension()
            .map(|s| s.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        self.config.extensions.iter().any(|wanted| *wanted == ext)
    }

    fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.excludes.iter().any(|re| re.is_match(&path_str))
    }

    /// Get the resolver configuration
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }
}

impl Default for FileResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Hidden files and files inside hidden directories, relative to the walk root
fn is_hidden(path: &Path) -> bool {
    path.components().any(|component| {
        let name = component.as_os_str().to_string_lossy();
        name.starts_with('.') && name != "." && name != ".."
    })
}

/// Translate a `*`/`?` glob into an anchored regex
fn glob_to_regex(pattern: &str) -> Result<Regex> {
    let mut expr = String::from("^");
    for ch in pattern.chars() {
        match ch {
            '*' => expr.push_str(".*"),
            '?' => expr.push('.'),
            other => expr.push_str(&regex::escape(&other.to_string())),
        }
    }
    expr.push('$');
    Ok(Regex::new(&expr)?)
}

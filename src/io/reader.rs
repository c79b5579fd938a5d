//! Document reading for JSON and YAML sources
//!
//! Files are decoded by extension (`.json`, `.yaml`, `.yml`). Content whose
//! format is unknown, such as stdin, is tried as JSON first and then as YAML.

use crate::core::YamlJsonConverter;
use crate::error::{PeekError, Result};
use log::debug;
use serde_json::Value;
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Encoding of a source document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Detect the format from a file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_string_lossy().to_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// File extensions recognised for each format
    pub fn extensions() -> &'static [&'static str] {
        &["json", "yaml", "yml"]
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// A decoded document ready to be queried
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Where the document came from; `None` for strings and stdin
    pub source: Option<PathBuf>,
    /// The format it was decoded from
    pub format: DocumentFormat,
    /// The decoded value
    pub value: Value,
}

impl Document {
    /// Display name of the source, `-` when there is no file
    pub fn source_name(&self) -> String {
        self.source
            .as_ref()
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

/// Configuration for the document reader
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Maximum document size to read (in bytes)
    pub max_file_size: Option<u64>,
    /// Force a format instead of detecting it
    pub format: Option<DocumentFormat>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            max_file_size: Some(64 * 1024 * 1024), // 64MB default limit
            format: None,
        }
    }
}

/// Reader producing [`Document`]s from files, strings and streams
pub struct DocumentReader {
    config: ReaderConfig,
}

impl DocumentReader {
    /// Create a new reader with default configuration
    pub fn new() -> Self {
        Self {
            config: ReaderConfig::default(),
        }
    }

    /// Create a new reader with custom configuration
    pub fn with_config(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read a document from a file path
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<Document> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(PeekError::file_not_found(path));
        }

        if !path.is_file() {
            return Err(PeekError::unsupported_format(path));
        }

        if let Some(limit) = self.config.max_file_size {
            let size = fs::metadata(path)?.len();
            if size > limit {
                return Err(PeekError::too_large(path, size, limit));
            }
        }

        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::PermissionDenied => PeekError::permission_denied(path),
            _ => PeekError::Io(e),
        })?;

        let format = self.config.format.or_else(|| DocumentFormat::from_path(path));
        debug!(
            "read {} bytes from {} (format: {})",
            content.len(),
            path.display(),
            format.map(|f| f.to_string()).unwrap_or_else(|| "auto".to_string())
        );
        self.parse_content(&content, format, Some(path))
    }

    /// Read a whole stream, e.g. stdin
    pub fn read_from<R: Read>(&self, mut reader: R) -> Result<Document> {
        let mut content = String::new();
        match self.config.max_file_size {
            Some(limit) => {
                // One byte past the limit tells an oversized stream apart
                let read = reader
                    .by_ref()
                    .take(limit.saturating_add(1))
                    .read_to_string(&mut content)?;
                if read as u64 > limit {
                    return Err(PeekError::too_large("-", read as u64, limit));
                }
            }
            None => {
                reader.read_to_string(&mut content)?;
            }
        }
        self.parse_content(&content, self.config.format, None)
    }

    /// Decode document text
    ///
    /// With no format given, JSON is tried first and YAML second.
    pub fn parse_content(
        &self,
        content: &str,
        format: Option<DocumentFormat>,
        path: Option<&Path>,
    ) -> Result<Document> {
        let source = path.map(Path::to_path_buf);
        let display = path.unwrap_or_else(|| Path::new("-"));

        let (format, value) = match format {
            Some(DocumentFormat::Json) => (
                DocumentFormat::Json,
                serde_json::from_str(content)
                    .map_err(|e| PeekError::invalid_document(display, e.to_string()))?,
            ),
            Some(DocumentFormat::Yaml) => (
                DocumentFormat::Yaml,
                Self::decode_yaml(content, display)?,
            ),
            None => match serde_json::from_str(content) {
                Ok(value) => (DocumentFormat::Json, value),
                Err(json_err) => {
                    debug!("not JSON ({}), trying YAML", json_err);
                    (DocumentFormat::Yaml, Self::decode_yaml(content, display)?)
                }
            },
        };

        Ok(Document {
            source,
            format,
            value,
        })
    }

    fn decode_yaml(content: &str, display: &Path) -> Result<Value> {
        YamlJsonConverter::parse_yaml(content).map_err(|e| match e {
            PeekError::Yaml(inner) => PeekError::invalid_document(display, inner.to_string()),
            other => other,
        })
    }

    /// Get reader configuration
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }
}

impl Default for DocumentReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience functions for common operations
pub mod convenience {
    use super::*;

    /// Read a document from a file path with default settings
    pub fn read_document<P: AsRef<Path>>(path: P) -> Result<Document> {
        DocumentReader::new().read_file(path)
    }

    /// Decode document text with default settings
    pub fn parse_document(content: &str) -> Result<Document> {
        DocumentReader::new().parse_content(content, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    fn temp_with_suffix(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(DocumentFormat::from_path("a.json"), Some(DocumentFormat::Json));
        assert_eq!(DocumentFormat::from_path("a.YML"), Some(DocumentFormat::Yaml));
        assert_eq!(DocumentFormat::from_path("a.yaml"), Some(DocumentFormat::Yaml));
        assert_eq!(DocumentFormat::from_path("a.txt"), None);
        assert_eq!(DocumentFormat::from_path("noext"), None);
    }

    #[test]
    fn test_read_json_file() {
        let file = temp_with_suffix(".json", r#"{"a": [1, 2]}"#);
        let doc = DocumentReader::new().read_file(file.path()).unwrap();
        assert_eq!(doc.format, DocumentFormat::Json);
        assert_eq!(doc.value, json!({"a": [1, 2]}));
        assert_eq!(doc.source.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_read_yaml_file() {
        let file = temp_with_suffix(".yaml", "a:\n  - 1\n  - 2\n");
        let doc = DocumentReader::new().read_file(file.path()).unwrap();
        assert_eq!(doc.format, DocumentFormat::Yaml);
        assert_eq!(doc.value, json!({"a": [1, 2]}));
    }

    #[test]
    fn test_invalid_json_file() {
        let file = temp_with_suffix(".json", "{\"a\": ");
        let result = DocumentReader::new().read_file(file.path());
        assert!(matches!(result, Err(PeekError::InvalidDocument { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = DocumentReader::new().read_file("/nonexistent/data.json");
        assert!(matches!(result, Err(PeekError::FileNotFound { .. })));
    }

    #[test]
    fn test_size_limit() {
        let file = temp_with_suffix(".json", r#"{"padding": "0123456789"}"#);
        let reader = DocumentReader::with_config(ReaderConfig {
            max_file_size: Some(8),
            ..Default::default()
        });
        let result = reader.read_file(file.path());
        assert!(matches!(result, Err(PeekError::TooLarge { limit: 8, .. })));
    }

    #[test]
    fn test_auto_detection() {
        let reader = DocumentReader::new();
        let doc = reader.parse_content("[1, 2]", None, None).unwrap();
        assert_eq!(doc.format, DocumentFormat::Json);

        let doc = reader.parse_content("name: x\n", None, None).unwrap();
        assert_eq!(doc.format, DocumentFormat::Yaml);
        assert_eq!(doc.value, json!({"name": "x"}));
        assert_eq!(doc.source_name(), "-");
    }

    #[test]
    fn test_forced_format() {
        let reader = DocumentReader::with_config(ReaderConfig {
            format: Some(DocumentFormat::Json),
            ..Default::default()
        });
        let result = reader.parse_content("name: x\n", reader.config().format, None);
        assert!(matches!(result, Err(PeekError::InvalidDocument { .. })));
    }

    #[test]
    fn test_read_from_stream() {
        let doc = DocumentReader::new()
            .read_from(&b"{\"k\": true}"[..])
            .unwrap();
        assert_eq!(doc.value, json!({"k": true}));

        let reader = DocumentReader::with_config(ReaderConfig {
            max_file_size: Some(4),
            ..Default::default()
        });
        let result = reader.read_from(&b"{\"k\": true}"[..]);
        assert!(matches!(result, Err(PeekError::TooLarge { .. })));
    }
}

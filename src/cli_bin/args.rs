//! Command-line argument definitions and parsing

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Main CLI application
#[derive(Parser, Debug)]
#[command(
    name = "jsonpeek",
    version,
    about = "Extract values from JSON and YAML documents with a compact path syntax",
    long_about = "jsonpeek evaluates simple paths such as $.store.books[0].title, \
                  $.tags[*] or $..id against JSON and YAML documents read from files, \
                  directories, inline text or stdin."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value at a path
    Get(GetArgs),
    /// Check whether a path finds a value (exit code 0 if it does, 1 if not)
    Exists(ExistsArgs),
    /// Print the length of the array, object or string at a path
    Size(SizeArgs),
    /// Print the type of the value at a path
    Type(TypeArgs),
    /// Show how a path is split into segments
    Segments(SegmentsArgs),
}

/// Where documents come from
#[derive(Args, Debug, Clone, Default)]
pub struct InputOptions {
    /// Files or directories to read (stdin when none and no --data)
    pub files: Vec<PathBuf>,

    /// Query this inline JSON text instead of reading files (always read as JSON)
    #[arg(long, value_name = "JSON", conflicts_with_all = ["files", "input_format"])]
    pub data: Option<String>,

    /// Decode input as this format instead of detecting it
    #[arg(long, value_enum)]
    pub input_format: Option<InputFormat>,

    /// Follow symbolic links when processing directories
    #[arg(long)]
    pub follow_links: bool,

    /// Maximum depth for directory recursion
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Include hidden files (starting with .)
    #[arg(long)]
    pub include_hidden: bool,

    /// Only pick up files with these extensions inside directories
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Exclude files matching these patterns
    #[arg(long = "exclude", value_name = "PATTERN")]
    pub exclude_patterns: Vec<String>,

    /// Refuse documents larger than this many bytes
    #[arg(long, value_name = "BYTES")]
    pub max_size: Option<u64>,
}

/// Path handling shared by every query command
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct PathOptions {
    /// Accept paths without the leading $ (a.b is read as $.a.b)
    #[arg(long)]
    pub auto_root: bool,
}

/// Arguments for the get command
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Path expression, e.g. $.items[0].name
    pub path: String,

    #[command(flatten)]
    pub input: InputOptions,

    #[command(flatten)]
    pub path_options: PathOptions,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Pretty print output
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the exists command
#[derive(Args, Debug)]
pub struct ExistsArgs {
    /// Path expression
    pub path: String,

    #[command(flatten)]
    pub input: InputOptions,

    #[command(flatten)]
    pub path_options: PathOptions,
}

/// Arguments for the size command
#[derive(Args, Debug)]
pub struct SizeArgs {
    #[command(flatten)]
    pub input: InputOptions,

    /// Path expression (defaults to the whole document)
    #[arg(short, long, value_name = "PATH")]
    pub path: Option<String>,

    #[command(flatten)]
    pub path_options: PathOptions,
}

/// Arguments for the type command
#[derive(Args, Debug)]
pub struct TypeArgs {
    #[command(flatten)]
    pub input: InputOptions,

    /// Path expression (defaults to the whole document)
    #[arg(short, long, value_name = "PATH")]
    pub path: Option<String>,

    #[command(flatten)]
    pub path_options: PathOptions,
}

/// Arguments for the segments command
#[derive(Args, Debug)]
pub struct SegmentsArgs {
    /// Path expression
    pub path: String,

    #[command(flatten)]
    pub path_options: PathOptions,
}

/// Output formats for the get command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format
    Json,
    /// YAML format
    Yaml,
    /// Strings without quotes, everything else as compact JSON
    Raw,
}

/// Input formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl From<InputFormat> for jsonpeek::DocumentFormat {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Json => Self::Json,
            InputFormat::Yaml => Self::Yaml,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parsing() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_get_command() {
        let args = vec!["jsonpeek", "get", "$.title", "doc.json", "more.yaml"];
        let cli = Cli::try_parse_from(args).unwrap();

        if let Commands::Get(get_args) = cli.command {
            assert_eq!(get_args.path, "$.title");
            assert_eq!(
                get_args.input.files,
                vec![PathBuf::from("doc.json"), PathBuf::from("more.yaml")]
            );
            assert_eq!(get_args.format, OutputFormat::Json);
            assert!(!get_args.path_options.auto_root);
        } else {
            panic!("Expected Get command");
        }
    }

    #[test]
    fn test_inline_data() {
        let args = vec![
            "jsonpeek",
            "exists",
            "name",
            "--auto-root",
            "--data",
            r#"{"name": null}"#,
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        if let Commands::Exists(exists_args) = cli.command {
            assert_eq!(exists_args.input.data.as_deref(), Some(r#"{"name": null}"#));
            assert!(exists_args.path_options.auto_root);
            assert!(exists_args.input.files.is_empty());
        } else {
            panic!("Expected Exists command");
        }
    }

    #[test]
    fn test_data_conflicts_with_files() {
        let args = vec!["jsonpeek", "get", "$", "--data", "{}", "file.json"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_data_conflicts_with_input_format() {
        let args = vec![
            "jsonpeek",
            "get",
            "$",
            "--data",
            "a: 1",
            "--input-format",
            "yaml",
        ];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_optional_path() {
        let cli = Cli::try_parse_from(vec!["jsonpeek", "size", "doc.json"]).unwrap();
        if let Commands::Size(size_args) = cli.command {
            assert_eq!(size_args.path, None);
            assert_eq!(size_args.input.files, vec![PathBuf::from("doc.json")]);
        } else {
            panic!("Expected Size command");
        }

        let cli =
            Cli::try_parse_from(vec!["jsonpeek", "type", "-p", "$.a", "doc.json"]).unwrap();
        if let Commands::Type(type_args) = cli.command {
            assert_eq!(type_args.path.as_deref(), Some("$.a"));
        } else {
            panic!("Expected Type command");
        }
    }

    #[test]
    fn test_file_options() {
        let args = vec![
            "jsonpeek",
            "get",
            "$",
            "--follow-links",
            "--max-depth",
            "3",
            "--include-hidden",
            "--ext",
            "json",
            "--exclude",
            "*.lock.json",
            "--input-format",
            "yaml",
            "--format",
            "yaml",
            "data/",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        if let Commands::Get(get_args) = cli.command {
            assert!(get_args.input.follow_links);
            assert_eq!(get_args.input.max_depth, Some(3));
            assert!(get_args.input.include_hidden);
            assert_eq!(get_args.input.extensions, vec!["json".to_string()]);
            assert_eq!(get_args.input.exclude_patterns, vec!["*.lock.json".to_string()]);
            assert_eq!(get_args.input.input_format, Some(InputFormat::Yaml));
            assert_eq!(get_args.format, OutputFormat::Yaml);
        } else {
            panic!("Expected Get command");
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(vec!["jsonpeek", "-v", "segments", "$.a[0]"]).unwrap();
        assert!(cli.verbose);
        assert!(Cli::try_parse_from(vec!["jsonpeek", "-v", "-q", "segments", "$"]).is_err());
    }
}

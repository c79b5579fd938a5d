//! CLI command handlers that bridge CLI arguments to library operations
//!
//! Each handler returns whether the command succeeded in the query sense:
//! `get` fails when no document yields a value and `exists` fails when any
//! document lacks one. `main` turns that into the process exit code.

use crate::cli_bin::args::*;
use jsonpeek::core::{Evaluator, EvaluatorConfig, JsonInput};
use jsonpeek::error::Result;
use jsonpeek::io::{Document, DocumentReader, FileResolver, ReaderConfig, ResolverConfig};
use log::{debug, info, warn};
use serde_json::Value;
use std::collections::BTreeMap;
use std::io;

/// One queryable source
enum LoadedInput {
    /// Inline text from `--data`, decoded lazily by the query functions
    Text(String),
    /// A decoded file or stdin document
    Document(Document),
}

impl LoadedInput {
    fn input(&self) -> JsonInput<'_> {
        match self {
            Self::Text(text) => JsonInput::Text(text),
            Self::Document(document) => JsonInput::Value(&document.value),
        }
    }

    fn name(&self) -> String {
        match self {
            Self::Text(_) => "--data".to_string(),
            Self::Document(document) => document.source_name(),
        }
    }
}

/// Execute the get command
pub fn get_command(args: GetArgs) -> Result<bool> {
    debug!("Executing get command with args: {:?}", args);

    let evaluator = create_evaluator(&args.path_options);
    let inputs = load_inputs(&args.input)?;
    if inputs.is_empty() {
        warn!("No files found to process");
        return Ok(false);
    }

    if inputs.len() == 1 {
        return match evaluator.get(inputs[0].input(), &args.path) {
            Some(value) => {
                output_value(&value, args.format, args.pretty)?;
                Ok(true)
            }
            None => {
                info!("No value at {} in {}", args.path, inputs[0].name());
                Ok(false)
            }
        };
    }

    let mut results = BTreeMap::new();
    for input in &inputs {
        match evaluator.get(input.input(), &args.path) {
            Some(value) => {
                results.insert(input.name(), value);
            }
            None => debug!("No value at {} in {}", args.path, input.name()),
        }
    }

    if results.is_empty() {
        info!("No matching values found");
        return Ok(false);
    }

    let combined = Value::Object(results.into_iter().collect());
    output_value(&combined, args.format, args.pretty)?;
    Ok(true)
}

/// Execute the exists command
pub fn exists_command(args: ExistsArgs) -> Result<bool> {
    debug!("Executing exists command with args: {:?}", args);

    let evaluator = create_evaluator(&args.path_options);
    let inputs = load_inputs(&args.input)?;
    if inputs.is_empty() {
        warn!("No files found to process");
        return Ok(false);
    }

    let mut all_found = true;
    for input in &inputs {
        let found = evaluator.exists_input(input.input(), &args.path);
        if inputs.len() > 1 {
            println!("{}: {}", input.name(), found);
        }
        if !found {
            info!("{} not found in {}", args.path, input.name());
            all_found = false;
        }
    }

    Ok(all_found)
}

/// Execute the size command
pub fn size_command(args: SizeArgs) -> Result<bool> {
    debug!("Executing size command with args: {:?}", args);

    let evaluator = create_evaluator(&args.path_options);
    let inputs = load_inputs(&args.input)?;
    if inputs.is_empty() {
        warn!("No files found to process");
        return Ok(false);
    }

    for input in &inputs {
        let size = evaluator.size_input(input.input(), args.path.as_deref());
        print_line(&inputs, input, size);
    }

    Ok(true)
}

/// Execute the type command
pub fn type_command(args: TypeArgs) -> Result<bool> {
    debug!("Executing type command with args: {:?}", args);

    let evaluator = create_evaluator(&args.path_options);
    let inputs = load_inputs(&args.input)?;
    if inputs.is_empty() {
        warn!("No files found to process");
        return Ok(false);
    }

    for input in &inputs {
        let json_type = evaluator.type_of_input(input.input(), args.path.as_deref());
        print_line(&inputs, input, json_type);
    }

    Ok(true)
}

/// Execute the segments command
pub fn segments_command(args: SegmentsArgs) -> Result<bool> {
    debug!("Executing segments command with args: {:?}", args);

    let plan = create_evaluator(&args.path_options).plan(&args.path);
    println!("{}", plan);

    if let jsonpeek::core::PathPlan::Navigate(path) = &plan {
        for (position, segment) in path.segments().iter().enumerate() {
            if segment.is_malformed() {
                println!("  {}: {} (malformed)", position, segment);
            } else {
                println!("  {}: {}", position, segment);
            }
        }
        return Ok(!path.has_malformed());
    }

    Ok(plan != jsonpeek::core::PathPlan::Unrooted)
}

// Helper functions

fn create_evaluator(options: &PathOptions) -> Evaluator {
    Evaluator::with_config(EvaluatorConfig {
        auto_root: options.auto_root,
    })
}

fn create_reader(input: &InputOptions) -> DocumentReader {
    let defaults = ReaderConfig::default();
    DocumentReader::with_config(ReaderConfig {
        max_file_size: input.max_size.or(defaults.max_file_size),
        format: input.input_format.map(Into::into),
    })
}

fn create_resolver(input: &InputOptions) -> Result<FileResolver> {
    let defaults = ResolverConfig::default();
    let config = ResolverConfig {
        follow_links: input.follow_links,
        max_depth: input.max_depth,
        include_hidden: input.include_hidden,
        extensions: if input.extensions.is_empty() {
            defaults.extensions
        } else {
            input
                .extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_lowercase())
                .collect()
        },
        exclude_patterns: input.exclude_patterns.clone(),
    };

    FileResolver::with_config(config)
}

/// Gather every source named on the command line
///
/// Precedence: `--data`, then files and directories, then stdin.
fn load_inputs(input: &InputOptions) -> Result<Vec<LoadedInput>> {
    if let Some(text) = &input.data {
        return Ok(vec![LoadedInput::Text(text.clone())]);
    }

    let reader = create_reader(input);

    if input.files.is_empty() {
        debug!("Reading document from stdin");
        let document = reader.read_from(io::stdin().lock())?;
        return Ok(vec![LoadedInput::Document(document)]);
    }

    let files = create_resolver(input)?.resolve_paths(&input.files)?;
    let mut loaded = Vec::with_capacity(files.len());
    for file in &files {
        debug!("Processing file: {}", file.display());
        match reader.read_file(file) {
            Ok(document) => loaded.push(LoadedInput::Document(document)),
            Err(e) if files.len() > 1 && e.is_recoverable() => {
                warn!("Skipping {}: {}", file.display(), e);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(loaded)
}

fn print_line(inputs: &[LoadedInput], input: &LoadedInput, value: impl std::fmt::Display) {
    if inputs.len() > 1 {
        println!("{}: {}", input.name(), value);
    } else {
        println!("{}", value);
    }
}

fn output_value(value: &Value, format: OutputFormat, pretty: bool) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let output = if pretty {
                serde_json::to_string_pretty(value)?
            } else {
                serde_json::to_string(value)?
            };
            println!("{}", output);
        }
        OutputFormat::Yaml => {
            let output = serde_yaml::to_string(value)?;
            print!("{}", output);
        }
        OutputFormat::Raw => match value {
            Value::String(s) => println!("{}", s),
            other => println!("{}", serde_json::to_string(other)?),
        },
    }
    Ok(())
}

//! Document input: decoding JSON and YAML sources and resolving file arguments

pub mod reader;
pub mod resolver;

pub use reader::{convenience, Document, DocumentFormat, DocumentReader, ReaderConfig};
pub use resolver::{FileResolver, ResolverConfig};

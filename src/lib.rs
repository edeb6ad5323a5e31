// src/lib.rs
pub mod error;
pub mod formatters;
pub mod input;
pub mod modsec;
pub mod output_format;
pub mod pattern_extraction;
pub mod pipeline;
pub mod record;
pub mod tags;

pub use error::*;
pub use pipeline::*;

pub use input::{load_lines, read_lines};
pub use modsec::ModSecParser;
pub use output_format::{OutputFormat, OutputFormatter};
pub use pattern_extraction::FieldExtractor;
pub use record::{ErrorFields, FileFields, LogRecord};
pub use tags::{should_include, Tag, TagSelector};

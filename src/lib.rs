#![doc = include_str!("../README.md")]

pub use crate::document::Document;
pub use crate::error::Error;
pub use crate::export::CsvExporter;
pub use crate::types::*;

mod document;
mod error;
mod export;
mod types;

//! Core numeral transducer module

pub mod error;
mod models;
mod positions;
mod tables;
mod translator;

pub use error::{Result, WordyError};
pub use translator::{translate, WordyTranslator};

pub mod ast;
pub mod config;
pub mod error;
pub mod export;
pub mod functions;
pub mod lexer;
pub mod operators;
pub mod parser;
pub mod utils;

pub use ast::{Attribute, AttributeType, AttributeValue, Block, Document, Scalar, Scope};
pub use config::NeclConfig;
pub use error::NeclError;
pub use parser::{parse_lines, parse_str};

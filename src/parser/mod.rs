pub mod moenv_parser;

pub use moenv_parser::{MoenvParser, Parser};

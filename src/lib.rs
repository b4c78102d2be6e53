//! Parsers for Unicode Character Database files and the Fowler regex test
//! corpus, producing code point range tables for table generators.

pub mod codepoint;
pub mod continuation;
pub mod error;
pub mod fowler;
pub mod name;
pub mod reader;
pub mod table;


pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;

pub use codepoint::parse_code_point;
pub use codepoint::parse_code_point_range;
pub use codepoint::CodePoint;
pub use codepoint::CodePointRange;
pub use codepoint::MAX_CODE_POINT;
pub use fowler::read_fowler_tests;
pub use fowler::FowlerReader;
pub use fowler::FowlerTest;
pub use name::parse_character_name;
pub use name::Marker;
pub use reader::Record;
pub use reader::UcdReader;
pub use table::extended_pictographic;
pub use table::grapheme_cluster_break;
pub use table::word_break;
pub use table::PropertyTable;

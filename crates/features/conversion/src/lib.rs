//! Flag listing and string conversion.
//!
//! Parsing never fails: a miss resolves to the caller's default. A flag set's
//! zero member is a regular parse result.
mod listing;
mod parse;

pub use listing::{
    ValueFilter, flag_names, flags_set_in, flags_set_in_kind, join_flags, lowercase_names, names,
    values,
};
pub use parse::{parse, parse_from_number, parse_kind, parse_list, parse_nullable, parse_with};

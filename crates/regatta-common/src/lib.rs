//! Shared cell and column helpers for the regatta crates.

pub mod values;

pub use values::{
    any_to_i64, any_to_string, column_flags, column_strings, column_value_string,
    format_numeric, string_column,
};

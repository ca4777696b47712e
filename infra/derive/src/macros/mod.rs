pub mod error;
pub mod flag_set;

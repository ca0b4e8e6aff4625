// Common utilities shared by the generators
//
// - parse_utils: the arity literal parser and cons-list/ident helpers

mod parse_utils;

pub use parse_utils::*;

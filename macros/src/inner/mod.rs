//! Internal generators, invoked once from inside `multikey-map` itself.

pub mod schema;
pub mod tuple_paths;

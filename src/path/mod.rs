mod path;
mod builder;
mod bezier;

pub use path::*;
pub use builder::*;

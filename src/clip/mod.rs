mod clip_op;
mod intersect;
mod sweep;
mod clipper;

pub use clip_op::*;
pub use clipper::*;

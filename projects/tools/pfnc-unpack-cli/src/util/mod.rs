mod core;
mod parse;
mod throughput;

pub use core::*;
pub use parse::*;
pub use throughput::*;

mod format;
pub mod output;

pub use format::{DocumentFormat, UnknownFormat};
pub use output::{OutputDestination, OutputOptions, emit};

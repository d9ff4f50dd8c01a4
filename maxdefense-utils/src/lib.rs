mod json;
pub use json::*;
mod settings;
pub use settings::*;
mod stopwatch;
pub use stopwatch::*;

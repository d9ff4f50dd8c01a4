mod challenge;
pub use challenge::*;
mod error;
pub use error::*;
mod generator;
pub use generator::*;
mod item;
pub use item::*;
mod loader;
pub use loader::*;
mod selection;
pub use selection::*;

pub mod config;
pub mod draft;
pub mod records;
pub mod seed;
pub mod selection;
pub mod task;

pub use config::*;
pub use draft::*;
pub use records::*;
pub use selection::*;
pub use task::*;

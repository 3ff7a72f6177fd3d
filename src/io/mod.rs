pub mod config_io;
pub mod paths;
pub mod token_io;

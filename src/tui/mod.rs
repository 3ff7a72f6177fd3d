pub mod app;
pub mod form;
pub mod input;
pub mod nav;
pub mod render;
pub mod theme;

pub use app::run;

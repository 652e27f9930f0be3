pub mod app;
pub mod dialogs;
pub mod input;
pub mod render;
pub mod theme;

pub use app::run;

pub mod app;
pub mod detail_modal;
pub mod filter_panel;
pub mod plant_grid;
pub mod theme;
pub mod top_bar;

pub use app::VerdantApp;

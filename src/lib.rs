pub mod catalog;
pub mod core;
pub mod favorites;
pub mod gui;
pub mod persistence;

mod app;
mod config;
mod dom;
mod pages;
mod palette;
mod render;
mod state;

pub use app::run;

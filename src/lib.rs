#![allow(clippy::implicit_hasher)]
#![allow(unknown_lints)]

pub mod api;
pub mod components;
pub mod config;
pub mod constants;
pub mod flow;
pub mod logging;
pub mod models;

pub use components::app::App;

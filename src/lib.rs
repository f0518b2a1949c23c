#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::module_name_repetitions, // game::config::Config reads fine
)]
pub mod api;
pub mod frames;
pub mod game;

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod net;
pub mod o11y;
pub mod qr;
pub mod ui;
pub mod web;

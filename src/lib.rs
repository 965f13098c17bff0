//! Terminal contact form for a company website's inquiry endpoint.
//!
//! The binary in `main.rs` owns the terminal and the event loop; everything
//! it drives lives here so it can be tested without a terminal.

pub mod app;
pub mod config;
pub mod form;
pub mod logging;
pub mod transport;
pub mod ui;
pub mod util;

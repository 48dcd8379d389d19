//! Trigger and support tooling for the ML verification notebook pipeline.
//!
//! `trigger_mlverif_build` asks GitHub Actions to render the notebooks for one
//! model and analysis time and publish them under
//! `<bucket>/<model_name>/<analysis_time>/`. `mlverif_book_setup` prepares the
//! book config inside that pipeline.

pub mod app;
pub mod book;
pub mod cli;
pub mod config;
pub mod consts;
pub mod error;
pub mod github;
pub mod logging;
pub mod report;

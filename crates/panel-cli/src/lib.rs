//! `macropanel` CLI: argument parsing, logging setup, and the pipeline
//! orchestrator.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod pipeline;

//! Core library for the `volley` CLI.
//!
//! This crate provides the building blocks used by the binary: CLI argument
//! types, configuration parsing, the HTTP worker pool, outcome aggregation, and
//! the run controller that produces a [`run::FinalReport`]. The primary
//! user-facing interface is the `volley` command-line application.
pub mod args;
pub mod config;
pub mod error;
pub mod http;
pub mod metrics;
pub mod run;

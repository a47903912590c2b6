//! Core library for the `loadprobe` CLI.
//!
//! The binary fans out a fixed number of workers, each issuing sequential GET
//! requests to `http://127.0.0.1:7878/hello.html`, and prints the wall-clock
//! duration once every worker is done. This crate holds the argument and
//! config types, the worker driver, and the final report.
pub mod args;
pub mod config;
pub mod error;
pub mod http;
pub mod summary;

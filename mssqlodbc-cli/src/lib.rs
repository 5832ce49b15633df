//! odbctest - Command-line interface for SQL Server ODBC connections.
//!
//! This crate provides the CLI tool for listing installed SQL Server ODBC
//! drivers, building and decoding connection strings, and verifying that a
//! server is reachable.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod session;

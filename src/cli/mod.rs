//! CLI module for the user service

pub mod serve;

use clap::{Parser, Subcommand};

/// User Service - cached CRUD store for user entities
#[derive(Parser)]
#[command(name = "user-service")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,
}

//! Configuration types for publicar
//!
//! Holds the clap CLI definition and the argument structs consumed by the
//! command handlers.

mod cli;

pub use cli::{parse_args, Cli, CollectArgs, Command, PublishArgs};

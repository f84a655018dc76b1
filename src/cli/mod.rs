// src/cli/mod.rs
use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::infrastructure::di::ServiceContainer;

pub mod args;
pub mod commands;
pub mod display;
pub mod error;

pub fn execute_command(cli: Cli, services: ServiceContainer) -> CliResult<()> {
    match cli.command {
        Some(Commands::Add {
            prompt,
            link,
            tags,
            category,
            model,
        }) => commands::add(&services, prompt, link, tags, category, model),
        Some(Commands::Search {
            term,
            categories,
            models,
            is_json,
        }) => commands::search(&services, term, categories, models, is_json),
        Some(Commands::Stats) => commands::stats(&services),
        Some(Commands::Export {
            term,
            categories,
            models,
            output,
        }) => commands::export(&services, term, categories, models, &output),
        None => commands::search(&services, None, None, None, false),
    }
}

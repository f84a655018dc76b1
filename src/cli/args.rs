// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// Record and browse AI prompts and reference links
pub struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Turn debugging information on
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a prompt and/or link
    Add {
        #[arg(short = 'p', long = "prompt", help = "prompt text", default_value = "")]
        prompt: String,

        #[arg(short = 'l', long = "link", help = "related article link", default_value = "")]
        link: String,

        #[arg(
            short = 't',
            long = "tags",
            help = "list of tags, separated by comma (stored lowercased)"
        )]
        tags: Option<String>,

        #[arg(
            short = 'c',
            long = "category",
            help = "category: General|Code|Writing|Image|Other",
            default_value = "General"
        )]
        category: String,

        #[arg(
            short = 'm',
            long = "model",
            help = "AI model: ChatGPT|Claude|DALL-E|Midjourney|Stable Diffusion|Other",
            default_value = "Other"
        )]
        model: String,
    },
    /// Search entries
    Search {
        /// Free-text term, matched against prompt, link and tags
        term: Option<String>,

        #[arg(short = 'c', long = "category", help = "categories, comma separated list")]
        categories: Option<String>,

        #[arg(short = 'm', long = "model", help = "models, comma separated list")]
        models: Option<String>,

        #[arg(long = "json", help = "non-interactive mode, output as json")]
        is_json: bool,
    },
    /// Show entry counts by category and by model
    Stats,
    /// Export entries as CSV
    Export {
        /// Free-text term, matched against prompt, link and tags
        term: Option<String>,

        #[arg(short = 'c', long = "category", help = "categories, comma separated list")]
        categories: Option<String>,

        #[arg(short = 'm', long = "model", help = "models, comma separated list")]
        models: Option<String>,

        #[arg(
            short = 'o',
            long = "output",
            help = "output file, '-' for stdout",
            default_value = crate::infrastructure::csv_export::EXPORT_FILE_NAME
        )]
        output: PathBuf,
    },
}

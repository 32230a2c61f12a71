use crate::commands::config::ConfigCommand;
use crate::commands::convert::{ConvertCommand, RenderCommand};
use crate::commands::inspect::InspectCommand;
use crate::commands::{AppContext, CommandEnum};
use crate::format::OutputFormat;
use clap::{Parser, Subcommand};
use markport::config::Config;
use markport::error::Result;
use markport::tags::parse_tags;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional custom configuration file path (YAML, or TOML by extension)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true)]
    pub nc: bool,

    /// Show debug information
    #[arg(short = 'g', long = "debug", global = true)]
    pub debug: bool,

    /// Runs `convert` with the configured paths when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a bookmark export into intermediate JSON and Raindrop HTML
    Convert {
        /// Netscape bookmark export to read
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Intermediate JSON output path
        #[arg(long)]
        intermediate: Option<PathBuf>,

        /// Raindrop HTML output path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Raindrop collection name
        #[arg(short, long)]
        collection: Option<String>,

        /// Comma-separated folder labels that never become tags (replaces the configured list)
        #[arg(long)]
        ignore_label: Option<Vec<String>>,
    },

    /// Parse a bookmark export and print the merged records
    Inspect {
        /// Netscape bookmark export to read
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format: json, yaml, toml or plain
        #[arg(short, long)]
        format: Option<String>,

        /// Comma-separated folder labels that never become tags (replaces the configured list)
        #[arg(long)]
        ignore_label: Option<Vec<String>>,
    },

    /// Render Raindrop HTML from a saved intermediate JSON file
    Render {
        /// Intermediate JSON file to read
        #[arg(long)]
        intermediate: Option<PathBuf>,

        /// Raindrop HTML output path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Raindrop collection name
        #[arg(short, long)]
        collection: Option<String>,
    },

    /// Show the effective configuration
    Config {
        /// Write the configuration to this path (YAML, or TOML by extension) instead of printing it
        #[arg(long)]
        save: Option<PathBuf>,
    },
}

/// Flatten repeated, comma-separated `--ignore-label` values
fn ignore_labels(values: Vec<String>) -> Vec<String> {
    values.iter().flat_map(|v| parse_tags(v)).collect()
}

pub fn handle_args(cli: Cli, mut config: Config) -> Result<()> {
    let command = match cli.command {
        Some(Commands::Convert {
            input,
            intermediate,
            output,
            collection,
            ignore_label,
        }) => {
            if let Some(input) = input {
                config.input = input;
            }
            if let Some(intermediate) = intermediate {
                config.intermediate = intermediate;
            }
            if let Some(output) = output {
                config.output = output;
            }
            if let Some(collection) = collection {
                config.collection = collection;
            }
            if let Some(labels) = ignore_label {
                config.ignored_labels = ignore_labels(labels);
            }
            CommandEnum::Convert(ConvertCommand)
        }
        Some(Commands::Inspect {
            input,
            format,
            ignore_label,
        }) => {
            if let Some(input) = input {
                config.input = input;
            }
            if let Some(labels) = ignore_label {
                config.ignored_labels = ignore_labels(labels);
            }
            CommandEnum::Inspect(InspectCommand {
                format: format
                    .as_deref()
                    .map(OutputFormat::from_string)
                    .unwrap_or(OutputFormat::Colored),
            })
        }
        Some(Commands::Render {
            intermediate,
            output,
            collection,
        }) => {
            if let Some(intermediate) = intermediate {
                config.intermediate = intermediate;
            }
            if let Some(output) = output {
                config.output = output;
            }
            if let Some(collection) = collection {
                config.collection = collection;
            }
            CommandEnum::Render(RenderCommand)
        }
        Some(Commands::Config { save }) => CommandEnum::Config(ConfigCommand { save }),
        None => CommandEnum::Convert(ConvertCommand),
    };

    let ctx = AppContext {
        config: &config,
        no_color: cli.nc,
    };
    command.execute(&ctx)
}

//! CLDR plurals CLI entry point.
//!
//! Provides command-line tools for inspecting plural rule data:
//! - `cldr-plurals categories` - Categories and minimal pairs for a locale
//! - `cldr-plurals resolve` - Classify numeric values for a locale
//! - `cldr-plurals equivalents` - Functional-equivalence groups

mod commands;
mod output;

use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{CategoriesArgs, EquivalentsArgs, ResolveArgs, run_categories, run_equivalents, run_resolve};

/// CLDR plural rule inspection tools.
#[derive(Debug, Parser)]
#[command(name = "cldr-plurals")]
#[command(about = "CLDR plural rule inspection tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show plural categories and minimal pairs for a locale
    Categories(CategoriesArgs),
    /// Classify numeric values for a locale
    Resolve(ResolveArgs),
    /// Group locales by functional equivalence
    Equivalents(EquivalentsArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Categories(args) => run_categories(args),
        Commands::Resolve(args) => run_resolve(args),
        Commands::Equivalents(args) => run_equivalents(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}

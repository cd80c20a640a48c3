/*!
 * TermGuide CLI - Command Catalog Lookup
 *
 * Terminal front end for the built-in command catalog. Searches the catalog
 * the same way the desktop shell does and prints matches as readable cards
 * or as JSON lines for automation pipelines.
 */

use clap::{Parser, Subcommand};
use guide_core::capabilities::overview;
use guide_core::catalog::{catalog, placeholders};
use guide_core::matcher::search;
use guide_core::suggestions::default_suggestions;

#[derive(Parser)]
#[command(name = "guide_cli")]
#[command(about = "TermGuide - Terminal Command Lookup", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog for commands matching a task description
    Search {
        /// Free-text task description (words are joined with spaces)
        query: Vec<String>,

        /// Emit JSON lines instead of human-readable cards
        #[arg(short, long)]
        json: bool,
    },

    /// Print the example queries
    Suggest,

    /// Print the capabilities overview
    Overview,

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search { query, json } => {
            run_search(&query.join(" "), json);
        }
        Commands::Suggest => {
            for suggestion in default_suggestions() {
                println!("{}", suggestion);
            }
        }
        Commands::Overview => {
            print_overview();
        }
        Commands::Version => {
            println!("guide_cli v{}", env!("CARGO_PKG_VERSION"));
            println!("TermGuide command catalog lookup");
        }
    }
}

fn run_search(query: &str, json: bool) {
    let matches = search(query, catalog());

    if json {
        // One JSON object per line
        for hit in &matches {
            println!("{}", serde_json::json!(hit));
        }
        return;
    }

    if matches.is_empty() {
        println!("No matching commands.\n");
        print_overview();
        return;
    }

    for hit in &matches {
        println!("$ {}", hit.command);
        println!("    {}", hit.description);

        let names = placeholders(hit.command);
        if !names.is_empty() {
            println!("    fill in: {}", names.join(", "));
        }
        println!();
    }
    println!("{} match(es)", matches.len());
}

fn print_overview() {
    println!("TermGuide can help you with:");

    for group in overview() {
        println!("\n{}", group.title);
        for item in group.items.iter() {
            println!("  - {}", item);
        }
    }
}

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tagbooster::core::logging;
use tagbooster::core::paths::AppPaths;

#[derive(Parser)]
#[command(name = "tagbooster")]
#[command(about = "Boost party and politician tags in news text", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    // ===== MCP Server (also default) =====
    /// Start MCP server
    #[cfg(feature = "mcp")]
    Mcp,

    // ===== Vocabulary =====
    /// Create the boost database and seed it with party tags
    Init {
        #[arg(long, help = "Recreate the database (clears registered boosts)")]
        force: bool,
        #[arg(long, help = "Also write a default .tagbooster.json")]
        config: bool,
    },
    /// Register boost terms from a {"map": [...]} payload
    Register {
        /// Payload file, or "-" for stdin
        source: PathBuf,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Manage tags
    Tags {
        #[command(subcommand)]
        action: Option<TagsAction>,
    },
    /// List the registered boost vocabulary
    Boosts {
        #[arg(long, help = "JSON output")]
        json: bool,
    },

    // ===== Boosting =====
    /// Find known tags in text
    Boost {
        /// Text to analyze
        text: Option<String>,
        #[arg(short, long, help = "Read text from file (\"-\" for stdin)")]
        file: Option<PathBuf>,
        #[arg(
            short,
            long,
            help = "JSON file with classifier relevance tags to merge with the boosted ones"
        )]
        external: Option<PathBuf>,
        #[arg(long, help = "JSON output")]
        json: bool,
    },
}

/// Tag management subcommands
#[derive(Subcommand)]
enum TagsAction {
    /// List tags (default)
    List {
        #[arg(long, help = "JSON output")]
        json: bool,
    },
    /// Add a tag
    Add {
        name: String,
        #[arg(short, long, help = "Tag type, e.g. party or person")]
        kind: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let paths = AppPaths::new();
    logging::init(&paths.config.logging);

    match cli.command {
        // Default: run MCP server
        None => {
            #[cfg(feature = "mcp")]
            {
                run_mcp_server(paths.root)
            }
            #[cfg(not(feature = "mcp"))]
            {
                eprintln!("MCP feature not enabled. Build with --features mcp");
                std::process::exit(1);
            }
        }

        #[cfg(feature = "mcp")]
        Some(Commands::Mcp) => run_mcp_server(paths.root),

        Some(Commands::Init { force, config }) => commands::init::run(&paths, force, config),
        Some(Commands::Register { source, json }) => commands::register::run(&paths, &source, json),
        Some(Commands::Tags { action }) => match action {
            None => commands::tags::run_list(&paths, false),
            Some(TagsAction::List { json }) => commands::tags::run_list(&paths, json),
            Some(TagsAction::Add { name, kind }) => {
                commands::tags::run_add(&paths, &name, kind.as_deref())
            }
        },
        Some(Commands::Boosts { json }) => commands::tags::run_boosts(&paths, json),
        Some(Commands::Boost {
            text,
            file,
            external,
            json,
        }) => commands::boost::run(&paths, text, file, external, json),
    }
}

#[cfg(feature = "mcp")]
fn run_mcp_server(root: PathBuf) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(tagbooster::mcp::run_mcp_server(root))
}

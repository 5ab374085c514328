// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use kb_ingest::utils::logging::{
    format_category, format_error, format_source, format_success, format_warning,
};
use kb_ingest::{
    Config, Corpus, JsonExporter, KnowledgeBaseLoader, LoadSpinner, ProfileIndex, Validator,
};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "kb_ingest")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Load a markdown knowledge base into a RAG corpus", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    /// Knowledge base root, overriding the configured one
    #[arg(short, long, value_name = "DIR", global = true)]
    root: Option<PathBuf>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the knowledge base and print per-category counts
    Load,

    /// Load the knowledge base and write it out as JSON
    Export {
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(short, long, action = ArgAction::Set)]
        pretty: Option<bool>,
    },

    /// Print the profile document whose file name ends with NAME
    Lookup {
        name: String,

        #[arg(long)]
        category: Option<String>,
    },

    /// Check the configuration and that the root is a directory
    Verify,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", format_error(&format!("{:#}", e)));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    kb_ingest::utils::logging::init_logger(cli.color, cli.verbose);
    colored::control::set_override(cli.color);

    info!("Loading configuration from: {}", cli.config.display());

    let config_path = if cli.config.exists() {
        Some(cli.config.as_path())
    } else {
        warn!(
            "Config file {} not found, using defaults and environment",
            cli.config.display()
        );
        None
    };
    let mut config = Config::load(config_path).context("Failed to load configuration")?;

    if let Some(root) = cli.root {
        config.knowledge_base.root = root;
    }

    match cli.command {
        Commands::Load => cmd_load(&config, cli.color)?,
        Commands::Export { output, pretty } => cmd_export(&config, cli.color, output, pretty)?,
        Commands::Lookup { name, category } => {
            cmd_lookup(&config, cli.color, &name, category.as_deref())?
        }
        Commands::Verify => cmd_verify(&config)?,
    }

    Ok(())
}

fn load_corpus(config: &Config, colored: bool) -> Result<Corpus> {
    let root = &config.knowledge_base.root;
    let spinner = LoadSpinner::new(format!("Loading {}", root.display()), colored);
    let start_time = Instant::now();

    let loader = KnowledgeBaseLoader::new(config.knowledge_base.clone());
    match loader.load() {
        Ok(corpus) => {
            spinner.finish(corpus.len());
            info!(
                "Knowledge base loaded in {:.2}s",
                start_time.elapsed().as_secs_f64()
            );
            Ok(corpus)
        }
        Err(e) => {
            spinner.abandon("Load failed");
            Err(e).with_context(|| format!("Failed to load knowledge base {}", root.display()))
        }
    }
}

fn cmd_load(config: &Config, colored: bool) -> Result<()> {
    let corpus = load_corpus(config, colored)?;
    let stats = corpus.stats();

    println!(
        "{}",
        format_success(&format!(
            "{} documents in {} categories ({} bytes)",
            stats.documents,
            stats.categories.len(),
            stats.total_bytes
        ))
    );

    for (category, count) in &stats.categories {
        println!("{}", format_category(category, *count));
    }

    if stats.empty_documents > 0 {
        println!(
            "{}",
            format_warning(&format!("{} documents are empty", stats.empty_documents))
        );
    }

    Ok(())
}

fn cmd_export(
    config: &Config,
    colored: bool,
    output: Option<PathBuf>,
    pretty: Option<bool>,
) -> Result<()> {
    let corpus = load_corpus(config, colored)?;

    let output = output.unwrap_or_else(|| config.export.output_dir.clone());
    let pretty = pretty.unwrap_or(config.export.pretty);

    let exporter = JsonExporter::new(&output).context("Failed to prepare export directory")?;
    let manifest = exporter
        .export(&corpus, pretty)
        .context("Failed to export corpus")?;

    println!(
        "{}",
        format_success(&format!(
            "Exported {} documents to {}",
            manifest.total_documents,
            exporter.output_dir().display()
        ))
    );

    Ok(())
}

fn cmd_lookup(config: &Config, colored: bool, name: &str, category: Option<&str>) -> Result<()> {
    let corpus = load_corpus(config, colored)?;
    let category = category.unwrap_or(config.lookup.category.as_str());
    let index = ProfileIndex::build(&corpus, category);

    match index.get(name) {
        Some(doc) => {
            println!("{}", format_source(&doc.source));
            println!();
            println!("{}", doc.text);
        }
        None => {
            println!(
                "{}",
                format_warning(&format!("No {} entry for '{}'", index.category(), name))
            );
            if !index.is_empty() {
                println!("Known names: {}", index.keys().join(", "));
            }
        }
    }

    Ok(())
}

fn cmd_verify(config: &Config) -> Result<()> {
    info!("Verifying configuration");

    config.validate().context("Invalid configuration")?;
    Validator::validate_directory(&config.knowledge_base.root)
        .context("Knowledge base root check failed")?;

    println!(
        "{}",
        format_success(&format!(
            "Knowledge base root {} is ready (extensions: {})",
            config.knowledge_base.root.display(),
            config.knowledge_base.extensions.join(", ")
        ))
    );

    Ok(())
}

//! mongosql — translate find() calls from the command line
//!
//! # Usage
//!
//! ```bash
//! # Translate a call against a schema file
//! mongosql find users --schema schema.json --filter '{"age": {"$gt": 30}}' --limit 10
//!
//! # Translate a call document
//! mongosql call query.json --schema schema.toml --format json
//!
//! # Show the comparison tokens
//! mongosql operators
//! ```

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use mongosql::config::{Config, OutputFormat};
use mongosql::prelude::*;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mongosql")]
#[command(version)]
#[command(about = "Translate MongoDB-style find() calls into SELECT statements", long_about = None)]
#[command(after_help = "EXAMPLES:
    mongosql find users --schema schema.json --filter '{\"name\": \"bob\"}'
    mongosql find users --projection '{\"email\": -1}' --sort '[\"age\", -1]' --skip 20
    mongosql call query.json --format json")]
struct Cli {
    /// Schema file (JSON or TOML)
    #[arg(short, long, global = true, env = "MONGOSQL_SCHEMA")]
    schema: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    format: Option<Format>,

    /// Config file (default: ./mongosql.toml, then the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Pretty,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Pretty => OutputFormat::Pretty,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a single find() call
    Find {
        /// Collection (table) name
        collection: String,

        /// Filter document or list of documents
        #[arg(long)]
        filter: Option<String>,

        /// Projection map, e.g. '{"name": 1}'
        #[arg(long)]
        projection: Option<String>,

        #[arg(long)]
        limit: Option<u64>,

        #[arg(long)]
        skip: Option<u64>,

        /// Sort pair, list of pairs, or document
        #[arg(long)]
        sort: Option<String>,
    },
    /// Translate a call document read from a file ("-" for stdin)
    Call {
        file: PathBuf,
    },
    /// Show the comparison operator table
    Operators,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "mongosql=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("MONGOSQL_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let format = cli.format.map(OutputFormat::from).unwrap_or(config.format);
    let translator = MongoTranslator::new();

    let call = match &cli.command {
        Commands::Operators => {
            show_operators(&translator);
            return Ok(());
        }
        Commands::Find {
            collection,
            filter,
            projection,
            limit,
            skip,
            sort,
        } => FindCall {
            collection: collection.clone(),
            filter: parse_json_arg("--filter", filter)?,
            projection: parse_json_arg("--projection", projection)?,
            limit: *limit,
            skip: *skip,
            sort: parse_json_arg("--sort", sort)?
                .map(|v| SortSpec::from_json(&v))
                .transpose()?,
        },
        Commands::Call { file } => read_call(file)?,
    };

    let schema_path = cli
        .schema
        .clone()
        .or(config.schema_path)
        .context("No schema. Use --schema, set MONGOSQL_SCHEMA, or add schema_path to mongosql.toml")?;
    let schema = SchemaFile::load(&schema_path)
        .with_context(|| format!("Failed to load schema {}", schema_path.display()))?;
    let columns = schema.columns(&call.collection)?;

    if cli.verbose {
        eprintln!(
            "{} {} ({} columns)",
            "Schema:".dimmed(),
            schema_path.display(),
            columns.len()
        );
    }

    let stmt = translator.translate_find(&call, &columns)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stmt)?),
        OutputFormat::Pretty => explain(&stmt),
    }
    Ok(())
}

fn parse_json_arg(name: &str, arg: &Option<String>) -> Result<Option<serde_json::Value>> {
    arg.as_deref()
        .map(|s| serde_json::from_str(s).with_context(|| format!("{} is not valid JSON", name)))
        .transpose()
}

fn read_call(file: &Path) -> Result<FindCall> {
    let content = if file.as_os_str() == "-" {
        std::io::read_to_string(std::io::stdin())?
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?
    };
    let call: FindCall = serde_json::from_str(&content)?;
    if call.collection.is_empty() {
        bail!("call document has an empty collection");
    }
    Ok(call)
}

fn explain(stmt: &SelectStatement) {
    println!("{}", "Statement:".green().bold());
    println!("  {} {}", "Table:".dimmed(), stmt.table.to_string().white());
    println!("  {} {}", "Fields:".dimmed(), stmt.fields.to_string().white());

    if !stmt.where_clause.is_empty() {
        println!("  {}", "Where:".dimmed());
        for p in &stmt.where_clause {
            println!(
                "    • {} {} {}",
                p.column.to_string().white(),
                p.op.to_string().cyan(),
                p.value.to_string().yellow()
            );
        }
    }
    if !stmt.sorts.is_empty() {
        println!("  {}", "Sort:".dimmed());
        for s in &stmt.sorts {
            let arrow = if s.is_ascending() { "↑" } else { "↓" };
            println!("    {} {}", arrow.cyan(), s.key.white());
        }
    }
    if let Some(Limit(n)) = stmt.limit {
        println!("  {} {}", "Limit:".dimmed(), n.to_string().cyan());
    }
    if let Some(Offset(n)) = stmt.offset {
        println!("  {} {}", "Offset:".dimmed(), n.to_string().cyan());
    }

    println!();
    println!("{}", "Summary:".green().bold());
    println!("  {}", stmt.to_string().white());
}

fn show_operators(translator: &MongoTranslator) {
    println!("{}", "Comparison Operators".cyan().bold());
    println!();
    println!("{:8} {}", "Token".white().bold(), "SQL".white().bold());
    println!("{}", "─".repeat(16).dimmed());
    for (token, op) in translator.operators().tokens() {
        println!("{:8} {}", token.yellow(), op.symbol().white());
    }
}

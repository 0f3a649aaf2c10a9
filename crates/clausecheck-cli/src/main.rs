mod display;
mod review;
mod summarize;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clausecheck_core::{Catalog, EditorOption};
use clausecheck_explain::DEFAULT_ENDPOINT;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "clausecheck", version, about = "Arbitration clause checker")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check a clause for problematic arbitration wording.
    Review(ReviewArgs),
    /// List the phrase categories and their phrases.
    Categories(CatalogArgs),
    /// List the recognised arbitral institutions.
    Institutions(CatalogArgs),
    /// Simulate uploading a PDF and editing its summary.
    Summarize(SummarizeArgs),
}

#[derive(Args)]
struct CatalogArgs {
    /// TOML file replacing the built-in phrase catalogue.
    #[arg(long, env = "CLAUSECHECK_CATALOG")]
    catalog: Option<PathBuf>,
}

impl CatalogArgs {
    fn load(&self) -> anyhow::Result<Catalog> {
        match &self.catalog {
            Some(path) => Catalog::load(path)
                .with_context(|| format!("loading catalogue {}", path.display())),
            None => Ok(Catalog::builtin()),
        }
    }
}

#[derive(Args)]
pub struct ReviewArgs {
    /// File holding the clause. Reads stdin when omitted.
    file: Option<PathBuf>,

    #[command(flatten)]
    catalog: CatalogArgs,

    /// Expand every item and fetch its explanation.
    #[arg(long)]
    explain: bool,

    /// Expand item N (1-based) and fetch its explanation. Repeatable.
    #[arg(long, value_name = "N", conflicts_with = "explain")]
    expand: Vec<usize>,

    /// Explanation service endpoint.
    #[arg(long, env = "CLAUSECHECK_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Per-request timeout for the explanation service, in seconds.
    #[arg(
        long,
        env = "CLAUSECHECK_TIMEOUT",
        default_value_t = 60,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: u64,

    /// Print a JSON report instead of cards.
    #[arg(long)]
    json: bool,

    /// Mark highlights with brackets instead of colour.
    #[arg(long)]
    no_color: bool,
}

#[derive(Args)]
pub struct SummarizeArgs {
    /// PDF to "upload". Only its name and size are looked at.
    file: PathBuf,

    /// Flip an editor option. Repeatable.
    #[arg(long, value_enum)]
    toggle: Vec<OptionArg>,

    /// Replace the simulated summary with the contents of this file.
    #[arg(long, value_name = "PATH")]
    edit: Option<PathBuf>,

    /// Print the editor state as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OptionArg {
    AutoCorrectGrammar,
    HighlightKeyPoints,
    AddCitations,
}

impl From<OptionArg> for EditorOption {
    fn from(arg: OptionArg) -> Self {
        match arg {
            OptionArg::AutoCorrectGrammar => EditorOption::AutoCorrectGrammar,
            OptionArg::HighlightKeyPoints => EditorOption::HighlightKeyPoints,
            OptionArg::AddCitations => EditorOption::AddCitations,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    tracing::info!("clausecheck v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    match cli.command {
        Command::Review(args) => {
            let catalog = args.catalog.load()?;
            review::run(catalog, &args).await
        }
        Command::Categories(args) => {
            display::print_categories(&args.load()?);
            Ok(())
        }
        Command::Institutions(args) => {
            display::print_institutions(&args.load()?);
            Ok(())
        }
        Command::Summarize(args) => summarize::run(&args).await,
    }
}

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use resume_links::pipeline::import::read_document;
use resume_links::{
    config, init_tracing, merge, parse_summarizer_response_lenient, ClassifierConfig,
    LinkClassifier, LinkExtractor,
};

#[derive(Parser)]
#[command(name = "resume-links", version, about = "Extract and categorize hyperlinks from a resume")]
struct Cli {
    /// Resume document (PDF or plain text)
    document: PathBuf,

    /// Summarizer output (JSON, optionally fenced) to merge the links into
    #[arg(short, long)]
    summary: Option<PathBuf>,

    /// Print the extracted links only, even when --summary is given
    #[arg(long)]
    extract_only: bool,

    /// Also reject root-only URLs on personal domains
    #[arg(long)]
    strict_bare_domains: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    tracing::info!(version = config::APP_VERSION, document = %cli.document.display(), "Starting");

    let bytes = read_document(&cli.document)
        .with_context(|| format!("Failed to read {}", cli.document.display()))?;

    let extractor = LinkExtractor::new(LinkClassifier::new(ClassifierConfig {
        strict_bare_domains: cli.strict_bare_domains,
    }));
    let extracted = extractor
        .extract(&bytes)
        .with_context(|| format!("{} is not a readable document", cli.document.display()))?;

    let output = match cli.summary.as_ref().filter(|_| !cli.extract_only) {
        Some(path) => {
            let response = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read summary {}", path.display()))?;
            let summary = parse_summarizer_response_lenient(&response);
            serde_json::to_value(merge(&extracted, &summary))?
        }
        None => serde_json::to_value(&extracted)?,
    };

    let json = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{json}");

    Ok(())
}

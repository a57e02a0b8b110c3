use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use synoptic_reading::config::resolve_config;
use synoptic_reading::export::save_results;
use synoptic_reading::pipeline::{describe_sources, Pipeline};
use synoptic_reading::{AnalysisResult, Gospel};

#[derive(Parser)]
#[command(name = "synoptic-reading")]
#[command(version)]
#[command(about = "Distant reading of Matthew, Mark and Luke: word statistics, sentiment and shared vocabulary as JSON")]
struct Cli {
    /// TOML configuration file (defaults to ./config.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding the three source texts
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Where to write the JSON result
    #[arg(long)]
    output: Option<PathBuf>,

    /// Stopword file, one word per line, replacing the built-in English list
    #[arg(long)]
    stopwords: Option<PathBuf>,

    /// Fixed value for metadata.generated_at, for reproducible output
    #[arg(long)]
    generated_at: Option<String>,

    /// Do not print the summary to stdout
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("synoptic_reading=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = resolve_config(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if let Some(output) = cli.output {
        config.output = output;
    }
    if let Some(stopwords) = cli.stopwords {
        config.stopwords_file = Some(stopwords);
    }
    if let Some(generated_at) = cli.generated_at {
        config.generated_at = Some(generated_at);
    }

    tracing::info!("Sources: {}", describe_sources(&config));

    let pipeline = Pipeline::from_config(&config)?;
    let results = pipeline.run().context("analysis failed")?;
    save_results(&results, &config.output)?;

    if !cli.quiet {
        print_summary(&results, &config.output);
    }
    Ok(())
}

fn print_summary(results: &AnalysisResult, output: &std::path::Path) {
    println!("Analysis complete! Results saved to {}", output.display());
    println!("Total overlapping words: {}", results.metadata.total_overlapping_words);

    println!("\n=== Analysis Summary ===");
    for gospel in Gospel::ALL {
        let report = results.gospels.get(gospel);
        let metrics = &report.style_metrics;
        println!("\n{}:", report.name);
        println!("  Total words: {}", with_thousands(metrics.total_words));
        println!("  Unique words: {}", with_thousands(metrics.unique_words));
        println!("  Lexical diversity: {}", metrics.lexical_diversity);
        println!("  Sentiment polarity: {}", report.sentiment.polarity);
        println!("  Verses: {}", metrics.verse_count);
    }
}

fn with_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

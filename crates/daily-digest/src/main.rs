use anyhow::{Context, Result};
use chrono::{Local, Utc};
use clap::Parser;
use shared::{
    Config, DigestAggregator, DigestPipeline, OpenAiClient, ReportGenerator, ReportTemplate,
    Summarizer, TwitterClient,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "daily-digest")]
#[command(about = "Summarize the last day of long-form tweets from a list of accounts into a Markdown digest")]
struct Args {
    /// File listing the accounts to follow, one handle per line
    #[arg(short, long, default_value = "twitter-kol.md")]
    accounts: PathBuf,

    /// Directory the digest is written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// File name prefix; the digest is saved as <prefix>-<YYYY-MM-DD>.md
    #[arg(short, long, default_value = "tldreth")]
    prefix: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    shared::observability::init_logging("info")?;

    let args = Args::parse();
    let config = Config::from_env()?;

    let handles = shared::load_handles(&args.accounts)?;
    println!(
        "📋 Loaded {} accounts from {}",
        handles.len(),
        args.accounts.display()
    );

    let twitter = TwitterClient::from_config(&config)?;
    let openai = OpenAiClient::from_config(&config)?;
    tracing::debug!(model = openai.model_name(), "Language model configured");

    let pipeline = DigestPipeline::new(
        twitter,
        Summarizer::new(openai.clone()),
        DigestAggregator::new(openai),
    );

    println!("\n🐦 Fetching posts and summarizing...");
    let run = pipeline.run(&handles, Utc::now()).await;

    println!(
        "✓ Summarized {}/{} qualifying posts",
        run.records.len(),
        run.stats.posts_qualified
    );
    if run.stats.accounts_failed > 0 {
        println!(
            "⚠ Could not fetch {}/{} accounts",
            run.stats.accounts_failed, run.stats.accounts
        );
    }
    if run.digest.is_none() {
        println!("⚠ No digest summary for this run");
    }

    println!("\n📝 Writing digest...");
    let today = Local::now().date_naive();
    let content = ReportGenerator::generate_run(&ReportTemplate::default(), &run, today);
    let filepath = shared::save_digest(&content, &args.output_dir, &args.prefix, today)
        .context("Failed to save digest")?;

    println!("\n✅ Digest saved to: {}", filepath.display());

    Ok(())
}

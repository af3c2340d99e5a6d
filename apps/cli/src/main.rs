use std::time::{Duration, Instant};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tldw_core::{ChatSummarizer, Provider, SimulatedTranscriptSource, SummarySession};

mod repl;

/// CLI wrapper for Provider enum (needed for clap ValueEnum)
#[derive(Clone, Default, ValueEnum)]
enum CliProvider {
    #[default]
    Gemini,
    Openai,
    Grok,
}

impl From<CliProvider> for Provider {
    fn from(cli: CliProvider) -> Self {
        match cli {
            CliProvider::Gemini => Provider::Gemini,
            CliProvider::Openai => Provider::Openai,
            CliProvider::Grok => Provider::Grok,
        }
    }
}

#[derive(Parser)]
#[command(name = "tldw")]
#[command(about = "Summarize a YouTube video with an AI provider and edit the transcript")]
struct Cli {
    /// Video URL. Prompted for interactively when omitted.
    url: Option<String>,

    /// AI provider for summary generation
    #[arg(short, long, default_value = "gemini")]
    provider: CliProvider,

    /// Print the summary and exit instead of opening the editor loop
    #[arg(long)]
    no_interactive: bool,

    /// Simulated transcript fetch latency in milliseconds
    #[arg(long, default_value_t = 1000)]
    fetch_delay_ms: u64,
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.0}m {:.0}s", secs / 60.0, secs % 60.0)
    }
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Run the summarize pipeline behind a spinner and report the outcome.
/// Returns true when a summary was produced.
pub(crate) async fn run_summarize(
    session: &mut SummarySession,
    provider: &Provider,
    url: &str,
) -> bool {
    let step_start = Instant::now();
    let spinner = create_spinner(&format!("Generating summary with {}...", provider.name()));
    session.summarize_url(url).await;

    match session.error() {
        Some(message) => {
            spinner.finish_with_message(format!("{} {}", style("✗").red().bold(), message));
            false
        }
        None => {
            let line_count = session.editor().map(|e| e.lines().len()).unwrap_or(0);
            spinner.finish_with_message(format!(
                "{} Summary ready: {} transcript lines {}",
                style("✓").green().bold(),
                style(line_count).yellow(),
                style(format!("[{}]", format_duration(step_start.elapsed()))).dim()
            ));
            true
        }
    }
}

pub(crate) fn print_summary(session: &SummarySession) {
    if let Some(summary) = session.summary() {
        println!("{}", style("─".repeat(60)).dim());
        println!("{summary}");
        println!("{}", style("─".repeat(60)).dim());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let provider: Provider = cli.provider.into();

    // Validate API key early, before prompting for anything
    let summarizer = match ChatSummarizer::new(provider.clone()) {
        Ok(summarizer) => summarizer,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };
    let source = SimulatedTranscriptSource::new(Duration::from_millis(cli.fetch_delay_ms));
    let mut session = SummarySession::new(Box::new(source), Box::new(summarizer));

    let url = match cli.url {
        Some(url) => url,
        None => dialoguer::Input::<String>::new()
            .with_prompt("YouTube URL")
            .interact_text()?,
    };

    if !run_summarize(&mut session, &provider, &url).await {
        std::process::exit(1);
    }
    print_summary(&session);

    if cli.no_interactive {
        return Ok(());
    }
    repl::run(&mut session, &provider).await
}

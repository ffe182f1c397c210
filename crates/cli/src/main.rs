use anyhow::{Context, Result, bail};
use chrono::{Duration, Local, NaiveDate};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{CorpusConfig, DrawCorpus, LoadReport, NUMBER_RANGE, WEEKDAY_LABELS, weekday_label};
use recommender::{PipelineConfig, Recommendation, RecommendationOrchestrator, RecommendationTrace};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tracing::warn;

/// LottoRecs - Daily number recommendation engine
#[derive(Parser)]
#[command(name = "lotto-recs")]
#[command(about = "Daily 5-of-39 number recommendations from same-weekday draw history", long_about = None)]
struct Cli {
    /// Directory holding the yearly draw files
    #[arg(short, long, default_value = "data", global = true)]
    data_dir: PathBuf,

    /// First year file to load
    #[arg(long, default_value = "2018", global = true)]
    from_year: i32,

    /// Last year file to load
    #[arg(long, default_value = "2025", global = true)]
    to_year: i32,

    /// Explicit draw files; replaces the yearly files
    #[arg(long = "source", num_args = 1.., global = true)]
    sources: Vec<PathBuf>,

    /// Most recent same-weekday draws to analyze
    #[arg(long, default_value = "800", global = true)]
    window: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend numbers for a date
    Predict {
        /// Reference date (YYYY-MM-DD), today when omitted
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Print the recommendation as JSON
        #[arg(long)]
        json: bool,

        /// Show every intermediate stage
        #[arg(long)]
        explain: bool,
    },

    /// Show the analysis window for a date
    Window {
        /// Reference date (YYYY-MM-DD), today when omitted
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Number of draws to print
        #[arg(long, default_value = "10")]
        show: usize,
    },

    /// Show corpus statistics
    Stats,

    /// Run benchmark to test performance
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,

        /// Number of concurrent requests
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

impl Cli {
    fn corpus_config(&self) -> CorpusConfig {
        if self.sources.is_empty() {
            CorpusConfig::new()
                .with_data_dir(&self.data_dir)
                .with_years(self.from_year..=self.to_year)
        } else {
            CorpusConfig::from_paths(self.sources.clone())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // JSON output must stay clean on stdout
    let quiet = matches!(cli.command, Commands::Predict { json: true, .. });

    let start = Instant::now();
    let (corpus, report) = DrawCorpus::load_with_report(&cli.corpus_config().source_paths())
        .context("Failed to load draw history")?;
    if !quiet {
        print_load_report(&report, start.elapsed());
    }

    let config = PipelineConfig::new().with_window_size(cli.window);
    let orchestrator = RecommendationOrchestrator::new(Arc::new(corpus), config);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Predict {
            date,
            json,
            explain,
        } => handle_predict(&orchestrator, date.unwrap_or_else(today), json, explain)?,
        Commands::Window { date, show } => {
            handle_window(&orchestrator, date.unwrap_or_else(today), show)
        }
        Commands::Stats => handle_stats(orchestrator.corpus()),
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(orchestrator, requests, concurrent).await?,
    }

    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn print_load_report(report: &LoadReport, elapsed: std::time::Duration) {
    println!(
        "{} Loaded {} draws from {} files in {:?}",
        "✓".green(),
        report.records_loaded,
        report.files_read.len(),
        elapsed
    );
    if !report.files_missing.is_empty() {
        println!(
            "  {} {} files not found",
            "•".yellow(),
            report.files_missing.len()
        );
    }
    if report.rows_skipped() > 0 {
        warn!(
            "Skipped {} rows ({} bad dates, {} invalid numbers)",
            report.rows_skipped(),
            report.rows_bad_date,
            report.rows_invalid
        );
    }
}

/// Handle the 'predict' command
fn handle_predict(
    orchestrator: &RecommendationOrchestrator,
    date: NaiveDate,
    json: bool,
    explain: bool,
) -> Result<()> {
    let trace = orchestrator.explain(date)?;

    if json {
        println!("{}", trace.recommendation.to_json()?);
        return Ok(());
    }

    if explain {
        print_trace(&trace);
    }
    print_recommendation(date, &trace.recommendation);
    Ok(())
}

/// Handle the 'window' command
fn handle_window(orchestrator: &RecommendationOrchestrator, date: NaiveDate, show: usize) {
    let window = orchestrator.window(date);

    println!(
        "{}",
        format!(
            "Window for {} (星期{}): {} draws",
            date,
            weekday_label(window.weekday()),
            window.len()
        )
        .bold()
        .blue()
    );
    for draw in window.draws().iter().take(show) {
        println!("  {}  {}", draw.date(), format_numbers(draw.numbers()));
    }
    if window.len() > show {
        println!("  ... {} more", window.len() - show);
    }
}

/// Handle the 'stats' command
fn handle_stats(corpus: &DrawCorpus) {
    println!("{}", "Corpus statistics".bold().blue());
    println!("{}Draws: {}", "• ".green(), corpus.len());
    if let Some((first, last)) = corpus.date_range() {
        println!("{}Range: {} to {}", "• ".green(), first, last);
    }

    println!("Draws per weekday:");
    for (label, count) in WEEKDAY_LABELS.iter().zip(corpus.weekday_counts()) {
        println!("  星期{}: {}", label, count);
    }

    println!("Number frequency:");
    let counts = corpus.number_counts();
    let row: Vec<String> = NUMBER_RANGE
        .map(|n| format!("{:>2}:{:<5}", n, counts[n as usize]))
        .collect();
    for line in row.chunks(8) {
        println!("  {}", line.join(" "));
    }
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    orchestrator: RecommendationOrchestrator,
    requests: usize,
    concurrent: usize,
) -> Result<()> {
    if requests == 0 {
        bail!("benchmark needs at least one request");
    }
    let Some((first, last)) = orchestrator.corpus().date_range() else {
        bail!("corpus has no draws to benchmark against");
    };

    // Random reference dates inside the loaded history
    let span = (last - first).num_days() + 1;
    let dates: Vec<NaiveDate> = (0..requests)
        .map(|_| first + Duration::days(rand::random_range(0..span)))
        .collect();

    let permits = Arc::new(Semaphore::new(concurrent.max(1)));
    let wall_clock = Instant::now();

    let mut handles = vec![];
    for date in dates {
        let orchestrator = orchestrator.clone();
        let permit = permits.clone().acquire_owned().await?;
        let handle = tokio::task::spawn_blocking(move || {
            let _permit = permit;
            let start = Instant::now();
            orchestrator.recommend(date)?;
            Ok::<_, anyhow::Error>(start.elapsed())
        });
        handles.push(handle);
    }

    // Wait for all tasks to complete and collect timings
    let mut timings = vec![];
    for handle in handles {
        timings.push(handle.await??);
    }
    let total_time = wall_clock.elapsed();

    let busy: std::time::Duration = timings.iter().sum();
    let avg_latency = busy / timings.len() as u32;
    timings.sort();
    let percentile = |p: f64| timings[((timings.len() - 1) as f64 * p).round() as usize];
    let throughput = requests as f64 / total_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

fn format_numbers(numbers: &[u8]) -> String {
    numbers
        .iter()
        .map(|n| format!("{:02}", n))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Helper function to format and print a recommendation
fn print_recommendation(date: NaiveDate, rec: &Recommendation) {
    println!(
        "{}",
        format!("Recommendation for {} (星期{}):", date, rec.weekday)
            .bold()
            .blue()
    );
    if rec.primary_numbers.is_empty() {
        println!("  {}", "No numbers survived filtering".yellow());
    } else {
        println!(
            "  Primary: {}",
            format_numbers(&rec.primary_numbers).green().bold()
        );
    }
    if rec.co_pair.is_empty() {
        println!("  Pair:    none");
    } else {
        println!(
            "  Pair:    {} (drawn together {} times)",
            format_numbers(&rec.co_pair).cyan(),
            rec.co_pair_count
        );
    }
}

fn print_trace(trace: &RecommendationTrace) {
    println!("{}", "Pipeline stages:".bold());
    match trace.window_span {
        Some((newest, oldest)) => println!(
            "{}Window: {} draws ({} back to {})",
            "• ".green(),
            trace.window_size,
            newest,
            oldest
        ),
        None => println!("{}Window: empty", "• ".green()),
    }
    for method in &trace.candidates {
        println!(
            "{}{}: {}",
            "• ".green(),
            method.method,
            format_numbers(&method.numbers)
        );
    }
    let votes: Vec<String> = trace
        .votes
        .iter()
        .map(|(n, count)| format!("{:02}x{}", n, count))
        .collect();
    println!("{}Votes: {}", "• ".cyan(), votes.join(" "));
    println!(
        "{}Exposure baseline {:.2}, hot [{}], cold [{}]",
        "• ".cyan(),
        trace.exposure.baseline,
        format_numbers(&trace.exposure.hot),
        format_numbers(&trace.exposure.cold)
    );
    println!(
        "{}Survivors: {}",
        "• ".cyan(),
        format_numbers(&trace.survivors)
    );
}

use anyhow::Result;
use data_loader::{CorpusConfig, DrawCorpus, weekday_label};
use std::time::Instant;

fn main() -> Result<()> {
    let sources = CorpusConfig::default().source_paths();

    println!("Loading draw files from data/...\n");

    let start = Instant::now();
    let (corpus, report) = DrawCorpus::load_with_report(&sources)?;
    let elapsed = start.elapsed();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Files read: {}", report.files_read.len());
    println!("Files missing: {}", report.files_missing.len());
    println!("Draws: {}", corpus.len());
    println!("Rows skipped: {}", report.rows_skipped());

    if let Some((first, last)) = corpus.date_range() {
        println!("Range: {} .. {}", first, last);
    }
    for (weekday, count) in corpus.weekday_counts().iter().enumerate() {
        println!("  週{}: {}", weekday_label(weekday as u8), count);
    }
    Ok(())
}

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use classifier::{MOOD_LEXICON, Mood, MoodClassifier};
use colored::Colorize;
use journal::JournalEntry;
use resolver::{PlaylistSearch, RecommendationResolver, queries_for};
use server::MoodOrchestrator;
use spotify_client::{SpotifyClient, SpotifyCredentials};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Moodtape - journal-to-playlist recommendation engine
#[derive(Parser)]
#[command(name = "moodtape")]
#[command(about = "Classifies journal entries into moods and recommends playlists", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a journal entry without fetching recommendations
    Classify {
        /// Path to the journal entry file
        #[arg(long)]
        file: PathBuf,
    },

    /// Run the full pipeline and emit the recommendation payload
    Recommend {
        /// Path to the journal entry file
        #[arg(long)]
        file: PathBuf,

        /// Write the payload to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Market restriction for playlist search
        #[arg(long, default_value = "IN")]
        market: String,
    },

    /// Show the mood labels with their trigger words and query templates
    Moods,

    /// Run benchmark to test classification performance
    Benchmark {
        /// Number of classifications to run
        #[arg(long, default_value = "10000")]
        iterations: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up SPOTIFY_CLIENT_ID / SPOTIFY_CLIENT_SECRET from .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify { file } => handle_classify(file)?,
        Commands::Recommend {
            file,
            output,
            market,
        } => handle_recommend(file, output, market).await?,
        Commands::Moods => handle_moods(),
        Commands::Benchmark { iterations } => handle_benchmark(iterations),
    }

    Ok(())
}

/// Handle the 'classify' command
fn handle_classify(file: PathBuf) -> Result<()> {
    let entry = JournalEntry::load(&file).context("Failed to load journal entry")?;

    let classifier = MoodClassifier::new();
    let result = classifier.classify(&entry.text);

    println!(
        "{} {} ({} bytes)",
        "Entry:".bold().blue(),
        entry.name,
        entry.byte_len
    );
    println!("{} {}", "Mood:".bold().blue(), result.mood.to_string().green());
    println!("{} {:.3}", "Compound:".bold().blue(), result.compound);
    println!("{}", "Keyword evidence:".bold().blue());
    for mood in Mood::ALL {
        let count = result.keyword_counts.get(mood);
        if count > 0 {
            println!("  {} {}: {}", "•".green(), mood, count);
        }
    }

    Ok(())
}

/// Handle the 'recommend' command
async fn handle_recommend(file: PathBuf, output: Option<PathBuf>, market: String) -> Result<()> {
    let entry = JournalEntry::load(&file).context("Failed to load journal entry")?;

    // Missing or rejected credentials degrade to an empty recommendations
    // array; the payload is still produced.
    let search: Option<Arc<dyn PlaylistSearch>> = match SpotifyCredentials::from_env() {
        Ok(credentials) => match SpotifyClient::connect(&credentials).await {
            Ok(client) => Some(Arc::new(client)),
            Err(err) => {
                eprintln!(
                    "{} Spotify unavailable ({}), continuing without recommendations",
                    "!".yellow(),
                    err
                );
                None
            }
        },
        Err(err) => {
            eprintln!(
                "{} {}, continuing without recommendations",
                "!".yellow(),
                err
            );
            None
        }
    };

    let mut orchestrator =
        MoodOrchestrator::new().with_resolver(RecommendationResolver::new().with_market(market));
    if let Some(search) = search {
        orchestrator = orchestrator.with_search(search);
    }

    let payload = orchestrator.process(&entry).await;
    let json = serde_json::to_string_pretty(&payload)?;

    match output {
        Some(path) => {
            std::fs::write(&path, &json)
                .with_context(|| format!("Failed to write payload to {}", path.display()))?;
            println!("{} Wrote payload to {}", "✓".green(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Handle the 'moods' command
fn handle_moods() {
    println!("{}", "Mood catalog:".bold().blue());
    for mood in Mood::ALL {
        println!("{}", mood.to_string().green().bold());

        let keywords = MOOD_LEXICON
            .iter()
            .find(|(m, _)| *m == mood)
            .map(|(_, words)| *words)
            .unwrap_or(&[]);
        if keywords.is_empty() {
            println!("  triggers: (default mood, no trigger words)");
        } else {
            println!("  triggers: {}", keywords.join(", "));
        }
        println!("  queries:  {}", queries_for(mood).join(" / "));
    }
}

/// Handle the 'benchmark' command
fn handle_benchmark(iterations: usize) {
    let iterations = iterations.max(1);
    let classifier = MoodClassifier::new();

    // Fixed corpus cycling through the sentiment bands
    let corpus = [
        "Crushed the deadline, project done, study session after",
        "I can't stop crying, feeling so lonely and tired",
        "Gym then dancing all night, so much hype",
        "Meditate, breathe, a little yoga before sleep",
        "Dinner date went perfectly, I think I'm in love",
    ];

    let mut timings = Vec::with_capacity(iterations);
    let start = Instant::now();
    for i in 0..iterations {
        let text = corpus[i % corpus.len()];
        let single = Instant::now();
        let _ = classifier.classify(text);
        timings.push(single.elapsed());
    }
    let total_time = start.elapsed();

    timings.sort();
    let avg_latency = total_time / (timings.len().max(1) as u32);
    let p50 = timings[timings.len() / 2];
    let p95 = timings[(timings.len() as f32 * 0.95) as usize];
    let p99 = timings[(timings.len() as f32 * 0.99) as usize];
    let throughput = iterations as f32 / total_time.as_secs_f32();

    println!("Benchmark results:");
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);
    println!("Throughput: {:.0} classifications/second", throughput);
}

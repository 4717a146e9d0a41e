//! # BABEL CLI
//!
//! Reader-facing front door to the library: decode a share token, print
//! the page it names, walk to neighboring pages, jump somewhere random,
//! verify the dictionaries, or print a page's musical score.
//!
//! ## Examples
//!
//! ```bash
//! babel show 0-1-1-1-1
//! babel next 0-1-1-1-1
//! babel random --chaos
//! babel verify
//! babel score 0-1-1-1-1 --mood dark --limit 40
//! RUST_LOG=debug babel show '#0-1-1-1-1'
//! ```

mod config;

use std::path::PathBuf;

use anyhow::bail;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use babel_engine::{Coordinate, PageGenerator};
use babel_lexicon::{load_embedded_raw, verify_entries, Lexicon, WordClass};
use babel_sonics::{score, Mood, Settings, Waveform};

use crate::config::Config;

/// Command line options.
#[derive(Parser)]
#[command(name = "babel", version, about = "Deterministic infinite-library page generator")]
struct Cli {
    /// TOML config file with reader defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Generate raw word streams instead of template sentences.
    #[arg(long, global = true)]
    chaos: bool,

    /// What to do.
    #[command(subcommand)]
    command: Command,
}

/// CLI subcommands.
#[derive(Subcommand)]
enum Command {
    /// Decode a share token and print its page.
    Show {
        /// Share token, e.g. `0-1-1-1-1`. Falls back to the config default,
        /// then to the library entrance.
        token: Option<String>,
    },
    /// Turn to the next page (carries into the next volume).
    Next {
        /// Share token of the current page.
        token: String,
    },
    /// Turn back one page (borrows from the previous volume).
    Prev {
        /// Share token of the current page.
        token: String,
    },
    /// Jump to a uniformly random page.
    Random,
    /// Verify the embedded dictionaries against the canonical alphabet.
    Verify,
    /// Print the musical score of a page.
    Score {
        /// Share token of the page to score.
        token: Option<String>,
        /// Listening mood: classic, dark, ambient, or fantasy.
        #[arg(long, value_parser = parse_mood)]
        mood: Option<Mood>,
        /// Playback speed in [0, 1].
        #[arg(long)]
        speed: Option<f64>,
        /// Volume in [0, 1].
        #[arg(long)]
        volume: Option<f64>,
        /// Print at most this many events.
        #[arg(long)]
        limit: Option<usize>,
    },
}

/// Parses a mood name for clap.
fn parse_mood(s: &str) -> Result<Mood, String> {
    match s.to_ascii_lowercase().as_str() {
        "classic" => Ok(Mood::Classic),
        "dark" => Ok(Mood::Dark),
        "ambient" => Ok(Mood::Ambient),
        "fantasy" => Ok(Mood::Fantasy),
        other => Err(format!(
            "unknown mood '{other}' (expected classic, dark, ambient, or fantasy)"
        )),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let coherent = !cli.chaos && config.coherent.unwrap_or(true);

    match cli.command {
        Command::Show { token } => {
            let coord = resolve(token.as_deref(), &config);
            print_page(&coord, coherent)
        }
        Command::Next { token } => {
            let coord = resolve(Some(&token), &config).next_page();
            print_page(&coord, coherent)
        }
        Command::Prev { token } => {
            let coord = resolve(Some(&token), &config).prev_page();
            print_page(&coord, coherent)
        }
        Command::Random => {
            let mut rng = StdRng::from_entropy();
            let coord = Coordinate::random(&mut rng);
            print_page(&coord, coherent)
        }
        Command::Verify => verify_dictionaries(),
        Command::Score {
            token,
            mood,
            speed,
            volume,
            limit,
        } => {
            let coord = resolve(token.as_deref(), &config);
            let mut settings = config.audio.unwrap_or_default();
            if let Some(mood) = mood {
                settings.mood = mood;
            }
            if let Some(speed) = speed {
                settings.speed = speed;
            }
            if let Some(volume) = volume {
                settings.volume = volume;
            }
            print_score(&coord, coherent, settings.clamped(), limit)
        }
    }
}

/// Resolves the coordinate to work on: explicit token, config default, or
/// the library entrance. Malformed tokens fall back with a warning.
fn resolve(token: Option<&str>, config: &Config) -> Coordinate {
    let token = token.or(config.token.as_deref());
    match token {
        Some(token) => Coordinate::decode(token).unwrap_or_else(|| {
            tracing::warn!(token, "malformed token, falling back to the entrance");
            Coordinate::default()
        }),
        None => Coordinate::default(),
    }
}

/// Generates and prints one page with its canonical token.
fn print_page(coord: &Coordinate, coherent: bool) -> anyhow::Result<()> {
    let lexicon = Lexicon::embedded()?;
    let generator = PageGenerator::new(&lexicon);
    let text = generator.generate(coord, coherent);

    println!("token: {coord}");
    println!(
        "hex {} / wall {} / shelf {} / vol {} / page {}",
        coord.hex(),
        coord.wall(),
        coord.shelf(),
        coord.vol(),
        coord.page()
    );
    println!();
    println!("{text}");
    Ok(())
}

/// Runs the dictionary verification report.
fn verify_dictionaries() -> anyhow::Result<()> {
    let raw = load_embedded_raw()?;
    let mut total_issues = 0usize;

    for class in WordClass::ALL {
        let words: Vec<String> = raw[class.index()].iter().map(|e| e.word.clone()).collect();
        let issues = verify_entries(class, &words);
        if issues.is_empty() {
            println!("{}: OK ({} entries)", class.data_file(), words.len());
        } else {
            for issue in &issues {
                eprintln!("{issue}");
            }
            eprintln!("{}: {} issue(s) found", class.data_file(), issues.len());
            total_issues += issues.len();
        }
    }

    if total_issues > 0 {
        bail!("dictionary verification failed with {total_issues} issue(s)");
    }
    println!("all dictionaries verified");
    Ok(())
}

/// Prints the note-event score of one page.
fn print_score(
    coord: &Coordinate,
    coherent: bool,
    settings: Settings,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let lexicon = Lexicon::embedded()?;
    let generator = PageGenerator::new(&lexicon);
    let text = generator.generate(coord, coherent);
    let events = score(&text, &settings);
    let shown = limit.unwrap_or(events.len()).min(events.len());

    println!("token: {coord}");
    println!(
        "mood: {:?}  speed: {:.2}  master gain: {:.3}",
        settings.mood,
        settings.speed,
        settings.master_gain()
    );
    for (event, c) in events.iter().zip(text.chars()).take(shown) {
        match event.note {
            Some(note) => println!(
                "{:>5}  {:?}  {:>8.2} Hz  {:<8}  gap {:>5.0} ms",
                event.char_index,
                c,
                note.frequency_hz,
                waveform_name(note.waveform),
                event.gap_ms
            ),
            None => println!(
                "{:>5}  {:?}  {:>11}  {:<8}  gap {:>5.0} ms",
                event.char_index, c, "rest", "", event.gap_ms
            ),
        }
    }
    if shown < events.len() {
        println!("... {} more events", events.len() - shown);
    }
    Ok(())
}

/// Lowercase waveform label for score output.
const fn waveform_name(waveform: Waveform) -> &'static str {
    match waveform {
        Waveform::Sine => "sine",
        Waveform::Sawtooth => "sawtooth",
        Waveform::Triangle => "triangle",
    }
}

//! Arcana CLI
//!
//! Thin wrapper around arcana-core for reading the cards from a terminal.
//!
//! ## Usage
//!
//! ```bash
//! # Today's card
//! arcana daily
//!
//! # Pull a single card
//! arcana draw
//!
//! # Browse the deck
//! arcana cards list --suit cups
//! arcana cards show 0
//!
//! # Lay out a spread
//! arcana spreads list
//! arcana reading create 1 "What should I focus on?"
//! arcana reading list
//!
//! # Keep a journal
//! arcana journal add "The Tower again." --card 16
//! arcana journal list
//! arcana affirmations list --daily
//! ```

use std::path::PathBuf;

use anyhow::Result;
use arcana_core::{
    Affirmation, AffirmationFilter, Arcana, CardFilter, CardId, DrawnCard, NewJournalEntry,
    ReadingId, SpreadId, Suit, TarotEngine,
};
use clap::{Parser, Subcommand};

/// Arcana - tarot readings and journal
#[derive(Parser)]
#[command(name = "arcana")]
#[command(version = "0.1.0")]
#[command(about = "Arcana - tarot readings and journal")]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Data directory (default: ~/.arcana/data)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show today's card (drawn once per day)
    Daily,

    /// Draw a single random card
    Draw,

    /// Browse the deck
    Cards {
        #[command(subcommand)]
        action: CardsAction,
    },

    /// Browse the built-in spreads
    Spreads {
        #[command(subcommand)]
        action: SpreadsAction,
    },

    /// Record and review readings
    Reading {
        #[command(subcommand)]
        action: ReadingAction,
    },

    /// Personal tarot journal
    Journal {
        #[command(subcommand)]
        action: JournalAction,
    },

    /// Daily and card affirmations
    Affirmations {
        #[command(subcommand)]
        action: AffirmationsAction,
    },
}

#[derive(Subcommand)]
enum CardsAction {
    /// List cards, optionally filtered
    List {
        /// Only the major arcana
        #[arg(long, conflicts_with = "suit")]
        major: bool,
        /// Minor suit (wands, cups, swords, pentacles)
        #[arg(short, long)]
        suit: Option<String>,
        /// Match against name and keywords
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Show one card with its meanings
    Show {
        /// Card number (0-77)
        card_id: String,
    },
}

#[derive(Subcommand)]
enum SpreadsAction {
    /// List all spreads
    List,
    /// Show a spread's positions
    Show {
        /// Spread ID
        spread_id: String,
    },
}

#[derive(Subcommand)]
enum ReadingAction {
    /// Draw cards for a spread and record the reading
    Create {
        /// Spread ID
        spread_id: String,
        /// The question asked of the cards
        question: String,
    },
    /// List readings, newest first
    List,
    /// Show a reading with its cards
    Show {
        /// Reading ID (ULID string)
        reading_id: String,
    },
    /// Replace a reading's notes
    Notes {
        /// Reading ID (ULID string)
        reading_id: String,
        /// New notes
        notes: String,
    },
    /// Delete a reading
    Delete {
        /// Reading ID (ULID string)
        reading_id: String,
    },
}

#[derive(Subcommand)]
enum JournalAction {
    /// Write a journal entry
    Add {
        /// Entry text
        content: String,
        /// Optional title
        #[arg(short, long, default_value = "")]
        title: String,
        /// Card this entry refers to (repeatable)
        #[arg(short, long = "card")]
        cards: Vec<String>,
        /// How you felt
        #[arg(short, long)]
        mood: Option<String>,
    },
    /// List journal entries, newest first
    List,
}

#[derive(Subcommand)]
enum AffirmationsAction {
    /// List affirmations
    List {
        /// Only the daily affirmations
        #[arg(long, conflicts_with = "cards")]
        daily: bool,
        /// Only the card affirmations
        #[arg(long)]
        cards: bool,
    },
    /// Today's affirmation
    Today,
    /// The affirmation for one card
    Card {
        /// Card number (0-77)
        card_id: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    tracing::debug!(?data_dir, "Opening data directory");
    let engine = TarotEngine::new(&data_dir)?;

    match cli.command {
        Commands::Daily => {
            let daily = engine.daily_card()?;
            println!("Card of the day ({}):", daily.date);
            print_drawn(&daily.card);
        }

        Commands::Draw => {
            let drawn = engine.random_card();
            print_drawn(&drawn);
        }

        Commands::Cards { action } => match action {
            CardsAction::List { major, suit, query } => {
                let filter = CardFilter {
                    arcana: major.then_some(Arcana::Major),
                    suit: suit.as_deref().map(parse_suit).transpose()?,
                    query,
                };
                let cards = engine.search_cards(&filter);
                if cards.is_empty() {
                    println!("No cards found.");
                } else {
                    println!("Cards ({}):", cards.len());
                    println!();
                    for card in cards {
                        println!("  {:>2} {}", card.id, card.name);
                    }
                }
            }

            CardsAction::Show { card_id } => {
                let card = engine.card(parse_card_id(&card_id)?)?;
                println!("Card: {}", card.name);
                println!("  ID: {}", card.id);
                println!("  Arcana: {}", card.arcana.label());
                if let Some(suit) = card.suit {
                    println!("  Suit: {}", suit.name());
                }
                println!("  Element: {}", card.element.name());
                println!("  Keywords: {}", card.keywords.join(", "));
                println!();
                println!("{}", card.description);
                println!();
                println!("  Upright: {}", card.upright_meaning);
                println!("  Reversed: {}", card.reversed_meaning);
                if let Ok(affirmation) = engine.card_affirmation(card.id) {
                    println!("  Affirmation: {}", affirmation.text);
                }
            }
        },

        Commands::Spreads { action } => match action {
            SpreadsAction::List => {
                println!("Spreads ({}):", engine.spreads().len());
                println!();
                for spread in engine.spreads() {
                    println!(
                        "  {} {} ({} cards, {})",
                        spread.id,
                        spread.name,
                        spread.card_count(),
                        spread.difficulty.label()
                    );
                }
            }

            SpreadsAction::Show { spread_id } => {
                let spread = engine.spread(parse_spread_id(&spread_id)?)?;
                println!("Spread: {}", spread.name);
                println!("  ID: {}", spread.id);
                println!("  Difficulty: {}", spread.difficulty.label());
                println!("  Time: {}", spread.time_required);
                println!();
                println!("{}", spread.long_description);
                println!();
                println!("Positions:");
                for position in &spread.positions {
                    println!("  {}. {} - {}", position.id, position.name, position.description);
                }
            }
        },

        Commands::Reading { action } => match action {
            ReadingAction::Create {
                spread_id,
                question,
            } => {
                let spread_id = parse_spread_id(&spread_id)?;
                let reading = engine.draw_reading(spread_id, &question)?;
                println!("Created reading: {}", reading.spread_name);
                println!("  ID: {}", reading.id.to_string_repr());
                println!();
                let positions = &engine.spread(spread_id)?.positions;
                for (i, drawn) in reading.cards.iter().enumerate() {
                    let position = positions
                        .get(i)
                        .map(|p| p.name.as_str())
                        .unwrap_or("Card");
                    println!("  {}: {} ({})", position, drawn.card.name, drawn.orientation);
                }
            }

            ReadingAction::List => {
                let readings = engine.readings()?;
                if readings.is_empty() {
                    println!("No readings found.");
                } else {
                    println!("Readings ({}):", readings.len());
                    println!();
                    for reading in readings {
                        println!(
                            "  {} {} - {}",
                            reading.id.to_string_repr(),
                            reading.spread_name,
                            reading.question
                        );
                    }
                }
            }

            ReadingAction::Show { reading_id } => {
                let reading = engine.reading(&parse_reading_id(&reading_id)?)?;
                println!("Reading: {}", reading.spread_name);
                println!("  ID: {}", reading.id.to_string_repr());
                println!("  Question: {}", reading.question);
                println!("  Created: {}", format_timestamp(reading.created_at));
                println!();
                for drawn in &reading.cards {
                    println!("  {} ({})", drawn.card.name, drawn.orientation);
                    println!("    {}", drawn.meaning());
                }
                if !reading.notes.is_empty() {
                    println!();
                    println!("Notes: {}", reading.notes);
                }
            }

            ReadingAction::Notes { reading_id, notes } => {
                let id = parse_reading_id(&reading_id)?;
                if engine.update_reading_notes(&id, &notes)? {
                    println!("Updated notes for reading {}", reading_id);
                } else {
                    anyhow::bail!("Reading not found: {}", reading_id);
                }
            }

            ReadingAction::Delete { reading_id } => {
                let id = parse_reading_id(&reading_id)?;
                if engine.delete_reading(&id)? {
                    println!("Deleted reading {}", reading_id);
                } else {
                    println!("Reading not found: {}", reading_id);
                }
            }
        },

        Commands::Journal { action } => match action {
            JournalAction::Add {
                content,
                title,
                cards,
                mood,
            } => {
                let card_ids = cards
                    .iter()
                    .map(|c| parse_card_id(c))
                    .collect::<Result<Vec<_>>>()?;
                let entry = engine.add_journal_entry(NewJournalEntry {
                    title,
                    content,
                    card_ids,
                    mood,
                })?;
                println!("Added journal entry");
                println!("  ID: {}", entry.id.to_string_repr());
            }

            JournalAction::List => {
                let entries = engine.journal_entries()?;
                if entries.is_empty() {
                    println!("No journal entries.");
                } else {
                    println!("Journal ({}):", entries.len());
                    for entry in entries {
                        println!();
                        let title = if entry.title.is_empty() {
                            "(untitled)"
                        } else {
                            entry.title.as_str()
                        };
                        println!("  {} {}", format_timestamp(entry.created_at), title);
                        println!("    {}", entry.content);
                        for id in &entry.card_ids {
                            if let Ok(card) = engine.card(*id) {
                                println!("    - {}", card.name);
                            }
                        }
                    }
                }
            }
        },

        Commands::Affirmations { action } => match action {
            AffirmationsAction::List { daily, cards } => {
                let filter = if daily {
                    AffirmationFilter::Daily
                } else if cards {
                    AffirmationFilter::Cards
                } else {
                    AffirmationFilter::All
                };
                let affirmations = engine.affirmations(filter);
                println!("Affirmations ({}):", affirmations.len());
                println!();
                for affirmation in affirmations {
                    print_affirmation(affirmation);
                }
            }

            AffirmationsAction::Today => {
                println!("Today's affirmation:");
                print_affirmation(engine.daily_affirmation());
            }

            AffirmationsAction::Card { card_id } => {
                let affirmation = engine.card_affirmation(parse_card_id(&card_id)?)?;
                print_affirmation(affirmation);
            }
        },
    }

    Ok(())
}

fn print_affirmation(affirmation: &Affirmation) {
    match &affirmation.card_name {
        Some(card) => println!("  {:>3} {} ({})", affirmation.id, affirmation.text, card),
        None => println!("  {:>3} {}", affirmation.id, affirmation.text),
    }
}

fn print_drawn(drawn: &DrawnCard) {
    println!("  {} ({})", drawn.card.name, drawn.orientation);
    println!("  ID: {}", drawn.card.id);
    println!("  {}", drawn.meaning());
}

/// Set up logging based on verbosity level
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Get the default data directory (~/.arcana/data)
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".arcana")
        .join("data")
}

fn format_timestamp(ts: i64) -> String {
    chrono::DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| ts.to_string())
}

fn parse_card_id(s: &str) -> Result<CardId> {
    s.parse::<CardId>()
        .map_err(|e| anyhow::anyhow!("Invalid card ID '{}': {}", s, e))
}

fn parse_spread_id(s: &str) -> Result<SpreadId> {
    s.parse::<SpreadId>()
        .map_err(|e| anyhow::anyhow!("Invalid spread ID '{}': {}", s, e))
}

fn parse_reading_id(s: &str) -> Result<ReadingId> {
    ReadingId::from_string(s).map_err(|e| anyhow::anyhow!("Invalid reading ID '{}': {}", s, e))
}

fn parse_suit(s: &str) -> Result<Suit> {
    Suit::parse(s).ok_or_else(|| anyhow::anyhow!("Unknown suit '{}'", s))
}

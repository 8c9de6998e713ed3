//! Terminal front end for the kelime vocabulary trainer.
//!
//! This binary is a thin adapter: it renders the engine's observable state
//! and forwards keystrokes to the engine's operations. All session policy
//! lives in `kelime-engine`.

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use kelime_engine::{
    Advance, BlockStart, CardStatus, FeedbackKind, KelimeClient, SessionStats, Settings,
    StudySession, Translation, highlight::highlight_word,
};
use tracing::info;

/// Terminal front end for the kelime vocabulary trainer.
#[derive(Parser, Debug)]
#[command(name = "kelime")]
#[command(version, about, long_about = None)]
struct Args {
    /// Card service host address
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Card service port
    #[arg(long, default_value_t = 5001)]
    port: u16,

    /// Enable verbose logging (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show collection-wide learning counts
    Stats,
    /// Show study settings, or change them with the flags
    Settings {
        /// Correct repetitions required before a card counts as learned
        #[arg(long)]
        learned_threshold: Option<u32>,
        /// Number of cards per study block
        #[arg(long)]
        block_size: Option<u32>,
    },
    /// Look up a headword and print the proposed card
    Search {
        /// The foreign-language headword
        word: String,
        /// Also store the card after a successful lookup
        #[arg(long)]
        add: bool,
    },
    /// List cards by learning status (new, learning, learned)
    List {
        /// The status to filter on
        status: CardStatus,
    },
    /// Run an interactive study block
    Study {
        /// Cards per block (defaults to the service-side setting)
        #[arg(long)]
        size: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing
    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let url = format!("http://{}:{}", args.host, args.port);
    info!(service_url = %url, "connecting to card service");

    let client = KelimeClient::builder().url(&url).build();

    match args.command {
        Command::Stats => {
            let stats = client.stats().fetch().await?;
            println!("Learned:  {}", stats.learned);
            println!("Learning: {}", stats.learning);
            println!("New:      {}", stats.new);
            println!("Total:    {}", stats.total);
        }
        Command::Settings {
            learned_threshold,
            block_size,
        } => {
            let current = client.settings().fetch().await?;
            if learned_threshold.is_none() && block_size.is_none() {
                println!("learned_threshold: {}", current.learned_threshold);
                println!("block_size:        {}", current.block_size);
            } else {
                let updated = Settings {
                    learned_threshold: learned_threshold.unwrap_or(current.learned_threshold),
                    block_size: block_size.unwrap_or(current.block_size),
                };
                client.settings().update(&updated).await?;
                println!("Settings saved.");
            }
        }
        Command::Search { word, add } => {
            let draft = client.words().search(&word).await?;
            println!("Result for \"{}\":", draft.word);
            print_translations(&draft.word, &draft.translations);
            if add {
                let card = client.cards().add(&draft).await?;
                println!("Card #{} added.", card.id);
            }
        }
        Command::List { status } => {
            let cards = client.cards().by_status(status).await?;
            if cards.is_empty() {
                println!("No {status} cards.");
            }
            for card in &cards {
                println!("{} ({} correct in a row)", card.word, card.correct_repetitions);
            }
        }
        Command::Study { size } => {
            let size = match size {
                Some(size) => size,
                None => client.settings().fetch().await?.block_size,
            };
            let mut session = StudySession::from_client(client);
            run_study(&mut session, size).await?;
        }
    }

    Ok(())
}

/// Drive one study block interactively.
async fn run_study(
    session: &mut StudySession,
    size: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    match session.start_block(size).await? {
        BlockStart::Empty => {
            println!("Nothing to review right now. Add some cards first!");
            return Ok(());
        }
        BlockStart::Started { total } => {
            println!("Starting a block of {total} cards.");
        }
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while let Some(card) = session.current_card().cloned() {
        let (done, total) = session.progress();
        println!();
        println!("Card {}/{}: {}", done + 1, total, card.word);
        print!("[enter] reveal, [q] quit > ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        if line?.trim() == "q" {
            println!("Block abandoned.");
            return Ok(());
        }

        session.reveal();
        print_translations(&card.word, &card.translations);

        // Feedback is awaited before the tally moves; on a service error the
        // card stays revealed and the prompt comes back.
        loop {
            print!("[1] know, [2] unsure, [3] don't know > ");
            io::stdout().flush()?;
            let Some(line) = lines.next() else { return Ok(()) };
            let kind = match line?.trim() {
                "1" => FeedbackKind::Correct,
                "2" => FeedbackKind::Unsure,
                "3" => FeedbackKind::Incorrect,
                _ => continue,
            };
            match session.submit_feedback(kind).await {
                Ok(outcome) => {
                    if outcome.became_learned {
                        println!("⭐ \"{}\" is now learned!", card.word);
                    }
                    break;
                }
                Err(e) => eprintln!("Could not submit feedback: {e}. Try again."),
            }
        }

        if session.advance()? == Advance::BlockComplete {
            print_summary(session.stats());
        }
    }

    Ok(())
}

/// Render a card's translations with the headword emphasized in examples.
fn print_translations(word: &str, translations: &[Translation]) {
    for t in translations {
        println!("  {}", t.native_text);
        if let Some(example) = t.example_foreign.as_deref() {
            println!("    🇹🇷 {}", highlight_word(example, word));
        }
        if let Some(example) = t.example_native.as_deref() {
            println!("    🇺🇦 {example}");
        }
    }
}

fn print_summary(stats: &SessionStats) {
    println!();
    println!("Block complete!");
    println!("  ✅ Knew:       {}", stats.correct);
    println!("  🤔 Unsure:     {}", stats.unsure);
    println!("  ❌ Didn't know: {}", stats.incorrect);
    println!("  ⭐ Became learned: {}", stats.became_learned);
}

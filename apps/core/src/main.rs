// MindBot terminal entry point
// Line-oriented chat on stdin/stdout; logs go to stderr.

use anyhow::Context;
use mindbot_core::commands::{Command, HELP_TEXT};
use mindbot_core::config::AppConfig;
use mindbot_core::database;
use mindbot_core::fs_manager::PortablePathManager;
use mindbot_core::models::{ChatMessage, MoodEntry, Sender};
use mindbot_core::mood::{mood_emoji, mood_label, MOOD_TAG_OPTIONS};
use mindbot_core::session::ChatSession;
use mindbot_core::telemetry::init_tracing;
use mindbot_core::wellness::{ActivityLaunch, BreathingExercise};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

fn print_message(message: &ChatMessage) {
    match message.sender {
        Sender::User => {
            let badge = message
                .emotion
                .as_ref()
                .map(|e| {
                    format!(
                        " [{} {} {:.0}%]",
                        e.primary.icon(),
                        e.primary,
                        e.confidence * 100.0
                    )
                })
                .unwrap_or_default();
            println!("you{}: {}", badge, message.text);
        }
        Sender::Bot => println!("\nMindBot: {}\n", message.text),
    }
}

fn print_prompt() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}

async fn run_breathing(cycles: u32) {
    let mut exercise = BreathingExercise::new();
    let mut ticker = tokio::time::interval(Duration::from_secs(1));

    println!("4-7-8 Breathing  (Inhale 4 • Hold 7 • Exhale 8)");
    exercise.toggle();
    ticker.tick().await;

    while exercise.completed_cycles() < cycles {
        println!("{}", exercise);
        ticker.tick().await;
        exercise.tick();
    }

    println!("Well done. Take a moment to notice how you feel.\n");
}

async fn handle<R: Rng>(session: &mut ChatSession<R>, command: Command) -> anyhow::Result<bool> {
    match command {
        Command::Chat(text) => {
            let added = session.send(&text).await?;
            // Echo the user line with its analysis badge, then the reply
            for message in &added {
                print_message(message);
            }
        }
        Command::LogMood { mood, tags, notes } => {
            let entry = MoodEntry::new(mood, tags, notes)?;
            println!(
                "Logged {} {} ({}/10)",
                mood_emoji(entry.mood),
                mood_label(entry.mood),
                entry.mood
            );
            session.log_mood(entry).await?;
        }
        Command::MoodSummary => {
            let summary = session.mood_summary();
            match summary.average {
                None => println!("No moods logged yet. Try /mood 7 calm"),
                Some(average) => {
                    println!("Average mood: {:.1}   Days tracked: {}", average, summary.entries);
                    for point in &summary.chart {
                        println!(
                            "  {} {:<10} {}",
                            point.day,
                            "█".repeat(usize::from(point.mood)),
                            point.mood
                        );
                    }
                    println!("Recent entries:");
                    for entry in &summary.recent {
                        println!(
                            "  {} {} ({}/10) {} {}",
                            mood_emoji(entry.mood),
                            mood_label(entry.mood),
                            entry.mood,
                            entry.timestamp.format("%Y-%m-%d"),
                            entry.emotions.join(", ")
                        );
                        if let Some(notes) = &entry.notes {
                            println!("      {}", notes);
                        }
                    }
                }
            }
        }
        Command::Activities => {
            let activities = session.recommended_activities();
            if activities.is_empty() {
                println!("Tell me how you feel first and I'll suggest something.");
            }
            for activity in activities {
                println!(
                    "  {:<22} {} ({} min, {})\n      {}",
                    activity.id,
                    activity.title,
                    activity.duration_minutes,
                    activity.category.label(),
                    activity.description
                );
            }
        }
        Command::StartActivity(id) => match session.start_activity(&id).await? {
            ActivityLaunch::Breathing(_) => run_breathing(1).await,
            ActivityLaunch::Guided { message } => println!("\nMindBot: {}\n", message),
        },
        Command::Breathe { cycles } => run_breathing(cycles).await,
        Command::Help => {
            println!("{}", HELP_TEXT);
            println!("Mood tags: {}", MOOD_TAG_OPTIONS.join(", "));
        }
        Command::Quit => return Ok(false),
    }

    Ok(true)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = AppConfig::from_env().context("Failed to read configuration")?;
    init_tracing(config.log_format)?;

    PortablePathManager::init(&config.data_dir).context("Failed to initialize data directory")?;
    let pool = database::init_db(&PortablePathManager::db_path(&config.data_dir))
        .await
        .context("Failed to initialize database")?;

    let mut session = ChatSession::load(pool, config.reply_delay, StdRng::from_entropy()).await?;
    info!(data_dir = %config.data_dir.display(), "MindBot ready");

    if let Some(last) = session.messages().last() {
        print_message(last);
    }
    println!("(type /help for commands)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    print_prompt()?;

    while let Some(line) = lines.next_line().await? {
        let keep_going = match Command::parse(&line) {
            Ok(command) => match handle(&mut session, command).await {
                Ok(keep_going) => keep_going,
                Err(e) => {
                    error!("{:#}", e);
                    println!("Something went wrong: {}", e);
                    true
                }
            },
            Err(e) => {
                println!("{}", e);
                true
            }
        };

        if !keep_going {
            break;
        }
        print_prompt()?;
    }

    println!("Take care of yourself. Goodbye!");
    Ok(())
}

//! snake: lay out a multi-section session and seed session-wide pair ids
//!
//! Pairs are assumed ranked, strongest first: pair id 1 is the top seed.
//! The session is split into sections of at most 15 tables and ids are
//! snaked across the sections so that no section collects the top seeds.
//!
//! # Usage
//!
//! ```bash
//! # 31 tables: three sections (11, 10, 10), listing of ids per table
//! snake --tables 31
//!
//! # Guide listing with a named session, plus each section's Howell rounds
//! snake --tables 12 --session-id SAT-PM --rounds 3 --scheme howell -f guide
//! ```
//!
//! # Exit Codes
//!
//! - 0: Session seeded
//! - 1: Bad arguments
//! - 2: Seeding failed

use chrono::Local;
use clap::Parser;
use log::info;
use seating_core::{build_seating, check_seeding, Scheme, Session, Specs};
use seating_text::{format_seating_iids, format_seeding, format_session, PrintFormat};
use serde_json::json;

#[derive(Parser)]
#[command(name = "snake")]
#[command(about = "Split a session into sections and snake-seed session-wide pair ids")]
struct Args {
    /// Total number of tables in the session
    #[arg(short = 't', long = "tables")]
    tables: usize,

    /// Session id (defaults to today's date, YYYYMMDD)
    #[arg(short = 's', long = "session-id")]
    session_id: Option<String>,

    /// Also print each section's seating for this many rounds, in session ids
    #[arg(short = 'r', long = "rounds")]
    rounds: Option<usize>,

    /// Movement scheme for --rounds (Mitchell or Howell)
    #[arg(long = "scheme", default_value = "mitchell")]
    scheme: Scheme,

    /// Output format: listing, guide or json
    #[arg(short = 'f', long = "format", default_value = "listing")]
    format: PrintFormat,
}

fn fail(code: i32, message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(code);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_target(false)
        .init();

    let args = Args::parse();

    if args.rounds == Some(0) {
        fail(1, "--rounds needs at least one round");
    }

    let specs = Specs::new(args.tables).unwrap_or_else(|e| fail(1, &e.to_string()));
    let session_id = args
        .session_id
        .clone()
        .unwrap_or_else(|| Local::now().format("%Y%m%d").to_string());

    let mut session = Session::new(session_id, &specs);
    let next = session.seed().unwrap_or_else(|e| fail(2, &e.to_string()));
    if let Err(e) = check_seeding(&session.field) {
        fail(2, &e.to_string());
    }
    info!(
        "session {}: {} sections of {} (+{} overflow), ids 1..{}",
        session.id, specs.sections, specs.tps, specs.extra, next
    );

    match args.format {
        PrintFormat::Listing => print!("{}", format_seeding(&session.field)),
        PrintFormat::Guide => print!("{}", format_session(&session)),
        PrintFormat::Json => {
            let record = json!({ "session": session });
            match serde_json::to_string_pretty(&record) {
                Ok(text) => println!("{}", text),
                Err(e) => fail(2, &e.to_string()),
            }
        }
    }

    if let Some(rounds) = args.rounds {
        for section in &session.field {
            let seating = build_seating(section.size(), rounds, args.scheme)
                .with_session_ids(section)
                .unwrap_or_else(|e| fail(2, &e.to_string()));
            println!("Section {} ({})", section.section_id, args.scheme);
            print!("{}", format_seating_iids(&seating));
        }
    }
}

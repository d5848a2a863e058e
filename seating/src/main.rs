use clap::Parser;
use log::info;
use seating_core::{
    build_seating, derive_movement, moves_after, Direction, Movement, Scheme, Seating,
};
use seating_text::{
    format_itinerary, format_moves, format_movement, format_seating, format_table_guide,
    PrintFormat,
};
use serde_json::json;

#[derive(Parser)]
#[command(name = "seating")]
#[command(about = "Mitchell/Howell seating and pair movements for duplicate pairs", long_about = None)]
struct Args {
    /// Number of tables
    #[arg(value_name = "TABLES")]
    tables: usize,

    /// Number of rounds
    #[arg(value_name = "ROUNDS")]
    rounds: usize,

    /// Movement scheme (Mitchell or Howell; the first letter is enough)
    #[arg(value_name = "SCHEME", default_value = "mitchell")]
    scheme: Scheme,

    /// Output format: listing, guide or json
    #[arg(short = 'f', long = "format", default_value = "listing")]
    format: PrintFormat,

    /// Only print this pair's itinerary
    #[arg(short = 'p', long = "pair")]
    pair: Option<u32>,

    /// Who sits at ROUND,TABLE,ns|ew (round and table 1-based)
    #[arg(short = 'l', long = "lookup", value_name = "ROUND,TABLE,DIR")]
    lookup: Option<String>,

    /// Where every pair goes when ROUND (1-based) ends
    #[arg(short = 'm', long = "moves", value_name = "ROUND")]
    moves: Option<usize>,
}

/// Parse "ROUND,TABLE,DIR" into a 0-based round, table number and direction
fn parse_lookup(s: &str) -> Result<(usize, u32, Direction), String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected ROUND,TABLE,ns|ew, got '{}'", s));
    }
    let round: usize = parts[0]
        .parse()
        .map_err(|_| format!("invalid round '{}'", parts[0]))?;
    let table: u32 = parts[1]
        .parse()
        .map_err(|_| format!("invalid table '{}'", parts[1]))?;
    let direction = match parts[2].to_lowercase().as_str() {
        "ns" | "n" | "s" => Direction::NorthSouth,
        "ew" | "e" | "w" => Direction::EastWest,
        other => return Err(format!("invalid direction '{}'", other)),
    };
    let round = round
        .checked_sub(1)
        .ok_or_else(|| "rounds are numbered from 1".to_string())?;
    Ok((round, table, direction))
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

    if args.tables == 0 || args.rounds == 0 {
        fail(1, "need at least one table and one round");
    }

    let seating = build_seating(args.tables, args.rounds, args.scheme);
    let movement = match derive_movement(&seating, seating.pair_count()) {
        Ok(movement) => movement,
        Err(e) => fail(2, &e.to_string()),
    };
    info!(
        "{} movement: {} tables, {} rounds, {} pairs",
        args.scheme,
        args.tables,
        args.rounds,
        movement.pair_count()
    );

    if let Some(lookup) = &args.lookup {
        let (round, table, direction) = parse_lookup(lookup).unwrap_or_else(|e| fail(1, &e));
        match movement.find_pair(round, table, direction) {
            Ok(pair) => println!(
                "Round {} table {} {}: pair {}",
                round + 1,
                table,
                direction,
                pair
            ),
            Err(e) => fail(2, &e.to_string()),
        }
        return;
    }

    if let Some(round) = args.moves {
        let round = round
            .checked_sub(1)
            .unwrap_or_else(|| fail(1, "rounds are numbered from 1"));
        match moves_after(&seating, &movement, round) {
            Ok(moves) => print!("{}", format_moves(round, &moves)),
            Err(e) => fail(2, &e.to_string()),
        }
        return;
    }

    if let Some(pair) = args.pair {
        match movement.itinerary(pair) {
            Some(itinerary) => print!("{}", format_itinerary(pair, itinerary)),
            None => fail(
                1,
                &format!("pair {} is outside 1..={}", pair, movement.pair_count()),
            ),
        }
        return;
    }

    print_all(&seating, &movement, args.scheme, args.format);
}

fn print_all(seating: &Seating, movement: &Movement, scheme: Scheme, format: PrintFormat) {
    match format {
        PrintFormat::Listing => {
            print!("{}", format_seating(seating));
            print!("{}", format_movement(movement));
        }
        PrintFormat::Guide => {
            for table in 1..=seating.table_count() as u32 {
                println!("{}", format_table_guide(seating, table));
            }
            for (index, itinerary) in movement.itineraries().iter().enumerate() {
                print!("{}", format_itinerary(index as u32 + 1, itinerary));
            }
        }
        PrintFormat::Json => {
            let record = json!({
                "scheme": scheme.name(),
                "seating": seating,
                "movement": movement,
            });
            match serde_json::to_string_pretty(&record) {
                Ok(text) => println!("{}", text),
                Err(e) => fail(2, &e.to_string()),
            }
        }
    }
}

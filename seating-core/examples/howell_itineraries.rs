use seating_core::{build_seating, derive_movement, Direction, Scheme};

fn main() {
    let seating = build_seating(4, 7, Scheme::Howell);
    let movement = derive_movement(&seating, seating.pair_count()).unwrap();

    println!("Howell, 4 tables, 7 rounds");
    println!("==========================\n");

    for (round, matchups) in seating.rounds().iter().enumerate() {
        print!("Round {}:", round + 1);
        for matchup in matchups {
            print!("  T{} {}-{}", matchup.table, matchup.ns, matchup.ew);
        }
        println!();
    }
    println!();

    // Count how often each pair meets every other pair
    let pairs = movement.pair_count();
    let mut meetings = vec![vec![0u32; pairs + 1]; pairs + 1];
    for matchups in seating.rounds() {
        for matchup in matchups {
            meetings[matchup.ns as usize][matchup.ew as usize] += 1;
            meetings[matchup.ew as usize][matchup.ns as usize] += 1;
        }
    }

    println!("Itineraries:");
    println!("------------");
    for pair in 1..=pairs as u32 {
        let itinerary = movement.itinerary(pair).unwrap();
        let ew_rounds = itinerary
            .iter()
            .filter(|p| p.direction == Direction::EastWest)
            .count();
        let opponents = (1..=pairs)
            .filter(|&other| meetings[pair as usize][other] > 0)
            .count();
        println!(
            "Pair {}: {} rounds EW, {} different opponents",
            pair, ew_rounds, opponents
        );
    }
}

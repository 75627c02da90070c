//! Play command implementation: a dynamically sized map with an
//! interactive attack phase.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::{input, output, seed_or_time, CliError};
use conquest::game::{resolve_attack, Map, Territory, MIN_ATTACK_TROOPS, MIN_TERRITORIES};

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the input stream ends mid-session.
pub(crate) fn execute(seed: Option<u64>) -> Result<(), CliError> {
    let seed = seed_or_time(seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let count = input::read_number_at_least(
        &format!("How many territories to register (minimum {MIN_TERRITORIES})? "),
        u32::try_from(MIN_TERRITORIES).unwrap_or(2),
    )?;

    println!();
    println!("--- INITIAL TERRITORY REGISTRATION ({count} in total) ---");

    let mut territories = Vec::new();
    for i in 0..count {
        println!();
        println!("Territory {i}:");
        let name = input::read_word("  Name: ")?;
        let owner = input::read_word("  Faction (color): ")?;
        let troops = input::read_number_at_least(
            &format!("  Troops (minimum {MIN_ATTACK_TROOPS}): "),
            MIN_ATTACK_TROOPS,
        )?;
        territories.push(Territory::new(name, owner, troops));
    }

    let mut map = Map::new(territories)
        .ok_or_else(|| CliError::new("registration produced an unplayable map"))?;

    loop {
        println!();
        println!("====================================================");
        println!("                   ACTION MENU");
        println!("====================================================");
        print!("{}", output::format_map(&map));
        println!();
        println!("[1] Start attack phase");
        println!("[0] Quit the game");

        match input::read_number("Choose an action: ")? {
            1 => attack_phase(&mut map, &mut rng)?,
            0 => {
                println!();
                println!("Closing the game...");
                return Ok(());
            }
            _ => println!("Unrecognized option. Try again."),
        }
    }
}

/// Run one interactive attack: select a pair, resolve, show the result.
fn attack_phase(map: &mut Map, rng: &mut ChaCha8Rng) -> Result<(), CliError> {
    println!();
    println!("--- ATTACK PHASE ---");

    let (attacker, defender) = input::select_attack(map)?;

    println!();
    println!("{}", output::format_attack_header(map, attacker, defender));
    match resolve_attack(map, attacker, defender, rng) {
        Ok(report) => print!("{}", output::format_battle(&report, map)),
        Err(e) => println!("Attack failed: {e}."),
    }

    println!();
    println!("--- BATTLE RESULT ---");
    print!("{}", output::format_map(map));

    Ok(())
}

//! Campaign command implementation: the mission variant.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::{input, output, seed_or_time, CliError};
use conquest::game::GameState;

/// Execute the campaign command.
///
/// # Errors
///
/// Returns an error if the input stream ends mid-campaign.
pub(crate) fn execute(seed: Option<u64>) -> Result<(), CliError> {
    let seed = seed_or_time(seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut game = GameState::standard_campaign();
    let mission = game.assign_mission(&mut rng).clone();

    println!();
    println!("--- Welcome to the campaign! ---");
    println!("You play the {} faction.", game.player);
    println!();
    println!("{}", output::format_mission(&mission));

    loop {
        println!();
        println!("=============== TURN {} ===============", game.turn() + 1);
        print!("{}", output::format_map(&game.map));
        println!();
        println!("[1] Attack");
        println!("[0] Abandon the campaign");

        match input::read_number("Choose an action: ")? {
            1 => {
                let (attacker, defender) = input::select_attack(&game.map)?;

                println!();
                println!(
                    "{}",
                    output::format_attack_header(&game.map, attacker, defender)
                );
                match game.attack(attacker, defender, &mut rng) {
                    Ok(report) => print!("{}", output::format_battle(&report, &game.map)),
                    Err(e) => println!("Attack failed: {e}."),
                }
                game.advance_turn();

                if game.mission_accomplished() {
                    println!();
                    print!("{}", output::format_map(&game.map));
                    println!();
                    println!("{}", output::format_victory(&game.player, &mission));
                    println!();
                    println!("Campaign finished in {} turns.", game.turn());
                    return Ok(());
                }
                println!();
                println!("Mission not accomplished this turn.");
            }
            0 => {
                println!();
                println!("Campaign abandoned.");
                return Ok(());
            }
            _ => println!("Unrecognized option. Try again."),
        }
    }
}

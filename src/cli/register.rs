//! Register command implementation: the fixed-size registration variant.

use super::{input, output, CliError};
use conquest::game::{Map, Territory};

/// Number of territories registered by the fixed-size variant.
const NUM_TERRITORIES: usize = 5;

/// Execute the register command.
///
/// # Errors
///
/// Returns an error if the input stream ends before registration is
/// complete.
pub(crate) fn execute() -> Result<(), CliError> {
    println!("====================================================");
    println!("          INITIAL TERRITORY REGISTRATION");
    println!("====================================================");

    let mut territories = Vec::with_capacity(NUM_TERRITORIES);
    for i in 0..NUM_TERRITORIES {
        println!();
        println!("--- Registering territory {} of {NUM_TERRITORIES} ---", i + 1);

        let name = input::read_word("Territory name: ")?;
        let owner = input::read_word("Controlling faction (color): ")?;
        let troops = input::read_number("Troop count: ")?;
        territories.push(Territory::new(name, owner, troops));
    }

    let map = Map::new(territories)
        .ok_or_else(|| CliError::new("registration produced an unplayable map"))?;

    println!();
    println!("====================================================");
    println!("             REGISTERED TERRITORIES");
    println!("====================================================");
    print!("{}", output::format_map(&map));
    println!("Registration complete: {NUM_TERRITORIES} territories recorded.");

    Ok(())
}

//! Console input helpers.
//!
//! Every reader re-prompts on malformed or out-of-range input and returns
//! `Err` only when the input stream itself fails or ends, so commands can
//! treat `Err` as a terminal condition. The combat engine is never handed
//! an unvalidated selection.

use std::io::{self, BufRead, Write};

use conquest::game::{validate_attack, Map, TerritoryId, MIN_ATTACK_TROOPS};

/// Print a prompt and read one line, trimmed.
///
/// # Errors
///
/// Returns an error if stdout cannot be flushed or the input stream ends.
fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed",
        ));
    }
    Ok(line.trim().to_string())
}

/// Read a single non-empty word (the first whitespace-separated token).
pub(crate) fn read_word(prompt: &str) -> io::Result<String> {
    loop {
        let line = read_line(prompt)?;
        if let Some(word) = line.split_whitespace().next() {
            return Ok(word.to_string());
        }
        println!("Please enter a value.");
    }
}

/// Read a non-negative integer, re-prompting on malformed input.
pub(crate) fn read_number(prompt: &str) -> io::Result<u32> {
    loop {
        let line = read_line(prompt)?;
        match line.parse::<u32>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Invalid input. Please enter a whole number."),
        }
    }
}

/// Read an integer no smaller than `min`, re-prompting otherwise.
pub(crate) fn read_number_at_least(prompt: &str, min: u32) -> io::Result<u32> {
    loop {
        let value = read_number(prompt)?;
        if value >= min {
            return Ok(value);
        }
        println!("Please enter a number of at least {min}.");
    }
}

/// Read a territory index in `0..len`, re-prompting on out-of-range input.
pub(crate) fn read_index(prompt: &str, len: usize) -> io::Result<TerritoryId> {
    loop {
        let line = read_line(prompt)?;
        match line.parse::<usize>() {
            Ok(index) if index < len => return Ok(index),
            Ok(_) | Err(_) => {
                println!("Invalid ID. Choose an ID between 0 and {}.", len - 1);
            }
        }
    }
}

/// Interactively select a valid attacker/defender pair.
///
/// The attacker must be in range with enough troops; the defender must be
/// in range, distinct, and of a different faction. Each violation prints
/// the reason and re-prompts, so the returned pair always satisfies the
/// combat preconditions.
pub(crate) fn select_attack(map: &Map) -> io::Result<(TerritoryId, TerritoryId)> {
    let attacker = loop {
        let id = read_index("Attacking territory ID: ", map.len())?;
        match map.get(id) {
            Some(t) if t.troops >= MIN_ATTACK_TROOPS => break id,
            Some(t) => println!(
                "{} has too few troops to attack (minimum {MIN_ATTACK_TROOPS}).",
                t.name
            ),
            None => println!("Invalid ID."),
        }
    };

    loop {
        let defender = read_index("Defending territory ID: ", map.len())?;
        match validate_attack(map, attacker, defender) {
            Ok(()) => return Ok((attacker, defender)),
            Err(e) => println!("Invalid selection: {e}."),
        }
    }
}

//! Simulate command implementation: mass auto-played campaigns.

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::Instant;

use super::output::{format_simulation_text, JsonSimulationResult, SimulationStats};
use super::{seed_or_time, CliError, OutputFormat};
use conquest::sim::{run_campaign, SimConfig};

/// Execute the simulate command.
///
/// # Errors
///
/// Returns an error if result serialization fails.
pub(crate) fn execute(
    games: u64,
    seed: Option<u64>,
    threads: Option<usize>,
    max_turns: u32,
    format: OutputFormat,
    progress: bool,
) -> Result<(), CliError> {
    // Set thread pool size if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok(); // Ignore error if already initialized
    }

    let base_seed = seed_or_time(seed);
    let config = SimConfig { max_turns };

    // Progress bar
    let pb = if progress {
        let pb = ProgressBar::new(games);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} campaigns ({per_sec})")
                .expect("valid template")
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();

    // Each worker accumulates into its own stats, merged at the end; no
    // shared mutable state between campaigns.
    let stats = (0..games)
        .into_par_iter()
        .fold(SimulationStats::new, |mut local_stats, i| {
            let game_seed = base_seed.wrapping_add(i);
            let result = run_campaign(game_seed, &config);
            local_stats.add_result(&result);
            local_stats
        })
        .reduce(SimulationStats::new, |mut a, b| {
            a.merge(&b);
            a
        });

    if let Some(pb) = pb {
        pb.set_position(stats.games_played);
        pb.finish_with_message("done");
    }

    let duration = start.elapsed();

    match format {
        OutputFormat::Text => {
            println!();
            print!("{}", format_simulation_text(&stats));
            println!();
            println!("Duration: {:.2}s (seed base: {base_seed})", duration.as_secs_f64());
        }
        OutputFormat::Json => {
            let json_result = JsonSimulationResult::from_stats(&stats, base_seed);
            let json = serde_json::to_string_pretty(&json_result)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}

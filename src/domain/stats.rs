use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::generator::Game;
use crate::error::Result;
use crate::store::StatsStore;

/// Frequency of one number within a configuration's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFrequency {
    pub number: u32,
    pub frequency: u64,
}

/// Accumulated statistics for one generation configuration.
///
/// Field names mirror the persisted JSON schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStat {
    pub game_name: String,
    pub total_games: u64,
    /// Reserved; never computed, always zero.
    pub total_cost: u64,
    pub most_frequent_numbers: Vec<NumberFrequency>,
    pub last_generated: String,
}

/// Ledger key for a generation configuration. Two runs that share all five
/// inputs accumulate into the same entry; any difference creates a new one.
pub fn config_key(
    min: u32,
    max: u32,
    numbers_per_game: usize,
    maximize_unique: bool,
    has_fixed: bool,
) -> String {
    let mut key = format!("{min}-{max} ({numbers_per_game} numbers)");
    if maximize_unique {
        key.push_str(" - Unique");
    }
    if has_fixed {
        key.push_str(" - Fixed");
    }
    key
}

/// Tally every number across the batch.
pub fn tally(batch: &[Game]) -> HashMap<u32, u64> {
    let mut freq = HashMap::new();
    for game in batch {
        for &n in game {
            *freq.entry(n).or_insert(0) += 1;
        }
    }
    freq
}

/// Merge a batch into the entry stored under `key`, creating it on first
/// use. Existing counts are only ever added to, never replaced or reset.
pub fn record(
    store: &mut dyn StatsStore,
    key: &str,
    batch: &[Game],
    number_of_games: u64,
    now: String,
) -> Result<GameStat> {
    let new_counts = tally(batch);

    let entry = match store.get(key)? {
        Some(mut entry) => {
            let mut combined: HashMap<u32, u64> = entry
                .most_frequent_numbers
                .iter()
                .map(|f| (f.number, f.frequency))
                .collect();
            for (number, count) in new_counts {
                *combined.entry(number).or_insert(0) += count;
            }
            entry.most_frequent_numbers = sorted_frequencies(combined);
            entry.total_games += number_of_games;
            entry.last_generated = now;
            entry
        }
        None => GameStat {
            game_name: key.to_string(),
            total_games: number_of_games,
            total_cost: 0,
            most_frequent_numbers: sorted_frequencies(new_counts),
            last_generated: now,
        },
    };

    store.put(entry.clone())?;
    Ok(entry)
}

fn sorted_frequencies(map: HashMap<u32, u64>) -> Vec<NumberFrequency> {
    let mut frequencies: Vec<NumberFrequency> = map
        .into_iter()
        .map(|(number, frequency)| NumberFrequency { number, frequency })
        .collect();
    // Frequency descending; equal counts fall back to the number itself to
    // keep results stable across runs and platforms.
    frequencies.sort_by(|a, b| b.frequency.cmp(&a.frequency).then_with(|| a.number.cmp(&b.number)));
    frequencies
}

use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::domain::generator::{Game, GenerateParams, max_unique_games};
use crate::domain::stats::GameStat;
use crate::error::Result;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const GAMES_RULE: usize = 40;
const STATS_RULE: usize = 50;

pub struct OutputWriter(Box<dyn Write>);

impl OutputWriter {
    pub fn create(output: Option<&Path>) -> Result<Self> {
        let writer: Box<dyn Write> = if let Some(path) = output {
            Box::new(std::io::BufWriter::new(std::fs::File::create(path)?))
        } else {
            Box::new(std::io::BufWriter::new(std::io::stdout()))
        };
        Ok(Self(writer))
    }
}

impl Write for OutputWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.0.flush()
    }
}

/// The textual export report: timestamp, configuration summary, and one
/// zero-padded line per game.
pub fn games_report(batch: &[Game], params: &GenerateParams, generated_at: DateTime<Local>) -> String {
    let mut lines = Vec::new();

    lines.push("GENERATED NUMBERS".to_string());
    lines.push("=".repeat(GAMES_RULE));
    lines.push(format!("Date/time: {}", generated_at.format(TIMESTAMP_FORMAT)));
    lines.push(format!("Range: {} to {}", params.range.min, params.range.max));
    lines.push(format!(
        "{} game{} with {} numbers each",
        params.number_of_games,
        plural(params.number_of_games),
        params.numbers_per_game
    ));

    if params.maximize_unique {
        lines.push("Mode: maximized unique games".to_string());
        let unique = max_unique_games(params).min(params.number_of_games);
        if unique < params.number_of_games {
            lines.push(format!(
                "{} unique game{}, {} game{} may repeat numbers",
                unique,
                plural(unique),
                params.number_of_games - unique,
                plural(params.number_of_games - unique)
            ));
        }
    }

    if !params.fixed_numbers.is_empty() {
        let mut fixed = params.fixed_numbers.clone();
        fixed.sort_unstable();
        lines.push(format!("Fixed numbers: {}", join_padded(&fixed, ", ")));
    }

    lines.push("=".repeat(GAMES_RULE));
    lines.push(String::new());

    for (i, game) in batch.iter().enumerate() {
        lines.push(format!("Game {:02}: {}", i + 1, join_padded(game, " - ")));
    }

    lines.push(String::new());
    lines.push("=".repeat(GAMES_RULE));
    lines.join("\n")
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    min: u32,
    max: u32,
    number_of_games: usize,
    numbers_per_game: usize,
    maximize_unique: bool,
    fixed_numbers: &'a [u32],
    games: &'a [Game],
}

pub fn games_json(batch: &[Game], params: &GenerateParams, generated_at: DateTime<Local>) -> Result<String> {
    let report = JsonReport {
        generated_at: generated_at.format(TIMESTAMP_FORMAT).to_string(),
        min: params.range.min,
        max: params.range.max,
        number_of_games: params.number_of_games,
        numbers_per_game: params.numbers_per_game,
        maximize_unique: params.maximize_unique,
        fixed_numbers: &params.fixed_numbers,
        games: batch,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// One report section for a single ledger entry, with the `top` most
/// frequent numbers and a proportional bar per number.
pub fn stats_report(stat: &GameStat, top: usize) -> String {
    let mut lines = Vec::new();

    lines.push("DRAW STATISTICS".to_string());
    lines.push("=".repeat(STATS_RULE));
    lines.push(format!("Configuration: {}", stat.game_name));
    lines.push(format!("Last generated: {}", stat.last_generated));
    lines.push(format!("Total games: {}", stat.total_games));
    lines.push("=".repeat(STATS_RULE));
    lines.push(String::new());

    lines.push("MOST FREQUENT NUMBERS:".to_string());
    lines.push("-".repeat(30));
    let max_freq = stat.most_frequent_numbers.first().map_or(0, |f| f.frequency);
    for (i, item) in stat.most_frequent_numbers.iter().take(top).enumerate() {
        lines.push(format!(
            "{:02}. Number {:02}: {} time{} {}",
            i + 1,
            item.number,
            item.frequency,
            plural(item.frequency as usize),
            frequency_bar(item.frequency, max_freq)
        ));
    }
    lines.push(String::new());

    lines.push(format!(
        "{} game{} drawn over {} distinct number{}",
        stat.total_games,
        plural(stat.total_games as usize),
        stat.most_frequent_numbers.len(),
        plural(stat.most_frequent_numbers.len())
    ));
    if let Some(first) = stat.most_frequent_numbers.first() {
        lines.push(format!(
            "Most frequent number: {} ({} time{})",
            first.number,
            first.frequency,
            plural(first.frequency as usize)
        ));
    }

    lines.join("\n")
}

// Scale to the entry's own maximum, one to ten blocks.
fn frequency_bar(frequency: u64, max: u64) -> String {
    if max == 0 {
        return String::new();
    }
    let width = ((frequency as f64 / max as f64) * 10.0).ceil() as usize;
    "█".repeat(width)
}

fn join_padded(numbers: &[u32], sep: &str) -> String {
    numbers.iter().map(|n| format!("{n:02}")).collect::<Vec<_>>().join(sep)
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

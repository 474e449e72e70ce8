use std::io::Write;

use anyhow::{Context, Result};
use atty::Stream;
use chrono::Local;

use crate::cli::{Args, ClearArgs, Command, GenerateArgs, StatsArgs};
use crate::config::{GenerateConfig, OutputFormat};
use crate::domain::{generator, stats};
use crate::output::{self, OutputWriter, TIMESTAMP_FORMAT};
use crate::rng;
use crate::store::{JsonFileStore, StatsStore};

pub fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Generate(args) => generate(args),
        Command::Stats(args) => show_stats(args),
        Command::Clear(args) => clear(args),
    }
}

fn generate(args: GenerateArgs) -> Result<()> {
    let config = GenerateConfig::from_args(args).context("invalid generation request")?;

    if !matches!(config.format, OutputFormat::Json) && atty::is(Stream::Stdout) {
        eprintln!("draw_numbers v{}", crate::VERSION);
    }

    let mut rng = rng::create_rng(config.seed);
    let batch = generator::generate(&mut rng, &config.params);
    let generated_at = Local::now();

    let mut writer = OutputWriter::create(config.output.as_deref())?;
    match config.format {
        OutputFormat::Text => {
            writeln!(writer, "{}", output::games_report(&batch, &config.params, generated_at))?;
        }
        OutputFormat::Json => {
            writeln!(writer, "{}", output::games_json(&batch, &config.params, generated_at)?)?;
        }
    }
    writer.flush()?;

    if !config.no_stats {
        let mut store = JsonFileStore::new(config.stats_file.clone());
        let key = stats::config_key(
            config.params.range.min,
            config.params.range.max,
            config.params.numbers_per_game,
            config.params.maximize_unique,
            !config.params.fixed_numbers.is_empty(),
        );
        stats::record(
            &mut store,
            &key,
            &batch,
            config.params.number_of_games as u64,
            generated_at.format(TIMESTAMP_FORMAT).to_string(),
        )
        .context("failed to record statistics")?;
    }

    Ok(())
}

fn show_stats(args: StatsArgs) -> Result<()> {
    let store = JsonFileStore::new(args.stats_file.clone());
    let entries = store.entries().context("failed to read statistics")?;

    let mut writer = OutputWriter::create(args.output.as_deref())?;
    match OutputFormat::from(args.format) {
        OutputFormat::Json => {
            writeln!(writer, "{}", serde_json::to_string_pretty(&entries)?)?;
        }
        OutputFormat::Text => {
            if entries.is_empty() {
                writeln!(writer, "No statistics recorded yet. Generate some games first.")?;
            } else {
                for (i, entry) in entries.iter().enumerate() {
                    if i > 0 {
                        writeln!(writer)?;
                    }
                    writeln!(writer, "{}", output::stats_report(entry, args.top))?;
                }
            }
        }
    }
    writer.flush()?;
    Ok(())
}

fn clear(args: ClearArgs) -> Result<()> {
    if !args.yes {
        anyhow::bail!("refusing to clear statistics without --yes");
    }
    let mut store = JsonFileStore::new(args.stats_file.clone());
    let removed = store.clear().context("failed to clear statistics")?;
    println!(
        "Removed {removed} statistics entr{}",
        if removed == 1 { "y" } else { "ies" }
    );
    Ok(())
}

use std::collections::HashSet;
use std::path::PathBuf;

use crate::cli::GenerateArgs;
use crate::domain::generator::GenerateParams;
use crate::domain::range::NumberRange;
use crate::error::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// A validated generation request.
///
/// Construction is the single place where the input contract is enforced:
/// range ordering, positive counts, feasibility against the range, and
/// fixed-number membership and uniqueness. The domain layer trusts these
/// values and performs no validation of its own.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub params: GenerateParams,
    pub seed: Option<u64>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub stats_file: PathBuf,
    pub no_stats: bool,
}

impl GenerateConfig {
    pub fn from_args(args: GenerateArgs) -> Result<Self> {
        if args.min >= args.max {
            return Err(AppError::Config(format!(
                "start number {} must be less than end number {}",
                args.min, args.max
            )));
        }
        let range = NumberRange::new(args.min, args.max);

        if args.games == 0 {
            return Err(AppError::Config("at least one game is required".to_string()));
        }
        if args.per_game == 0 {
            return Err(AppError::Config("at least one number per game is required".to_string()));
        }
        if args.per_game > range.size() as usize {
            return Err(AppError::Config(format!(
                "cannot draw {} distinct numbers from the range {} to {}",
                args.per_game, args.min, args.max
            )));
        }

        let mut seen = HashSet::new();
        for &n in &args.fixed {
            if !range.contains(n) {
                return Err(AppError::Config(format!(
                    "fixed number {n} is outside the range {} to {}",
                    args.min, args.max
                )));
            }
            if !seen.insert(n) {
                return Err(AppError::Config(format!("duplicate fixed number {n}")));
            }
        }
        if !args.fixed.is_empty() && args.fixed.len() >= args.per_game {
            return Err(AppError::Config(
                "fixed numbers already fill every slot; reduce them or raise numbers per game"
                    .to_string(),
            ));
        }

        Ok(Self {
            params: GenerateParams {
                number_of_games: args.games,
                numbers_per_game: args.per_game,
                range,
                maximize_unique: args.maximize_unique,
                fixed_numbers: args.fixed,
            },
            seed: args.seed,
            format: args.format.into(),
            output: args.output,
            stats_file: args.stats_file,
            no_stats: args.no_stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::value_enum::CliOutputFormat;

    fn base_args() -> GenerateArgs {
        GenerateArgs {
            min: 1,
            max: 60,
            games: 3,
            per_game: 6,
            maximize_unique: false,
            fixed: vec![],
            seed: None,
            format: CliOutputFormat::Text,
            output: None,
            stats_file: PathBuf::from("lottery-stats.json"),
            no_stats: false,
        }
    }

    fn expect_config_error(args: GenerateArgs, needle: &str) {
        match GenerateConfig::from_args(args) {
            Err(AppError::Config(msg)) => assert!(msg.contains(needle), "unexpected message: {msg}"),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn valid_args_build_a_config() {
        let config = GenerateConfig::from_args(base_args()).expect("valid");
        assert_eq!(config.params.number_of_games, 3);
        assert_eq!(config.params.range, NumberRange::new(1, 60));
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn rejects_inverted_range() {
        let mut args = base_args();
        args.min = 60;
        args.max = 60;
        expect_config_error(args, "must be less than");
    }

    #[test]
    fn rejects_zero_counts() {
        let mut args = base_args();
        args.games = 0;
        expect_config_error(args, "at least one game");

        let mut args = base_args();
        args.per_game = 0;
        expect_config_error(args, "at least one number");
    }

    #[test]
    fn rejects_infeasible_per_game() {
        let mut args = base_args();
        args.min = 1;
        args.max = 5;
        args.per_game = 6;
        expect_config_error(args, "cannot draw 6 distinct numbers");
    }

    #[test]
    fn rejects_out_of_range_fixed() {
        let mut args = base_args();
        args.fixed = vec![61];
        expect_config_error(args, "outside the range");
    }

    #[test]
    fn rejects_duplicate_fixed() {
        let mut args = base_args();
        args.fixed = vec![7, 7];
        expect_config_error(args, "duplicate fixed number 7");
    }

    #[test]
    fn rejects_fully_fixed_game() {
        let mut args = base_args();
        args.per_game = 2;
        args.fixed = vec![1, 2];
        expect_config_error(args, "fixed numbers already fill");
    }
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Daily nutrition balance check with recipe suggestions", long_about = None)]
pub struct Cli {
    /// Path to the meal store file (overrides NUTRI_BALANCE_STORE)
    #[arg(short, long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log today's meals interactively, one meal slot at a time
    Entry,
    /// Log today's meals from flags, replacing the stored day
    Log {
        /// Breakfast dish (repeatable)
        #[arg(long)]
        breakfast: Vec<String>,
        /// Lunch dish (repeatable)
        #[arg(long)]
        lunch: Vec<String>,
        /// Dinner dish (repeatable)
        #[arg(long)]
        dinner: Vec<String>,
        /// Snack (repeatable)
        #[arg(long)]
        snack: Vec<String>,
    },
    /// Compare the stored day against the daily targets
    Analyze {
        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
        /// Also write the per-nutrient table to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Suggest recipes for the most deficient nutrients
    Recommend {
        /// Toggle a recipe id as favorite (repeatable, applied in order)
        #[arg(long = "favorite")]
        favorites: Vec<u32>,
        /// Print the suggestions as JSON
        #[arg(long)]
        json: bool,
    },
    /// Rotate through the featured recipes until Ctrl-C
    Featured {
        /// Stop after this many rotations
        #[arg(long)]
        rotations: Option<usize>,
        /// Seconds per slide (overrides NUTRI_BALANCE_CAROUSEL_SECS)
        #[arg(long)]
        interval_secs: Option<u64>,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_log_flags_repeat() {
        let cli = Cli::try_parse_from([
            "nutri-balance",
            "--store",
            "/tmp/s.json",
            "log",
            "--breakfast",
            "ごはん",
            "--breakfast",
            "味噌汁",
            "--dinner",
            "ハンバーグ",
        ])
        .unwrap();
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/s.json")));
        match cli.command {
            Command::Log { breakfast, lunch, dinner, snack } => {
                assert_eq!(breakfast, vec!["ごはん", "味噌汁"]);
                assert!(lunch.is_empty());
                assert_eq!(dinner, vec!["ハンバーグ"]);
                assert!(snack.is_empty());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_recommend_favorites() {
        let cli = Cli::try_parse_from(["nutri-balance", "recommend", "--favorite", "2", "--favorite", "7", "--json"]).unwrap();
        match cli.command {
            Command::Recommend { favorites, json } => {
                assert_eq!(favorites, vec![2, 7]);
                assert!(json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}

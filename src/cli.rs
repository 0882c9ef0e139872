use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT: &str = "source/data/studentsSpring2019.csv";

/// Seed a roster CSV from a directory of student submission folders.
///
/// Each entry named `<displayName>_<id>[_late]...` becomes a row with an empty
/// full-name column to be filled in by hand.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory holding one entry per student submission
    #[arg(allow_hyphen_values = true)]
    pub source_dir: PathBuf,

    /// Where to write the CSV; its parent directory must exist
    #[arg(default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_defaults_to_seed_path() {
        let args = Args::try_parse_from(["roster-seed", "submissions"]).unwrap();
        assert_eq!(args.source_dir, PathBuf::from("submissions"));
        assert_eq!(args.output, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn explicit_output_is_used() {
        let args = Args::try_parse_from(["roster-seed", "submissions", "out.csv"]).unwrap();
        assert_eq!(args.output, PathBuf::from("out.csv"));
    }

    #[test]
    fn wrong_argument_count_is_rejected() {
        assert!(Args::try_parse_from(["roster-seed"]).is_err());
        assert!(Args::try_parse_from(["roster-seed", "a", "b", "c"]).is_err());
    }

    #[test]
    fn source_dir_may_start_with_a_hyphen() {
        let args = Args::try_parse_from(["roster-seed", "-spring2019"]).unwrap();
        assert_eq!(args.source_dir, PathBuf::from("-spring2019"));
        assert_eq!(args.output, PathBuf::from(DEFAULT_OUTPUT));
    }
}

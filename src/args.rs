// src/args.rs
use crate::parsers;
use clap::{Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "verscan",
    version,
    about = "List every file under a directory with its version and last-modified time"
)]
pub struct Args {
    /// Directory path to search for and list files
    /// (defaults to the running executable's directory)
    #[arg(short = 'p', long = "searchPath", value_hint = ValueHint::DirPath)]
    pub search_path: Option<PathBuf>,

    /// Wait for console input after output is completed
    #[arg(short = 'w', long)]
    pub wait: bool,

    /// Worker threads for the parallel scan (defaults to the CPU count)
    #[arg(short = 'j', long, value_parser = parsers::parse_positive_usize)]
    pub jobs: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_flags() {
        let args = Args::parse_from(["verscan", "--searchPath", "/tmp", "--wait"]);
        assert_eq!(args.search_path, Some(PathBuf::from("/tmp")));
        assert!(args.wait);

        let args = Args::parse_from(["verscan", "-p", "/var", "-w", "-j", "4"]);
        assert_eq!(args.search_path, Some(PathBuf::from("/var")));
        assert!(args.wait);
        assert_eq!(args.jobs, Some(4));
    }

    #[test]
    fn all_flags_are_optional() {
        let args = Args::parse_from(["verscan"]);
        assert_eq!(args.search_path, None);
        assert!(!args.wait);
        assert_eq!(args.jobs, None);
    }

    #[test]
    fn zero_jobs_is_rejected() {
        assert!(Args::try_parse_from(["verscan", "-j", "0"]).is_err());
    }
}

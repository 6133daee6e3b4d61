// src/config.rs
use crate::args::Args;
use anyhow::Context;
use std::path::PathBuf;

pub use verscan_engine::config::{Config, ConfigBuilder};

/// Build the engine config from parsed arguments.
///
/// Root resolution happens here, once: an absent or empty `--searchPath`
/// falls back to the directory containing the running executable, and the
/// resolved path is passed down. The root's existence is deliberately not
/// checked — a missing root scans as empty.
pub fn from_args(args: &Args) -> anyhow::Result<Config> {
    let root = match &args.search_path {
        Some(p) if !p.as_os_str().is_empty() => p.clone(),
        _ => default_root()?,
    };

    let threads = args.jobs.unwrap_or_else(num_cpus::get);

    Ok(ConfigBuilder::default()
        .root(root)
        .threads(threads)
        .build()
        .expect("Failed to build config"))
}

fn default_root() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe().context("cannot locate the running executable")?;
    Ok(exe
        .parent()
        .context("executable path has no parent directory")?
        .to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(search_path: Option<&str>, jobs: Option<usize>) -> Args {
        Args {
            search_path: search_path.map(PathBuf::from),
            wait: false,
            jobs,
        }
    }

    #[test]
    fn explicit_root_is_used_verbatim() {
        let config = from_args(&args(Some("/scan"), Some(3))).unwrap();
        assert_eq!(config.root, PathBuf::from("/scan"));
        assert_eq!(config.threads, 3);
    }

    #[test]
    fn absent_root_resolves_to_executable_directory() {
        let config = from_args(&args(None, None)).unwrap();
        let exe_dir = std::env::current_exe().unwrap().parent().unwrap().to_path_buf();
        assert_eq!(config.root, exe_dir);
    }

    #[test]
    fn empty_root_resolves_to_executable_directory() {
        let config = from_args(&args(Some(""), None)).unwrap();
        let exe_dir = std::env::current_exe().unwrap().parent().unwrap().to_path_buf();
        assert_eq!(config.root, exe_dir);
    }

    #[test]
    fn jobs_default_to_cpu_count() {
        let config = from_args(&args(Some("/scan"), None)).unwrap();
        assert_eq!(config.threads, num_cpus::get());
    }
}

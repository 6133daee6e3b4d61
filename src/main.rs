use clap::Parser;
use std::io::{Read, Write};
use std::process::ExitCode;
use verscan::args::Args;
use verscan::{config, presentation};

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let cfg = match config::from_args(&args) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    log::debug!("scanning {} with {} threads", cfg.root.display(), cfg.threads);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let _ = write!(out, "Scanning...");
    let _ = out.flush();

    let outcome = verscan_engine::run(&cfg);

    let _ = writeln!(out, "Done.");
    if let Err(e) = presentation::print_results(&outcome, &mut out) {
        eprintln!("Output Error: {e}");
        return ExitCode::FAILURE;
    }
    let _ = out.flush();

    // Walk-level errors are informational; they do not fail the run.
    for (path, err) in &outcome.errors {
        eprintln!("Error processing {}: {err}", path.display());
    }

    if args.wait {
        let _ = writeln!(out, "Press any key to continue...");
        let _ = out.flush();
        let _ = std::io::stdin().read(&mut [0u8; 1]);
    }

    ExitCode::SUCCESS
}

// src/main.rs

use linestamp::{cli, logging, run};

fn main() {
    if let Err(err) = run_main() {
        // One line: after a failed exec, stderr is already the log stream.
        eprintln!("linestamp error: {err:#}");
        std::process::exit(1);
    }
}

fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args)?;
    Ok(())
}

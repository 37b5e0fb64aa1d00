use std::path::PathBuf;
use std::process::ExitCode;

use pixplat_core::{Replay, TraceRow};

fn main() -> ExitCode {
    env_logger::init();

    let Some(path) = std::env::args().nth(1).map(PathBuf::from) else {
        eprintln!("usage: cargo run -p pixplat_core --features cli --bin replay -- <replay.json>");
        return ExitCode::from(2);
    };

    let replay = match Replay::load(&path) {
        Ok(r) => r,
        Err(e) => {
            log::error!("failed to load {}: {e}", path.display());
            eprintln!("{}: {e}", path.display());
            return ExitCode::FAILURE;
        }
    };
    log::info!("replaying {} frames from {}", replay.inputs.len(), path.display());

    println!("{}", TraceRow::CSV_HEADER);
    for row in replay.run() {
        println!("{}", row.to_csv());
    }
    ExitCode::SUCCESS
}

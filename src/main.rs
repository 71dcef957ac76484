use clap::Parser;
use photofetch::{FetchController, FetchState};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

/// Longest the observer waits for one round before giving up on it.
const ROUND_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Parser)]
#[command(name = "photofetch", about = "Fetch the Mars photo list and report the result")]
struct Args {
    /// Extra refetch rounds after the initial fetch
    #[arg(short, long, default_value_t = 0)]
    refetches: u32,

    /// File to write the debug log to
    #[arg(long, default_value = "photofetch.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("photofetch starting, {} refetch rounds", args.refetches);

    let mut controller = FetchController::new();
    let mut rx = controller.subscribe();

    for round in 0..=args.refetches {
        if round > 0 {
            controller.refetch();
        }
        println!("{}", controller.current_state());

        // Copy the state out so the watch read lock is not held into the next round
        let settled = tokio::time::timeout(ROUND_TIMEOUT, rx.wait_for(FetchState::is_settled))
            .await
            .map(|result| result.map(|state| *state));
        match settled {
            Ok(Ok(state)) => println!("{state}"),
            Ok(Err(_)) => {
                log::warn!("State channel closed during round {}", round);
                break;
            }
            Err(_) => {
                log::warn!("Round {} did not settle within {:?}", round, ROUND_TIMEOUT);
                println!("Timed out after {ROUND_TIMEOUT:?}");
            }
        }
    }

    log::info!("photofetch done");
    Ok(())
}

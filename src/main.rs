//! Headless Snake runner (default binary).
//!
//! Plays one game with the greedy autopilot and prints JSON lines on stdout.
//! Logs go to stderr; set `RUST_LOG` (e.g. `tui_snake_core=debug`) for more.
//!
//! ```text
//! tui-snake [--rows N] [--cols N] [--seed S] [--max-steps N] [--trace]
//! ```

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tui_snake::runner::{parse_run_args, run};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tui_snake=warn,tui_snake_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_run_args(&args)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&config, &mut out)?;
    Ok(())
}

use std::io::{self, BufRead, Write};
use std::panic::{self, AssertUnwindSafe};

use laundry_core::config::CoreConfig;
use laundry_core::protocol::{self, Context};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Logs go to stderr; stdout carries one JSON response per line.
fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    setup_logging();

    let mut ctx = match CoreConfig::from_env().and_then(Context::new) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("failed to start: {e}");
            std::process::exit(1);
        }
    };
    info!("laundry-core ready");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => continue,
        };

        if line.trim().is_empty() {
            continue;
        }

        let result = panic::catch_unwind(AssertUnwindSafe(|| protocol::handle(&mut ctx, &line)));

        let response = match result {
            Ok(resp) => resp,
            Err(_) => {
                error!("handler panicked");
                serde_json::json!({
                    "status": "error",
                    "message": "internal core error"
                })
                .to_string()
            }
        };

        if writeln!(stdout, "{response}").is_err() {
            break;
        }

        let _ = stdout.flush();
    }
}

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file prefix.
pub const LOG_ENV: &str = "OCTOFIT_LOG";

/// Initialize tracing with optional file output.
///
/// The TUI owns the terminal, so nothing is logged unless `OCTOFIT_LOG`
/// names a path. The file is `{path}.{timestamp}.{pid}` so concurrent
/// instances never share one. `RUST_LOG` filters as usual (default `info`).
pub fn init_tracing() {
    let Some(log_path) = std::env::var(LOG_ENV).ok().filter(|path| !path.is_empty()) else {
        return;
    };

    let unique_path = unique_log_path(&log_path);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}

fn unique_log_path(prefix: &str) -> String {
    let timestamp = chrono::Utc::now().timestamp();
    format!("{}.{}.{}", prefix, timestamp, std::process::id())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_carries_timestamp_and_pid() {
        let path = unique_log_path("/tmp/octofit.log");
        let suffix = path.strip_prefix("/tmp/octofit.log.").unwrap();
        let (timestamp, pid) = suffix.split_once('.').unwrap();
        assert!(timestamp.parse::<i64>().unwrap() > 0);
        assert_eq!(pid, std::process::id().to_string());
    }
}

use colored::{ColoredString, Colorize};
use env_logger::{Builder, Env};
use std::io::Write;
use std::time::Duration;

const SEC_YELLOW_THRESHOLD: u64 = 1;
const SEC_RED_THRESHOLD: u64 = 2;
const MILLIS_YELLOW_THRESHOLD: u128 = 100;
const MILLIS_RED_THRESHOLD: u128 = 500;

pub(crate) fn init_logging() {
    let logging_env = Env::default().filter_or("RUST_LOG", "info");
    // try_init: start() may run more than once per process (tests, multiple routers)
    let _ = Builder::from_env(logging_env)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {} {}",
                chrono::Local::now().format("%H:%M:%S").to_string().dimmed(),
                record.target().to_ascii_lowercase().bold().bright_yellow(),
                record.args()
            )
        })
        .try_init();
}

pub(crate) fn format_elapsed_time(elapsed: Duration) -> ColoredString {
    match elapsed.as_secs() {
        secs if secs > SEC_RED_THRESHOLD => format!("{}s", secs).red(),
        secs if secs > SEC_YELLOW_THRESHOLD => format!("{}s", secs).yellow(),
        secs if secs > 0 => format!("{}s", secs).normal(),
        _ => match elapsed.as_millis() {
            millis if millis > MILLIS_RED_THRESHOLD => format!("{}ms", millis).red(),
            millis if millis > MILLIS_YELLOW_THRESHOLD => format!("{}ms", millis).yellow(),
            millis if millis > 0 => format!("{}ms", millis).normal(),
            _ => format!("{}μs", elapsed.as_micros()).normal(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::format_elapsed_time;
    use std::time::Duration;

    #[test]
    fn test_format_elapsed_time_units() {
        // contains() rather than equality, colorization depends on the environment
        assert!(format_elapsed_time(Duration::from_secs(3)).to_string().contains("3s"));
        assert!(format_elapsed_time(Duration::from_millis(42)).to_string().contains("42ms"));
        assert!(format_elapsed_time(Duration::from_micros(7)).to_string().contains("7μs"));
    }
}

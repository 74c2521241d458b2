// Logger - Colored console output with timestamps

use chrono::Local;
use colored::*;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

#[derive(Clone, Copy)]
pub enum Level {
	Info,
	Success,
	Warning,
	Error,
	Debug,
}

pub fn set_verbose(enabled: bool) {
	VERBOSE.store(enabled, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
	VERBOSE.load(Ordering::Relaxed)
}

/// Prints a timestamped, colored log message to stderr.
///
/// Command output itself (the summary, keyword lists) goes to stdout so it
/// can be piped; diagnostics stay on stderr.
pub fn log(level: Level, message: &str) {
	if matches!(level, Level::Debug) && !is_verbose() {
		return;
	}

	let time = Local::now().format("%H:%M:%S").to_string().dimmed();
	let icon = match level {
		Level::Info =>    "ℹ".blue().bold(),
		Level::Success => "✔".bright_green().bold(),
		Level::Warning => "⚠".yellow().bold(),
		Level::Error =>   "✘".red().bold(),
		Level::Debug =>   "⚙".bright_blue().bold(),
	};
	eprintln!("[{}] {} {}", time, icon, message);
}

use clap::{builder::Styles, Parser, Subcommand};
use std::path::PathBuf;

fn styles() -> Styles {
	Styles::styled()
		.header(anstyle::Style::new().bold().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.usage(anstyle::Style::new().bold().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))))
		.valid(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))))
		.invalid(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))))
}

#[derive(Parser, Debug)]
#[command(
	name = "gist",
	author,
	version,
	about = "Multi-language extractive text summarization",
	styles = styles(),
	disable_help_subcommand = true,
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	/// Directory containing per-language model files
	#[arg(short = 'm', long = "models", global = true, value_name = "DIR")]
	pub models: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Summarize a text file (or stdin)
	Summarize {
		/// Input text file; reads stdin when omitted
		#[arg(value_name = "FILE")]
		file: Option<PathBuf>,

		/// Number of sentences in the summary
		#[arg(short = 'n', long = "sentences", default_value_t = crate::config::DEFAULT_SENTENCES)]
		sentences: usize,

		/// Time budget in seconds for the similarity and ranking stages
		#[arg(long = "budget", value_name = "SECS")]
		budget: Option<u64>,
	},

	/// Extract the most frequent keywords
	Keywords {
		/// Input text file; reads stdin when omitted
		#[arg(value_name = "FILE")]
		file: Option<PathBuf>,

		/// Number of keywords to return
		#[arg(short = 'k', long = "count", default_value_t = crate::config::DEFAULT_KEYWORDS)]
		count: usize,
	},

	/// List named entities
	Entities {
		/// Input text file; reads stdin when omitted
		#[arg(value_name = "FILE")]
		file: Option<PathBuf>,
	},

	/// Detect the input language
	Detect {
		/// Input text file; reads stdin when omitted
		#[arg(value_name = "FILE")]
		file: Option<PathBuf>,
	},
}

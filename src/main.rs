//! Gist - multi-language extractive summarization CLI
//!
//! Reads already-decoded text from a file or stdin and prints the summary,
//! keyword list, entity list, or detected language to stdout.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::io::Read;
use std::path::Path;
use std::time::{Duration, Instant};

use gist::cli::{Cli, Command};
use gist::logger::{log, set_verbose, Level};
use gist::models::PipelineRegistry;
use gist::summarize::Summarizer;
use gist::{analysis, config, lang};

fn main() -> Result<()> {
	let cli = Cli::parse();

	set_verbose(cli.verbose);
	if let Some(models) = cli.models {
		config::set_model_dir(models);
	}

	match cli.command {
		Command::Summarize { file, sentences, budget } => {
			run_summarize(file.as_deref(), sentences, budget)
		}
		Command::Keywords { file, count } => run_keywords(file.as_deref(), count),
		Command::Entities { file } => run_entities(file.as_deref()),
		Command::Detect { file } => run_detect(file.as_deref()),
	}
}

fn run_summarize(file: Option<&Path>, sentences: usize, budget: Option<u64>) -> Result<()> {
	let text = read_input(file)?;
	let registry = load_registry()?;

	let mut summarizer = Summarizer::new(&registry);
	if let Some(secs) = budget {
		summarizer = summarizer.with_budget(Duration::from_secs(secs));
	}

	let start = Instant::now();
	let summary = summarizer.summarize(&text, sentences)?;

	log(
		Level::Success,
		&format!("Summarized in {}ms", start.elapsed().as_millis()),
	);
	println!("{}", summary);
	Ok(())
}

fn run_keywords(file: Option<&Path>, count: usize) -> Result<()> {
	let text = read_input(file)?;
	let registry = load_registry()?;

	let keywords = analysis::keywords(&registry, &text, count)?;
	if keywords.is_empty() {
		log(Level::Warning, "No keywords found");
		return Ok(());
	}

	for (i, keyword) in keywords.iter().enumerate() {
		let rank = format!("#{}", i + 1).bright_blue().bold();
		let count = format!("×{}", keyword.count).dimmed();
		println!("  {} {} {}", rank, keyword.lemma, count);
	}
	Ok(())
}

fn run_entities(file: Option<&Path>) -> Result<()> {
	let text = read_input(file)?;
	let registry = load_registry()?;

	let entities = analysis::entities(&registry, &text)?;
	if entities.is_empty() {
		log(Level::Warning, "No entities found");
		return Ok(());
	}

	for entity in entities {
		println!("  {} {}", entity.text, format!("[{}]", entity.label).yellow());
	}
	Ok(())
}

fn run_detect(file: Option<&Path>) -> Result<()> {
	let text = read_input(file)?;
	let language = lang::detect(&text)?;
	println!("{}", language);
	Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String> {
	match file {
		Some(path) => std::fs::read_to_string(path)
			.with_context(|| format!("failed to read {}", path.display())),
		None => {
			let mut text = String::new();
			std::io::stdin()
				.read_to_string(&mut text)
				.context("failed to read stdin")?;
			Ok(text)
		}
	}
}

fn load_registry() -> Result<PipelineRegistry> {
	log(Level::Info, "Loading language pipelines...");
	let start = Instant::now();

	let registry = PipelineRegistry::load()?;

	log(
		Level::Success,
		&format!("Pipelines ready in {:.2}s", start.elapsed().as_secs_f32()),
	);
	Ok(registry)
}

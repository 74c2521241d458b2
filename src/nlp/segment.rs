// Sentence segmentation - rule-based splitting with abbreviation guards
//
// Splits on terminal punctuation (. ! ? …) followed by whitespace and an
// upper-case/digit/quote continuation, with per-language abbreviation sets
// to keep "Dr. Smith" or "z.B. hier" inside one sentence. Paragraph breaks
// always terminate a sentence.

use crate::lang::Language;

/// Splits `text` into trimmed, non-empty sentences in document order.
///
/// Segmentation is deterministic: sentence count and boundaries depend only
/// on these rules and the language's abbreviation set.
pub fn split_sentences(text: &str, language: Language) -> Vec<String> {
	let abbreviations = abbreviations(language);
	let chars: Vec<char> = text.chars().collect();
	let mut sentences = Vec::new();
	let mut current = String::new();

	let mut i = 0;
	while i < chars.len() {
		let c = chars[i];
		current.push(c);

		let boundary = match c {
			'!' | '?' | '…' => continuation_follows(&chars, i + 1),
			'.' => {
				!is_abbreviation(&current, abbreviations)
					&& continuation_follows(&chars, i + 1)
			}
			'\n' => paragraph_break(&chars, i),
			_ => false,
		};

		if boundary {
			// Attach trailing closing quotes/brackets to this sentence.
			let mut j = i + 1;
			while j < chars.len() && matches!(chars[j], '"' | '\'' | '”' | '’' | ')' | ']') {
				current.push(chars[j]);
				j += 1;
			}
			i = j;

			push_sentence(&mut sentences, &mut current);
			continue;
		}

		i += 1;
	}

	push_sentence(&mut sentences, &mut current);
	sentences
}

fn push_sentence(sentences: &mut Vec<String>, current: &mut String) {
	let trimmed = current.trim();
	if !trimmed.is_empty() {
		sentences.push(trimmed.to_string());
	}
	current.clear();
}

/// True when position `start` begins whitespace followed by a plausible
/// sentence opener, or the end of the text.
fn continuation_follows(chars: &[char], start: usize) -> bool {
	let mut i = start;

	// Closing quotes may sit between the terminator and the whitespace.
	while i < chars.len() && matches!(chars[i], '"' | '\'' | '”' | '’' | ')' | ']') {
		i += 1;
	}

	if i >= chars.len() {
		return true;
	}
	if !chars[i].is_whitespace() {
		return false;
	}
	while i < chars.len() && chars[i].is_whitespace() {
		i += 1;
	}
	match chars.get(i) {
		None => true,
		Some(&c) => c.is_uppercase() || c.is_numeric() || matches!(c, '"' | '\'' | '“' | '‘' | '(' | '¿' | '¡'),
	}
}

/// True when the newline at `i` is part of a blank line.
fn paragraph_break(chars: &[char], i: usize) -> bool {
	chars[i + 1..]
		.iter()
		.take_while(|c| c.is_whitespace())
		.any(|&c| c == '\n')
}

/// Checks whether the text accumulated so far ends in an abbreviation
/// (including single-letter initials like "J." and dotted forms like "z.B.").
fn is_abbreviation(current: &str, abbreviations: &[&str]) -> bool {
	let body = current.trim_end_matches('.');
	let word = body
		.rsplit(|c: char| c.is_whitespace())
		.next()
		.unwrap_or("");

	if word.is_empty() {
		return false;
	}
	// A single letter before the period is an initial.
	if word.chars().count() == 1 && word.chars().all(|c| c.is_alphabetic()) {
		return true;
	}
	// Internal periods mark dotted abbreviations (e.g., i.e., z.B.).
	if word.contains('.') {
		return true;
	}

	let lower = word.to_lowercase();
	abbreviations.iter().any(|&a| a == lower)
}

fn abbreviations(language: Language) -> &'static [&'static str] {
	match language {
		Language::English => &[
			"mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "fig",
			"no", "inc", "dept", "est", "approx",
		],
		Language::Spanish => &[
			"sr", "sra", "srta", "dr", "dra", "ud", "uds", "etc", "pág", "núm",
			"aprox", "art",
		],
		Language::French => &[
			"m", "mme", "mlle", "dr", "st", "ste", "etc", "env", "av", "bd",
		],
		Language::German => &[
			"dr", "prof", "nr", "bzw", "usw", "ca", "evtl", "ggf", "str", "abs",
		],
		Language::Portuguese => &[
			"sr", "sra", "dr", "dra", "etc", "pág", "núm", "av", "prof",
		],
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn splits_simple_sentences() {
		let text = "Cats are mammals. Cats purr. The stock market fell today.";
		let sentences = split_sentences(text, Language::English);
		assert_eq!(
			sentences,
			vec![
				"Cats are mammals.",
				"Cats purr.",
				"The stock market fell today.",
			]
		);
	}

	#[test]
	fn keeps_abbreviations_together() {
		let text = "Dr. Smith teaches biology. Students like her lectures.";
		let sentences = split_sentences(text, Language::English);
		assert_eq!(sentences.len(), 2);
		assert!(sentences[0].starts_with("Dr. Smith"));
	}

	#[test]
	fn keeps_initials_together() {
		let text = "J. R. R. Tolkien wrote many books. They are long.";
		let sentences = split_sentences(text, Language::English);
		assert_eq!(sentences.len(), 2);
	}

	#[test]
	fn handles_question_and_exclamation() {
		let text = "What is photosynthesis? It converts light! Plants do it.";
		let sentences = split_sentences(text, Language::English);
		assert_eq!(sentences.len(), 3);
	}

	#[test]
	fn does_not_split_on_decimal_numbers() {
		let text = "The value is 3.14 roughly. That is pi.";
		let sentences = split_sentences(text, Language::English);
		assert_eq!(sentences.len(), 2);
	}

	#[test]
	fn paragraph_break_terminates_sentence() {
		let text = "First line without punctuation\n\nSecond paragraph here.";
		let sentences = split_sentences(text, Language::English);
		assert_eq!(sentences.len(), 2);
		assert_eq!(sentences[0], "First line without punctuation");
	}

	#[test]
	fn german_abbreviations() {
		let text = "Das Seminar beginnt ca. 10 Uhr. Alle sind eingeladen.";
		let sentences = split_sentences(text, Language::German);
		assert_eq!(sentences.len(), 2);
	}

	#[test]
	fn empty_input_yields_no_sentences() {
		assert!(split_sentences("", Language::English).is_empty());
		assert!(split_sentences("   \n\t  ", Language::English).is_empty());
	}
}

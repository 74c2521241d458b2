//! Supported languages and language detection
//!
//! Detection uses whatlang's trigram classifier, which is deterministic:
//! the same input always yields the same result.

use std::fmt;

use crate::error::GistError;

/// A language with a registered linguistic pipeline.
///
/// This is a closed set; anything outside it is reported as unsupported
/// rather than dispatched dynamically by string code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
	English,
	Spanish,
	French,
	German,
	Portuguese,
}

impl Language {
	/// All supported languages, in registry order.
	pub const ALL: [Language; 5] = [
		Language::English,
		Language::Spanish,
		Language::French,
		Language::German,
		Language::Portuguese,
	];

	/// ISO 639-1 code.
	pub fn code(&self) -> &'static str {
		match self {
			Language::English => "en",
			Language::Spanish => "es",
			Language::French => "fr",
			Language::German => "de",
			Language::Portuguese => "pt",
		}
	}

	/// Index into per-language registry slots.
	pub(crate) fn index(&self) -> usize {
		match self {
			Language::English => 0,
			Language::Spanish => 1,
			Language::French => 2,
			Language::German => 3,
			Language::Portuguese => 4,
		}
	}

	pub fn from_code(code: &str) -> Option<Language> {
		match code {
			"en" => Some(Language::English),
			"es" => Some(Language::Spanish),
			"fr" => Some(Language::French),
			"de" => Some(Language::German),
			"pt" => Some(Language::Portuguese),
			_ => None,
		}
	}
}

impl fmt::Display for Language {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Language::English => "English",
			Language::Spanish => "Spanish",
			Language::French => "French",
			Language::German => "German",
			Language::Portuguese => "Portuguese",
		};
		write!(f, "{} ({})", name, self.code())
	}
}

/// Detects the language of `text`.
///
/// Returns `DetectionFailed` when the classifier cannot produce a guess,
/// and `UnsupportedLanguage` when the guess is outside the supported set.
/// Callers must treat both as terminal for the request; there is no retry.
pub fn detect(text: &str) -> Result<Language, GistError> {
	let info = whatlang::detect(text).ok_or(GistError::DetectionFailed)?;

	match map_lang(info.lang()) {
		Some(language) => Ok(language),
		None => Err(GistError::UnsupportedLanguage(
			info.lang().code().to_string(),
		)),
	}
}

fn map_lang(lang: whatlang::Lang) -> Option<Language> {
	match lang {
		whatlang::Lang::Eng => Some(Language::English),
		whatlang::Lang::Spa => Some(Language::Spanish),
		whatlang::Lang::Fra => Some(Language::French),
		whatlang::Lang::Deu => Some(Language::German),
		whatlang::Lang::Por => Some(Language::Portuguese),
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn detects_english() {
		let text = "The mitochondria is the powerhouse of the cell. \
		            Students should review this before the exam.";
		assert_eq!(detect(text).unwrap(), Language::English);
	}

	#[test]
	fn detects_spanish() {
		let text = "La fotosíntesis es el proceso por el cual las plantas \
		            convierten la luz del sol en energía química.";
		assert_eq!(detect(text).unwrap(), Language::Spanish);
	}

	#[test]
	fn rejects_unsupported_language() {
		let text = "猫は哺乳類です。猫はよく眠ります。今日は天気がいいです。";
		match detect(text) {
			Err(GistError::UnsupportedLanguage(code)) => assert_eq!(code, "jpn"),
			other => panic!("expected UnsupportedLanguage, got {:?}", other),
		}
	}

	#[test]
	fn fails_on_letterless_input() {
		let text = "12345 67890 ??? !!!";
		assert!(matches!(detect(text), Err(GistError::DetectionFailed)));
	}

	#[test]
	fn detection_is_deterministic() {
		let text = "Short ambiguous text";
		let first = format!("{:?}", detect(text));
		for _ in 0..10 {
			assert_eq!(format!("{:?}", detect(text)), first);
		}
	}

	#[test]
	fn code_round_trip() {
		for lang in Language::ALL {
			assert_eq!(Language::from_code(lang.code()), Some(lang));
		}
	}
}

use isolang::Language;

// @module: Language utilities for ISO language code handling
//
// The target language reaches the prompt as a human-readable name, so an ISO
// 639-1 (2-letter) or ISO 639-2 (3-letter) code is turned into its English
// name before it is sent.

/// Look up an ISO 639-2/B code that differs from its ISO 639-2/T form
fn part2b_to_part2t(code: &str) -> Option<&'static str> {
    let part2t = match code {
        "fre" => "fra",
        "ger" => "deu",
        "dut" => "nld",
        "gre" => "ell",
        "chi" => "zho",
        "cze" => "ces",
        "ice" => "isl",
        "alb" => "sqi",
        "arm" => "hye",
        "baq" => "eus",
        "bur" => "mya",
        "per" => "fas",
        "geo" => "kat",
        "may" => "msa",
        "mac" => "mkd",
        "rum" => "ron",
        "slo" => "slk",
        "wel" => "cym",
        _ => return None,
    };
    Some(part2t)
}

/// Resolve an ISO 639-1 or ISO 639-2 code to a language
pub fn lookup_language(code: &str) -> Option<Language> {
    let normalized = code.trim().to_lowercase();
    match normalized.len() {
        2 => Language::from_639_1(&normalized),
        3 => Language::from_639_3(&normalized)
            .or_else(|| part2b_to_part2t(&normalized).and_then(Language::from_639_3)),
        _ => None,
    }
}

/// Get the English language name for a code, if it is a known ISO code
pub fn get_language_name(code: &str) -> Option<String> {
    lookup_language(code).map(|lang| lang.to_name().to_string())
}

/// Language as it should appear in a translation prompt
///
/// Known codes become their English name; anything else (for example
/// "Brazilian Portuguese") is used as typed, minus surrounding whitespace.
pub fn prompt_language_name(language: &str) -> String {
    get_language_name(language).unwrap_or_else(|| language.trim().to_string())
}

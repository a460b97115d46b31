//! Free-text normalization shared by the symptom matcher.
//!
//! Output alphabet is `[a-z0-9 ]`: input is lowercased, common Latin
//! diacritics fold to their base letter, everything else becomes a space,
//! and runs of whitespace collapse to single spaces.

/// Normalize a raw phrase for matching.
pub fn normalize(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    for c in raw.to_lowercase().chars() {
        let c = fold_diacritic(c);
        match c {
            'a'..='z' | '0'..='9' => cleaned.push(c),
            _ => cleaned.push(' '),
        }
    }
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split normalized text into tokens. Empty input yields an empty Vec.
pub fn tokenize(normalized: &str) -> Vec<String> {
    normalized
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Normalize and tokenize in one step.
pub fn normalize_tokens(raw: &str) -> Vec<String> {
    tokenize(&normalize(raw))
}

/// Fold common Latin accented characters to their unaccented base letter.
/// Characters without a mapping pass through and are dropped by `normalize`
/// if they fall outside `[a-z0-9 ]`.
fn fold_diacritic(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' => 'i',
        'ñ' | 'ń' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => 'o',
        'š' | 'ś' => 's',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' => 'u',
        'ý' | 'ÿ' => 'y',
        'ž' | 'ź' | 'ż' => 'z',
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(normalize("Chest PAIN!!"), "chest pain");
    }

    #[test]
    fn folds_diacritics() {
        assert_eq!(normalize("Migräne sévère"), "migrane severe");
    }

    #[test]
    fn collapses_internal_whitespace() {
        assert_eq!(normalize("  kidney \t\n  pain  "), "kidney pain");
    }

    #[test]
    fn keeps_digits() {
        assert_eq!(normalize("pain for 3 days"), "pain for 3 days");
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(normalize_tokens("").is_empty());
        assert!(normalize_tokens("  \t ").is_empty());
        assert!(normalize_tokens("!!??").is_empty());
    }

    #[test]
    fn tokenizes_on_spaces() {
        assert_eq!(
            normalize_tokens("sharp, stabbing chest-pain"),
            vec!["sharp", "stabbing", "chest", "pain"]
        );
    }
}

//! Classifies normalized symptom text into a recommended department.
//!
//! Pure function over a read-only slice of definitions: identical input
//! against an identical definition set always yields the same outcome.

use std::collections::BTreeSet;

use crate::models::SymptomDefinition;
use crate::text;

use super::types::MatchOutcome;

/// Relative weights of the three score components.
const TOKEN_WEIGHT: f64 = 0.7;
const COVERAGE_WEIGHT: f64 = 0.2;
const PRIORITY_WEIGHT: f64 = 0.1;

#[derive(Debug, Clone)]
pub struct SymptomMatcher {
    min_confidence: f64,
}

struct CandidateScore {
    token_score: f64,
    keyword_coverage: f64,
    matched: BTreeSet<String>,
}

impl SymptomMatcher {
    pub fn new(min_confidence: f64) -> Self {
        Self { min_confidence }
    }

    /// Match free text against the definition set.
    ///
    /// Candidates are visited sorted by `(priority, id)` and only a strictly
    /// greater adjusted score replaces the running best, so exact ties go to
    /// the more urgent definition, then the lower id. Returns `None` when no
    /// candidate scores positively or the best score is below the floor.
    pub fn match_text(
        &self,
        free_text: &str,
        definitions: &[SymptomDefinition],
    ) -> Option<MatchOutcome> {
        let input_tokens = text::normalize_tokens(free_text);
        if input_tokens.is_empty() {
            return None;
        }

        let mut candidates: Vec<&SymptomDefinition> = definitions.iter().collect();
        candidates.sort_by_key(|d| (d.priority, d.id));

        let mut best: Option<(&SymptomDefinition, f64, BTreeSet<String>)> = None;

        for definition in candidates {
            let score = score_candidate(&input_tokens, definition);
            if score.token_score <= 0.0 {
                continue;
            }

            let priority_boost = 1.0 / (f64::from(definition.priority) + 1.0);
            let adjusted = TOKEN_WEIGHT * score.token_score
                + COVERAGE_WEIGHT * score.keyword_coverage
                + PRIORITY_WEIGHT * priority_boost;

            if best.as_ref().map_or(true, |(_, b, _)| adjusted > *b) {
                best = Some((definition, adjusted, score.matched));
            }
        }

        let (definition, score, matched) = best?;
        if score < self.min_confidence {
            return None;
        }

        Some(MatchOutcome {
            department_id: definition.department_id,
            confidence: score.min(1.0),
            matched_keywords: matched.into_iter().collect(),
        })
    }
}

/// Score one definition against the input tokens.
///
/// An input token matches when it contains, or is contained in, a candidate
/// token; each input token counts at most once, against the first candidate
/// token that matches it.
fn score_candidate(input_tokens: &[String], definition: &SymptomDefinition) -> CandidateScore {
    let candidate_tokens = build_token_set(definition);
    if candidate_tokens.is_empty() {
        return CandidateScore {
            token_score: 0.0,
            keyword_coverage: 0.0,
            matched: BTreeSet::new(),
        };
    }

    let mut matches = 0usize;
    let mut matched = BTreeSet::new();

    for token in input_tokens {
        for candidate in &candidate_tokens {
            if candidate.contains(token.as_str()) || token.contains(candidate.as_str()) {
                matches += 1;
                matched.insert(candidate.clone());
                break;
            }
        }
    }

    CandidateScore {
        token_score: matches as f64 / input_tokens.len() as f64,
        keyword_coverage: matched.len() as f64 / candidate_tokens.len() as f64,
        matched,
    }
}

/// Token set of a definition: tokens of its canonical phrase plus tokens of
/// every keyword, all normalized. BTreeSet keeps iteration deterministic.
fn build_token_set(definition: &SymptomDefinition) -> BTreeSet<String> {
    let mut tokens: BTreeSet<String> = text::normalize_tokens(&definition.text).into_iter().collect();
    for keyword in &definition.keywords {
        tokens.extend(text::normalize_tokens(keyword));
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn definition(text: &str, priority: u32, keywords: &[&str]) -> SymptomDefinition {
        SymptomDefinition {
            id: Uuid::new_v4(),
            text: text.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            department_id: Uuid::new_v4(),
            priority,
        }
    }

    fn matcher() -> SymptomMatcher {
        SymptomMatcher::new(0.25)
    }

    #[test]
    fn chest_tightness_matches_heart_pain() {
        let cardiology = definition(
            "heart pain",
            1,
            &["chest pain", "cardiac pain", "chest tightness", "palpitations"],
        );
        let dermatology = definition("skin rash", 2, &["itchy skin", "red patches", "eczema"]);

        let outcome = matcher()
            .match_text("I have chest tightness", &[dermatology, cardiology.clone()])
            .expect("should match cardiology");

        assert_eq!(outcome.department_id, cardiology.department_id);
        assert!(outcome.confidence >= 0.25);
        assert!(outcome.matched_keywords.contains(&"chest".to_string()));
    }

    #[test]
    fn noise_text_matches_nothing() {
        let defs = vec![
            definition("heart pain", 1, &["chest pain"]),
            definition("kidney pain", 1, &["renal pain", "flank pain"]),
        ];
        assert!(matcher().match_text("xyzabc123", &defs).is_none());
    }

    #[test]
    fn empty_input_matches_nothing() {
        let defs = vec![definition("heart pain", 1, &["chest pain"])];
        assert!(matcher().match_text("", &defs).is_none());
        assert!(matcher().match_text("   !!", &defs).is_none());
    }

    #[test]
    fn empty_definition_set_matches_nothing() {
        assert!(matcher().match_text("chest pain", &[]).is_none());
    }

    #[test]
    fn confidence_never_exceeds_one() {
        let def = definition("pain", 1, &["pain"]);
        let outcome = matcher().match_text("pain", &[def]).unwrap();
        assert!(outcome.confidence <= 1.0);
    }

    #[test]
    fn higher_urgency_wins_exact_ties() {
        let mut urgent = definition("breathing trouble", 1, &["wheeze"]);
        let mut routine = definition("breathing trouble", 3, &["wheeze"]);
        let urgent_dept = Uuid::new_v4();
        let routine_dept = Uuid::new_v4();
        urgent.department_id = urgent_dept;
        routine.department_id = routine_dept;

        // token score and coverage are identical; the priority boost and the
        // deterministic (priority, id) visit order decide it.
        let outcome = matcher()
            .match_text("breathing trouble", &[routine, urgent])
            .unwrap();
        assert_eq!(outcome.department_id, urgent_dept);
    }

    #[test]
    fn result_is_deterministic_across_input_orderings() {
        let a = definition("migraine", 2, &["headache", "aura"]);
        let b = definition("back injury", 2, &["sprain", "joint pain"]);
        let text = "throbbing headache with aura";

        let forward = matcher().match_text(text, &[a.clone(), b.clone()]).unwrap();
        let reverse = matcher().match_text(text, &[b, a]).unwrap();
        assert_eq!(forward, reverse);
    }

    #[test]
    fn partial_token_containment_counts() {
        // "palpitation" (input) is contained in "palpitations" (candidate).
        let def = definition("heart pain", 1, &["palpitations"]);
        let outcome = matcher().match_text("palpitation", &[def]);
        assert!(outcome.is_some());
    }
}

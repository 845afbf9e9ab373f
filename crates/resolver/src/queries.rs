//! The mood-to-query template table.
//!
//! Process-wide constant state: each mood maps to an ordered list of
//! search queries. Lookup is structurally total; a mood without an entry
//! falls back to the happy templates, which are guaranteed to exist.

use classifier::Mood;

/// Queries used when a mood has no entry of its own.
const HAPPY_QUERIES: &[&str] = &["good vibes", "happy hits", "feel good"];

/// Ordered query templates per mood. Order matters: queries are issued in
/// this sequence and result ordering follows it.
pub const MOOD_QUERIES: &[(Mood, &[&str])] = &[
    (Mood::Happy, HAPPY_QUERIES),
    (Mood::Focused, &["deep focus", "coding mode", "instrumental focus"]),
    (Mood::Calm, &["lofi beats", "peaceful piano", "ambient chill"]),
    (Mood::Energetic, &["workout motivation", "power workout", "edm bangers"]),
    (Mood::Sad, &["sad songs", "rainy day", "lofi sad"]),
    (Mood::Angry, &["hard rock workout", "aggressive metal", "pump up"]),
    (Mood::Romantic, &["love pop", "romantic", "chill love"]),
];

/// The query list for a mood, falling back to the happy templates.
pub fn queries_for(mood: Mood) -> &'static [&'static str] {
    MOOD_QUERIES
        .iter()
        .find(|(m, _)| *m == mood)
        .map(|(_, queries)| *queries)
        .unwrap_or(HAPPY_QUERIES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mood_has_queries() {
        for mood in Mood::ALL {
            let queries = queries_for(mood);
            assert!(
                (2..=3).contains(&queries.len()),
                "{} has {} queries",
                mood,
                queries.len()
            );
        }
    }

    #[test]
    fn test_happy_templates_exist() {
        assert_eq!(queries_for(Mood::Happy), HAPPY_QUERIES);
    }

    #[test]
    fn test_queries_are_ordered() {
        let queries = queries_for(Mood::Sad);
        assert_eq!(queries, &["sad songs", "rainy day", "lofi sad"]);
    }
}

//! Exercise utterances

use tracing::debug;

use super::patterns::{extract_duration, match_activity, Rule, DEFAULT_DURATION_MINUTES};
use super::QueryInterpreter;
use crate::models::{ActivityProfile, ExerciseMatch, ExtractionResult, EXERCISE_NOT_RECOGNIZED};
use crate::nutrition::scaling::round_half_even;

impl<'a> QueryInterpreter<'a> {
    /// Extract an activity, its duration and calories burned from an utterance
    ///
    /// Duration defaults to 30 minutes when none is stated.
    pub fn interpret_exercise(&self, utterance: &str) -> ExtractionResult {
        let query = utterance.to_lowercase();

        let Some(found) = match_activity(&query) else {
            debug!(utterance, "No activity word found");
            return ExtractionResult::no_match(EXERCISE_NOT_RECOGNIZED);
        };

        let duration = extract_duration(&query).unwrap_or(DEFAULT_DURATION_MINUTES);

        let Some(activity) = self.normalize_activity(found) else {
            debug!(word = found.spelling, "Activity word has no lexicon entry");
            return ExtractionResult::no_match(EXERCISE_NOT_RECOGNIZED);
        };

        let calories_burned = round_half_even(activity.calories_per_minute * duration);
        debug!(
            activity = %activity.name,
            duration,
            calories_burned,
            "Matched exercise"
        );

        ExtractionResult::ExerciseMatch(ExerciseMatch {
            name: activity.name.clone(),
            duration_minutes: duration,
            calories_burned,
        })
    }

    /// Map a matched activity word onto a lexicon entry
    ///
    /// The word's tag is tried as an exact key first. Failing that, the first
    /// key that contains the word, or is contained in it, wins.
    fn normalize_activity(&self, found: Rule<&str>) -> Option<&'a ActivityProfile> {
        let activities = self.activities;
        activities
            .iter()
            .find(|a| a.name == found.tag)
            .or_else(|| {
                activities.iter().find(|a| {
                    a.name.contains(found.spelling) || found.spelling.contains(a.name.as_str())
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FoodProfile, Nutrition};

    fn exercise(utterance: &str) -> ExtractionResult {
        QueryInterpreter::new().interpret_exercise(utterance)
    }

    fn matched(utterance: &str) -> ExerciseMatch {
        exercise(utterance)
            .as_exercise()
            .cloned()
            .unwrap_or_else(|| panic!("no exercise in {:?}", utterance))
    }

    #[test]
    fn test_ran_45_minutes() {
        let m = matched("ran 45 minutes");
        assert_eq!(m.name, "running");
        assert_eq!(m.duration_minutes, 45.0);
        assert_eq!(m.calories_burned, 450);
    }

    #[test]
    fn test_yoga_one_hour() {
        let m = matched("did some yoga for 1 hour");
        assert_eq!(m.name, "yoga");
        assert_eq!(m.duration_minutes, 60.0);
        assert_eq!(m.calories_burned, 180);
    }

    #[test]
    fn test_no_activity() {
        assert_eq!(
            exercise("went somewhere"),
            ExtractionResult::no_match(EXERCISE_NOT_RECOGNIZED)
        );
    }

    #[test]
    fn test_default_duration() {
        let m = matched("Went swimming");
        assert_eq!(m.name, "swimming");
        assert_eq!(m.duration_minutes, 30.0);
        assert_eq!(m.calories_burned, 240);
    }

    #[test]
    fn test_past_tense_words_map_to_activity() {
        assert_eq!(matched("swam 20 mins").name, "swimming");
        assert_eq!(matched("jogged 10 min").name, "jogging");
        assert_eq!(matched("cycled for 2 hrs").name, "cycling");
        assert_eq!(matched("exercised 15 minutes").name, "workout");
        assert_eq!(matched("trained 40 minutes").name, "training");
    }

    #[test]
    fn test_hours_convert_to_minutes() {
        let m = matched("cycled for 2 hrs");
        assert_eq!(m.duration_minutes, 120.0);
        assert_eq!(m.calories_burned, 840);
    }

    #[test]
    fn test_calories_round_half_even() {
        // 12 * 2.625 = 31.5 rounds to 32, 4 * 2.625 = 10.5 rounds to 10
        assert_eq!(matched("hiit 2.625 min").calories_burned, 32);
        assert_eq!(matched("walking 2.625 min").calories_burned, 10);
    }

    #[test]
    fn test_containment_fallback() {
        // a lexicon without the tag key falls back to substring containment
        let foods = vec![FoodProfile::new("oats", Nutrition::default(), "cup", 1.0)];
        let activities = vec![ActivityProfile::new("power walking", 5.0)];
        let interpreter = QueryInterpreter::with_lexicon(&foods, &activities).unwrap();
        let result = interpreter.interpret_exercise("walking 10 minutes");
        let m = result.as_exercise().unwrap();
        assert_eq!(m.name, "power walking");
        assert_eq!(m.calories_burned, 50);
    }

    #[test]
    fn test_word_without_lexicon_entry() {
        let foods = vec![FoodProfile::new("oats", Nutrition::default(), "cup", 1.0)];
        let activities = vec![ActivityProfile::new("rowing", 9.0)];
        let interpreter = QueryInterpreter::with_lexicon(&foods, &activities).unwrap();
        assert!(!interpreter.interpret_exercise("ran 10 minutes").is_match());
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(exercise("hiit 25 minutes"), exercise("hiit 25 minutes"));
    }
}

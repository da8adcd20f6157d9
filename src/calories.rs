use phf::phf_map;
use std::collections::BTreeSet;

/// Calories burned per minute for each known exercise.
pub static CALORIES_PER_MINUTE: phf::Map<&'static str, u32> = phf_map! {
    "running" => 10,
    "cycling" => 7,
    "swimming" => 8,
    "jumping-rope" => 12,
    "push-ups" => 7,
    "squats" => 8,
    "deadlifts" => 9,
    "bench-press" => 8,
    "sun-salutation" => 3,
    "warrior" => 4,
    "tree-pose" => 2,
    "cobra" => 2,
};

/// Workout categories offered on the workout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutType {
    Cardio,
    Strength,
    Yoga,
}

pub const ALL_WORKOUT_TYPES: [WorkoutType; 3] =
    [WorkoutType::Cardio, WorkoutType::Strength, WorkoutType::Yoga];

impl WorkoutType {
    /// Identifier stored in the progress history.
    pub fn id(self) -> &'static str {
        match self {
            WorkoutType::Cardio => "cardio",
            WorkoutType::Strength => "strength",
            WorkoutType::Yoga => "yoga",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WorkoutType::Cardio => "Cardio",
            WorkoutType::Strength => "Strength",
            WorkoutType::Yoga => "Yoga",
        }
    }

    /// `(id, label)` pairs shown in this type's detail panel.
    pub fn exercises(self) -> &'static [(&'static str, &'static str)] {
        match self {
            WorkoutType::Cardio => &[
                ("running", "Running"),
                ("cycling", "Cycling"),
                ("swimming", "Swimming"),
                ("jumping-rope", "Jumping Rope"),
            ],
            WorkoutType::Strength => &[
                ("push-ups", "Push-ups"),
                ("squats", "Squats"),
                ("deadlifts", "Deadlifts"),
                ("bench-press", "Bench Press"),
            ],
            WorkoutType::Yoga => &[
                ("sun-salutation", "Sun Salutation"),
                ("warrior", "Warrior Pose"),
                ("tree-pose", "Tree Pose"),
                ("cobra", "Cobra Pose"),
            ],
        }
    }
}

/// Rate for a single exercise; unknown identifiers burn nothing.
pub fn rate_for(exercise: &str) -> u32 {
    CALORIES_PER_MINUTE.get(exercise).copied().unwrap_or(0)
}

/// Total calories for doing every selected exercise for `duration_minutes`.
pub fn calculate_calories<S: AsRef<str>>(duration_minutes: u32, selected: &[S]) -> u32 {
    selected
        .iter()
        .map(|e| rate_for(e.as_ref()).saturating_mul(duration_minutes))
        .fold(0u32, u32::saturating_add)
}

/// Parse the leading integer of `text` the way a browser `parseInt` would.
///
/// Leading whitespace is skipped, one optional sign is accepted, and parsing
/// stops at the first non-digit. Returns `None` when no digit is found.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// Duration field value in minutes. Unparsable or negative input is 0.
pub fn parse_duration(text: &str) -> u32 {
    parse_leading_int(text)
        .map(|v| v.clamp(0, u32::MAX as i64) as u32)
        .unwrap_or(0)
}

/// Display text for a calorie total.
pub fn format_calories(total: u32) -> String {
    format!("{total} kcal")
}

/// Read a calorie total back from its display text.
pub fn parse_calories_label(label: &str) -> u32 {
    parse_duration(label)
}

/// Editable state of the workout form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutForm {
    pub selected_type: Option<WorkoutType>,
    pub checked: BTreeSet<String>,
    pub duration: String,
    pub weight: String,
    /// Text shown in the calories display.
    pub calories_label: String,
}

impl WorkoutForm {
    pub fn new() -> Self {
        Self {
            calories_label: format_calories(0),
            ..Default::default()
        }
    }

    /// Select `kind`, replacing any prior selection.
    pub fn select_type(&mut self, kind: WorkoutType) {
        self.selected_type = Some(kind);
    }

    /// Whether the detail panel for `kind` is visible.
    pub fn details_visible(&self, kind: WorkoutType) -> bool {
        self.selected_type == Some(kind)
    }

    pub fn set_checked(&mut self, exercise: &str, checked: bool) {
        if checked {
            self.checked.insert(exercise.to_string());
        } else {
            self.checked.remove(exercise);
        }
    }

    pub fn is_checked(&self, exercise: &str) -> bool {
        self.checked.contains(exercise)
    }

    /// Checked exercise ids in the order the panels list them.
    pub fn checked_exercises(&self) -> Vec<String> {
        ALL_WORKOUT_TYPES
            .iter()
            .flat_map(|kind| kind.exercises().iter())
            .filter(|(id, _)| self.checked.contains(*id))
            .map(|(id, _)| id.to_string())
            .collect()
    }

    /// Recompute the calories display from the current fields.
    pub fn refresh_calories(&mut self) {
        self.calories_label = format_calories(derive_calories(self));
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Single source of truth for the calories display.
///
/// Every checked box counts, including boxes in panels that are currently
/// hidden.
pub fn derive_calories(form: &WorkoutForm) -> u32 {
    let selected: Vec<&str> = form.checked.iter().map(String::as_str).collect();
    calculate_calories(parse_duration(&form.duration), &selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_rates_times_duration() {
        assert_eq!(calculate_calories(30, &["running", "squats"]), (10 + 8) * 30);
        assert_eq!(calculate_calories(0, &["running"]), 0);
    }

    #[test]
    fn unknown_exercises_contribute_nothing() {
        assert_eq!(calculate_calories(10, &["running", "juggling"]), 100);
        assert_eq!(calculate_calories(10, &["juggling"]), 0);
    }

    #[test]
    fn every_exercise_in_panels_has_a_rate() {
        for kind in ALL_WORKOUT_TYPES {
            for (id, _) in kind.exercises() {
                assert!(rate_for(id) > 0, "{id} has no rate");
            }
        }
    }

    #[test]
    fn parse_leading_int_matches_parse_int() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("  17min"), Some(17));
        assert_eq!(parse_leading_int("350 kcal"), Some(350));
        assert_eq!(parse_leading_int("-5"), Some(-5));
        assert_eq!(parse_leading_int("4.9"), Some(4));
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("abc"), None);
    }

    #[test]
    fn duration_falls_back_to_zero() {
        assert_eq!(parse_duration(""), 0);
        assert_eq!(parse_duration("ten"), 0);
        assert_eq!(parse_duration("-3"), 0);
        assert_eq!(parse_duration("25"), 25);
    }

    #[test]
    fn calories_label_round_trips() {
        assert_eq!(format_calories(240), "240 kcal");
        assert_eq!(parse_calories_label("240 kcal"), 240);
    }

    #[test]
    fn derive_calories_uses_form_state() {
        let mut form = WorkoutForm::new();
        assert_eq!(form.calories_label, "0 kcal");
        form.duration = "20".into();
        form.set_checked("jumping-rope", true);
        form.set_checked("cobra", true);
        form.refresh_calories();
        assert_eq!(form.calories_label, "280 kcal");

        assert_eq!(form.checked_exercises(), vec!["jumping-rope", "cobra"]);

        form.set_checked("cobra", false);
        form.refresh_calories();
        assert_eq!(form.calories_label, "240 kcal");

        form.duration = "oops".into();
        form.refresh_calories();
        assert_eq!(form.calories_label, "0 kcal");
    }

    #[test]
    fn selecting_type_shows_only_its_details() {
        let mut form = WorkoutForm::new();
        form.select_type(WorkoutType::Yoga);
        form.select_type(WorkoutType::Cardio);
        assert!(form.details_visible(WorkoutType::Cardio));
        assert!(!form.details_visible(WorkoutType::Yoga));
        assert!(!form.details_visible(WorkoutType::Strength));
    }

    #[test]
    fn reset_clears_everything() {
        let mut form = WorkoutForm::new();
        form.select_type(WorkoutType::Strength);
        form.set_checked("squats", true);
        form.duration = "15".into();
        form.weight = "80".into();
        form.refresh_calories();
        form.reset();
        assert_eq!(form, WorkoutForm::new());
    }
}

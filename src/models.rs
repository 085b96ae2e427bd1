//models.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Equipment value the service sends for body-weight movements.
pub const NO_EQUIPMENT: &str = "none";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    #[default]
    Beginner,
    Intermediate,
}

impl FitnessLevel {
    pub const ALL: [FitnessLevel; 2] = [FitnessLevel::Beginner, FitnessLevel::Intermediate];

    pub fn label(&self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "Beginner",
            FitnessLevel::Intermediate => "Intermediate",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("workout days per week must be 3, 4 or 5, got {0}")]
pub struct InvalidDaysPerWeek(pub u8);

/// Training days per week. Only 3, 4 and 5 exist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DaysPerWeek {
    #[default]
    Three,
    Four,
    Five,
}

impl DaysPerWeek {
    pub const ALL: [DaysPerWeek; 3] = [DaysPerWeek::Three, DaysPerWeek::Four, DaysPerWeek::Five];

    pub fn count(&self) -> u8 {
        match self {
            DaysPerWeek::Three => 3,
            DaysPerWeek::Four => 4,
            DaysPerWeek::Five => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DaysPerWeek::Three => "3 Days - Beginner Friendly",
            DaysPerWeek::Four => "4 Days - Balanced",
            DaysPerWeek::Five => "5 Days - Advanced",
        }
    }
}

impl TryFrom<u8> for DaysPerWeek {
    type Error = InvalidDaysPerWeek;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(DaysPerWeek::Three),
            4 => Ok(DaysPerWeek::Four),
            5 => Ok(DaysPerWeek::Five),
            other => Err(InvalidDaysPerWeek(other)),
        }
    }
}

impl From<DaysPerWeek> for u8 {
    fn from(days: DaysPerWeek) -> Self {
        days.count()
    }
}

/// Ordered set of goal tags.
///
/// Entries are trimmed on the way in; blank entries and repeats of an
/// existing entry are dropped, so first-insertion order is all that survives.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct GoalSet(Vec<String>);

impl GoalSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the goal was added.
    pub fn insert(&mut self, goal: &str) -> bool {
        let goal = goal.trim();
        if goal.is_empty() || self.contains(goal) {
            return false;
        }
        self.0.push(goal.to_string());
        true
    }

    /// Returns true when the goal was present.
    pub fn remove(&mut self, goal: &str) -> bool {
        let goal = goal.trim();
        let before = self.0.len();
        self.0.retain(|g| g != goal);
        self.0.len() != before
    }

    /// Adds the goal if absent, removes it if present.
    pub fn toggle(&mut self, goal: &str) {
        if !self.remove(goal) {
            self.insert(goal);
        }
    }

    pub fn contains(&self, goal: &str) -> bool {
        let goal = goal.trim();
        self.0.iter().any(|g| g == goal)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for GoalSet {
    fn from(goals: Vec<String>) -> Self {
        let mut set = GoalSet::new();
        for goal in &goals {
            set.insert(goal);
        }
        set
    }
}

impl From<GoalSet> for Vec<String> {
    fn from(goals: GoalSet) -> Self {
        goals.0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub level: FitnessLevel,
    pub days: DaysPerWeek,
    pub goals: GoalSet,
}

/// Exercise category. Anything the service invents later lands in `Other`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExerciseType {
    Warmup,
    Main,
    Core,
    Cooldown,
    Other(String),
}

impl ExerciseType {
    pub fn as_str(&self) -> &str {
        match self {
            ExerciseType::Warmup => "warmup",
            ExerciseType::Main => "main",
            ExerciseType::Core => "core",
            ExerciseType::Cooldown => "cooldown",
            ExerciseType::Other(raw) => raw,
        }
    }
}

impl From<String> for ExerciseType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "warmup" => ExerciseType::Warmup,
            "main" => ExerciseType::Main,
            "core" => ExerciseType::Core,
            "cooldown" => ExerciseType::Cooldown,
            _ => ExerciseType::Other(raw),
        }
    }
}

impl From<ExerciseType> for String {
    fn from(kind: ExerciseType) -> Self {
        kind.as_str().to_string()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub muscle_group: String,
    pub equipment: String,
    #[serde(rename = "type")]
    pub kind: ExerciseType,
    pub level: String,
    pub sets: u32,
    pub reps: String,
}

impl Exercise {
    pub fn uses_equipment(&self) -> bool {
        self.equipment != NO_EQUIPMENT
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutDay {
    pub day: u32,
    pub exercises: Vec<Exercise>,
}

/// Days in the order the service returned them. Day numbers may have gaps.
pub type WorkoutPlan = Vec<WorkoutDay>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_preferences() {
        let prefs = UserPreferences::default();
        assert_eq!(prefs.level, FitnessLevel::Beginner);
        assert_eq!(prefs.days, DaysPerWeek::Three);
        assert!(prefs.goals.is_empty());
    }

    #[test]
    fn test_preferences_wire_format() {
        let mut prefs = UserPreferences {
            level: FitnessLevel::Intermediate,
            days: DaysPerWeek::Five,
            goals: GoalSet::new(),
        };
        prefs.goals.insert("Build Muscle");

        let value = serde_json::to_value(&prefs).unwrap();
        assert_eq!(
            value,
            json!({"level": "intermediate", "days": 5, "goals": ["Build Muscle"]})
        );
    }

    #[test]
    fn test_days_rejects_out_of_range() {
        assert_eq!(DaysPerWeek::try_from(2), Err(InvalidDaysPerWeek(2)));
        assert_eq!(DaysPerWeek::try_from(4), Ok(DaysPerWeek::Four));
        assert!(serde_json::from_value::<DaysPerWeek>(json!(6)).is_err());
    }

    #[test]
    fn test_goal_set_trims_and_dedups() {
        let mut goals = GoalSet::new();
        assert!(goals.insert("  Run "));
        assert!(!goals.insert("Run"));
        assert!(!goals.insert("   "));
        assert!(!goals.insert(""));
        assert!(goals.insert("run"));
        assert_eq!(goals.iter().collect::<Vec<_>>(), vec!["Run", "run"]);
    }

    #[test]
    fn test_goal_set_toggle_is_inverse() {
        let mut goals = GoalSet::from(vec!["Lose Weight".to_string()]);
        let before = goals.clone();
        goals.toggle("Build Muscle");
        assert!(goals.contains("Build Muscle"));
        goals.toggle("Build Muscle");
        assert_eq!(goals, before);
    }

    #[test]
    fn test_goal_set_deserialize_enforces_invariant() {
        let goals: GoalSet = serde_json::from_value(json!(["Jump", " Jump ", "", "Swim"])).unwrap();
        assert_eq!(goals.iter().collect::<Vec<_>>(), vec!["Jump", "Swim"]);
    }

    #[test]
    fn test_exercise_unknown_type_is_preserved() {
        let exercise: Exercise = serde_json::from_value(json!({
            "name": "Farmer Carry",
            "muscle_group": "grip",
            "equipment": "dumbbells",
            "type": "conditioning",
            "level": "intermediate",
            "sets": 3,
            "reps": "40m"
        }))
        .unwrap();

        assert_eq!(exercise.kind, ExerciseType::Other("conditioning".to_string()));
        assert_eq!(exercise.kind.as_str(), "conditioning");
        assert!(exercise.uses_equipment());
    }

    #[test]
    fn test_plan_keeps_received_order() {
        let plan: WorkoutPlan = serde_json::from_value(json!([
            {"day": 4, "exercises": []},
            {"day": 1, "exercises": []}
        ]))
        .unwrap();
        assert_eq!(plan.iter().map(|d| d.day).collect::<Vec<_>>(), vec![4, 1]);
    }
}

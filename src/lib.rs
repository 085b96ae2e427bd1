//! FitPlanner - workout plan client
//!
//! Collects training preferences, asks the planning service for a schedule
//! and shows the result grouped by day.

pub mod api;
pub mod config;
pub mod controller;
pub mod form;
pub mod models;
pub mod render;
pub mod theme;

pub use api::{ApiError, PlanGenerator, WorkoutApi};
pub use config::Settings;
pub use controller::{PlanController, PlanStatus, ResponseOrdering, PLAN_FAILED_MESSAGE};
pub use form::{CustomGoalMode, PreferencesForm};
pub use models::{DaysPerWeek, Exercise, ExerciseType, FitnessLevel, GoalSet, UserPreferences, WorkoutDay, WorkoutPlan};
pub use render::PlanView;
pub use theme::{FitPlannerTheme, ThemeProvider};

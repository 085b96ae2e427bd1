use crate::models::{DaysPerWeek, FitnessLevel, UserPreferences};
use eframe::egui::{self, Button, ComboBox, RichText, Ui};
use serde::Deserialize;

pub const PRESET_GOALS: [&str; 5] = [
    "Build Muscle",
    "Lose Weight",
    "Improve Strength",
    "Increase Flexibility",
    "Better Endurance",
];

/// What an edit of the custom goals field does to goals it added earlier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomGoalMode {
    /// Earlier segments stay; new segments are appended.
    #[default]
    Accumulate,
    /// Goals typed earlier that are no longer in the text are dropped; the rest stay put.
    Replace,
}

/// Collects a [`UserPreferences`] value from the user.
#[derive(Debug, Default)]
pub struct PreferencesForm {
    preferences: UserPreferences,
    custom_goal_text: String,
    custom_goal_mode: CustomGoalMode,
    // Goals the text field currently contributes, for `Replace`.
    typed_goals: Vec<String>,
}

impl PreferencesForm {
    pub fn new(custom_goal_mode: CustomGoalMode) -> Self {
        Self {
            custom_goal_mode,
            ..Default::default()
        }
    }

    pub fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }

    pub fn custom_goal_text(&self) -> &str {
        &self.custom_goal_text
    }

    pub fn set_level(&mut self, level: FitnessLevel) {
        self.preferences.level = level;
    }

    pub fn set_days(&mut self, days: DaysPerWeek) {
        self.preferences.days = days;
    }

    pub fn is_goal_selected(&self, goal: &str) -> bool {
        self.preferences.goals.contains(goal)
    }

    pub fn toggle_goal(&mut self, goal: &str) {
        self.preferences.goals.toggle(goal);
        if !self.preferences.goals.contains(goal) {
            self.typed_goals.retain(|g| g != goal.trim());
        }
    }

    /// Change handler for the custom goals field.
    ///
    /// The text is split on commas; each trimmed, non-empty segment not
    /// already among the goals is appended in order.
    pub fn set_custom_goal_text(&mut self, text: &str) {
        self.custom_goal_text = text.to_string();

        if self.custom_goal_mode == CustomGoalMode::Replace {
            // Goals still in the text keep their place; the rest go.
            let segments: Vec<&str> = text.split(',').map(str::trim).collect();
            for goal in std::mem::take(&mut self.typed_goals) {
                if segments.contains(&goal.as_str()) {
                    self.typed_goals.push(goal);
                } else {
                    self.preferences.goals.remove(&goal);
                }
            }
        }

        for segment in text.split(',') {
            if self.preferences.goals.insert(segment) {
                self.typed_goals.push(segment.trim().to_string());
            }
        }
    }

    /// Hands a snapshot of the preferences to `on_submit` unless a request is in flight.
    ///
    /// Returns whether the callback ran.
    pub fn submit(&self, disabled: bool, on_submit: &mut dyn FnMut(UserPreferences)) -> bool {
        if disabled {
            tracing::debug!("Submit ignored while a plan request is in flight");
            return false;
        }
        on_submit(self.preferences.clone());
        true
    }

    pub fn show(&mut self, ui: &mut Ui, disabled: bool, on_submit: &mut dyn FnMut(UserPreferences)) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Workout Planner").heading().strong());
            ui.label("Create your personalized workout plan in seconds");
        });
        ui.add_space(20.0);

        egui::Grid::new("preferences_grid")
            .num_columns(2)
            .spacing([16.0, 12.0])
            .show(ui, |ui| {
                ui.label("Fitness Level");
                let mut level = self.preferences.level;
                ComboBox::from_id_salt("fitness_level")
                    .selected_text(level.label())
                    .show_ui(ui, |ui| {
                        for option in FitnessLevel::ALL {
                            ui.selectable_value(&mut level, option, option.label());
                        }
                    });
                self.set_level(level);
                ui.end_row();

                ui.label("Workout Days per Week");
                let mut days = self.preferences.days;
                ComboBox::from_id_salt("days_per_week")
                    .selected_text(days.label())
                    .show_ui(ui, |ui| {
                        for option in DaysPerWeek::ALL {
                            ui.selectable_value(&mut days, option, option.label());
                        }
                    });
                self.set_days(days);
                ui.end_row();
            });

        ui.add_space(12.0);
        ui.label(RichText::new("Fitness Goals").strong());
        ui.horizontal_wrapped(|ui| {
            for goal in PRESET_GOALS {
                if ui.selectable_label(self.is_goal_selected(goal), goal).clicked() {
                    self.toggle_goal(goal);
                }
            }
        });

        let mut text = self.custom_goal_text.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut text)
                .hint_text("Enter your own goals, separated by commas")
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            self.set_custom_goal_text(&text);
        }

        ui.add_space(16.0);
        if disabled {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.add_enabled(false, Button::new("Creating Your Perfect Workout Plan..."));
            });
        } else if ui
            .add(Button::new(RichText::new("Generate My Workout Plan").strong()))
            .clicked()
        {
            self.submit(disabled, on_submit);
        }
    }
}

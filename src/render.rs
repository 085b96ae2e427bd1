use crate::models::{Exercise, ExerciseType, WorkoutDay};
use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

/// Tag text and colour for an exercise type.
///
/// Unknown types keep their raw text and get the neutral colour.
pub fn type_tag(kind: &ExerciseType) -> (&str, Color32) {
    match kind {
        ExerciseType::Warmup => ("warmup", Color32::from_rgb(0x02, 0x88, 0xd1)),
        ExerciseType::Main => ("main", Color32::from_rgb(0x21, 0x96, 0xf3)),
        ExerciseType::Core => ("core", Color32::from_rgb(0xf5, 0x00, 0x57)),
        ExerciseType::Cooldown => ("cooldown", Color32::from_rgb(0x2e, 0x7d, 0x32)),
        ExerciseType::Other(raw) => (raw.as_str(), Color32::GRAY),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExerciseRow<'a> {
    pub name: &'a str,
    pub tag: &'a str,
    pub tag_color: Color32,
    pub volume: String,
    pub equipment: Option<&'a str>,
}

impl<'a> ExerciseRow<'a> {
    pub fn new(exercise: &'a Exercise) -> Self {
        let (tag, tag_color) = type_tag(&exercise.kind);
        Self {
            name: &exercise.name,
            tag,
            tag_color,
            volume: format!("{} sets × {}", exercise.sets, exercise.reps),
            equipment: exercise
                .uses_equipment()
                .then_some(exercise.equipment.as_str()),
        }
    }

    /// "3 sets × 10-12 • Equipment: dumbbells"
    pub fn summary(&self) -> String {
        match self.equipment {
            Some(equipment) => format!("{} • Equipment: {}", self.volume, equipment),
            None => self.volume.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DaySection<'a> {
    pub title: String,
    pub rows: Vec<ExerciseRow<'a>>,
}

/// Read-only view over a plan. Days and exercises keep the order they arrived in.
pub struct PlanView<'a> {
    days: &'a [WorkoutDay],
}

impl<'a> PlanView<'a> {
    pub fn new(days: &'a [WorkoutDay]) -> Self {
        Self { days }
    }

    pub fn sections(&self) -> Vec<DaySection<'a>> {
        self.days
            .iter()
            .map(|day| DaySection {
                title: format!("Day {}", day.day),
                rows: day.exercises.iter().map(ExerciseRow::new).collect(),
            })
            .collect()
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for section in self.sections() {
            out.push_str(&section.title);
            out.push('\n');
            for row in &section.rows {
                out.push_str(&format!("  • {} [{}]: {}\n", row.name, row.tag, row.summary()));
            }
        }
        out
    }

    pub fn show(&self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("Your Personalized Workout Plan")
                    .heading()
                    .strong(),
            );
            if ui.button("Copy as text").clicked() {
                ui.ctx().copy_text(self.to_text());
            }
        });
        ui.add_space(10.0);

        for (index, section) in self.sections().into_iter().enumerate() {
            // Day numbers are not guaranteed unique, so key on position.
            egui::CollapsingHeader::new(RichText::new(&section.title).strong())
                .id_salt(("plan_day", index))
                .default_open(index == 0)
                .show(ui, |ui| show_exercises(ui, &section.rows));
        }
    }
}

fn show_exercises(ui: &mut Ui, rows: &[ExerciseRow<'_>]) {
    if rows.is_empty() {
        ui.label(RichText::new("Rest day").italics());
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(180.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::remainder())
        .header(24.0, |mut header| {
            header.col(|ui| {
                ui.strong("Exercise");
            });
            header.col(|ui| {
                ui.strong("Type");
            });
            header.col(|ui| {
                ui.strong("Volume");
            });
        })
        .body(|mut body| {
            for row in rows {
                body.row(28.0, |mut table_row| {
                    table_row.col(|ui| {
                        ui.label(RichText::new(row.name).strong());
                    });
                    table_row.col(|ui| {
                        ui.label(RichText::new(row.tag).small().color(row.tag_color));
                    });
                    table_row.col(|ui| {
                        ui.label(row.summary());
                    });
                });
            }
        });
}

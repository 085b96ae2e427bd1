use eframe::{App, CreationContext, Frame, egui};
use egui::{Align, Color32, Layout, RichText, ScrollArea};
use fit_planner::config::{LoggingSettings, Settings};
use fit_planner::{FitPlannerTheme, PlanController, PlanView, PreferencesForm, ThemeProvider, WorkoutApi};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let (settings, config_error) = match Settings::load() {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::fallback(), Some(e)),
    };

    init_logging(&settings.logging);

    if let Some(e) = config_error {
        warn!("Failed to load configuration ({}), using defaults and {}", e, fit_planner::config::API_URL_ENV);
    }

    let api = WorkoutApi::new(&settings.api).map_err(|e| {
        error!("Failed to create API client: {}", e);
        e
    })?;

    info!("Using workout service at {}", api.base_url());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([960.0, 900.0]),
        ..Default::default()
    };

    eframe::run_native(
        "FitPlanner Pro",
        options,
        Box::new(move |cc| Ok(Box::new(PlannerApp::new(cc, &settings, api)))),
    )?;

    Ok(())
}

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

struct PlannerApp {
    form: PreferencesForm,
    controller: PlanController<WorkoutApi>,
    theme: FitPlannerTheme,
}

impl PlannerApp {
    fn new(cc: &CreationContext, settings: &Settings, api: WorkoutApi) -> Self {
        let theme = FitPlannerTheme::default();
        theme.apply(&cc.egui_ctx);

        let ctx = cc.egui_ctx.clone();
        let controller = PlanController::new(api, settings.requests.ordering)
            .with_notifier(move || ctx.request_repaint());

        PlannerApp {
            form: PreferencesForm::new(settings.form.custom_goal_mode),
            controller,
            theme,
        }
    }
}

impl App for PlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.controller.poll();

        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
                ui.with_layout(Layout::top_down(Align::Center), |ui| {
                    ui.add_space(10.0);
                    ui.label(
                        RichText::new("FitPlanner Pro")
                            .heading()
                            .size(36.0)
                            .strong()
                            .color(self.theme.primary_dark),
                    );
                    ui.add_space(20.0);
                });

                self.show_form(ui);

                if self.controller.is_loading() {
                    ui.add_space(20.0);
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new("Creating your personalized workout plan...").strong());
                        ui.spinner();
                    });
                }

                if let Some(message) = self.controller.error() {
                    ui.add_space(20.0);
                    egui::Frame::group(ui.style())
                        .fill(Color32::from_rgb(0xff, 0xeb, 0xee))
                        .stroke(egui::Stroke::new(1.0, Color32::from_rgb(0xef, 0x53, 0x50)))
                        .show(ui, |ui| {
                            ui.vertical_centered(|ui| {
                                ui.colored_label(Color32::from_rgb(0xd3, 0x2f, 0x2f), message);
                            });
                        });
                }

                if let Some(plan) = self.controller.plan() {
                    ui.add_space(30.0);
                    ui.label(
                        RichText::new(format!("Generated at {}", plan.received_at.format("%H:%M:%S")))
                            .small(),
                    );
                    PlanView::new(&plan.days).show(ui);
                }
            });
        });
    }
}

impl PlannerApp {
    fn show_form(&mut self, ui: &mut egui::Ui) {
        let disabled = self.controller.is_loading();
        let controller = &mut self.controller;

        egui::Frame::group(ui.style())
            .fill(self.theme.paper)
            .inner_margin(24.0)
            .show(ui, |ui| {
                self.form.show(ui, disabled, &mut |preferences| {
                    info!(
                        "Submitting preferences (level: {:?}, days: {}, goals: {})",
                        preferences.level,
                        preferences.days.count(),
                        preferences.goals.len()
                    );
                    controller.submit(preferences);
                });
            });
    }
}

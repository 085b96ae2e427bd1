// End-to-end tests: form -> controller -> service -> plan view

use fit_planner::api::{ApiError, PlanGenerator};
use fit_planner::config::ApiSettings;
use fit_planner::models::{DaysPerWeek, FitnessLevel, UserPreferences, WorkoutDay, WorkoutPlan};
use fit_planner::{
    PlanController, PlanStatus, PlanView, PreferencesForm, ResponseOrdering, WorkoutApi,
    PLAN_FAILED_MESSAGE,
};
use mockito::Server;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

const WAIT: Duration = Duration::from_secs(10);

fn api_for(server: &Server) -> WorkoutApi {
    let settings = ApiSettings {
        base_url: server.url(),
        timeout_secs: Some(10),
    };
    WorkoutApi::new(&settings).unwrap()
}

/// Counts calls and answers with a fixed plan.
struct CountingGenerator {
    calls: Arc<AtomicUsize>,
    plan: WorkoutPlan,
}

impl PlanGenerator for CountingGenerator {
    fn generate_plan(&self, _: &UserPreferences) -> Result<WorkoutPlan, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.plan.clone())
    }
}

#[test]
fn test_two_day_plan_renders_two_sections() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/generate-plan")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([{"day": 1, "exercises": []}, {"day": 2, "exercises": []}]).to_string())
        .create();

    let mut controller = PlanController::new(api_for(&server), ResponseOrdering::LastSettled);
    let form = PreferencesForm::default();

    assert!(form.submit(controller.is_loading(), &mut |prefs| controller.submit(prefs)));
    assert_eq!(controller.status(), PlanStatus::Loading);

    assert!(controller.wait_for_settlement(WAIT));
    assert_eq!(controller.status(), PlanStatus::Success);
    assert!(controller.error().is_none());

    let plan = controller.plan().unwrap();
    let titles: Vec<_> = PlanView::new(&plan.days)
        .sections()
        .into_iter()
        .map(|s| s.title)
        .collect();
    assert_eq!(titles, vec!["Day 1", "Day 2"]);
}

#[test]
fn test_failure_keeps_last_good_plan() {
    let mut server = Server::new();
    let ok = server
        .mock("POST", "/generate-plan")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([{"day": 1, "exercises": []}]).to_string())
        .create();

    let mut controller = PlanController::new(api_for(&server), ResponseOrdering::LastSettled);
    controller.submit(UserPreferences::default());
    assert!(controller.wait_for_settlement(WAIT));
    assert_eq!(controller.status(), PlanStatus::Success);
    let before = controller.plan().unwrap().days.clone();

    ok.remove();
    let _failing = server
        .mock("POST", "/generate-plan")
        .with_status(500)
        .create();

    controller.submit(UserPreferences::default());
    assert!(controller.wait_for_settlement(WAIT));

    assert_eq!(controller.status(), PlanStatus::Error);
    assert_eq!(controller.error(), Some(PLAN_FAILED_MESSAGE));
    assert_eq!(controller.plan().unwrap().days, before);
}

#[test]
fn test_disabled_form_does_not_resubmit() {
    let calls = Arc::new(AtomicUsize::new(0));
    let generator = CountingGenerator {
        calls: Arc::clone(&calls),
        plan: vec![WorkoutDay { day: 1, exercises: Vec::new() }],
    };
    let mut controller = PlanController::new(generator, ResponseOrdering::LastSettled);

    let mut form = PreferencesForm::default();
    form.set_level(FitnessLevel::Intermediate);
    form.set_days(DaysPerWeek::Five);

    assert!(form.submit(controller.is_loading(), &mut |prefs| controller.submit(prefs)));
    // Still loading until the settlement is applied.
    assert!(controller.is_loading());
    assert!(!form.submit(controller.is_loading(), &mut |prefs| controller.submit(prefs)));

    assert!(controller.wait_for_settlement(WAIT));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(controller.in_flight(), 0);
    assert_eq!(controller.status(), PlanStatus::Success);
}

#[test]
fn test_notifier_fires_after_settlement() {
    let notified = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&notified);
    let generator = CountingGenerator {
        calls: Arc::new(AtomicUsize::new(0)),
        plan: Vec::new(),
    };

    let mut controller = PlanController::new(generator, ResponseOrdering::LastSettled)
        .with_notifier(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

    controller.submit(UserPreferences::default());
    assert!(controller.wait_for_settlement(WAIT));

    // The notifier runs right after the send, so give the worker a moment.
    let deadline = std::time::Instant::now() + WAIT;
    while notified.load(Ordering::SeqCst) == 0 && std::time::Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(5));
    }
    assert_eq!(notified.load(Ordering::SeqCst), 1);
    assert_eq!(controller.poll(), 0);
}

//! Request lifecycle between the preferences form and the plan view.
//!
//! Requests run on worker threads and post their outcome to a channel that
//! the UI thread drains once per frame, so the frame loop never waits on I/O.

use crate::api::{ApiError, PlanGenerator};
use crate::models::{UserPreferences, WorkoutPlan};
use chrono::{DateTime, Local};
use serde::Deserialize;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// The only failure text the user ever sees.
pub const PLAN_FAILED_MESSAGE: &str = "Failed to generate workout plan. Please try again.";

/// How settlements of overlapping requests are applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseOrdering {
    /// Every settlement is applied when it arrives; the slowest one wins.
    #[default]
    LastSettled,
    /// Settlements of requests superseded by a newer submit are dropped.
    LastIssued,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanStatus {
    Idle,
    Loading,
    Success,
    Error,
}

/// A plan as received, stamped with the local time it arrived.
#[derive(Clone, Debug)]
pub struct GeneratedPlan {
    pub days: WorkoutPlan,
    pub received_at: DateTime<Local>,
}

struct Settlement {
    token: u64,
    outcome: Result<WorkoutPlan, ApiError>,
}

type Notifier = Arc<dyn Fn() + Send + Sync>;

pub struct PlanController<G> {
    generator: Arc<G>,
    ordering: ResponseOrdering,
    plan: Option<GeneratedPlan>,
    error: Option<String>,
    loading: bool,
    in_flight: usize,
    last_token: u64,
    tx: Sender<Settlement>,
    rx: Receiver<Settlement>,
    notify: Option<Notifier>,
}

impl<G: PlanGenerator + 'static> PlanController<G> {
    pub fn new(generator: G, ordering: ResponseOrdering) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            generator: Arc::new(generator),
            ordering,
            plan: None,
            error: None,
            loading: false,
            in_flight: 0,
            last_token: 0,
            tx,
            rx,
            notify: None,
        }
    }

    /// Called from the worker thread after a settlement is posted.
    pub fn with_notifier(mut self, notify: impl Fn() + Send + Sync + 'static) -> Self {
        self.notify = Some(Arc::new(notify));
        self
    }

    /// An error outranks a plan: both can be present after overlapping requests.
    pub fn status(&self) -> PlanStatus {
        if self.loading {
            PlanStatus::Loading
        } else if self.error.is_some() {
            PlanStatus::Error
        } else if self.plan.is_some() {
            PlanStatus::Success
        } else {
            PlanStatus::Idle
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Last successfully received plan. Survives later failures.
    pub fn plan(&self) -> Option<&GeneratedPlan> {
        self.plan.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Starts a new request. Requests already in flight are not cancelled.
    pub fn submit(&mut self, preferences: UserPreferences) {
        self.error = None;
        self.loading = true;
        self.in_flight += 1;
        self.last_token += 1;
        let token = self.last_token;

        let generator = Arc::clone(&self.generator);
        let tx = self.tx.clone();
        let notify = self.notify.clone();

        let spawned = thread::Builder::new()
            .name(format!("plan-request-{}", token))
            .spawn(move || {
                let outcome = generator.generate_plan(&preferences);
                // The receiver only goes away with the controller.
                let _ = tx.send(Settlement { token, outcome });
                if let Some(notify) = notify {
                    notify();
                }
            });

        match spawned {
            Ok(_) => tracing::debug!("Plan request {} started ({} in flight)", token, self.in_flight),
            Err(e) => {
                tracing::error!("Could not start plan request {}: {}", token, e);
                self.in_flight -= 1;
                self.fail();
            }
        }
    }

    /// Applies every settlement posted so far. Returns how many were drained.
    pub fn poll(&mut self) -> usize {
        let mut drained = 0;
        while let Ok(settlement) = self.rx.try_recv() {
            self.settle(settlement);
            drained += 1;
        }
        drained
    }

    /// Blocks until one settlement arrives or `timeout` passes.
    pub fn wait_for_settlement(&mut self, timeout: Duration) -> bool {
        match self.rx.recv_timeout(timeout) {
            Ok(settlement) => {
                self.settle(settlement);
                true
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }

    fn settle(&mut self, settlement: Settlement) {
        self.in_flight = self.in_flight.saturating_sub(1);
        let Settlement { token, outcome } = settlement;

        if self.ordering == ResponseOrdering::LastIssued && token != self.last_token {
            tracing::info!(
                "Discarding response to superseded plan request {} (latest is {})",
                token,
                self.last_token
            );
            return;
        }

        self.loading = false;
        match outcome {
            Ok(days) => {
                // Only submit clears the error; a failure from an overlapping
                // request stays visible next to the plan.
                tracing::info!("Plan request {} returned {} day(s)", token, days.len());
                self.plan = Some(GeneratedPlan {
                    days,
                    received_at: Local::now(),
                });
            }
            Err(e) => {
                tracing::error!("Error generating workout plan: {}", e);
                self.fail();
            }
        }
    }

    fn fail(&mut self) {
        self.loading = false;
        self.error = Some(PLAN_FAILED_MESSAGE.to_string());
    }
}

//! Pipeline runner: launches every stage and waits for all of them.

use crate::stage::{Stage, StageContext};
use crate::stats::{PipelineStats, StatsSnapshot};
use std::sync::Arc;
use tokio::task::JoinError;
use tokio_util::sync::CancellationToken;
use tp_error::{PipelineError, Result};
use tracing::instrument::WithSubscriber;
use tracing::{debug, dispatcher, error, info, info_span, warn, Dispatch, Instrument};

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Final counters, with `completed_at` set
    pub stats: StatsSnapshot,

    /// Names of the stages that ran, in registration order
    pub stages: Vec<String>,
}

/// Owns a set of stages and runs them concurrently.
///
/// Registration order has no effect on execution order; that is decided by
/// how the stages' channels were wired before they were added. A stage that
/// exits is never restarted.
///
/// When a stage fails, the runner cancels the shared token so every other
/// stage stops at its next send or receive, waits for all of them, and
/// returns the failure that caused the shutdown.
pub struct PipelineRunner {
    stages: Vec<Box<dyn Stage>>,
    stats: Arc<PipelineStats>,
    cancel: CancellationToken,
    dispatch: Option<Dispatch>,
}

impl std::fmt::Debug for PipelineRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stages: Vec<&str> = self.stages.iter().map(|s| s.name()).collect();
        f.debug_struct("PipelineRunner")
            .field("stages", &stages)
            .field("cancelled", &self.cancel.is_cancelled())
            .finish_non_exhaustive()
    }
}

impl Default for PipelineRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineRunner {
    /// Create an empty runner.
    pub fn new() -> Self {
        Self {
            stages: Vec::new(),
            stats: Arc::new(PipelineStats::new()),
            cancel: CancellationToken::new(),
            dispatch: None,
        }
    }

    /// Route every stage's logs to `dispatch`.
    ///
    /// Without one, stages log to whatever dispatcher is current when
    /// [`run`](Self::run) is called.
    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = Some(dispatch);
        self
    }

    /// Register a stage.
    pub fn add_stage<S: Stage + 'static>(&mut self, stage: S) -> &mut Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Number of registered stages.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Statistics shared with the stages.
    pub fn stats(&self) -> Arc<PipelineStats> {
        self.stats.clone()
    }

    /// Token that stops the whole run when cancelled.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Start every stage and return once all of them have exited.
    pub async fn run(self) -> Result<RunReport> {
        let dispatch = self
            .dispatch
            .clone()
            .unwrap_or_else(|| dispatcher::get_default(Dispatch::clone));

        self.execute(dispatch.clone()).with_subscriber(dispatch).await
    }

    async fn execute(self, dispatch: Dispatch) -> Result<RunReport> {
        let Self {
            stages,
            stats,
            cancel,
            ..
        } = self;

        info!(stages = stages.len(), "Starting pipeline");

        let mut names = Vec::with_capacity(stages.len());
        let mut handles = Vec::with_capacity(stages.len());
        for stage in stages {
            let name = stage.name().to_string();
            let ctx = StageContext::new(cancel.clone(), stats.clone());
            let span = dispatcher::with_default(&dispatch, || info_span!("stage", name = %name));

            let task = supervise(stage, ctx, cancel.clone())
                .instrument(span)
                .with_subscriber(dispatch.clone());
            handles.push(tokio::spawn(task));
            names.push(name);
        }

        let results = futures::future::join_all(handles).await;

        let mut root_cause: Option<PipelineError> = None;
        let mut secondary: Option<PipelineError> = None;
        for (name, joined) in names.iter().zip(results) {
            let result = joined.unwrap_or_else(|e| {
                Err(PipelineError::StagePanicked {
                    stage: name.clone(),
                    message: panic_message(e),
                })
            });

            let Err(e) = result else {
                continue;
            };

            if e.is_secondary() {
                debug!(stage = %name, error = %e, "Stage stopped by shutdown");
                secondary.get_or_insert(e);
            } else if root_cause.is_none() {
                root_cause = Some(e);
            } else {
                warn!(stage = %name, error = %e, "Additional stage failure");
            }
        }

        if let Some(e) = root_cause.or(secondary) {
            debug!(kind = %e.kind(), "Pipeline stopped");
            return Err(e);
        }

        let mut snapshot = stats.snapshot();
        snapshot.completed_at = Some(chrono::Utc::now());

        info!(
            inputs = snapshot.inputs_opened,
            lines = snapshot.lines_emitted,
            triples = snapshot.triples_written,
            skipped = snapshot.lines_skipped,
            "Pipeline completed"
        );

        Ok(RunReport {
            stats: snapshot,
            stages: names,
        })
    }
}

/// Run one stage, cancelling the whole pipeline if it fails or panics.
async fn supervise(stage: Box<dyn Stage>, ctx: StageContext, cancel: CancellationToken) -> Result<()> {
    let _guard = CancelOnPanic(cancel.clone());

    debug!("Stage started");
    let result = stage.run(ctx).await;

    match &result {
        Ok(()) => debug!("Stage finished"),
        Err(e) if e.is_secondary() => debug!(error = %e, "Stage stopped"),
        Err(e) => error!(error = %e, "Stage failed"),
    }

    if result.is_err() {
        cancel.cancel();
    }
    result
}

struct CancelOnPanic(CancellationToken);

impl Drop for CancelOnPanic {
    fn drop(&mut self) {
        if std::thread::panicking() {
            self.0.cancel();
        }
    }
}

fn panic_message(err: JoinError) -> String {
    match err.try_into_panic() {
        Ok(payload) => payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string()),
        Err(err) => err.to_string(),
    }
}

//! Ranking Monitor
//!
//! Owns the refresh cycle around one detector instance:
//! - pulls a snapshot from the source
//! - feeds the detector
//! - resolves and dispatches the celebration to every sink
//!
//! Non-Responsibilities:
//! - Does not decide podium transitions (detector does)
//! - Does not retry a failed fetch (the next tick does)
//! - Does not queue updates dropped by the single-flight guard

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;

use super::errors::MonitorResult;
use super::source::PerformanceSource;
use crate::notification::{Celebration, CelebrationSink, SoundSettings};
use crate::observability::{log_event, log_event_with_fields, Event, MetricsSnapshot, MonitorMetrics};
use crate::ranking::{PromotionEvent, RankingTransitionDetector};

/// Periodic refresh controller.
pub struct RankingMonitor {
    detector: Arc<RankingTransitionDetector>,
    source: Box<dyn PerformanceSource + Send>,
    sounds: SoundSettings,
    sinks: Vec<Box<dyn CelebrationSink + Send>>,
    auto_clear: bool,
    metrics: Arc<MonitorMetrics>,
}

impl RankingMonitor {
    /// Create a monitor with no sinks and auto-clear enabled.
    pub fn new(
        detector: Arc<RankingTransitionDetector>,
        source: impl PerformanceSource + Send + 'static,
        sounds: SoundSettings,
    ) -> Self {
        Self {
            detector,
            source: Box::new(source),
            sounds,
            sinks: Vec::new(),
            auto_clear: true,
            metrics: Arc::new(MonitorMetrics::new()),
        }
    }

    /// Register a sink. Sinks run in registration order.
    pub fn add_sink(&mut self, sink: Box<dyn CelebrationSink + Send>) {
        self.sinks.push(sink);
    }

    /// Whether to clear the celebration right after sinks ran.
    ///
    /// Disable when a display sink calls `clear_celebration` itself once
    /// its animation finishes.
    pub fn set_auto_clear(&mut self, auto_clear: bool) {
        self.auto_clear = auto_clear;
    }

    pub fn detector(&self) -> &Arc<RankingTransitionDetector> {
        &self.detector
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Shared handle to the live counters.
    pub fn metrics_handle(&self) -> Arc<MonitorMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Run one refresh pass.
    ///
    /// A fetch error is logged, counted and returned; the detector is not
    /// touched. An empty snapshot is skipped. An update dropped by the
    /// detector's single-flight guard counts as `NoChange`.
    pub fn refresh(&mut self) -> MonitorResult<PromotionEvent> {
        self.metrics.increment_refreshes();
        log_event(Event::RankingRefreshBegin);

        let ranking = match self.source.fetch() {
            Ok(ranking) => ranking,
            Err(e) => {
                self.metrics.increment_source_failures();
                let reason = e.to_string();
                log_event_with_fields(
                    Event::SourceFailed,
                    &[("code", e.code()), ("reason", reason.as_str())],
                );
                return Err(e);
            }
        };

        if ranking.is_empty() {
            self.metrics.increment_empty_snapshots();
            log_event(Event::EmptySnapshot);
            return Ok(PromotionEvent::NoChange);
        }

        let event = match self.detector.try_update(&ranking) {
            Some(event) => event,
            None => {
                self.metrics.increment_skipped_busy();
                log_event(Event::UpdateSkippedBusy);
                return Ok(PromotionEvent::NoChange);
            }
        };

        let agents = ranking.len().to_string();
        log_event_with_fields(Event::RankingUpdated, &[("agents", agents.as_str())]);

        if !event.is_change() {
            log_event(Event::PodiumUnchanged);
            return Ok(event);
        }

        self.metrics.increment_promotions();
        if matches!(event, PromotionEvent::NewFirstPlace { .. }) {
            self.metrics.increment_first_place_changes();
        }
        log_event_with_fields(
            Event::PromotionDetected,
            &[
                ("type", event.event_name()),
                ("subject", event.display_name().unwrap_or_default()),
            ],
        );

        self.dispatch(&event);
        Ok(event)
    }

    fn dispatch(&mut self, event: &PromotionEvent) {
        if let Some(celebration) = Celebration::resolve(event, &self.sounds) {
            for sink in self.sinks.iter_mut() {
                sink.celebrate(&celebration);
            }
        }

        if self.auto_clear {
            self.detector.clear_celebration();
            log_event(Event::CelebrationCleared);
        }
    }

    /// Refresh every `period` until `shutdown` resolves.
    ///
    /// The first refresh happens immediately. Refresh errors are already
    /// logged by `refresh` and do not stop the loop.
    pub async fn run<F>(&mut self, period: Duration, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => break,
                _ = ticker.tick() => {
                    let _ = self.refresh();
                }
            }
        }

        let metrics = self.metrics.to_json();
        log_event_with_fields(Event::ShutdownComplete, &[("metrics", metrics.as_str())]);
    }
}

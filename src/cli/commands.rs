//! CLI command implementations
//!
//! - replay: stdin-driven detector session
//! - rank: one-shot leaderboard report
//! - watch: periodic refresh loop until Ctrl-C

use std::fs;
use std::future::Future;
use std::io;
use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use crate::config::Config;
use crate::monitor::{RankingMonitor, TicketFileSource};
use crate::notification::{LogSink, SoundEvent};
use crate::observability::{log_event, log_event_with_fields, Event, Logger};
use crate::performance::{aggregate, count_strikes, HandledTicket, PendingTicket};
use crate::ranking::{derive_podium, PerformanceRecord, RankingTransitionDetector};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{read_requests, write_error, write_response};
use super::replay::ReplaySession;

/// Main entry point for CLI
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Replay { config } => replay(&config),
        Command::Rank { config } => rank(&config),
        Command::Watch { config } => watch(&config),
    }
}

/// Apply the configured log threshold, then announce startup.
fn boot(config: Config, path: &Path) -> Config {
    Logger::set_min_severity(config.severity());
    log_event(Event::Startup);
    let path = path.display().to_string();
    log_event_with_fields(Event::ConfigLoaded, &[("path", path.as_str())]);
    config
}

/// Replay ranking snapshots from stdin.
///
/// Invalid requests are answered with an error line and skipped; an I/O
/// error on stdin is reported the same way and then fails the command.
pub fn replay(config_path: &Path) -> CliResult<()> {
    let config = boot(Config::load_or_default(config_path)?, config_path);
    let session = ReplaySession::new(config.sounds);
    serve(&session, read_requests())
}

fn serve<I>(session: &ReplaySession, requests: I) -> CliResult<()>
where
    I: IntoIterator<Item = CliResult<Value>>,
{
    for request in requests {
        match request.and_then(|value| session.handle_value(value)) {
            Ok(data) => write_response(data)?,
            Err(e) if e.is_recoverable() => write_error(e.code_str(), e.message())?,
            Err(e) => {
                write_error(e.code_str(), e.message())?;
                return Err(e);
            }
        }
    }

    Ok(())
}

/// Print leaderboard, podium, strikes and queue sounds, then exit.
pub fn rank(config_path: &Path) -> CliResult<()> {
    let config = boot(Config::load(config_path)?, config_path);

    let tickets = TicketFileSource::new(&config.tickets_path).load_tickets()?;
    let pending = match &config.pending_tickets_path {
        Some(path) => load_pending(path)?,
        None => Vec::new(),
    };

    write_response(rank_report(&config, &tickets, &pending, Utc::now()))
}

/// Build the `rank` payload.
///
/// Tickets still waiting cue the notification sound; any ticket at or past
/// the critical time cues the alert sound. A silenced sound reports `null`.
fn rank_report(
    config: &Config,
    tickets: &[HandledTicket],
    pending: &[PendingTicket],
    now: DateTime<Utc>,
) -> Value {
    let leaderboard = aggregate(tickets);
    let records: Vec<PerformanceRecord> = leaderboard.iter().map(|row| row.to_record()).collect();
    let strikes = count_strikes(pending, config.critical_time_minutes, now);

    let notification = if pending.is_empty() {
        None
    } else {
        config.sounds.resolve(SoundEvent::Notification, None)
    };

    let alert = if strikes.is_empty() {
        None
    } else {
        let overdue: u64 = strikes.iter().map(|s| s.overdue_tickets).sum();
        let overdue = overdue.to_string();
        log_event_with_fields(Event::OverdueTickets, &[("tickets", overdue.as_str())]);
        config.sounds.resolve(SoundEvent::Alert, None)
    };

    json!({
        "leaderboard": leaderboard,
        "podium": derive_podium(&records),
        "strikes": strikes,
        "notification": notification,
        "alert": alert,
    })
}

fn load_pending(path: &Path) -> CliResult<Vec<PendingTicket>> {
    let content = fs::read_to_string(path).map_err(|e| {
        CliError::io_error(format!("Failed to read {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&content)
        .map_err(|e| CliError::io_error(format!("Invalid pending tickets {}: {}", path.display(), e)))
}

/// Refresh the leaderboard on the configured cadence until Ctrl-C.
pub fn watch(config_path: &Path) -> CliResult<()> {
    let config = boot(Config::load(config_path)?, config_path);

    let detector = Arc::new(RankingTransitionDetector::new());
    let mut monitor = RankingMonitor::new(
        detector,
        TicketFileSource::new(&config.tickets_path),
        config.sounds.clone(),
    );
    monitor.set_auto_clear(config.auto_clear_celebration);
    monitor.add_sink(Box::new(LogSink));

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime_error(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(monitor.run(config.refresh_interval(), shutdown_on(tokio::signal::ctrl_c())));

    Ok(())
}

/// Resolve once `signal` fires.
///
/// If the signal handler could not be installed the failure is logged and
/// the future never resolves, leaving the process to be stopped externally.
async fn shutdown_on<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    if let Err(e) = signal.await {
        let reason = e.to_string();
        log_event_with_fields(Event::ShutdownSignalFailed, &[("reason", reason.as_str())]);
        std::future::pending::<()>().await;
    }
}

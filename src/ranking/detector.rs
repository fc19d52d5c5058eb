//! Ranking Transition Detector
//!
//! Compares each fresh leaderboard against the retained podium and emits at
//! most one promotion event.
//!
//! Rule order:
//! 1. First-place change (different id at rank 1) short-circuits everything
//! 2. Otherwise scan the new podium in rank order; the first entry that is
//!    new to the podium or holds a strictly better rank wins
//! 3. Either of those at rank 1 is reported as a new first place
//!
//! The retained podium is replaced after every non-empty update, whether or
//! not an event fired.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::event::{CelebrationState, PromotionEvent};
use super::record::{derive_podium, PerformanceRecord, PodiumEntry};

/// State owned exclusively by the detector.
#[derive(Debug, Default)]
struct DetectorState {
    retained: Vec<PodiumEntry>,
    celebration: CelebrationState,
}

/// Releases the busy flag when dropped, including on unwind.
pub(crate) struct UpdateGuard<'a> {
    busy: &'a AtomicBool,
}

impl Drop for UpdateGuard<'_> {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

/// Podium transition detector.
///
/// One instance per session, created empty. Shareable through `Arc`:
/// updates are single-flight, so a second update arriving while one is in
/// progress is dropped rather than queued.
#[derive(Debug, Default)]
pub struct RankingTransitionDetector {
    busy: AtomicBool,
    state: Mutex<DetectorState>,
}

impl RankingTransitionDetector {
    /// Create a detector with an empty podium and no celebration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a fresh ranking and return the resulting event.
    ///
    /// Returns `NoChange` when the ranking is empty, when nothing worth
    /// celebrating happened, or when another update is still in progress.
    pub fn update(&self, new_ranking: &[PerformanceRecord]) -> PromotionEvent {
        self.try_update(new_ranking)
            .unwrap_or(PromotionEvent::NoChange)
    }

    /// Like [`update`](Self::update), but returns `None` when the call was
    /// dropped by the single-flight guard.
    pub fn try_update(&self, new_ranking: &[PerformanceRecord]) -> Option<PromotionEvent> {
        let _guard = self.acquire()?;

        let new_podium = derive_podium(new_ranking);
        if new_podium.is_empty() {
            return Some(PromotionEvent::NoChange);
        }

        let mut state = self.lock_state();
        let event = detect_transition(&state.retained, &new_podium);
        state.retained = new_podium;

        if let Some(celebration) = CelebrationState::for_event(&event) {
            state.celebration = celebration;
        }

        Some(event)
    }

    /// Deactivate the current celebration. Safe to call at any time.
    pub fn clear_celebration(&self) {
        self.lock_state().celebration.clear();
    }

    /// Snapshot of the celebration state.
    pub fn celebration_state(&self) -> CelebrationState {
        self.lock_state().celebration.clone()
    }

    /// Snapshot of the retained podium.
    pub fn retained_podium(&self) -> Vec<PodiumEntry> {
        self.lock_state().retained.clone()
    }

    /// Check if an update is in progress.
    pub fn is_updating(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Take the single-flight flag. `None` if an update is in progress.
    pub(crate) fn acquire(&self) -> Option<UpdateGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| UpdateGuard { busy: &self.busy })
    }

    fn lock_state(&self) -> MutexGuard<'_, DetectorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Decide which event, if any, the move from `retained` to `new_podium`
/// represents. Pure; does not touch any detector state.
pub fn detect_transition(retained: &[PodiumEntry], new_podium: &[PodiumEntry]) -> PromotionEvent {
    let old_first = retained.iter().find(|e| e.rank == 1);
    let new_first = new_podium.iter().find(|e| e.rank == 1);

    if let (Some(old_first), Some(new_first)) = (old_first, new_first) {
        if old_first.id != new_first.id {
            return PromotionEvent::NewFirstPlace {
                display_name: new_first.display_name.clone(),
                previous_first_place_display_name: Some(old_first.display_name.clone()),
            };
        }
    }

    for entry in new_podium {
        let event = match retained.iter().find(|old| old.id == entry.id) {
            None => PromotionEvent::EnteredPodium {
                display_name: entry.display_name.clone(),
                rank: entry.rank,
            },
            Some(old) if old.rank > entry.rank => PromotionEvent::ImprovedPodiumRank {
                display_name: entry.display_name.clone(),
                old_rank: old.rank,
                new_rank: entry.rank,
            },
            Some(_) => continue,
        };

        if entry.rank == 1 {
            return PromotionEvent::NewFirstPlace {
                display_name: entry.display_name.clone(),
                previous_first_place_display_name: None,
            };
        }
        return event;
    }

    PromotionEvent::NoChange
}

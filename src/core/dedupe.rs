//! Bounded, time-windowed memory of Slack event ids.
//!
//! Slack redelivers an event when the first delivery is not acknowledged fast
//! enough. Ids are remembered for a TTL and the set never holds more than
//! `capacity` entries; the oldest id is evicted first.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
struct State {
    seen_at: HashMap<String, Instant>,
    order: VecDeque<(String, Instant)>,
}

impl State {
    fn evict_expired(&mut self, now: Instant, ttl: Duration) {
        while let Some((id, at)) = self.order.front() {
            if now.saturating_duration_since(*at) < ttl {
                break;
            }
            // A re-recorded id leaves a stale queue entry behind; only drop the map
            // entry when the timestamps agree.
            if self.seen_at.get(id) == Some(at) {
                self.seen_at.remove(id);
            }
            self.order.pop_front();
        }
    }

    fn contains(&self, id: &str, now: Instant, ttl: Duration) -> bool {
        self.seen_at
            .get(id)
            .is_some_and(|at| now.saturating_duration_since(*at) < ttl)
    }

    fn insert(&mut self, id: &str, now: Instant, capacity: usize) {
        while self.seen_at.len() >= capacity {
            let Some((old, at)) = self.order.pop_front() else {
                break;
            };
            if self.seen_at.get(&old) == Some(&at) {
                self.seen_at.remove(&old);
            }
        }
        self.seen_at.insert(id.to_string(), now);
        self.order.push_back((id.to_string(), now));
    }
}

#[derive(Debug)]
pub struct RecentEvents {
    ttl: Duration,
    capacity: usize,
    state: Mutex<State>,
}

impl RecentEvents {
    #[must_use]
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            ttl,
            capacity: capacity.max(1),
            state: Mutex::new(State::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // The state is a plain cache; a panic in another holder leaves it usable.
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    #[must_use]
    pub fn seen(&self, id: &str) -> bool {
        let now = Instant::now();
        let mut state = self.lock();
        state.evict_expired(now, self.ttl);
        state.contains(id, now, self.ttl)
    }

    pub fn record(&self, id: &str) {
        let now = Instant::now();
        let mut state = self.lock();
        state.evict_expired(now, self.ttl);
        state.insert(id, now, self.capacity);
    }

    /// Returns `true` when `id` was already recorded inside the window. Otherwise
    /// records it and returns `false`. Check and insert happen under one lock.
    pub fn check_and_record(&self, id: &str) -> bool {
        self.check_and_record_at(id, Instant::now())
    }

    fn check_and_record_at(&self, id: &str, now: Instant) -> bool {
        let mut state = self.lock();
        state.evict_expired(now, self.ttl);
        if state.contains(id, now, self.ttl) {
            return true;
        }
        state.insert(id, now, self.capacity);
        false
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().seen_at.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

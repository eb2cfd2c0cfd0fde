use crate::store::HabitStore;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use uuid::Uuid;

struct Slot {
    store: HabitStore,
    last_seen: Instant,
    last_used: u64,
}

/// Owns one habit store per browser session.
pub struct SessionRegistry {
    sessions: HashMap<Uuid, Slot>,
    ttl: Duration,
    max_sessions: usize,
    clock: u64,
}

impl SessionRegistry {
    pub fn new(ttl: Duration, max_sessions: usize) -> Self {
        Self {
            sessions: HashMap::new(),
            ttl,
            max_sessions: max_sessions.max(1),
            clock: 0,
        }
    }

    pub fn open(&mut self) -> Uuid {
        self.sweep_expired();
        while self.sessions.len() >= self.max_sessions {
            self.evict_least_recent();
        }

        let id = Uuid::new_v4();
        let last_used = self.tick();
        self.sessions.insert(
            id,
            Slot {
                store: HabitStore::new(),
                last_seen: Instant::now(),
                last_used,
            },
        );
        info!(session = %id, open = self.sessions.len(), "session opened");
        id
    }

    pub fn get(&mut self, id: &Uuid) -> Option<&HabitStore> {
        self.get_mut(id).map(|store| &*store)
    }

    pub fn get_mut(&mut self, id: &Uuid) -> Option<&mut HabitStore> {
        let last_used = self.tick();
        let ttl = self.ttl;
        let slot = self.sessions.get_mut(id)?;
        if slot.last_seen.elapsed() > ttl {
            self.sessions.remove(id);
            debug!(session = %id, "session expired on access");
            return None;
        }

        slot.last_seen = Instant::now();
        slot.last_used = last_used;
        // Reborrow through the map so the expiry branch above can remove.
        self.sessions.get_mut(id).map(|slot| &mut slot.store)
    }

    pub fn close(&mut self, id: &Uuid) -> bool {
        let removed = self.sessions.remove(id).is_some();
        if removed {
            info!(session = %id, "session closed");
        }
        removed
    }

    fn sweep_expired(&mut self) {
        let ttl = self.ttl;
        let before = self.sessions.len();
        self.sessions.retain(|_, slot| slot.last_seen.elapsed() <= ttl);
        let swept = before - self.sessions.len();
        if swept > 0 {
            info!(swept, "expired idle sessions");
        }
    }

    fn evict_least_recent(&mut self) {
        let oldest = self
            .sessions
            .iter()
            .min_by_key(|(_, slot)| slot.last_used)
            .map(|(id, _)| *id);
        if let Some(id) = oldest {
            self.sessions.remove(&id);
            info!(session = %id, "evicted least recently used session");
        }
    }

    fn tick(&mut self) -> u64 {
        self.clock = self.clock.wrapping_add(1);
        self.clock
    }
}

#[cfg(test)]
impl SessionRegistry {
    fn len(&self) -> usize {
        self.sessions.len()
    }

    fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn contains(&self, id: &Uuid) -> bool {
        self.sessions.contains_key(id)
    }
}

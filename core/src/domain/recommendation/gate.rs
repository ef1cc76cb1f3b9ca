use std::{
    collections::HashSet,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use sha2::{Digest, Sha256};

use crate::domain::common::entities::app_errors::CoreError;

/// Identifies one caller without keeping its credential in memory.
pub type CallerKey = [u8; 32];

pub fn caller_key(credential: &str) -> CallerKey {
    Sha256::digest(credential.as_bytes()).into()
}

/// Allows at most one LLM recommendation in flight per caller. Clones share
/// the same set of busy callers.
#[derive(Debug, Clone, Default)]
pub struct RecommendationGate {
    in_flight: Arc<Mutex<HashSet<CallerKey>>>,
}

/// Held for the duration of one request; frees the caller's slot on drop.
#[derive(Debug)]
pub struct GatePermit {
    in_flight: Arc<Mutex<HashSet<CallerKey>>>,
    caller: CallerKey,
}

fn lock(in_flight: &Mutex<HashSet<CallerKey>>) -> MutexGuard<'_, HashSet<CallerKey>> {
    in_flight.lock().unwrap_or_else(PoisonError::into_inner)
}

impl RecommendationGate {
    pub fn try_acquire(&self, caller: CallerKey) -> Result<GatePermit, CoreError> {
        if !lock(&self.in_flight).insert(caller) {
            return Err(CoreError::RecommendationInFlight);
        }

        Ok(GatePermit {
            in_flight: Arc::clone(&self.in_flight),
            caller,
        })
    }

    /// Number of callers with a request currently in flight.
    pub fn in_flight(&self) -> usize {
        lock(&self.in_flight).len()
    }
}

impl Drop for GatePermit {
    fn drop(&mut self) {
        lock(&self.in_flight).remove(&self.caller);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_caller_is_rejected_until_release() {
        let gate = RecommendationGate::default();
        let shared = gate.clone();
        let caller = caller_key("AIza-first");

        let permit = gate.try_acquire(caller).unwrap();
        assert_eq!(shared.in_flight(), 1);
        assert_eq!(
            shared.try_acquire(caller).unwrap_err(),
            CoreError::RecommendationInFlight
        );

        drop(permit);
        assert_eq!(gate.in_flight(), 0);
        assert!(shared.try_acquire(caller).is_ok());
    }

    #[test]
    fn test_different_callers_proceed_together() {
        let gate = RecommendationGate::default();

        let first = gate.try_acquire(caller_key("AIza-first")).unwrap();
        let second = gate.try_acquire(caller_key("AIza-second")).unwrap();
        assert_eq!(gate.in_flight(), 2);

        drop(first);
        assert_eq!(gate.in_flight(), 1);
        drop(second);
        assert_eq!(gate.in_flight(), 0);
    }

    #[test]
    fn test_caller_key_is_stable_per_credential() {
        assert_eq!(caller_key("AIza-first"), caller_key("AIza-first"));
        assert_ne!(caller_key("AIza-first"), caller_key("AIza-second"));
    }
}

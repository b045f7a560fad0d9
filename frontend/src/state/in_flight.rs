use std::{
    collections::HashSet,
    hash::Hash,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

/// Keys of actions that are currently awaiting a response.
///
/// `begin` hands out a guard only when the key is not already in flight; the
/// key is released when the guard drops, whether the call succeeded or not.
pub struct RequestDedup<K: Eq + Hash + Clone> {
    keys: Arc<Mutex<HashSet<K>>>,
}

impl<K: Eq + Hash + Clone> Clone for RequestDedup<K> {
    fn clone(&self) -> Self {
        Self {
            keys: Arc::clone(&self.keys),
        }
    }
}

impl<K: Eq + Hash + Clone> Default for RequestDedup<K> {
    fn default() -> Self {
        Self {
            keys: Arc::new(Mutex::new(HashSet::new())),
        }
    }
}

impl<K: Eq + Hash + Clone> RequestDedup<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self, key: K) -> Option<InFlightGuard<K>> {
        if !self.lock().insert(key.clone()) {
            return None;
        }
        Some(InFlightGuard {
            owner: self.clone(),
            key,
        })
    }

    pub fn contains(&self, key: &K) -> bool {
        self.lock().contains(key)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<K>> {
        self.keys.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[must_use = "the key is released as soon as the guard is dropped"]
pub struct InFlightGuard<K: Eq + Hash + Clone> {
    owner: RequestDedup<K>,
    key: K,
}

impl<K: Eq + Hash + Clone> InFlightGuard<K> {
    pub fn key(&self) -> &K {
        &self.key
    }
}

impl<K: Eq + Hash + Clone> Drop for InFlightGuard<K> {
    fn drop(&mut self) {
        self.owner.lock().remove(&self.key);
    }
}

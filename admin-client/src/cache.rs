//! Query cache
//!
//! A process-wide map from cache key to the last fetched value for that key.
//! Keys are deterministic strings built from the resource name and its
//! scoping parameters ("collections-ua-1-6"); prefix matching over keys is
//! what drives invalidation after writes.
//!
//! The cache gives its consumers:
//! - request coalescing: at most one network call in flight per key, with
//!   every concurrent reader of that key awaiting the same settled result;
//! - staleness: invalidated entries stay readable through [`QueryCache::get_cached`]
//!   (stale-while-revalidate) but force a refetch on the next [`QueryCache::fetch`];
//! - ordering: each request takes a per-key ticket, and a settled result is
//!   only applied if nothing newer has been applied meanwhile, so a slow
//!   response can never clobber a fresher one. In particular, a mutation's
//!   [`QueryCache::overwrite`] always wins over a read that was already in flight.
//!
//! One cache instance is built per [`crate::AdminClient`] and shared by
//! reference across every resource API.

use crate::error::{ClientError, ClientResult};
use dashmap::DashMap;
use std::any::Any;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::broadcast;

type Stored = Arc<dyn Any + Send + Sync>;
type Settled = Result<Stored, ClientError>;

#[derive(Clone)]
struct CachedValue {
    value: Stored,
    stale: bool,
    fetched_at: Instant,
}

struct Flight {
    ticket: u64,
    done: broadcast::Sender<Settled>,
}

#[derive(Default)]
struct Slot {
    cached: Option<CachedValue>,
    /// Ticket of the last applied result; earlier tickets are discarded.
    applied: u64,
    /// Ticket counter for this key.
    next_ticket: u64,
    flight: Option<Flight>,
}

/// Keyed query cache shared across the console's views.
pub struct QueryCache {
    slots: DashMap<String, Slot>,
}

enum Plan {
    Hit(Stored),
    Join(broadcast::Receiver<Settled>),
    Lead {
        ticket: u64,
        done: broadcast::Sender<Settled>,
    },
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            slots: DashMap::new(),
        }
    }

    /// Return the cached value for `key` if present and not stale; otherwise
    /// run `fetch_fn` exactly once, no matter how many consumers ask
    /// concurrently, and cache its result. Errors settle every waiting consumer and cache
    /// nothing.
    pub async fn fetch<T, F, Fut>(&self, key: &str, fetch_fn: F) -> ClientResult<Arc<T>>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = ClientResult<T>>,
    {
        self.fetch_inner(key, None, fetch_fn).await
    }

    /// Like [`QueryCache::fetch`], but a cached value older than `ttl` counts
    /// as stale even if nothing invalidated it. Used for the current-user
    /// read backing the route guard.
    pub async fn fetch_with_ttl<T, F, Fut>(
        &self,
        key: &str,
        ttl: Duration,
        fetch_fn: F,
    ) -> ClientResult<Arc<T>>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = ClientResult<T>>,
    {
        self.fetch_inner(key, Some(ttl), fetch_fn).await
    }

    async fn fetch_inner<T, F, Fut>(
        &self,
        key: &str,
        ttl: Option<Duration>,
        fetch_fn: F,
    ) -> ClientResult<Arc<T>>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = ClientResult<T>>,
    {
        let plan = {
            let mut slot = self.slots.entry(key.to_string()).or_default();
            if let Some(cached) = &slot.cached
                && !cached.stale
                && ttl.is_none_or(|t| cached.fetched_at.elapsed() <= t)
            {
                Plan::Hit(cached.value.clone())
            } else if let Some(flight) = &slot.flight {
                Plan::Join(flight.done.subscribe())
            } else {
                slot.next_ticket += 1;
                let (done, _) = broadcast::channel(1);
                slot.flight = Some(Flight {
                    ticket: slot.next_ticket,
                    done: done.clone(),
                });
                Plan::Lead {
                    ticket: slot.next_ticket,
                    done,
                }
            }
            // entry guard drops here; nothing is held across an await
        };

        match plan {
            Plan::Hit(stored) => downcast(stored),
            Plan::Join(mut rx) => match rx.recv().await {
                Ok(Ok(stored)) => downcast(stored),
                Ok(Err(e)) => Err(e),
                Err(_) => Err(ClientError::Transport(
                    "coalesced request abandoned before completion".into(),
                )),
            },
            Plan::Lead { ticket, done } => {
                let mut guard = LeadGuard {
                    cache: self,
                    key: key.to_string(),
                    ticket,
                    armed: true,
                };
                let result = fetch_fn().await;
                guard.armed = false;

                let settled = result.map(|value| Arc::new(value) as Stored);
                match self.settle(key, ticket, done, settled) {
                    Ok(stored) => downcast(stored),
                    Err(e) => Err(e),
                }
            }
        }
    }

    /// Apply a settled request and wake every coalesced waiter with the same
    /// outcome. Results that lost the ordering race are not applied; the
    /// fresher cached value is handed out instead.
    fn settle(
        &self,
        key: &str,
        ticket: u64,
        done: broadcast::Sender<Settled>,
        settled: Settled,
    ) -> Settled {
        let mut slot = self.slots.entry(key.to_string()).or_default();
        if slot.flight.as_ref().is_some_and(|f| f.ticket == ticket) {
            slot.flight = None;
        }

        let outcome = match settled {
            Ok(stored) => {
                if ticket > slot.applied {
                    slot.applied = ticket;
                    slot.cached = Some(CachedValue {
                        value: stored.clone(),
                        stale: false,
                        fetched_at: Instant::now(),
                    });
                    Ok(stored)
                } else {
                    tracing::debug!(key, "discarding out-of-order response");
                    match &slot.cached {
                        Some(cached) => Ok(cached.value.clone()),
                        None => Ok(stored),
                    }
                }
            }
            Err(e) => Err(e),
        };

        let _ = done.send(outcome.clone());
        outcome
    }

    /// Last cached value for `key`, stale or not. This is the
    /// stale-while-revalidate read used to keep rendering while a refetch is
    /// in flight.
    pub fn get_cached<T: Send + Sync + 'static>(&self, key: &str) -> Option<Arc<T>> {
        let slot = self.slots.get(key)?;
        let cached = slot.cached.as_ref()?;
        downcast(cached.value.clone()).ok()
    }

    /// Whether a request for `key` is currently in flight.
    pub fn is_loading(&self, key: &str) -> bool {
        self.slots
            .get(key)
            .is_some_and(|slot| slot.flight.is_some())
    }

    /// Whether the entry for `key` is present but marked stale.
    pub fn is_stale(&self, key: &str) -> bool {
        self.slots
            .get(key)
            .and_then(|slot| slot.cached.as_ref().map(|c| c.stale))
            .unwrap_or(false)
    }

    /// Mark one entry stale; the next fetch for it goes to the network.
    pub fn invalidate(&self, key: &str) {
        if let Some(mut slot) = self.slots.get_mut(key)
            && let Some(cached) = slot.cached.as_mut()
        {
            cached.stale = true;
        }
    }

    /// Mark every entry whose key starts with `prefix` stale. Writes use
    /// this with the resource prefix: deliberately broad, trading redundant
    /// refetches for guaranteed consistency across views.
    pub fn invalidate_prefix(&self, prefix: &str) {
        let mut hit = 0usize;
        for mut item in self.slots.iter_mut() {
            if item.key().starts_with(prefix)
                && let Some(cached) = item.value_mut().cached.as_mut()
            {
                cached.stale = true;
                hit += 1;
            }
        }
        tracing::debug!(prefix, entries = hit, "invalidated cache prefix");
    }

    /// Replace the entry for `key` with a fresh value, marking it current.
    /// Consumes a ticket, so any read already in flight for the same key is
    /// discarded when it lands: the overwrite wins.
    pub fn overwrite<T: Send + Sync + 'static>(&self, key: &str, value: T) {
        let mut slot = self.slots.entry(key.to_string()).or_default();
        slot.next_ticket += 1;
        slot.applied = slot.next_ticket;
        slot.cached = Some(CachedValue {
            value: Arc::new(value),
            stale: false,
            fetched_at: Instant::now(),
        });
    }

    /// Drop the entry for `key` entirely.
    pub fn remove(&self, key: &str) {
        self.slots.remove(key);
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.slots.clear();
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for QueryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryCache")
            .field("entries", &self.slots.len())
            .finish()
    }
}

fn downcast<T: Send + Sync + 'static>(stored: Stored) -> ClientResult<Arc<T>> {
    stored
        .downcast::<T>()
        .map_err(|_| ClientError::InvalidResponse("cached value has unexpected type".into()))
}

/// Settles an abandoned in-flight request so coalesced waiters are not left
/// hanging if the leading future is dropped mid-fetch.
struct LeadGuard<'a> {
    cache: &'a QueryCache,
    key: String,
    ticket: u64,
    armed: bool,
}

impl Drop for LeadGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Some(mut slot) = self.cache.slots.get_mut(&self.key)
            && slot.flight.as_ref().is_some_and(|f| f.ticket == self.ticket)
            && let Some(flight) = slot.flight.take()
        {
            let _ = flight.done.send(Err(ClientError::Transport(
                "request abandoned before completion".into(),
            )));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::{sleep, Duration};

    #[tokio::test]
    async fn concurrent_reads_of_one_key_coalesce() {
        let cache = Arc::new(QueryCache::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..5 {
            let cache = cache.clone();
            let calls = calls.clone();
            handles.push(tokio::spawn(async move {
                cache
                    .fetch("partners", move || async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        sleep(Duration::from_millis(50)).await;
                        Ok(41usize)
                    })
                    .await
            }));
        }

        for handle in handles {
            let value = handle.await.unwrap().unwrap();
            assert_eq!(*value, 41);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn prefix_invalidation_forces_refetch() {
        let cache = QueryCache::new();
        let calls = AtomicUsize::new(0);
        let calls = &calls;

        for key in ["reports-ua", "reports-en", "stats"] {
            cache
                .fetch(key, move || async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(key.len())
                })
                .await
                .unwrap();
        }
        assert_eq!(calls.load(Ordering::SeqCst), 3);

        cache.invalidate_prefix("reports");
        assert!(cache.is_stale("reports-ua"));
        assert!(cache.is_stale("reports-en"));
        assert!(!cache.is_stale("stats"));

        cache
            .fetch("reports-ua", move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(0usize)
            })
            .await
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 4);

        // untouched entries still serve from cache
        cache
            .fetch("stats", move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(0usize)
            })
            .await
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn overwrite_beats_in_flight_read() {
        let cache = Arc::new(QueryCache::new());

        let reader = {
            let cache = cache.clone();
            tokio::spawn(async move {
                cache
                    .fetch("merch-en", || async {
                        sleep(Duration::from_millis(150)).await;
                        Ok("from-network".to_string())
                    })
                    .await
            })
        };

        sleep(Duration::from_millis(40)).await;
        assert!(cache.is_loading("merch-en"));
        cache.overwrite("merch-en", "from-mutation".to_string());

        let seen = reader.await.unwrap().unwrap();
        assert_eq!(*seen, "from-mutation");
        assert_eq!(
            cache.get_cached::<String>("merch-en").as_deref(),
            Some(&"from-mutation".to_string())
        );
    }

    #[tokio::test]
    async fn failures_settle_all_waiters_and_cache_nothing() {
        let cache = Arc::new(QueryCache::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..3 {
            let cache = cache.clone();
            let calls = calls.clone();
            handles.push(tokio::spawn(async move {
                cache
                    .fetch::<usize, _, _>("stats", move || async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        sleep(Duration::from_millis(30)).await;
                        Err(ClientError::Server {
                            status: 500,
                            message: "boom".into(),
                        })
                    })
                    .await
            }));
        }

        for handle in handles {
            assert!(handle.await.unwrap().is_err());
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(cache.get_cached::<usize>("stats").is_none());

        // the error was not cached; the next read goes out again
        let calls = &calls;
        let value = cache
            .fetch("stats", move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(7usize)
            })
            .await
            .unwrap();
        assert_eq!(*value, 7);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn loading_flag_tracks_the_flight() {
        let cache = Arc::new(QueryCache::new());
        assert!(!cache.is_loading("partners"));

        let reader = {
            let cache = cache.clone();
            tokio::spawn(async move {
                cache
                    .fetch("partners", || async {
                        sleep(Duration::from_millis(100)).await;
                        Ok(1usize)
                    })
                    .await
            })
        };

        sleep(Duration::from_millis(30)).await;
        assert!(cache.is_loading("partners"));
        reader.await.unwrap().unwrap();
        assert!(!cache.is_loading("partners"));
    }

    #[tokio::test]
    async fn stale_value_stays_readable_while_refetching() {
        let cache = Arc::new(QueryCache::new());
        cache
            .fetch("teammates-ua", || async { Ok(String::from("old")) })
            .await
            .unwrap();
        cache.invalidate("teammates-ua");

        let reader = {
            let cache = cache.clone();
            tokio::spawn(async move {
                cache
                    .fetch("teammates-ua", || async {
                        sleep(Duration::from_millis(100)).await;
                        Ok(String::from("new"))
                    })
                    .await
            })
        };

        sleep(Duration::from_millis(30)).await;
        assert_eq!(
            cache.get_cached::<String>("teammates-ua").as_deref(),
            Some(&"old".to_string())
        );
        let fresh = reader.await.unwrap().unwrap();
        assert_eq!(*fresh, "new");
    }

    #[tokio::test]
    async fn ttl_bounds_reuse() {
        let cache = QueryCache::new();
        let calls = AtomicUsize::new(0);
        let calls = &calls;

        for _ in 0..2 {
            cache
                .fetch_with_ttl(
                    "auth-current-user",
                    Duration::from_secs(60),
                    move || async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        Ok(1usize)
                    },
                )
                .await
                .unwrap();
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // an expired window forces a fresh round trip
        cache
            .fetch_with_ttl("auth-current-user", Duration::ZERO, move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(1usize)
            })
            .await
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn remove_drops_the_entry() {
        let cache = QueryCache::new();
        cache.overwrite("auth-user-u1", 3usize);
        assert!(cache.get_cached::<usize>("auth-user-u1").is_some());

        cache.remove("auth-user-u1");
        assert!(cache.get_cached::<usize>("auth-user-u1").is_none());
    }
}

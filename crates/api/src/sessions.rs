//! In-memory store of open budget editing sessions.
//!
//! Sessions are dropped after sitting idle for the configured timeout. The store refuses
//! new sessions once it holds the configured maximum.

use mbudget_core::session::BudgetSession;
use mbudget_shared::config::SessionConfig;
use mbudget_shared::types::SessionId;
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::debug;

/// Shared handle to one session. Edits lock it, so a session has one writer at a time.
pub type SharedSession = Arc<Mutex<BudgetSession>>;

/// Open sessions keyed by ID, expiring after a period without access.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Cache<SessionId, SharedSession>,
    max_sessions: u64,
}

impl SessionStore {
    /// Creates an empty store with the configured idle timeout and capacity.
    #[must_use]
    pub fn new(config: &SessionConfig) -> Self {
        Self::with_limits(
            config.max_open_sessions,
            Duration::from_secs(config.idle_timeout_secs),
        )
    }

    /// Creates an empty store.
    ///
    /// # Arguments
    ///
    /// * `max_sessions` - Most sessions held at once
    /// * `idle_timeout` - How long a session survives without being read or written
    #[must_use]
    pub fn with_limits(max_sessions: u64, idle_timeout: Duration) -> Self {
        let sessions = Cache::<SessionId, SharedSession>::builder()
            .time_to_idle(idle_timeout)
            .eviction_listener(|session_id, _, cause| {
                if cause.was_evicted() {
                    debug!(session_id = %session_id, ?cause, "Budget session expired");
                }
            })
            .build();

        Self {
            sessions,
            max_sessions,
        }
    }

    /// Stores a session under a fresh ID.
    ///
    /// Returns `None` when the store is full.
    pub async fn insert(&self, session: BudgetSession) -> Option<SessionId> {
        if self.len().await >= self.max_sessions {
            return None;
        }

        let id = SessionId::new();
        self.sessions
            .insert(id, Arc::new(Mutex::new(session)))
            .await;
        Some(id)
    }

    /// Returns a handle to a session if it is open, and resets its idle timer.
    pub async fn get(&self, id: SessionId) -> Option<SharedSession> {
        self.sessions.get(&id).await
    }

    /// Closes a session. Returns whether it was open.
    pub async fn remove(&self, id: SessionId) -> bool {
        self.sessions.remove(&id).await.is_some()
    }

    /// Number of open sessions, after dropping any that have expired.
    pub async fn len(&self) -> u64 {
        self.sessions.run_pending_tasks().await;
        self.sessions.entry_count()
    }

    /// Whether no sessions are open.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

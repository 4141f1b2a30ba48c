//! Per-session tracking of operations that are still running.
//!
//! A session may run each operation at most once at a time; a second request
//! for the same pair is refused until the first one finishes.

use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Mutex};

use axum::http::HeaderMap;
use tracing::{debug, warn};

use crate::errors::AppError;

pub const SESSION_HEADER: &str = "x-session-id";
const ANONYMOUS_SESSION: &str = "anonymous";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Login,
    JobSearch,
    ResumeGeneration,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Login => "login",
            Operation::JobSearch => "job search",
            Operation::ResumeGeneration => "resume generation",
        };
        f.write_str(name)
    }
}

/// Session identifier taken from the `x-session-id` header.
pub fn session_key(headers: &HeaderMap) -> String {
    headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(ANONYMOUS_SESSION)
        .to_string()
}

type Slot = (String, Operation);

#[derive(Debug, Default, Clone)]
pub struct InFlightRegistry {
    active: Arc<Mutex<HashSet<Slot>>>,
}

impl InFlightRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `operation` as running for `session`.
    ///
    /// Returns `AppError::Busy` when the pair is already running. The slot is
    /// released when the returned guard drops, including on early return.
    pub fn try_begin(
        &self,
        session: impl Into<String>,
        operation: Operation,
    ) -> Result<InFlightGuard, AppError> {
        let slot = (session.into(), operation);
        let mut active = self
            .active
            .lock()
            .map_err(|_| AppError::Internal(anyhow::anyhow!("in-flight registry poisoned")))?;

        if !active.insert(slot.clone()) {
            warn!("Rejected re-entrant {} for session {}", operation, slot.0);
            return Err(AppError::Busy(format!(
                "A {operation} request is already running for this session"
            )));
        }

        debug!("{} started for session {}", operation, slot.0);
        Ok(InFlightGuard {
            registry: self.active.clone(),
            slot: Some(slot),
        })
    }

    #[cfg(test)]
    pub fn is_running(&self, session: &str, operation: Operation) -> bool {
        self.active
            .lock()
            .map(|active| active.contains(&(session.to_string(), operation)))
            .unwrap_or(false)
    }
}

pub struct InFlightGuard {
    registry: Arc<Mutex<HashSet<Slot>>>,
    slot: Option<Slot>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        if let Some(slot) = self.slot.take() {
            if let Ok(mut active) = self.registry.lock() {
                active.remove(&slot);
            }
        }
    }
}

//! Per-user session state: who is logged in, which sample is loaded, and the
//! question history.
//!
//! Questions go through a single-flight coordinator. A new submission
//! supersedes any pending one, so only the latest question's answer is ever
//! recorded.

use crate::error::SoilError;
use crate::model::SoilRecord;
use crate::report::{analyze, QueryResult};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

/// Default artificial answer latency.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub name: String,
    pub role: String,
}

/// Handle for a submitted question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RequestId(u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub question: String,
    pub result: QueryResult,
    pub timestamp: DateTime<Local>,
}

#[derive(Debug, Default)]
struct SessionState {
    user: Option<User>,
    record: Option<SoilRecord>,
    next_id: u64,
    pending: Option<(RequestId, String)>,
    history: Vec<HistoryEntry>,
}

/// Explicit session context. Methods take `&self` so a session can be shared
/// between the thread reading input and the threads waiting on answers.
#[derive(Debug, Default)]
pub struct Session {
    state: Mutex<SessionState>,
}

impl Session {
    pub fn new() -> Session {
        debug!("session started");
        Session::default()
    }

    /// Tear the session down, returning the history (oldest first).
    pub fn end(self) -> Vec<HistoryEntry> {
        let state = self.state.into_inner().unwrap_or_else(PoisonError::into_inner);
        debug!(entries = state.history.len(), "session ended");
        state.history
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn login(&self, name: &str) -> Result<User, SoilError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SoilError::InvalidInput("Name must not be empty".to_string()));
        }
        let user = User {
            name: name.to_string(),
            role: "user".to_string(),
        };
        info!(user = %user.name, "logged in");
        self.lock().user = Some(user.clone());
        Ok(user)
    }

    pub fn logout(&self) -> Result<User, SoilError> {
        let user = self.lock().user.take().ok_or(SoilError::NotLoggedIn)?;
        info!(user = %user.name, "logged out");
        Ok(user)
    }

    pub fn user(&self) -> Option<User> {
        self.lock().user.clone()
    }

    /// Replace the current sample. History is kept.
    pub fn load_record(&self, record: SoilRecord) {
        debug!(sample_id = record.sample_id(), "record loaded");
        self.lock().record = Some(record);
    }

    /// Queue a question. Returns `Ok(None)` for blank questions.
    pub fn submit(&self, query: &str) -> Result<Option<RequestId>, SoilError> {
        if query.trim().is_empty() {
            return Ok(None);
        }
        let mut state = self.lock();
        if state.record.is_none() {
            return Err(SoilError::NoSoilData);
        }
        state.next_id += 1;
        let id = RequestId(state.next_id);
        if let Some((old, _)) = state.pending.replace((id, query.to_string())) {
            debug!(superseded = %old, by = %id, "pending question superseded");
        }
        Ok(Some(id))
    }

    /// Answer a submitted question if it is still the latest one.
    pub fn complete(&self, id: RequestId) -> Result<Option<QueryResult>, SoilError> {
        let mut state = self.lock();
        let is_latest = matches!(&state.pending, Some((pending, _)) if *pending == id);
        if !is_latest {
            debug!(request = %id, "dropping superseded answer");
            return Ok(None);
        }
        let Some((_, question)) = state.pending.take() else {
            return Ok(None);
        };
        let record = state.record.as_ref().ok_or(SoilError::NoSoilData)?;
        let result = analyze(record, &question);
        debug!(request = %id, topic = %result.topic, "question answered");
        state.history.push(HistoryEntry {
            question,
            result: result.clone(),
            timestamp: Local::now(),
        });
        Ok(Some(result))
    }

    /// Submit, wait out the latency, then complete.
    pub fn ask(&self, query: &str, delay: Duration) -> Result<Option<QueryResult>, SoilError> {
        let Some(id) = self.submit(query)? else {
            return Ok(None);
        };
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        self.complete(id)
    }

    /// Question history, newest first.
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.lock().history.iter().rev().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Topic;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn record(id: &str) -> SoilRecord {
        SoilRecord::new(id, dec!(50), dec!(30), dec!(40), dec!(6.5), dec!(35))
    }

    fn loaded() -> Session {
        let session = Session::new();
        session.load_record(record("S1"));
        session
    }

    #[test]
    fn test_login_logout() {
        let session = Session::new();
        assert!(session.user().is_none());
        let user = session.login("  Ana ").unwrap();
        assert_eq!(user.name, "Ana");
        assert_eq!(user.role, "user");
        assert_eq!(session.user(), Some(user));
        session.logout().unwrap();
        assert!(session.user().is_none());
        assert!(matches!(session.logout(), Err(SoilError::NotLoggedIn)));
    }

    #[test]
    fn test_login_rejects_blank_name() {
        let session = Session::new();
        assert!(matches!(session.login("   "), Err(SoilError::InvalidInput(_))));
    }

    #[test]
    fn test_ask_without_record() {
        let session = Session::new();
        let err = session.ask("tomato?", Duration::ZERO).unwrap_err();
        assert!(matches!(err, SoilError::NoSoilData));
    }

    #[test]
    fn test_blank_query_ignored() {
        let session = loaded();
        assert_eq!(session.ask("   ", Duration::ZERO).unwrap(), None);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_ask_records_history_newest_first() {
        let session = loaded();
        session.ask("tomatoes?", Duration::ZERO).unwrap();
        session.ask("beans?", Duration::ZERO).unwrap();
        let history = session.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].question, "beans?");
        assert_eq!(history[0].result.topic, Topic::Bean);
        assert_eq!(history[1].result.topic, Topic::Tomato);
    }

    #[test]
    fn test_superseded_request_not_recorded() {
        let session = loaded();
        let first = session.submit("tomatoes?").unwrap().unwrap();
        let second = session.submit("carrots?").unwrap().unwrap();
        assert_eq!(session.complete(first).unwrap(), None);
        let answer = session.complete(second).unwrap().unwrap();
        assert_eq!(answer.topic, Topic::Carrot);
        assert_eq!(session.history().len(), 1);
        // Completing twice does not duplicate the entry.
        assert_eq!(session.complete(second).unwrap(), None);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_concurrent_asks_keep_only_latest() {
        let session = Arc::new(loaded());
        let slow = {
            let session = Arc::clone(&session);
            thread::spawn(move || session.ask("tomatoes?", Duration::from_millis(200)))
        };
        thread::sleep(Duration::from_millis(50));
        let fast = session.ask("moisture?", Duration::ZERO).unwrap();
        let slow = slow.join().unwrap().unwrap();
        assert_eq!(slow, None);
        assert_eq!(fast.unwrap().topic, Topic::Moisture);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_new_record_keeps_history() {
        let session = loaded();
        session.ask("general", Duration::ZERO).unwrap();
        session.load_record(record("S2"));
        let answer = session.ask("general", Duration::ZERO).unwrap().unwrap();
        assert_eq!(answer.sample_id, "S2");
        let entries = session.end();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].result.sample_id, "S1");
    }
}

//! Explicit session-id to session mapping

use std::collections::HashMap;
use std::fmt;
use tracing::{debug, info};
use uuid::Uuid;

use crate::task::{apply, Notice, TaskAction, TaskSequence};

/// Opaque session identifier (a v4 UUID)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s.trim()).ok().map(Self)
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One user's task list plus the banner waiting to be shown.
#[derive(Debug, Default, Clone)]
pub struct Session {
    pub tasks: TaskSequence,
    notice: Option<Notice>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action and keep its notice for the next render.
    pub fn run(&mut self, action: TaskAction) -> &Notice {
        let notice = apply(&mut self.tasks, action);
        self.notice.insert(notice)
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Take the pending notice; a flash message is shown once.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }
}

struct Entry {
    session: Session,
    last_used: u64,
}

/// Sessions keyed by id. Sessions are created lazily and never shared.
pub struct SessionStore {
    sessions: HashMap<SessionId, Entry>,
    max_sessions: usize,
    clock: u64,
}

impl SessionStore {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: HashMap::new(),
            max_sessions: max_sessions.max(1),
            clock: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn contains(&self, id: &SessionId) -> bool {
        self.sessions.contains_key(id)
    }

    pub fn get(&self, id: &SessionId) -> Option<&Session> {
        self.sessions.get(id).map(|entry| &entry.session)
    }

    /// The session for `id`, created empty on first access.
    pub fn get_or_create(&mut self, id: SessionId) -> &mut Session {
        self.clock += 1;
        let now = self.clock;

        if !self.sessions.contains_key(&id) {
            if self.sessions.len() >= self.max_sessions {
                self.evict_least_recent();
            }
            debug!(session = %id, "creating session");
        }

        let entry = self.sessions.entry(id).or_insert_with(|| Entry {
            session: Session::new(),
            last_used: now,
        });
        entry.last_used = now;
        &mut entry.session
    }

    /// Drop a session and its task list.
    pub fn end(&mut self, id: &SessionId) -> bool {
        self.sessions.remove(id).is_some()
    }

    fn evict_least_recent(&mut self) {
        let oldest = self
            .sessions
            .iter()
            .min_by_key(|(_, entry)| entry.last_used)
            .map(|(id, _)| *id);
        if let Some(id) = oldest {
            info!(session = %id, "evicting least recently used session");
            self.sessions.remove(&id);
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(crate::session::ServerConfig::default().max_sessions)
    }
}

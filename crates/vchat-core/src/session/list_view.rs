//! Sorted session projection.

use super::model::Session;

/// Projects a session collection into newest-first order.
pub struct SessionListView;

impl SessionListView {
    /// Returns a copy of `sessions` sorted by `created_at` descending.
    ///
    /// The sort is stable, so sessions with equal timestamps keep their
    /// relative order. The input is left untouched.
    pub fn project(sessions: &[Session]) -> Vec<Session> {
        let mut sorted = sessions.to_vec();
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        sorted
    }
}

/// A session collection together with its sorted projection.
///
/// Every mutation recomputes the projection, so [`SessionList::sorted`] is
/// never stale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionList {
    sessions: Vec<Session>,
    sorted: Vec<Session>,
}

impl SessionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_sessions(sessions: Vec<Session>) -> Self {
        let mut list = Self::new();
        list.replace(sessions);
        list
    }

    /// Replaces the whole collection.
    pub fn replace(&mut self, sessions: Vec<Session>) {
        self.sessions = sessions;
        self.recompute();
    }

    pub fn push(&mut self, session: Session) {
        self.sessions.push(session);
        self.recompute();
    }

    /// Removes every session with `session_id`. Returns whether any was removed.
    pub fn remove(&mut self, session_id: &str) -> bool {
        let before = self.sessions.len();
        self.sessions.retain(|s| s.id != session_id);
        let removed = self.sessions.len() != before;
        if removed {
            self.recompute();
        }
        removed
    }

    /// The collection in insertion order.
    pub fn source(&self) -> &[Session] {
        &self.sessions
    }

    /// The collection newest first.
    pub fn sorted(&self) -> &[Session] {
        &self.sorted
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn recompute(&mut self) {
        self.sorted = SessionListView::project(&self.sessions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sessions(created: &[i64]) -> Vec<Session> {
        created
            .iter()
            .enumerate()
            .map(|(i, ts)| Session::new(format!("s-{i}")).with_created_at(*ts))
            .collect()
    }

    fn timestamps(sessions: &[Session]) -> Vec<i64> {
        sessions.iter().map(|s| s.created_at).collect()
    }

    #[test]
    fn test_project_sorts_newest_first() {
        let source = sessions(&[5, 1, 9, 3]);
        let projected = SessionListView::project(&source);
        assert_eq!(timestamps(&projected), vec![9, 5, 3, 1]);
        // Source untouched
        assert_eq!(timestamps(&source), vec![5, 1, 9, 3]);
    }

    #[test]
    fn test_project_is_stable_for_ties() {
        let source = sessions(&[2, 7, 2, 7]);
        let projected = SessionListView::project(&source);
        let ids: Vec<&str> = projected.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["s-1", "s-3", "s-0", "s-2"]);
    }

    #[test]
    fn test_project_empty() {
        assert!(SessionListView::project(&[]).is_empty());
    }

    #[test]
    fn test_session_list_recomputes_on_change() {
        let mut list = SessionList::from_sessions(sessions(&[5, 1]));
        assert_eq!(timestamps(list.sorted()), vec![5, 1]);

        list.push(Session::new("late").with_created_at(9));
        assert_eq!(timestamps(list.sorted()), vec![9, 5, 1]);

        assert!(list.remove("s-0"));
        assert_eq!(timestamps(list.sorted()), vec![9, 1]);
        assert!(!list.remove("missing"));

        list.replace(sessions(&[3]));
        assert_eq!(timestamps(list.sorted()), vec![3]);
        assert_eq!(list.len(), 1);
    }
}

use shared::models::UserRecord;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct SnapshotState {
    users: Vec<UserRecord>,
    fresh: bool,
}

/// Last successful "list all" result, shared by every screen.
///
/// The cache is only ever replaced wholesale or invalidated. Mutations never
/// patch it in place, so whatever [`ListSnapshot::current`] returns came from
/// one server response.
#[derive(Debug, Clone, Default)]
pub struct ListSnapshot(Rc<RefCell<SnapshotState>>);

impl ListSnapshot {
    pub fn replace(&self, users: Vec<UserRecord>) {
        let mut state = self.0.borrow_mut();
        state.users = users;
        state.fresh = true;
    }

    /// Mark the cache stale after a mutation. Readers must re-fetch.
    pub fn invalidate(&self) {
        let mut state = self.0.borrow_mut();
        state.users.clear();
        state.fresh = false;
    }

    /// The cached list, unless it has been invalidated or never filled.
    pub fn current(&self) -> Option<Vec<UserRecord>> {
        let state = self.0.borrow();
        state.fresh.then(|| state.users.clone())
    }

    #[cfg(test)]
    pub fn is_stale(&self) -> bool {
        !self.0.borrow().fresh
    }
}

impl PartialEq for ListSnapshot {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

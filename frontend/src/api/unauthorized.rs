use std::{cell::RefCell, rc::Rc};

use log::warn;

use crate::{state::session::SessionStore, utils::storage as storage_utils};

type Listener = Rc<dyn Fn()>;

/// What happens when the backend answers 401: the session is dropped and
/// every subscriber is told. Navigation is a subscriber, not a transport
/// concern.
#[derive(Clone, Default)]
pub struct UnauthorizedPolicy {
    listeners: Rc<RefCell<Vec<Listener>>>,
}

impl UnauthorizedPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl Fn() + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn apply(&self, session: &SessionStore) {
        warn!("Received 401 from backend, clearing session");
        session.clear();
        // Snapshot so a listener may subscribe again without a borrow panic.
        let listeners: Vec<Listener> = self.listeners.borrow().clone();
        for listener in listeners {
            listener();
        }
    }
}

/// Browser subscriber used by the app root.
pub fn redirect_to_login_if_needed() {
    if storage_utils::current_pathname().as_deref() == Some("/login") {
        return;
    }
    storage_utils::navigate_to("/login");
}

//! Popup message dialogs.
//!
//! An alert has a single outcome: the dialog was acknowledged. A disabled
//! alert therefore resolves right away, while a missing implementation is a
//! startup-sequencing bug reported synchronously by [`Alert::show`].

use crate::{
    constants::facade_names::ALERT,
    error::Result,
    facade::{Dispatch, FacadeState},
    interface::{resolved, AlertImpl, Completion},
    loading::Loading,
    types::MessageType,
};
use std::{
    ops::Deref,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

pub struct Alert {
    state: FacadeState<dyn AlertImpl>,
    debug_enabled: AtomicBool,
    loading: Arc<Loading>,
}

impl Alert {
    pub fn new(loading: Arc<Loading>) -> Self {
        Self {
            state: FacadeState::new(ALERT, "AlertImpl"),
            debug_enabled: AtomicBool::new(false),
            loading,
        }
    }

    /// Shortcut for registering a concrete renderer.
    pub fn set_impl<T: AlertImpl + 'static>(&self, implementation: T) {
        self.state.set_implementation(Arc::new(implementation));
    }

    pub fn enable_debug(&self) {
        self.debug_enabled.store(true, Ordering::Relaxed);
    }

    pub fn disable_debug(&self) {
        self.debug_enabled.store(false, Ordering::Relaxed);
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.debug_enabled.load(Ordering::Relaxed)
    }

    /// Shows a dialog and returns the completion of the implementation.
    ///
    /// Clears the loading overlay first. Returns an already resolved
    /// completion while disabled.
    ///
    /// # Errors
    /// * `MissingImplementation` when nothing is registered on this facade or
    ///   on the loading overlay.
    pub fn show(&self, kind: MessageType, title: &str, message: &str) -> Result<Completion<()>> {
        match self.state.dispatch(&self.loading, &kind, message)? {
            Dispatch::Suppressed => Ok(resolved(())),
            Dispatch::Deliver(implementation) => Ok(implementation.show(&kind, title, message)),
        }
    }

    pub fn info(&self, title: &str, message: &str) -> Result<Completion<()>> {
        self.show(MessageType::Info, title, message)
    }

    pub fn warn(&self, title: &str, message: &str) -> Result<Completion<()>> {
        self.show(MessageType::Warn, title, message)
    }

    pub fn error(&self, title: &str, message: &str) -> Result<Completion<()>> {
        self.show(MessageType::Error, title, message)
    }

    pub fn success(&self, title: &str, message: &str) -> Result<Completion<()>> {
        self.show(MessageType::Success, title, message)
    }

    /// Shows a debug dialog titled with the localized debug label, only while
    /// debug mode is on.
    pub fn debug(&self, message: &str) -> Result<Completion<()>> {
        if !self.is_debug_enabled() {
            return Ok(resolved(()));
        }
        let title = self.state.labels().debug_title;
        self.show(MessageType::Debug, &title, message)
    }
}

impl Deref for Alert {
    type Target = FacadeState<dyn AlertImpl>;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

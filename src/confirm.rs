//! OK/Cancel dialogs.
//!
//! Acceptance resolves the completion; cancellation rejects it with whatever
//! error the implementation supplies. Every failure of the facade itself
//! (disabled, nothing registered, loading overlay unregistered) is also
//! delivered through the returned completion so call sites handle one path.

use crate::{
    constants::facade_names::CONFIRM,
    error::Error,
    facade::{Dispatch, FacadeState},
    interface::{rejected, Completion, ConfirmImpl},
    loading::Loading,
    locale::Buttons,
    types::MessageType,
};
use std::{ops::Deref, sync::Arc};

pub struct Confirm {
    state: FacadeState<dyn ConfirmImpl>,
    loading: Arc<Loading>,
}

impl Confirm {
    pub fn new(loading: Arc<Loading>) -> Self {
        Self {
            state: FacadeState::new(CONFIRM, "ConfirmImpl"),
            loading,
        }
    }

    /// Shortcut for registering a concrete renderer.
    pub fn set_impl<T: ConfirmImpl + 'static>(&self, implementation: T) {
        self.state.set_implementation(Arc::new(implementation));
    }

    /// Shows a confirmation dialog.
    ///
    /// `buttons` defaults to the localized OK/Cancel labels.
    pub fn show(
        &self,
        kind: MessageType,
        title: &str,
        message: &str,
        buttons: Option<Buttons>,
    ) -> Completion<()> {
        match self.state.dispatch(&self.loading, &kind, message) {
            Ok(Dispatch::Deliver(implementation)) => {
                let buttons = buttons.unwrap_or_else(|| self.state.labels().buttons());
                implementation.show(&kind, title, message, &buttons)
            }
            Ok(Dispatch::Suppressed) => rejected(Error::FeatureDisabled { facade: CONFIRM }),
            Err(err) => rejected(err),
        }
    }

    pub fn info(
        &self,
        title: &str,
        message: &str,
        buttons: Option<Buttons>,
    ) -> Completion<()> {
        self.show(MessageType::Info, title, message, buttons)
    }

    pub fn warn(
        &self,
        title: &str,
        message: &str,
        buttons: Option<Buttons>,
    ) -> Completion<()> {
        self.show(MessageType::Warn, title, message, buttons)
    }

    pub fn error(
        &self,
        title: &str,
        message: &str,
        buttons: Option<Buttons>,
    ) -> Completion<()> {
        self.show(MessageType::Error, title, message, buttons)
    }

    pub fn success(
        &self,
        title: &str,
        message: &str,
        buttons: Option<Buttons>,
    ) -> Completion<()> {
        self.show(MessageType::Success, title, message, buttons)
    }
}

impl Deref for Confirm {
    type Target = FacadeState<dyn ConfirmImpl>;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

//! Text input dialogs.
//!
//! Same dispatch rules as confirm; acceptance resolves with the entered text.

use crate::{
    constants::facade_names::PROMPT,
    error::Error,
    facade::{Dispatch, FacadeState},
    interface::{rejected, Completion, PromptImpl},
    loading::Loading,
    locale::Buttons,
    types::MessageType,
};
use std::{ops::Deref, sync::Arc};

pub struct Prompt {
    state: FacadeState<dyn PromptImpl>,
    loading: Arc<Loading>,
}

impl Prompt {
    pub fn new(loading: Arc<Loading>) -> Self {
        Self {
            state: FacadeState::new(PROMPT, "PromptImpl"),
            loading,
        }
    }

    /// Shortcut for registering a concrete renderer.
    pub fn set_impl<T: PromptImpl + 'static>(&self, implementation: T) {
        self.state.set_implementation(Arc::new(implementation));
    }

    /// Asks the user for a line of text.
    ///
    /// `buttons` defaults to the localized OK/Cancel labels.
    pub fn show(
        &self,
        kind: MessageType,
        title: &str,
        message: &str,
        buttons: Option<Buttons>,
    ) -> Completion<String> {
        match self.state.dispatch(&self.loading, &kind, message) {
            Ok(Dispatch::Deliver(implementation)) => {
                let buttons = buttons.unwrap_or_else(|| self.state.labels().buttons());
                implementation.show(&kind, title, message, &buttons)
            }
            Ok(Dispatch::Suppressed) => rejected(Error::FeatureDisabled { facade: PROMPT }),
            Err(err) => rejected(err),
        }
    }

    pub fn info(
        &self,
        title: &str,
        message: &str,
        buttons: Option<Buttons>,
    ) -> Completion<String> {
        self.show(MessageType::Info, title, message, buttons)
    }

    pub fn warn(
        &self,
        title: &str,
        message: &str,
        buttons: Option<Buttons>,
    ) -> Completion<String> {
        self.show(MessageType::Warn, title, message, buttons)
    }

    pub fn error(
        &self,
        title: &str,
        message: &str,
        buttons: Option<Buttons>,
    ) -> Completion<String> {
        self.show(MessageType::Error, title, message, buttons)
    }

    pub fn success(
        &self,
        title: &str,
        message: &str,
        buttons: Option<Buttons>,
    ) -> Completion<String> {
        self.show(MessageType::Success, title, message, buttons)
    }
}

impl Deref for Prompt {
    type Target = FacadeState<dyn PromptImpl>;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

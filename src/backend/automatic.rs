//! Scripted backend that answers dialogs without user interaction
//!
//! Useful for automation, headless runs and tests: every dialog settles
//! immediately with a predefined answer, and every presentation is recorded
//! in order so callers can inspect what would have been shown.

use crate::{
    error::Error,
    interface::{
        rejected, resolved, AlertImpl, Completion, ConfirmImpl, LoadingImpl, NotifyConfig,
        NotifyImpl, PromptImpl,
    },
    locale::Buttons,
    types::{MessageType, Position},
};
use std::{
    collections::HashMap,
    sync::{Mutex, PoisonError},
    time::Duration,
};

/// One recorded presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    Alert {
        kind: MessageType,
        title: String,
        message: String,
    },
    Confirm {
        kind: MessageType,
        title: String,
        message: String,
        buttons: Buttons,
        accepted: bool,
    },
    Prompt {
        kind: MessageType,
        title: String,
        message: String,
        buttons: Buttons,
        answer: Option<String>,
    },
    Notify {
        kind: MessageType,
        message: String,
        position: Position,
        duration: Duration,
    },
    LoadingShown(String),
    LoadingHidden,
}

/// Automatic backend that gives predefined responses, keyed by dialog title
#[derive(Debug)]
pub struct AutomaticBackend {
    confirmations: HashMap<String, bool>,
    texts: HashMap<String, Option<String>>,
    default_text: String,
    default_confirmation: bool,
    history: Mutex<Vec<Presentation>>,
}

impl AutomaticBackend {
    pub fn new() -> Self {
        Self {
            confirmations: HashMap::new(),
            texts: HashMap::new(),
            default_text: "auto".to_string(),
            default_confirmation: true,
            history: Mutex::new(Vec::new()),
        }
    }

    /// Accept or cancel the confirm dialog with this title
    pub fn with_confirmation(mut self, title: &str, accept: bool) -> Self {
        self.confirmations.insert(title.to_string(), accept);
        self
    }

    /// Answer the prompt dialog with this title
    pub fn with_text(mut self, title: &str, text: &str) -> Self {
        self.texts.insert(title.to_string(), Some(text.to_string()));
        self
    }

    /// Cancel the prompt dialog with this title
    pub fn with_cancelled_prompt(mut self, title: &str) -> Self {
        self.texts.insert(title.to_string(), None);
        self
    }

    /// Set default answers for dialogs without a scripted response
    pub fn with_defaults(mut self, default_text: &str, default_confirmation: bool) -> Self {
        self.default_text = default_text.to_string();
        self.default_confirmation = default_confirmation;
        self
    }

    /// Everything presented so far, oldest first.
    pub fn history(&self) -> Vec<Presentation> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear_history(&self) {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn record(&self, presentation: Presentation) {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(presentation);
    }
}

impl Default for AutomaticBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertImpl for AutomaticBackend {
    fn show(&self, kind: &MessageType, title: &str, message: &str) -> Completion<()> {
        log::info!("Auto-acknowledging alert '{title}'");
        self.record(Presentation::Alert {
            kind: kind.clone(),
            title: title.to_string(),
            message: message.to_string(),
        });
        resolved(())
    }
}

impl ConfirmImpl for AutomaticBackend {
    fn show(
        &self,
        kind: &MessageType,
        title: &str,
        message: &str,
        buttons: &Buttons,
    ) -> Completion<()> {
        let accepted = self
            .confirmations
            .get(title)
            .copied()
            .unwrap_or(self.default_confirmation);
        log::info!(
            "Auto-answering confirm '{title}' with '{}'",
            if accepted { &buttons.ok } else { &buttons.cancel }
        );
        self.record(Presentation::Confirm {
            kind: kind.clone(),
            title: title.to_string(),
            message: message.to_string(),
            buttons: buttons.clone(),
            accepted,
        });
        if accepted {
            resolved(())
        } else {
            rejected(Error::declined(buttons.cancel.clone()))
        }
    }
}

impl PromptImpl for AutomaticBackend {
    fn show(
        &self,
        kind: &MessageType,
        title: &str,
        message: &str,
        buttons: &Buttons,
    ) -> Completion<String> {
        let answer = match self.texts.get(title) {
            Some(scripted) => scripted.clone(),
            None => Some(self.default_text.clone()),
        };
        match &answer {
            Some(text) => log::info!("Auto-answering prompt '{title}' with: '{text}'"),
            None => log::info!("Auto-cancelling prompt '{title}'"),
        }
        self.record(Presentation::Prompt {
            kind: kind.clone(),
            title: title.to_string(),
            message: message.to_string(),
            buttons: buttons.clone(),
            answer: answer.clone(),
        });
        match answer {
            Some(text) => resolved(text),
            None => rejected(Error::declined(buttons.cancel.clone())),
        }
    }
}

impl NotifyImpl for AutomaticBackend {
    fn show(&self, kind: &MessageType, message: &str, config: &NotifyConfig) {
        self.record(Presentation::Notify {
            kind: kind.clone(),
            message: message.to_string(),
            position: config.position,
            duration: config.duration,
        });
    }
}

impl LoadingImpl for AutomaticBackend {
    fn show(&self, message: &str) {
        self.record(Presentation::LoadingShown(message.to_string()));
    }

    fn hide(&self) {
        self.record(Presentation::LoadingHidden);
    }
}

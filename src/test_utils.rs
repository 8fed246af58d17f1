//! Recording implementations shared by the unit tests.

use crate::{
    error::{Error, Result},
    interface::{
        AlertImpl, Completion, ConfirmImpl, LoadingImpl, NotifyConfig, NotifyImpl, PromptImpl,
    },
    locale::Buttons,
    types::MessageType,
};
use futures::{channel::oneshot, FutureExt};
use std::sync::Mutex;

/// Overlay that remembers every message and counts hides.
#[derive(Default)]
pub struct RecordingLoading {
    shown: Mutex<Vec<String>>,
    hides: Mutex<usize>,
}

impl RecordingLoading {
    pub fn shown(&self) -> Vec<String> {
        self.shown.lock().unwrap().clone()
    }

    pub fn hide_count(&self) -> usize {
        *self.hides.lock().unwrap()
    }
}

impl LoadingImpl for RecordingLoading {
    fn show(&self, message: &str) {
        self.shown.lock().unwrap().push(message.to_string());
    }

    fn hide(&self) {
        *self.hides.lock().unwrap() += 1;
    }
}

/// Arguments of one dialog presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogCall {
    pub kind: MessageType,
    pub title: String,
    pub message: String,
    pub buttons: Option<Buttons>,
}

/// Dialog backend whose completions stay pending until the test settles them,
/// like a user who has not clicked yet.
pub struct PendingDialogs<T> {
    calls: Mutex<Vec<DialogCall>>,
    pending: Mutex<Vec<oneshot::Sender<Result<T>>>>,
}

impl<T: Send + 'static> PendingDialogs<T> {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            pending: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<DialogCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Simulates OK on the most recent dialog.
    pub fn resolve_last(&self, value: T) -> bool {
        self.settle_last(Ok(value))
    }

    /// Simulates Cancel on the most recent dialog.
    pub fn reject_last(&self, error: Error) -> bool {
        self.settle_last(Err(error))
    }

    fn settle_last(&self, outcome: Result<T>) -> bool {
        match self.pending.lock().unwrap().pop() {
            Some(sender) => sender.send(outcome).is_ok(),
            None => false,
        }
    }

    fn open(&self, call: DialogCall) -> Completion<T> {
        let (sender, receiver) = oneshot::channel();
        self.calls.lock().unwrap().push(call);
        self.pending.lock().unwrap().push(sender);
        async move {
            match receiver.await {
                Ok(outcome) => outcome,
                Err(_) => Err(Error::declined("dismissed")),
            }
        }
        .boxed()
    }
}

impl AlertImpl for PendingDialogs<()> {
    fn show(&self, kind: &MessageType, title: &str, message: &str) -> Completion<()> {
        self.open(DialogCall {
            kind: kind.clone(),
            title: title.to_string(),
            message: message.to_string(),
            buttons: None,
        })
    }
}

impl ConfirmImpl for PendingDialogs<()> {
    fn show(
        &self,
        kind: &MessageType,
        title: &str,
        message: &str,
        buttons: &Buttons,
    ) -> Completion<()> {
        self.open(DialogCall {
            kind: kind.clone(),
            title: title.to_string(),
            message: message.to_string(),
            buttons: Some(buttons.clone()),
        })
    }
}

impl PromptImpl for PendingDialogs<String> {
    fn show(
        &self,
        kind: &MessageType,
        title: &str,
        message: &str,
        buttons: &Buttons,
    ) -> Completion<String> {
        self.open(DialogCall {
            kind: kind.clone(),
            title: title.to_string(),
            message: message.to_string(),
            buttons: Some(buttons.clone()),
        })
    }
}

/// Notification sink that keeps every delivered notification.
#[derive(Default)]
pub struct RecordingNotify {
    calls: Mutex<Vec<(MessageType, String, NotifyConfig)>>,
}

impl RecordingNotify {
    pub fn calls(&self) -> Vec<(MessageType, String, NotifyConfig)> {
        self.calls.lock().unwrap().clone()
    }
}

impl NotifyImpl for RecordingNotify {
    fn show(&self, kind: &MessageType, message: &str, config: &NotifyConfig) {
        self.calls
            .lock()
            .unwrap()
            .push((kind.clone(), message.to_string(), config.clone()));
    }
}

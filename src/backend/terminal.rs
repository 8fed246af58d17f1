//! Dialoguer-based implementation of the presentation interfaces
//!
//! Dialogs block the calling thread until the user answers and hand back an
//! already settled completion. Notifications and the loading overlay are
//! plain stderr lines.

use crate::{
    error::{Error, Result},
    interface::{
        AlertImpl, Completion, ConfirmImpl, LoadingImpl, NotifyConfig, NotifyImpl, PromptImpl,
    },
    locale::Buttons,
    types::MessageType,
};
use dialoguer::{
    console::{style, StyledObject, Term},
    Input, Select,
};
use futures::future::{self, FutureExt};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex, PoisonError,
};

const OK_INDEX: usize = 0;

/// Terminal implementation of every facade
pub struct TerminalBackend {
    term: Term,
    loading_visible: AtomicBool,
    // Serializes overlay writes so hide only erases the overlay line.
    overlay: Mutex<()>,
}

impl TerminalBackend {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            loading_visible: AtomicBool::new(false),
            overlay: Mutex::new(()),
        }
    }

    fn header(kind: &MessageType, title: &str, message: &str) -> String {
        if message.is_empty() {
            decorate(kind, title).to_string()
        } else {
            format!("{}\n{}", decorate(kind, title), message)
        }
    }

    fn choose(&self, prompt: &str, items: &[&str]) -> Result<Option<usize>> {
        let selection = Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(OK_INDEX)
            .interact_on_opt(&self.term)?;
        Ok(selection)
    }

    /// Runs the OK/Cancel selection; Cancel and Esc both decline.
    fn accept(&self, prompt: &str, buttons: &Buttons) -> Result<()> {
        match self.choose(prompt, &[buttons.ok.as_str(), buttons.cancel.as_str()])? {
            Some(OK_INDEX) => Ok(()),
            Some(_) => Err(Error::declined(buttons.cancel.clone())),
            None => Err(Error::declined("dismissed")),
        }
    }

    fn read_text(&self, prompt: &str) -> Result<String> {
        let text = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text_on(&self.term)?;
        Ok(text)
    }
}

impl Default for TerminalBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn settle<T: Send + 'static>(result: Result<T>) -> Completion<T> {
    future::ready(result).boxed()
}

fn decorate<'a>(kind: &MessageType, text: &'a str) -> StyledObject<&'a str> {
    let styled = style(text).bold();
    match kind {
        MessageType::Warn => styled.yellow(),
        MessageType::Error => styled.red(),
        MessageType::Success => styled.green(),
        MessageType::Debug => styled.magenta(),
        MessageType::Question | MessageType::Info => styled.blue(),
        MessageType::Other(_) => styled.dim(),
    }
}

impl AlertImpl for TerminalBackend {
    fn show(&self, kind: &MessageType, title: &str, message: &str) -> Completion<()> {
        let prompt = Self::header(kind, title, message);
        // A single OK item; Esc acknowledges as well.
        settle(self.choose(&prompt, &["OK"]).map(|_| ()))
    }
}

impl ConfirmImpl for TerminalBackend {
    fn show(
        &self,
        kind: &MessageType,
        title: &str,
        message: &str,
        buttons: &Buttons,
    ) -> Completion<()> {
        let prompt = Self::header(kind, title, message);
        settle(self.accept(&prompt, buttons))
    }
}

impl PromptImpl for TerminalBackend {
    fn show(
        &self,
        kind: &MessageType,
        title: &str,
        message: &str,
        buttons: &Buttons,
    ) -> Completion<String> {
        let result = self
            .read_text(&Self::header(kind, title, message))
            .and_then(|text| self.accept(title, buttons).map(|()| text));
        settle(result)
    }
}

impl NotifyImpl for TerminalBackend {
    fn show(&self, kind: &MessageType, message: &str, config: &NotifyConfig) {
        let mut line = format!("{} {}", decorate(kind, &format!("[{kind}]")), message);
        if let Some(icon) = &config.icon {
            line = format!("{icon} {line}");
        }
        if config.show_detail {
            line.push_str(&format!(" ({})", style(&config.detail_label).underlined()));
        }
        if let Err(err) = self.term.write_line(&line) {
            log::warn!("Failed to write notification: {err}");
        }
    }
}

impl LoadingImpl for TerminalBackend {
    fn show(&self, message: &str) {
        let _guard = self.overlay.lock().unwrap_or_else(PoisonError::into_inner);
        if self.loading_visible.swap(true, Ordering::SeqCst) {
            let _ = self.term.clear_last_lines(1);
        }
        let line = style(message).dim().to_string();
        if let Err(err) = self.term.write_line(&line) {
            log::warn!("Failed to write loading message: {err}");
            self.loading_visible.store(false, Ordering::SeqCst);
        }
    }

    fn hide(&self) {
        let _guard = self.overlay.lock().unwrap_or_else(PoisonError::into_inner);
        if self.loading_visible.swap(false, Ordering::SeqCst) {
            if let Err(err) = self.term.clear_last_lines(1) {
                log::warn!("Failed to clear loading message: {err}");
            }
        }
    }
}

//! Pure interfaces for presentation backends
//!
//! This module defines the capability contract each facade delegates to.
//! These interfaces are independent of any specific UI library: a backend
//! for a terminal, a GUI toolkit or a test harness implements the traits it
//! can render and registers itself on the facades at startup.

use crate::{
    error::{Error, Result},
    locale::Buttons,
    types::{MessageType, Position},
};
use futures::future::{self, BoxFuture, FutureExt};
use std::{fmt, sync::Arc, time::Duration};

/// Eventual answer of a dialog. Implementations resolve it when the end user
/// responds; the facades never poll or time out.
pub type Completion<T> = BoxFuture<'static, Result<T>>;

/// A completion that is already resolved.
pub fn resolved<T: Send + 'static>(value: T) -> Completion<T> {
    future::ready(Ok(value)).boxed()
}

/// A completion that is already rejected.
pub fn rejected<T: Send + 'static>(error: Error) -> Completion<T> {
    future::ready(Err(error)).boxed()
}

/// Zero-argument callback attached to a notification button.
pub type Action = Arc<dyn Fn() + Send + Sync>;

/// An action that does nothing.
pub fn noop() -> Action {
    Arc::new(|| {})
}

/// Per-call notification overrides. Unset fields take the facade defaults.
#[derive(Clone, Default)]
pub struct NotifyOptions {
    pub position: Option<Position>,
    pub duration: Option<Duration>,
    pub icon: Option<String>,
    pub closeable: Option<bool>,
    pub close_action: Option<Action>,
    pub show_detail: Option<bool>,
    pub detail_label: Option<String>,
    pub detail_action: Option<Action>,
}

impl NotifyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Display time; [`Duration::ZERO`] keeps the notification on screen.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn closeable(mut self, closeable: bool) -> Self {
        self.closeable = Some(closeable);
        self
    }

    pub fn on_close(mut self, action: impl Fn() + Send + Sync + 'static) -> Self {
        self.close_action = Some(Arc::new(action));
        self
    }

    /// Shows a detail button with the given label.
    pub fn detail(
        mut self,
        label: impl Into<String>,
        action: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        self.show_detail = Some(true);
        self.detail_label = Some(label.into());
        self.detail_action = Some(Arc::new(action));
        self
    }
}

impl fmt::Debug for NotifyOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotifyOptions")
            .field("position", &self.position)
            .field("duration", &self.duration)
            .field("icon", &self.icon)
            .field("closeable", &self.closeable)
            .field("close_action", &self.close_action.as_ref().map(|_| "<action>"))
            .field("show_detail", &self.show_detail)
            .field("detail_label", &self.detail_label)
            .field("detail_action", &self.detail_action.as_ref().map(|_| "<action>"))
            .finish()
    }
}

/// Fully resolved notification configuration handed to implementations.
///
/// Both actions are always callable, so implementations can invoke them
/// without checking.
#[derive(Clone)]
pub struct NotifyConfig {
    pub position: Position,
    pub duration: Duration,
    pub icon: Option<String>,
    pub closeable: bool,
    pub close_action: Action,
    pub show_detail: bool,
    pub detail_label: String,
    pub detail_action: Action,
}

impl NotifyConfig {
    pub fn is_permanent(&self) -> bool {
        self.duration.is_zero()
    }
}

impl fmt::Debug for NotifyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotifyConfig")
            .field("position", &self.position)
            .field("duration", &self.duration)
            .field("icon", &self.icon)
            .field("closeable", &self.closeable)
            .field("show_detail", &self.show_detail)
            .field("detail_label", &self.detail_label)
            .finish_non_exhaustive()
    }
}

/// Abstract interface for popup message dialogs
pub trait AlertImpl: Send + Sync {
    /// Resolves once the user acknowledges the dialog.
    fn show(&self, kind: &MessageType, title: &str, message: &str) -> Completion<()>;
}

/// Abstract interface for OK/Cancel dialogs
pub trait ConfirmImpl: Send + Sync {
    /// Resolves on OK; rejects (usually with [`Error::Declined`]) on Cancel.
    fn show(
        &self,
        kind: &MessageType,
        title: &str,
        message: &str,
        buttons: &Buttons,
    ) -> Completion<()>;
}

/// Abstract interface for text input dialogs
pub trait PromptImpl: Send + Sync {
    /// Resolves with the entered text on OK; rejects on Cancel.
    fn show(
        &self,
        kind: &MessageType,
        title: &str,
        message: &str,
        buttons: &Buttons,
    ) -> Completion<String>;
}

/// Abstract interface for transient notifications
pub trait NotifyImpl: Send + Sync {
    fn show(&self, kind: &MessageType, message: &str, config: &NotifyConfig);
}

/// Abstract interface for the blocking loading overlay
pub trait LoadingImpl: Send + Sync {
    fn show(&self, message: &str);

    fn hide(&self);
}

/// Combined interface of a backend that renders every facade
pub trait Backend: AlertImpl + ConfirmImpl + PromptImpl + NotifyImpl + LoadingImpl {}

// Blanket implementation for any type that implements all presentation interfaces
impl<T> Backend for T where T: AlertImpl + ConfirmImpl + PromptImpl + NotifyImpl + LoadingImpl {}

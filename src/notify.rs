//! Fire-and-forget notifications.

use crate::{
    constants::{facade_names::NOTIFY, DEFAULT_NOTIFY_DURATION_MS},
    error::Result,
    facade::{Dispatch, FacadeState},
    interface::{noop, NotifyConfig, NotifyImpl, NotifyOptions},
    loading::Loading,
    types::{MessageType, Position},
};
use std::{
    ops::Deref,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, PoisonError, RwLock,
    },
    time::Duration,
};

/// Values used for every option a caller leaves unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyDefaults {
    pub position: Position,
    pub duration: Duration,
    pub closeable: bool,
    pub show_detail: bool,
}

impl Default for NotifyDefaults {
    fn default() -> Self {
        Self {
            position: Position::TopRight,
            duration: Duration::from_millis(DEFAULT_NOTIFY_DURATION_MS),
            closeable: true,
            show_detail: false,
        }
    }
}

impl NotifyDefaults {
    /// Lays per-call options over these defaults. Missing actions become
    /// no-ops so implementations may call them unconditionally.
    pub fn merge(&self, options: NotifyOptions, detail_label: &str) -> NotifyConfig {
        NotifyConfig {
            position: options.position.unwrap_or(self.position),
            duration: options.duration.unwrap_or(self.duration),
            icon: options.icon,
            closeable: options.closeable.unwrap_or(self.closeable),
            close_action: options.close_action.unwrap_or_else(noop),
            show_detail: options.show_detail.unwrap_or(self.show_detail),
            detail_label: options.detail_label.unwrap_or_else(|| detail_label.to_string()),
            detail_action: options.detail_action.unwrap_or_else(noop),
        }
    }
}

pub struct Notify {
    state: FacadeState<dyn NotifyImpl>,
    debug_enabled: AtomicBool,
    defaults: RwLock<NotifyDefaults>,
    loading: Arc<Loading>,
}

impl Notify {
    pub fn new(loading: Arc<Loading>) -> Self {
        Self {
            state: FacadeState::new(NOTIFY, "NotifyImpl"),
            debug_enabled: AtomicBool::new(false),
            defaults: RwLock::new(NotifyDefaults::default()),
            loading,
        }
    }

    /// Shortcut for registering a concrete renderer.
    pub fn set_impl<T: NotifyImpl + 'static>(&self, implementation: T) {
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

    pub fn defaults(&self) -> NotifyDefaults {
        self.defaults
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_defaults(&self, defaults: NotifyDefaults) {
        *self
            .defaults
            .write()
            .unwrap_or_else(PoisonError::into_inner) = defaults;
    }

    /// Shows a notification. Silently returns while disabled.
    ///
    /// # Errors
    /// * `MissingImplementation` when nothing is registered on this facade or
    ///   on the loading overlay.
    pub fn show(&self, kind: MessageType, message: &str, options: NotifyOptions) -> Result<()> {
        if let Dispatch::Deliver(implementation) =
            self.state.dispatch(&self.loading, &kind, message)?
        {
            let config = self.defaults().merge(options, &self.state.labels().detail);
            implementation.show(&kind, message, &config);
        }
        Ok(())
    }

    pub fn info(&self, message: &str, options: NotifyOptions) -> Result<()> {
        self.show(MessageType::Info, message, options)
    }

    pub fn warn(&self, message: &str, options: NotifyOptions) -> Result<()> {
        self.show(MessageType::Warn, message, options)
    }

    pub fn error(&self, message: &str, options: NotifyOptions) -> Result<()> {
        self.show(MessageType::Error, message, options)
    }

    pub fn success(&self, message: &str, options: NotifyOptions) -> Result<()> {
        self.show(MessageType::Success, message, options)
    }

    /// Only reaches the implementation while debug mode is on.
    pub fn debug(&self, message: &str, options: NotifyOptions) -> Result<()> {
        if !self.is_debug_enabled() {
            return Ok(());
        }
        self.show(MessageType::Debug, message, options)
    }
}

impl Deref for Notify {
    type Target = FacadeState<dyn NotifyImpl>;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        locale::{Labels, Locale},
        test_utils::{RecordingLoading, RecordingNotify},
    };
    use std::sync::atomic::AtomicUsize;

    fn fixture() -> (Notify, Arc<RecordingNotify>, Arc<RecordingLoading>) {
        let loading = Arc::new(Loading::new());
        let overlay = Arc::new(RecordingLoading::default());
        loading.set_implementation(overlay.clone());
        let notify = Notify::new(loading);
        let sink = Arc::new(RecordingNotify::default());
        notify.set_implementation(sink.clone());
        (notify, sink, overlay)
    }

    #[test]
    fn show_merges_defaults() {
        let (notify, sink, overlay) = fixture();
        notify
            .show(
                MessageType::Info,
                "Saved",
                NotifyOptions::new().duration(Duration::from_millis(5000)),
            )
            .unwrap();
        let calls = sink.calls();
        assert_eq!(calls.len(), 1);
        let (kind, message, config) = &calls[0];
        assert_eq!(*kind, MessageType::Info);
        assert_eq!(message, "Saved");
        assert_eq!(config.duration, Duration::from_millis(5000));
        assert_eq!(config.position, Position::TopRight);
        assert!(config.closeable);
        assert!(!config.show_detail);
        assert_eq!(config.detail_label, "show details");
        assert_eq!(config.icon, None);
        // Defaulted actions are callable.
        (config.close_action)();
        (config.detail_action)();
        assert_eq!(overlay.hide_count(), 1);
    }

    #[test]
    fn position_override_keeps_other_defaults() {
        let (notify, sink, _) = fixture();
        notify
            .show(MessageType::Info, "msg", NotifyOptions::new().position(Position::BottomLeft))
            .unwrap();
        let (_, _, config) = &sink.calls()[0];
        assert_eq!(config.position, Position::BottomLeft);
        assert_eq!(config.duration, Duration::from_millis(3000));
        assert!(config.closeable);
        assert_eq!(config.detail_label, "show details");
        assert!(!config.is_permanent());
    }

    #[test]
    fn localized_detail_label() {
        let (notify, sink, _) = fixture();
        notify.set_labels(Labels::for_locale(Locale::Zh));
        notify.warn("msg", NotifyOptions::default()).unwrap();
        assert_eq!(sink.calls()[0].2.detail_label, "显示详情");
    }

    #[test]
    fn supplied_actions_are_kept() {
        let (notify, sink, _) = fixture();
        let clicks = Arc::new(AtomicUsize::new(0));
        let counter = clicks.clone();
        notify
            .error(
                "failed",
                NotifyOptions::new().detail("Why?", move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                }),
            )
            .unwrap();
        let (_, _, config) = &sink.calls()[0];
        assert!(config.show_detail);
        assert_eq!(config.detail_label, "Why?");
        (config.detail_action)();
        assert_eq!(clicks.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn configured_defaults_apply() {
        let (notify, sink, _) = fixture();
        notify.set_defaults(NotifyDefaults {
            position: Position::BottomRight,
            duration: Duration::ZERO,
            closeable: false,
            show_detail: false,
        });
        notify.success("done", NotifyOptions::default()).unwrap();
        let (_, _, config) = &sink.calls()[0];
        assert_eq!(config.position, Position::BottomRight);
        assert!(config.is_permanent());
        assert!(!config.closeable);
    }

    #[test]
    fn unknown_types_are_passed_through() {
        let (notify, sink, _) = fixture();
        notify.show("unknown-type".into(), "msg", NotifyOptions::default()).unwrap();
        assert_eq!(sink.calls()[0].0, MessageType::Other("unknown-type".to_string()));
    }

    #[test]
    fn disabled_notify_returns_silently() {
        let (notify, sink, overlay) = fixture();
        notify.disable();
        notify.info("msg", NotifyOptions::default()).unwrap();
        assert!(sink.calls().is_empty());
        assert_eq!(overlay.hide_count(), 0);
    }

    #[test]
    fn missing_implementation_fails_synchronously() {
        let loading = Arc::new(Loading::new());
        loading.set_implementation(Arc::new(RecordingLoading::default()));
        let notify = Notify::new(loading);
        let err = notify.info("msg", NotifyOptions::default()).unwrap_err();
        assert!(err.is_missing_implementation());
    }

    #[test]
    fn debug_is_gated_by_debug_mode() {
        let (notify, sink, _) = fixture();
        notify.debug("trace", NotifyOptions::default()).unwrap();
        assert!(sink.calls().is_empty());

        notify.enable_debug();
        notify.debug("trace", NotifyOptions::default()).unwrap();
        let calls = sink.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, MessageType::Debug);
    }

    #[test]
    fn debug_mode_does_not_override_disabled_facade() {
        let (notify, sink, _) = fixture();
        notify.enable_debug();
        notify.disable();
        notify.debug("trace", NotifyOptions::default()).unwrap();
        assert!(sink.calls().is_empty());
    }
}

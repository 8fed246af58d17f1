//! Composition root bundling the five facades
//!
//! The application builds one [`Facades`] (or uses the process-wide one from
//! [`facades`]), registers a backend during startup and then calls the
//! facades from anywhere. All presenting facades share one [`Loading`].

use crate::{
    alert::Alert,
    config::Settings,
    confirm::Confirm,
    error::{Error, Result},
    interface::Backend,
    loading::Loading,
    notify::Notify,
    prompt::Prompt,
};
use std::sync::{Arc, OnceLock};

pub struct Facades {
    pub alert: Alert,
    pub confirm: Confirm,
    pub prompt: Prompt,
    pub notify: Notify,
    pub loading: Arc<Loading>,
}

impl Facades {
    pub fn new() -> Self {
        let loading = Arc::new(Loading::new());
        Self {
            alert: Alert::new(loading.clone()),
            confirm: Confirm::new(loading.clone()),
            prompt: Prompt::new(loading.clone()),
            notify: Notify::new(loading.clone()),
            loading,
        }
    }

    /// Registers one backend on every facade.
    pub fn install<B: Backend + 'static>(&self, backend: Arc<B>) {
        self.loading.set_implementation(backend.clone());
        self.alert.set_implementation(backend.clone());
        self.confirm.set_implementation(backend.clone());
        self.prompt.set_implementation(backend.clone());
        self.notify.set_implementation(backend);
        log::debug!("Installed backend on all facades");
    }

    /// Applies startup settings: labels, enable flags, debug modes and
    /// notification defaults.
    pub fn apply_settings(&self, settings: &Settings) {
        let labels = settings.labels();
        self.loading.set_labels(labels.clone());
        self.alert.set_labels(labels.clone());
        self.confirm.set_labels(labels.clone());
        self.prompt.set_labels(labels.clone());
        self.notify.set_labels(labels);

        self.loading.set_enabled(settings.loading.enabled);
        self.alert.set_enabled(settings.alert.enabled);
        self.confirm.set_enabled(settings.confirm.enabled);
        self.prompt.set_enabled(settings.prompt.enabled);
        self.notify.set_enabled(settings.notify.enabled);

        if settings.alert.debug {
            self.alert.enable_debug();
        } else {
            self.alert.disable_debug();
        }
        if settings.notify.debug {
            self.notify.enable_debug();
        } else {
            self.notify.disable_debug();
        }
        self.notify.set_defaults(settings.notify.defaults());

        log::debug!("Applied settings for locale {:?}", settings.locale);
    }

    /// Names of the facades that have no implementation yet.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (self.loading.name(), self.loading.has_implementation()),
            (self.alert.name(), self.alert.has_implementation()),
            (self.confirm.name(), self.confirm.has_implementation()),
            (self.prompt.name(), self.prompt.has_implementation()),
            (self.notify.name(), self.notify.has_implementation()),
        ]
        .into_iter()
        .filter_map(|(name, registered)| (!registered).then_some(name))
        .collect()
    }

    pub fn is_ready(&self) -> bool {
        self.missing().is_empty()
    }

    /// Fails with the first facade that has no implementation.
    pub fn ensure_ready(&self) -> Result<()> {
        match self.missing().first().copied() {
            Some(facade) => Err(Error::MissingImplementation { facade }),
            None => Ok(()),
        }
    }
}

impl Default for Facades {
    fn default() -> Self {
        Self::new()
    }
}

static FACADES: OnceLock<Facades> = OnceLock::new();

/// The process-wide facades.
pub fn facades() -> &'static Facades {
    FACADES.get_or_init(Facades::new)
}

pub fn alert() -> &'static Alert {
    &facades().alert
}

pub fn confirm() -> &'static Confirm {
    &facades().confirm
}

pub fn prompt() -> &'static Prompt {
    &facades().prompt
}

pub fn notify() -> &'static Notify {
    &facades().notify
}

pub fn loading() -> &'static Loading {
    &facades().loading
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        backend::{AutomaticBackend, Presentation},
        interface::NotifyOptions,
        types::{MessageType, Position},
    };
    use futures::executor::block_on;
    use std::time::Duration;

    #[test]
    fn new_facades_report_missing_implementations() {
        let facades = Facades::new();
        assert!(!facades.is_ready());
        assert_eq!(
            facades.missing(),
            vec!["loading", "alert", "confirm", "prompt", "notify"]
        );
        let err = facades.ensure_ready().unwrap_err();
        assert!(matches!(err, Error::MissingImplementation { facade: "loading" }));
    }

    #[test]
    fn install_registers_every_facade() {
        let facades = Facades::new();
        facades.install(Arc::new(AutomaticBackend::new()));
        assert!(facades.is_ready());
        facades.ensure_ready().unwrap();
    }

    #[test]
    fn facades_share_one_loading_overlay() {
        let facades = Facades::new();
        let backend = Arc::new(AutomaticBackend::new());
        facades.install(backend.clone());
        facades.loading.show_saving().unwrap();
        block_on(facades.confirm.info("Save?", "", None)).unwrap();
        let history = backend.history();
        assert_eq!(
            history[0],
            Presentation::LoadingShown("Saving data, please wait...".to_string())
        );
        assert_eq!(history[1], Presentation::LoadingHidden);
        assert!(matches!(history[2], Presentation::Confirm { .. }));
    }

    #[test]
    fn settings_are_applied() {
        let facades = Facades::new();
        let backend = Arc::new(AutomaticBackend::new());
        facades.install(backend.clone());
        let settings = Settings::from_yaml_str(concat!(
            "locale: zh\n",
            "confirm:\n  enabled: false\n",
            "alert:\n  debug: true\n",
            "notify:\n  position: bottom-right\n  duration_ms: 0\n",
        ))
        .unwrap();
        facades.apply_settings(&settings);

        assert!(!facades.confirm.is_enabled());
        assert!(facades.alert.is_debug_enabled());
        assert!(block_on(facades.confirm.info("T", "M", None)).unwrap_err().is_disabled());

        block_on(facades.alert.debug("details").unwrap()).unwrap();
        facades.notify.info("msg", NotifyOptions::default()).unwrap();
        let history = backend.history();
        assert!(history.contains(&Presentation::Alert {
            kind: MessageType::Debug,
            title: "调试".to_string(),
            message: "details".to_string(),
        }));
        assert!(history.contains(&Presentation::Notify {
            kind: MessageType::Info,
            message: "msg".to_string(),
            position: Position::BottomRight,
            duration: Duration::ZERO,
        }));
    }
}

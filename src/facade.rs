//! Shared state and dispatch steps of every facade
//!
//! Each facade wraps a [`FacadeState`] over its implementation trait object.
//! The state owns the enable flag, the registered implementation and the
//! default labels; [`FacadeState::dispatch`] runs the steps every presenting
//! facade goes through before delegating.

use crate::{
    error::{Error, Result},
    loading::Loading,
    locale::Labels,
    types::MessageType,
};
use std::{
    any::Any,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, PoisonError, RwLock,
    },
};

/// Outcome of the pre-delegation steps.
pub(crate) enum Dispatch<T> {
    /// The facade is disabled; nothing may be presented.
    Suppressed,
    /// Hand the request to this implementation.
    Deliver(T),
}

/// Enable flag, registered implementation and labels of one facade.
pub struct FacadeState<I: ?Sized> {
    name: &'static str,
    contract: &'static str,
    enabled: AtomicBool,
    implementation: RwLock<Option<Arc<I>>>,
    labels: RwLock<Labels>,
}

impl<I: ?Sized + Send + Sync + 'static> FacadeState<I> {
    pub(crate) fn new(name: &'static str, contract: &'static str) -> Self {
        Self {
            name,
            contract,
            enabled: AtomicBool::new(true),
            implementation: RwLock::new(None),
            labels: RwLock::new(Labels::default()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn enable(&self) {
        self.enabled.store(true, Ordering::Relaxed);
    }

    pub fn disable(&self) {
        self.enabled.store(false, Ordering::Relaxed);
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Registers the renderer, replacing any previous one.
    ///
    /// Calls already in flight keep the implementation they captured.
    pub fn set_implementation(&self, implementation: Arc<I>) {
        let mut slot = self
            .implementation
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if slot.is_some() {
            log::debug!(target: self.name, "Replacing the registered {} implementation", self.name);
        }
        *slot = Some(implementation);
    }

    /// Registers a type-erased renderer, as produced by plugin loaders.
    ///
    /// The value must hold an `Arc` of this facade's trait object; anything
    /// else is rejected with [`Error::TypeMismatch`] and leaves the current
    /// registration untouched.
    pub fn set_implementation_any(&self, candidate: Box<dyn Any + Send + Sync>) -> Result<()> {
        match candidate.downcast::<Arc<I>>() {
            Ok(implementation) => {
                self.set_implementation(*implementation);
                Ok(())
            }
            Err(_) => Err(Error::TypeMismatch { facade: self.name, expected: self.contract }),
        }
    }

    pub fn implementation(&self) -> Option<Arc<I>> {
        self.implementation
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn has_implementation(&self) -> bool {
        self.implementation
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    pub(crate) fn require(&self) -> Result<Arc<I>> {
        self.implementation().ok_or(Error::MissingImplementation { facade: self.name })
    }

    pub fn labels(&self) -> Labels {
        self.labels
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_labels(&self, labels: Labels) {
        *self.labels.write().unwrap_or_else(PoisonError::into_inner) = labels;
    }

    /// Records the message at the severity of its type.
    pub(crate) fn log_message(&self, kind: &MessageType, message: &str) {
        log::log!(target: self.name, kind.log_level(), "{}", message);
    }

    /// Runs the steps shared by alert, confirm, prompt and notify: the enable
    /// check, clearing the loading overlay, the registration check and the
    /// log record.
    pub(crate) fn dispatch(
        &self,
        loading: &Loading,
        kind: &MessageType,
        message: &str,
    ) -> Result<Dispatch<Arc<I>>> {
        if !self.is_enabled() {
            return Ok(Dispatch::Suppressed);
        }
        loading.clear()?;
        let implementation = self.require()?;
        self.log_message(kind, message);
        Ok(Dispatch::Deliver(implementation))
    }
}

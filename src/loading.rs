//! The global blocking-operation overlay.
//!
//! Every other facade clears this overlay before it presents anything, so no
//! dialog or notification is ever rendered on top of a visible loading
//! indicator.

use crate::{
    constants::facade_names::LOADING,
    error::Result,
    facade::FacadeState,
    interface::LoadingImpl,
    locale::{Labels, LoadingActivity},
};
use std::{ops::Deref, sync::Arc};

pub struct Loading {
    state: FacadeState<dyn LoadingImpl>,
}

impl Loading {
    pub fn new() -> Self {
        Self {
            state: FacadeState::new(LOADING, "LoadingImpl"),
        }
    }

    /// Shortcut for registering a concrete overlay.
    pub fn set_impl<T: LoadingImpl + 'static>(&self, implementation: T) {
        self.state.set_implementation(Arc::new(implementation));
    }

    /// Presents the overlay. Does nothing while disabled.
    pub fn show(&self, message: &str) -> Result<()> {
        if !self.state.is_enabled() {
            return Ok(());
        }
        let implementation = self.state.require()?;
        log::debug!(target: LOADING, "{}", message);
        implementation.show(message);
        Ok(())
    }

    /// Dismisses the overlay. Does nothing while disabled.
    pub fn clear(&self) -> Result<()> {
        if !self.state.is_enabled() {
            return Ok(());
        }
        self.state.require()?.hide();
        Ok(())
    }

    /// Presents the canned message of `activity` in the current locale.
    pub fn show_activity(&self, activity: LoadingActivity) -> Result<()> {
        let Labels { locale, .. } = self.state.labels();
        self.show(activity.message(locale))
    }

    pub fn show_getting(&self) -> Result<()> {
        self.show_activity(LoadingActivity::Getting)
    }

    pub fn show_fetching(&self) -> Result<()> {
        self.show_activity(LoadingActivity::Fetching)
    }

    pub fn show_adding(&self) -> Result<()> {
        self.show_activity(LoadingActivity::Adding)
    }

    pub fn show_saving(&self) -> Result<()> {
        self.show_activity(LoadingActivity::Saving)
    }

    pub fn show_updating(&self) -> Result<()> {
        self.show_activity(LoadingActivity::Updating)
    }

    pub fn show_deleting(&self) -> Result<()> {
        self.show_activity(LoadingActivity::Deleting)
    }

    pub fn show_restoring(&self) -> Result<()> {
        self.show_activity(LoadingActivity::Restoring)
    }

    pub fn show_purging(&self) -> Result<()> {
        self.show_activity(LoadingActivity::Purging)
    }

    pub fn show_erasing(&self) -> Result<()> {
        self.show_activity(LoadingActivity::Erasing)
    }

    pub fn show_uploading(&self) -> Result<()> {
        self.show_activity(LoadingActivity::Uploading)
    }

    pub fn show_downloading(&self) -> Result<()> {
        self.show_activity(LoadingActivity::Downloading)
    }

    pub fn show_importing(&self) -> Result<()> {
        self.show_activity(LoadingActivity::Importing)
    }

    pub fn show_exporting(&self) -> Result<()> {
        self.show_activity(LoadingActivity::Exporting)
    }
}

impl Default for Loading {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for Loading {
    type Target = FacadeState<dyn LoadingImpl>;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{locale::Locale, test_utils::RecordingLoading};

    fn registered() -> (Loading, Arc<RecordingLoading>) {
        let loading = Loading::new();
        let overlay = Arc::new(RecordingLoading::default());
        loading.set_implementation(overlay.clone());
        (loading, overlay)
    }

    #[test]
    fn show_and_clear_reach_the_overlay() {
        let (loading, overlay) = registered();
        loading.show("Working").unwrap();
        loading.clear().unwrap();
        assert_eq!(overlay.shown(), vec!["Working".to_string()]);
        assert_eq!(overlay.hide_count(), 1);
    }

    #[test]
    fn disabled_overlay_is_silent() {
        let (loading, overlay) = registered();
        loading.disable();
        loading.show("Working").unwrap();
        loading.clear().unwrap();
        assert!(overlay.shown().is_empty());
        assert_eq!(overlay.hide_count(), 0);
    }

    #[test]
    fn unregistered_overlay_fails() {
        let loading = Loading::new();
        assert!(loading.show("Working").unwrap_err().is_missing_implementation());
        assert!(loading.clear().unwrap_err().is_missing_implementation());
    }

    #[test]
    fn disabled_unregistered_overlay_does_not_fail() {
        let loading = Loading::new();
        loading.disable();
        loading.show("Working").unwrap();
        loading.clear().unwrap();
    }

    #[test]
    fn wrappers_use_canned_messages() {
        let (loading, overlay) = registered();
        loading.show_uploading().unwrap();
        loading.show_deleting().unwrap();
        loading.set_labels(Labels::for_locale(Locale::Zh));
        loading.show_getting().unwrap();
        assert_eq!(
            overlay.shown(),
            vec![
                "Uploading, please wait...".to_string(),
                "Deleting data, please wait...".to_string(),
                "正在获取数据，请稍后……".to_string(),
            ]
        );
    }

    #[test]
    fn every_wrapper_presents_once() {
        let (loading, overlay) = registered();
        loading.show_getting().unwrap();
        loading.show_fetching().unwrap();
        loading.show_adding().unwrap();
        loading.show_saving().unwrap();
        loading.show_updating().unwrap();
        loading.show_deleting().unwrap();
        loading.show_restoring().unwrap();
        loading.show_purging().unwrap();
        loading.show_erasing().unwrap();
        loading.show_uploading().unwrap();
        loading.show_downloading().unwrap();
        loading.show_importing().unwrap();
        loading.show_exporting().unwrap();
        assert_eq!(overlay.shown().len(), 13);
    }

    #[test]
    fn set_impl_registers_concrete_overlay() {
        let loading = Loading::new();
        loading.set_impl(RecordingLoading::default());
        assert!(loading.has_implementation());
    }
}

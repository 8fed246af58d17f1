use futures::{channel::oneshot, FutureExt};
use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};
use ui_facade::{
    backend::AutomaticBackend,
    interface::{Completion, ConfirmImpl},
    Buttons, Error, Facades, MessageType, Result,
};

/// Fresh facades with an automatic backend installed on all of them.
pub fn installed(backend: AutomaticBackend) -> (Facades, Arc<AutomaticBackend>) {
    let facades = Facades::new();
    let backend = Arc::new(backend);
    facades.install(backend.clone());
    (facades, backend)
}

/// Writes a settings file into `dir` and returns its path.
pub fn write_settings(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Confirm renderer whose dialogs stay open until the test answers them.
#[derive(Default)]
pub struct DeferredConfirm {
    titles: Mutex<Vec<String>>,
    open: Mutex<Vec<oneshot::Sender<Result<()>>>>,
}

impl DeferredConfirm {
    pub fn titles(&self) -> Vec<String> {
        self.titles.lock().unwrap().clone()
    }

    /// Answers the oldest open dialog.
    pub fn answer(&self, accept: bool) {
        let sender = self.open.lock().unwrap().remove(0);
        let outcome = if accept { Ok(()) } else { Err(Error::declined("cancel")) };
        sender.send(outcome).ok();
    }
}

impl ConfirmImpl for DeferredConfirm {
    fn show(
        &self,
        _kind: &MessageType,
        title: &str,
        _message: &str,
        _buttons: &Buttons,
    ) -> Completion<()> {
        let (sender, receiver) = oneshot::channel();
        self.titles.lock().unwrap().push(title.to_string());
        self.open.lock().unwrap().push(sender);
        async move { receiver.await.unwrap_or_else(|_| Err(Error::declined("dismissed"))) }.boxed()
    }
}

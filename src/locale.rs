//! Localized default labels and canned loading messages.

use serde::{Deserialize, Serialize};

/// Language of the built-in labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Zh,
}

/// Labels a facade falls back to when the caller supplies none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub locale: Locale,
    pub ok: String,
    pub cancel: String,
    pub detail: String,
    pub debug_title: String,
}

impl Labels {
    pub fn for_locale(locale: Locale) -> Self {
        let (ok, cancel, detail, debug_title) = match locale {
            Locale::En => ("Confirm", "Cancel", "show details", "Debug"),
            Locale::Zh => ("确认", "取消", "显示详情", "调试"),
        };
        Self {
            locale,
            ok: ok.to_string(),
            cancel: cancel.to_string(),
            detail: detail.to_string(),
            debug_title: debug_title.to_string(),
        }
    }

    /// Default OK/Cancel pair for confirm and prompt dialogs.
    pub fn buttons(&self) -> Buttons {
        Buttons {
            ok: self.ok.clone(),
            cancel: self.cancel.clone(),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

/// Button captions of a confirm or prompt dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buttons {
    pub ok: String,
    pub cancel: String,
}

impl Buttons {
    pub fn new(ok: impl Into<String>, cancel: impl Into<String>) -> Self {
        Self {
            ok: ok.into(),
            cancel: cancel.into(),
        }
    }
}

impl Default for Buttons {
    fn default() -> Self {
        Labels::default().buttons()
    }
}

/// Blocking operations with a canned loading message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingActivity {
    Getting,
    Fetching,
    Adding,
    Saving,
    Updating,
    Deleting,
    Restoring,
    Purging,
    Erasing,
    Uploading,
    Downloading,
    Importing,
    Exporting,
}

impl LoadingActivity {
    pub fn message(self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => match self {
                LoadingActivity::Getting => "Getting data, please wait...",
                LoadingActivity::Fetching => "Fetching data, please wait...",
                LoadingActivity::Adding => "Adding data, please wait...",
                LoadingActivity::Saving => "Saving data, please wait...",
                LoadingActivity::Updating => "Updating data, please wait...",
                LoadingActivity::Deleting => "Deleting data, please wait...",
                LoadingActivity::Restoring => "Restoring data, please wait...",
                LoadingActivity::Purging => "Purging deleted data, please wait...",
                LoadingActivity::Erasing => "Erasing data, please wait...",
                LoadingActivity::Uploading => "Uploading, please wait...",
                LoadingActivity::Downloading => "Downloading, please wait...",
                LoadingActivity::Importing => "Importing data, please wait...",
                LoadingActivity::Exporting => "Exporting data, please wait...",
            },
            Locale::Zh => match self {
                LoadingActivity::Getting => "正在获取数据，请稍后……",
                LoadingActivity::Fetching => "正在加载数据，请稍后……",
                LoadingActivity::Adding => "正在添加数据，请稍后……",
                LoadingActivity::Saving => "正在保存数据，请稍后……",
                LoadingActivity::Updating => "正在更新数据，请稍后……",
                LoadingActivity::Deleting => "正在删除数据，请稍后……",
                LoadingActivity::Restoring => "正在恢复数据，请稍后……",
                LoadingActivity::Purging => "正在清除已删除的数据，请稍后……",
                LoadingActivity::Erasing => "正在清除数据，请稍后……",
                LoadingActivity::Uploading => "正在上传，请稍后……",
                LoadingActivity::Downloading => "正在下载，请稍后……",
                LoadingActivity::Importing => "正在导入数据，请稍后……",
                LoadingActivity::Exporting => "正在导出数据，请稍后……",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_is_the_default_locale() {
        let labels = Labels::default();
        assert_eq!(labels.locale, Locale::En);
        assert_eq!(labels.buttons(), Buttons::new("Confirm", "Cancel"));
        assert_eq!(labels.detail, "show details");
    }

    #[test]
    fn chinese_labels() {
        let labels = Labels::for_locale(Locale::Zh);
        assert_eq!(labels.ok, "确认");
        assert_eq!(labels.cancel, "取消");
        assert_eq!(labels.detail, "显示详情");
        assert_eq!(labels.debug_title, "调试");
        assert_eq!(LoadingActivity::Uploading.message(Locale::Zh), "正在上传，请稍后……");
    }
}

//! Message type to presentation lookups.
//!
//! One table per icon system, keyed by [`MessageType`], each with its own
//! fallback for unrecognized tags. The fallbacks differ on purpose: the
//! Bootstrap class falls back to a neutral chat icon and the color to grey,
//! while the other tables fall back to the info entry. Only the Material
//! dialog icon knows the `warning` spelling.

use crate::{
    constants::{colors::*, ICON_SIZE},
    types::MessageType,
};

/// Presentation value for every known message type plus the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconTable {
    pub warn: &'static str,
    pub error: &'static str,
    pub success: &'static str,
    pub debug: &'static str,
    pub question: &'static str,
    pub info: &'static str,
    pub fallback: &'static str,
}

impl IconTable {
    pub fn lookup(&self, kind: &MessageType) -> &'static str {
        match kind {
            MessageType::Warn => self.warn,
            MessageType::Error => self.error,
            MessageType::Success => self.success,
            MessageType::Debug => self.debug,
            MessageType::Question => self.question,
            MessageType::Info => self.info,
            MessageType::Other(_) => self.fallback,
        }
    }

    /// Same table, but unrecognized tags map to the info entry.
    const fn with_info_fallback(self) -> Self {
        Self {
            fallback: self.info,
            ..self
        }
    }
}

pub const CSS_COLORS: IconTable = IconTable {
    warn: COLOR_WARN,
    error: COLOR_ERROR,
    success: COLOR_SUCCESS,
    debug: COLOR_DEBUG,
    question: COLOR_QUESTION,
    info: COLOR_INFO,
    fallback: COLOR_DEFAULT,
};

pub const BOOTSTRAP_ICONS: IconTable = IconTable {
    warn: "bi bi-exclamation-triangle-fill",
    error: "bi bi-x-circle-fill",
    success: "bi bi-check-circle-fill",
    debug: "bi bi-bug-fill",
    question: "bi bi-question-circle-fill",
    info: "bi bi-info-circle-fill",
    fallback: "bi bi-chat-left-dots",
};

pub const FONT_AWESOME_ICONS: IconTable = IconTable {
    warn: "fa-solid fa-triangle-exclamation",
    error: "fa-solid fa-circle-xmark",
    success: "fa-solid fa-circle-check",
    debug: "fa-solid fa-bug-slash",
    question: "fa-solid fa-circle-question",
    info: "fa-solid fa-circle-info",
    fallback: "fa-solid fa-circle-info",
};

pub const MATERIAL_SYMBOLS: IconTable = IconTable {
    warn: "warning",
    error: "cancel",
    success: "check_circle",
    debug: "bug_report",
    question: "help",
    info: "info",
    fallback: "info",
};

const MATERIAL_FONT_SETTINGS: &str =
    "font-variation-settings: 'FILL' 1, 'wght' 400, 'GRAD' 0, 'opsz' 48;";

/// CSS color of a message type; grey for unrecognized tags.
pub fn css_color(kind: &MessageType) -> &'static str {
    CSS_COLORS.lookup(kind)
}

/// Bootstrap Icons class; a chat bubble for unrecognized tags.
pub fn bootstrap_icon(kind: &MessageType) -> &'static str {
    BOOTSTRAP_ICONS.lookup(kind)
}

pub fn font_awesome_icon(kind: &MessageType) -> &'static str {
    FONT_AWESOME_ICONS.lookup(kind)
}

pub fn material_symbol_icon(kind: &MessageType) -> &'static str {
    MATERIAL_SYMBOLS.lookup(kind)
}

/// Color of a dialog icon; unrecognized tags use the info color.
fn dialog_color(kind: &MessageType) -> &'static str {
    CSS_COLORS.with_info_fallback().lookup(kind)
}

/// Bootstrap `<i>` element for dialog headers. Falls back to the info icon.
pub fn bootstrap_dialog_icon(kind: &MessageType) -> String {
    let class = BOOTSTRAP_ICONS.with_info_fallback().lookup(kind);
    format!(
        r#"<i class="{class}" style="font-size: {ICON_SIZE}; color: {}"></i>"#,
        dialog_color(kind)
    )
}

/// Font Awesome `<i>` element for dialog headers. Falls back to the info icon.
pub fn font_awesome_dialog_icon(kind: &MessageType) -> String {
    format!(
        r#"<i class="{} fa-lg" style="color: {}"></i>"#,
        font_awesome_icon(kind),
        dialog_color(kind)
    )
}

/// Material Symbols `<i>` element for dialog headers. Falls back to the info icon.
///
/// Also accepts the `warning` tag, which no other lookup recognizes.
pub fn material_symbol_dialog_icon(kind: &MessageType) -> String {
    let kind = match kind {
        MessageType::Other(tag) if tag == "warning" => &MessageType::Warn,
        other => other,
    };
    format!(
        r#"<i class="material-symbols-rounded" style="{MATERIAL_FONT_SETTINGS} color: {};">{}</i>"#,
        dialog_color(kind),
        material_symbol_icon(kind)
    )
}

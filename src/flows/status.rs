//! Status Messages
//!
//! The inline alert shown by the account pages, modelled as data so the
//! transitions can be checked without a DOM.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Class that keeps the status element out of view
pub const HIDDEN_CLASS: &str = "hidden";

/// Styling of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Info,
    Warning,
}

impl StatusKind {
    pub const ALL: [StatusKind; 2] = [StatusKind::Info, StatusKind::Warning];

    /// CSS class applied to the status element
    pub fn css_class(self) -> &'static str {
        match self {
            StatusKind::Info => "alert-info",
            StatusKind::Warning => "alert-warning",
        }
    }

    /// Parse a stored kind name (`info`, `warning`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "info" => Some(StatusKind::Info),
            "warning" => Some(StatusKind::Warning),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StatusKind::Info => "info",
            StatusKind::Warning => "warning",
        }
    }
}

/// A message to show in the status element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Warning,
            text: text.into(),
        }
    }
}

/// A one-shot status stored before a redirect and shown by the next page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub kind: StatusKind,
    pub message: String,
}

impl Flash {
    /// Rebuild a flash from its two stored values; both must be present
    pub fn from_stored(kind: Option<&str>, message: Option<&str>) -> Option<Self> {
        let kind = StatusKind::from_name(kind?)?;
        Some(Self {
            kind,
            message: message?.to_string(),
        })
    }

    pub fn into_message(self) -> StatusMessage {
        StatusMessage {
            kind: self.kind,
            text: self.message,
        }
    }
}

impl From<StatusMessage> for Flash {
    fn from(msg: StatusMessage) -> Self {
        Self {
            kind: msg.kind,
            message: msg.text,
        }
    }
}

/// The `#status` element: a class list and its inner HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusElement {
    classes: BTreeSet<String>,
    html: String,
}

impl Default for StatusElement {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusElement {
    /// A hidden, empty alert
    pub fn new() -> Self {
        let classes = ["alert", HIDDEN_CLASS]
            .into_iter()
            .map(String::from)
            .collect();
        Self {
            classes,
            html: String::new(),
        }
    }

    /// Show `message`, replacing any previous alert styling
    pub fn show(&mut self, message: &StatusMessage) {
        for kind in StatusKind::ALL {
            self.classes.remove(kind.css_class());
        }
        self.classes.insert(message.kind.css_class().to_string());
        self.classes.remove(HIDDEN_CLASS);
        self.html = message.text.clone();
    }

    pub fn hide(&mut self) {
        self.classes.insert(HIDDEN_CLASS.to_string());
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn is_hidden(&self) -> bool {
        self.has_class(HIDDEN_CLASS)
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    /// Space-separated class attribute
    pub fn class_attr(&self) -> String {
        self.classes
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Styling currently applied, if the element is visible
    pub fn kind(&self) -> Option<StatusKind> {
        if self.is_hidden() {
            return None;
        }
        StatusKind::ALL
            .into_iter()
            .find(|k| self.has_class(k.css_class()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_element_is_hidden() {
        let status = StatusElement::new();
        assert!(status.is_hidden());
        assert_eq!(status.kind(), None);
        assert_eq!(status.class_attr(), "alert hidden");
    }

    #[test]
    fn test_show_replaces_styling() {
        let mut status = StatusElement::new();
        status.show(&StatusMessage::warning("Nope"));
        assert!(status.has_class("alert-warning"));
        assert!(!status.is_hidden());

        status.show(&StatusMessage::info("Fine"));
        assert!(status.has_class("alert-info"));
        assert!(!status.has_class("alert-warning"));
        assert_eq!(status.html(), "Fine");
        assert_eq!(status.kind(), Some(StatusKind::Info));
    }

    #[test]
    fn test_flash_from_stored() {
        let flash = Flash::from_stored(Some("info"), Some("Verified")).unwrap();
        assert_eq!(flash.into_message(), StatusMessage::info("Verified"));

        assert!(Flash::from_stored(Some("info"), None).is_none());
        assert!(Flash::from_stored(Some("danger"), Some("x")).is_none());
    }
}

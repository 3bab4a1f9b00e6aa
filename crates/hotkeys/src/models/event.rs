//! Key press events delivered by the host page

use serde::{Deserialize, Serialize};

use super::Key;

/// Kind of element a key event was dispatched to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    /// Single-line input (`<input>`)
    #[serde(alias = "text")]
    Input,
    /// Multi-line input (`<textarea>`)
    TextArea,
    /// Selection control (`<select>`)
    Select,
    /// Anything else: the document body, links, buttons...
    #[default]
    Other,
}

impl TargetKind {
    /// Classify an element by its tag name (case-insensitive)
    pub fn from_tag_name(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("input") {
            Self::Input
        } else if tag.eq_ignore_ascii_case("textarea") {
            Self::TextArea
        } else if tag.eq_ignore_ascii_case("select") {
            Self::Select
        } else {
            Self::Other
        }
    }

    /// Text-entry controls own their key presses; shortcuts never fire there
    pub fn is_text_entry(&self) -> bool {
        !matches!(self, Self::Other)
    }
}

/// A single key press
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: Key,
    #[serde(default)]
    pub target: TargetKind,
}

impl KeyEvent {
    /// Key press on a non-editable element
    pub fn new(key: impl Into<Key>) -> Self {
        Self {
            key: key.into(),
            target: TargetKind::Other,
        }
    }

    /// Key press on an element of the given kind
    pub fn on(key: impl Into<Key>, target: TargetKind) -> Self {
        Self {
            key: key.into(),
            target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_name() {
        assert_eq!(TargetKind::from_tag_name("INPUT"), TargetKind::Input);
        assert_eq!(TargetKind::from_tag_name("textarea"), TargetKind::TextArea);
        assert_eq!(TargetKind::from_tag_name("Select"), TargetKind::Select);
        assert_eq!(TargetKind::from_tag_name("BODY"), TargetKind::Other);
        assert_eq!(TargetKind::from_tag_name("A"), TargetKind::Other);
    }

    #[test]
    fn test_is_text_entry() {
        assert!(TargetKind::Input.is_text_entry());
        assert!(TargetKind::TextArea.is_text_entry());
        assert!(TargetKind::Select.is_text_entry());
        assert!(!TargetKind::Other.is_text_entry());
    }

    #[test]
    fn test_deserialize_event_defaults_to_other_target() {
        let event: KeyEvent = serde_json::from_str(r#"{ "key": "g" }"#).unwrap();
        assert_eq!(event, KeyEvent::new("g"));

        let event: KeyEvent =
            serde_json::from_str(r#"{ "key": "h", "target": "textarea" }"#).unwrap();
        assert_eq!(event.target, TargetKind::TextArea);
    }
}

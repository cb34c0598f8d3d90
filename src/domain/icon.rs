//! Object and type icons.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Code point ranges accepted as emoji.
const EMOJI_RANGES: &[(char, char)] = &[
    ('\u{1F600}', '\u{1F64F}'), // emoticons
    ('\u{1F300}', '\u{1F5FF}'), // symbols & pictographs
    ('\u{1F680}', '\u{1F6FF}'), // transport & map symbols
    ('\u{1F1E0}', '\u{1F1FF}'), // flags
    ('\u{2702}', '\u{27B0}'),   // dingbats
    ('\u{24C2}', '\u{1F251}'),  // enclosed characters
];

/// Returns true if `text` is non-empty and every character lies in an emoji range.
///
/// # Examples
///
/// ```
/// use anytype::domain::is_emoji;
///
/// assert!(is_emoji("📚"));
/// assert!(!is_emoji("not-an-emoji"));
/// assert!(!is_emoji(""));
/// ```
pub fn is_emoji(text: &str) -> bool {
    !text.is_empty()
        && text.chars().all(|c| {
            EMOJI_RANGES
                .iter()
                .any(|&(start, end)| (start..=end).contains(&c))
        })
}

/// An icon attached to an object or type.
///
/// Serialized with a `format` tag, matching the API:
///
/// ```json
/// {"format": "emoji", "emoji": "📚"}
/// {"format": "file", "file": "bafy..."}
/// {"format": "icon", "name": "document", "color": "red"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "lowercase")]
pub enum Icon {
    Emoji {
        emoji: String,
    },
    File {
        file: String,
    },
    #[serde(rename = "icon")]
    Named {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<String>,
    },
}

impl Icon {
    /// Returns the emoji, if this is an emoji icon.
    pub fn emoji(&self) -> Option<&str> {
        match self {
            Icon::Emoji { emoji } => Some(emoji),
            _ => None,
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Icon::Emoji { emoji } => f.write_str(emoji),
            Icon::File { file } => write!(f, "file:{file}"),
            Icon::Named { name, color: None } => write!(f, "icon:{name}"),
            Icon::Named {
                name,
                color: Some(color),
            } => write!(f, "icon:{name}:{color}"),
        }
    }
}

/// A value offered to [`Object::set_icon`](crate::domain::Object::set_icon).
///
/// Mirrors the shapes the API accepts: a JSON mapping, an emoji string, or
/// an already-built [`Icon`]. Any other JSON value is kept as
/// `Unsupported` and rejected at assignment time.
#[derive(Debug, Clone, PartialEq)]
pub enum IconInput {
    Mapping(serde_json::Map<String, Value>),
    Emoji(String),
    Icon(Icon),
    Unsupported(Value),
}

impl From<Icon> for IconInput {
    fn from(icon: Icon) -> Self {
        IconInput::Icon(icon)
    }
}

impl From<&str> for IconInput {
    fn from(text: &str) -> Self {
        IconInput::Emoji(text.to_string())
    }
}

impl From<String> for IconInput {
    fn from(text: String) -> Self {
        IconInput::Emoji(text)
    }
}

impl From<Value> for IconInput {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => IconInput::Mapping(map),
            Value::String(text) => IconInput::Emoji(text),
            other => IconInput::Unsupported(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    // ===========================================
    // Phase 1: Emoji Validation
    // ===========================================

    #[test]
    fn accepts_common_pictographs() {
        assert!(is_emoji("📚"));
        assert!(is_emoji("😀"));
        assert!(is_emoji("🚀"));
        assert!(is_emoji("✅"));
    }

    #[test]
    fn accepts_flag_pairs_and_sequences() {
        assert!(is_emoji("🇫🇷"));
        assert!(is_emoji("📚📚"));
    }

    #[test]
    fn rejects_text() {
        assert!(!is_emoji("not-an-emoji"));
        assert!(!is_emoji("a📚"));
        assert!(!is_emoji(" 📚"));
        assert!(!is_emoji(""));
    }

    #[test]
    fn rejects_zero_width_joiner_sequences() {
        assert!(!is_emoji("👨\u{200D}👩"));
    }

    // ===========================================
    // Phase 2: Serde
    // ===========================================

    #[test]
    fn serializes_with_format_tag() {
        let icon = Icon::Emoji {
            emoji: "📚".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&icon).unwrap(),
            json!({"format": "emoji", "emoji": "📚"})
        );

        let named = Icon::Named {
            name: "document".to_string(),
            color: None,
        };
        assert_eq!(
            serde_json::to_value(&named).unwrap(),
            json!({"format": "icon", "name": "document"})
        );
    }

    #[test]
    fn deserializes_file_icon() {
        let icon: Icon = serde_json::from_value(json!({"format": "file", "file": "bafy1"})).unwrap();
        assert_eq!(
            icon,
            Icon::File {
                file: "bafy1".to_string()
            }
        );
    }

    #[test]
    fn deserialize_rejects_unknown_format() {
        let result: Result<Icon, _> = serde_json::from_value(json!({"format": "gif"}));
        assert!(result.is_err());
    }

    // ===========================================
    // Phase 3: Input Conversion
    // ===========================================

    #[test]
    fn json_values_map_to_inputs() {
        assert!(matches!(
            IconInput::from(json!({"format": "emoji", "emoji": "📚"})),
            IconInput::Mapping(_)
        ));
        assert_eq!(
            IconInput::from(json!("📚")),
            IconInput::Emoji("📚".to_string())
        );
        assert_eq!(IconInput::from(json!(7)), IconInput::Unsupported(json!(7)));
    }

    #[test]
    fn display_formats() {
        let icon = Icon::Named {
            name: "book".to_string(),
            color: Some("red".to_string()),
        };
        assert_eq!(icon.to_string(), "icon:book:red");
        assert_eq!(icon.emoji(), None);
    }
}

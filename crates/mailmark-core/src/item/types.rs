use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of content an item carries
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemType {
    /// A single email message
    #[default]
    Email,
    /// Every message of a thread merged into one document
    EmailThread,
    /// A bounded digest of a thread's key messages
    EmailThreadSummary,
    /// A calendar event
    Event,
    /// Any type a source adapter invents; kept verbatim
    Other(String),
}

impl ItemType {
    pub fn as_str(&self) -> &str {
        match self {
            ItemType::Email => "email",
            ItemType::EmailThread => "email_thread",
            ItemType::EmailThreadSummary => "email_thread_summary",
            ItemType::Event => "event",
            ItemType::Other(other) => other,
        }
    }
}

impl From<String> for ItemType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "email" => ItemType::Email,
            "email_thread" => ItemType::EmailThread,
            "email_thread_summary" => ItemType::EmailThreadSummary,
            "event" => ItemType::Event,
            _ => ItemType::Other(s),
        }
    }
}

impl From<ItemType> for String {
    fn from(item_type: ItemType) -> Self {
        item_type.as_str().to_string()
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of an extracted hyperlink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    /// Fragment or relative reference (`#x`, `/x`, `./x`, `../x`)
    Internal,
    /// Points at a document file or a document-hosting service
    Document,
    /// Everything else
    #[default]
    External,
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkType::Internal => write!(f, "internal"),
            LinkType::Document => write!(f, "document"),
            LinkType::External => write!(f, "external"),
        }
    }
}

/// A hyperlink found in an item's content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    /// Link text for Markdown links, empty for bare URLs
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(rename = "type", default)]
    pub link_type: LinkType,
}

/// A file attached to an item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mime_type: String,
    #[serde(default)]
    pub size: u64,
    #[serde(
        default,
        with = "base64_bytes",
        skip_serializing_if = "Option::is_none"
    )]
    pub data: Option<Vec<u8>>,
}

impl Attachment {
    /// MIME type reported by the source, or one guessed from the file name
    pub fn effective_mime_type(&self) -> String {
        if !self.mime_type.trim().is_empty() {
            return self.mime_type.clone();
        }
        mime_guess::from_path(&self.name)
            .first_or_octet_stream()
            .essence_str()
            .to_string()
    }
}

/// Who sent a message.
///
/// Sources hand over either a raw header string (`"Ann <ann@example.com>"`)
/// or a name/email pair; both deserialize into this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Sender {
    Plain(String),
    Structured {
        #[serde(default)]
        name: String,
        #[serde(default)]
        email: String,
    },
}

impl Sender {
    /// Stable key used to compare senders: the lowercased address when one
    /// is known, the trimmed name otherwise
    pub fn identifier(&self) -> Option<String> {
        let id = match self {
            Sender::Structured { name, email } => {
                if email.trim().is_empty() {
                    name.trim().to_string()
                } else {
                    email.trim().to_lowercase()
                }
            }
            Sender::Plain(raw) => match angle_address(raw) {
                Some(address) => address.to_lowercase(),
                None if raw.contains('@') => raw.trim().to_lowercase(),
                None => raw.trim().to_string(),
            },
        };
        (!id.is_empty()).then_some(id)
    }

    /// Human-readable form, `Name <email>` when both parts are known
    pub fn display(&self) -> String {
        match self {
            Sender::Plain(raw) => raw.trim().to_string(),
            Sender::Structured { name, email } => match (name.trim(), email.trim()) {
                ("", email) => email.to_string(),
                (name, "") => name.to_string(),
                (name, email) => format!("{} <{}>", name, email),
            },
        }
    }
}

fn angle_address(raw: &str) -> Option<&str> {
    let start = raw.find('<')?;
    let end = raw[start..].find('>')? + start;
    let address = raw[start + 1..end].trim();
    (!address.is_empty()).then_some(address)
}

mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(data: &Option<Vec<u8>>, s: S) -> Result<S::Ok, S::Error> {
        match data {
            Some(bytes) => s.serialize_some(&STANDARD.encode(bytes)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<u8>>, D::Error> {
        let encoded: Option<String> = Option::deserialize(d)?;
        encoded
            .map(|s| STANDARD.decode(s.as_bytes()).map_err(serde::de::Error::custom))
            .transpose()
    }
}

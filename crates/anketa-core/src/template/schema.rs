use serde::{Deserialize, Serialize};
use std::fmt;

/// A questionnaire template: the ordered question phrases printed on one
/// version of the paper form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Ordered entries. When a line contains several phrases, the earliest
    /// entry wins.
    pub entries: Vec<TemplateEntry>,
}

impl Template {
    pub fn entry(&self, key: &str) -> Option<&TemplateEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A single question on the form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateEntry {
    /// Question text, matched as a case-sensitive substring of a line.
    pub phrase: String,
    /// Output slot name in the scan result.
    pub key: String,
    #[serde(default)]
    pub kind: FieldKind,
    /// Report the field when it comes back empty.
    #[serde(default)]
    pub required: bool,
}

/// Which normalizer applies to an entry's captured answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    #[default]
    Text,
    Rating,
    TicketPrice,
    YesNo,
    Phone,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Text => write!(f, "text"),
            FieldKind::Rating => write!(f, "rating"),
            FieldKind::TicketPrice => write!(f, "ticket_price"),
            FieldKind::YesNo => write!(f, "yes_no"),
            FieldKind::Phone => write!(f, "phone"),
        }
    }
}

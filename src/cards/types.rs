use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};

/// Maximum title length enforced by the editor.
pub const TITLE_MAX_CHARS: usize = 100;

/// Vestigial layout field carried for wire compatibility. Written on every
/// save, never read by logic.
const DEFAULT_WIDTH: u32 = 100;

/// A single user note as persisted on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Stable identifier assigned at creation time (epoch milliseconds).
    /// Never changes across edits.
    pub id: i64,
    pub title: String,
    pub width: u32,
    pub content: String,
}

impl Card {
    /// Create a card with a freshly assigned identifier.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: next_card_id(),
            title: title.into(),
            width: DEFAULT_WIDTH,
            content: content.into(),
        }
    }
}

/// Editor output: a card payload without an identifier. The collection
/// assigns one on append and preserves the existing one on replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDraft {
    pub title: String,
    pub content: String,
}

impl CardDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Raw persisted record. Older revisions named the body field `conteudo`
/// and omitted `id`; every field is optional so a partial record still
/// loads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoredCard {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub width: Option<u32>,
    pub content: Option<String>,
    pub conteudo: Option<String>,
}

impl StoredCard {
    /// Normalize a raw record into a `Card`.
    ///
    /// `load_millis` plus the record's position synthesizes an identifier
    /// for id-less records, so two cards in one load never collide.
    /// `content` wins over the legacy `conteudo` when both are present.
    pub fn normalize(self, load_millis: i64, position: usize) -> Card {
        Card {
            id: self.id.unwrap_or(load_millis + position as i64),
            title: self.title.unwrap_or_default(),
            width: self.width.unwrap_or(DEFAULT_WIDTH),
            content: self.content.or(self.conteudo).unwrap_or_default(),
        }
    }
}

pub(crate) fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Millisecond-based id, bumped past the last issued one so two cards
/// created in the same millisecond still get distinct ids.
fn next_card_id() -> i64 {
    static LAST_ID: AtomicI64 = AtomicI64::new(0);

    let now = now_millis();
    LAST_ID
        .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |last| {
            Some(now.max(last + 1))
        })
        .map(|last| now.max(last + 1))
        .unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_wire_shape() {
        let card = Card {
            id: 42,
            title: "Groceries".to_string(),
            width: 100,
            content: "milk".to_string(),
        };

        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["id"], 42);
        assert_eq!(json["title"], "Groceries");
        assert_eq!(json["width"], 100);
        assert_eq!(json["content"], "milk");
    }

    #[test]
    fn test_legacy_conteudo_populates_content() {
        let stored: StoredCard =
            serde_json::from_str(r#"{"id":1,"title":"Old","conteudo":"texto antigo"}"#).unwrap();

        let card = stored.normalize(0, 0);
        assert_eq!(card.content, "texto antigo");
        assert_eq!(card.width, 100);
    }

    #[test]
    fn test_content_wins_over_conteudo() {
        let stored: StoredCard = serde_json::from_str(
            r#"{"id":1,"title":"Both","content":"new","conteudo":"old"}"#,
        )
        .unwrap();

        assert_eq!(stored.normalize(0, 0).content, "new");
    }

    #[test]
    fn test_missing_id_synthesized_by_position() {
        let a = StoredCard {
            title: Some("a".to_string()),
            ..Default::default()
        };
        let b = StoredCard {
            title: Some("b".to_string()),
            ..Default::default()
        };

        let first = a.normalize(1_000, 0);
        let second = b.normalize(1_000, 1);
        assert_ne!(first.id, second.id);
        assert_eq!(first.id, 1_000);
        assert_eq!(second.id, 1_001);
    }

    #[test]
    fn test_rapid_creation_yields_distinct_ids() {
        let a = Card::new("a", "");
        let b = Card::new("b", "");
        let c = Card::new("c", "");
        assert!(a.id < b.id && b.id < c.id);
    }

    #[test]
    fn test_missing_title_tolerated_as_empty() {
        let stored: StoredCard = serde_json::from_str(r#"{"id":7,"content":"body"}"#).unwrap();
        let card = stored.normalize(0, 0);
        assert_eq!(card.title, "");
        assert_eq!(card.content, "body");
    }
}

use super::types::{Card, CardDraft};

/// Ordered card collection, insertion order = display order.
///
/// Owned at the application root and mutated only through the operations
/// below; the owner persists the full collection after each mutation as an
/// explicit side effect.
#[derive(Debug, Clone, Default)]
pub struct CardCollection {
    cards: Vec<Card>,
}

impl CardCollection {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Create: assign a fresh id and push to the end.
    pub fn append(&mut self, draft: CardDraft) {
        self.cards.push(Card::new(draft.title, draft.content));
    }

    /// Edit: replace only index `index`, keeping the existing card's id.
    /// Out-of-range indices fall back to append so the payload is never lost.
    pub fn replace(&mut self, index: usize, draft: CardDraft) {
        match self.cards.get_mut(index) {
            Some(card) => {
                card.title = draft.title;
                card.content = draft.content;
            }
            None => self.append(draft),
        }
    }

    /// Delete the card at `index`; out-of-range is a no-op.
    pub fn remove(&mut self, index: usize) {
        if index < self.cards.len() {
            self.cards.remove(index);
        }
    }
}

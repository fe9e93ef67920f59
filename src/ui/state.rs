//! Application state management
//!
//! Central state for the FlexNotes UI: the card collection and its store,
//! the active screen, the editor draft, the dictation handle, and the
//! prompter session. Everything here runs on the UI thread; dictation
//! events arrive through the handle and are drained once per frame.

use crate::cards::{CardCollection, CardDraft, CardStore};
use crate::dictation::{append_transcript, DictationCommand, DictationEvent, DictationHandle};
use crate::prompter::ScrollSession;
use crate::FlexNotesError;
use tracing::warn;

/// Active screen; the logical navigation surface is
/// Home ⇄ Editor ⇄ Prompter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Editor,
    Prompter,
}

/// Draft being edited: field values plus the original position, or no
/// position when creating a new card.
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    pub index: Option<usize>,
    pub title: String,
    pub content: String,
    /// Dictation indicator; cleared by the end-of-session event
    pub recording: bool,
}

impl EditorState {
    fn for_new_card() -> Self {
        Self::default()
    }

    fn for_existing(index: usize, title: &str, content: &str) -> Self {
        Self {
            index: Some(index),
            title: title.to_string(),
            content: content.to_string(),
            recording: false,
        }
    }
}

/// Central application state
pub struct AppState {
    /// Card collection, owned here and mutated only through explicit
    /// replace/append/remove operations
    pub collection: CardCollection,

    /// Persistence; `None` in tests that exercise pure state
    store: Option<CardStore>,

    /// Active screen
    pub screen: Screen,

    /// Editor draft
    pub editor: EditorState,

    /// Auto-scroll session; exists exactly while the prompter screen is open
    pub prompter: Option<ScrollSession>,

    /// Text shown by the prompter (the draft body, trimmed, at entry time)
    pub prompter_text: String,

    /// Dictation worker handle
    pub dictation: Option<DictationHandle>,

    /// User-facing notice; shown until dismissed
    pub notice: Option<String>,

    /// One-time flag so permission denial notices only once
    permission_notice_shown: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// State with no persistence and no dictation, for tests.
    pub fn new() -> Self {
        Self {
            collection: CardCollection::new(),
            store: None,
            screen: Screen::Home,
            editor: EditorState::default(),
            prompter: None,
            prompter_text: String::new(),
            dictation: None,
            notice: None,
            permission_notice_shown: false,
        }
    }

    /// State backed by `store`; loads the persisted collection up front.
    pub fn with_store(store: CardStore) -> Self {
        let collection = CardCollection::from_cards(store.load());
        Self {
            collection,
            store: Some(store),
            ..Self::new()
        }
    }

    pub fn with_dictation(mut self, handle: DictationHandle) -> Self {
        self.dictation = Some(handle);
        self
    }

    /// Write the full collection; failures are logged and dropped.
    pub fn persist(&self) {
        if let Some(store) = &self.store {
            if let Err(e) = store.save(self.collection.cards()) {
                warn!("Failed to persist cards: {}", e);
            }
        }
    }

    // -- navigation ---------------------------------------------------------

    /// Open the editor for the card at `index`, or for a new card.
    pub fn open_editor(&mut self, index: Option<usize>) {
        self.editor = match index.and_then(|i| self.collection.get(i).map(|c| (i, c))) {
            Some((i, card)) => EditorState::for_existing(i, &card.title, &card.content),
            None => EditorState::for_new_card(),
        };
        self.screen = Screen::Editor;
    }

    /// Leave the editor without saving.
    pub fn close_editor(&mut self) {
        self.stop_dictation();
        self.editor = EditorState::default();
        self.screen = Screen::Home;
    }

    /// Validate and save the editor draft, then return Home.
    ///
    /// A blank (whitespace-only) title blocks the save, surfaces a notice,
    /// and mutates nothing.
    pub fn save_editor(&mut self) -> bool {
        if self.editor.title.trim().is_empty() {
            self.notice = Some(
                FlexNotesError::ValidationError("The title cannot be empty.".to_string())
                    .user_message(),
            );
            return false;
        }

        let draft = CardDraft::new(
            self.editor.title.trim().to_string(),
            self.editor.content.trim().to_string(),
        );

        match self.editor.index {
            Some(i) => self.collection.replace(i, draft),
            None => self.collection.append(draft),
        }
        self.persist();

        self.close_editor();
        true
    }

    pub fn delete_card(&mut self, index: usize) {
        self.collection.remove(index);
        self.persist();
    }

    /// Enter the prompter with the current draft body. A blank body blocks
    /// entry with a notice.
    pub fn open_prompter(&mut self) -> bool {
        let text = self.editor.content.trim();
        if text.is_empty() {
            self.notice = Some("Add text before using the Prompter.".to_string());
            return false;
        }

        self.prompter_text = text.to_string();
        self.prompter = Some(ScrollSession::new());
        self.screen = Screen::Prompter;
        true
    }

    /// Close the prompter back to the editor, dropping the session — and
    /// with it any pending step.
    pub fn close_prompter(&mut self) {
        self.prompter = None;
        self.prompter_text.clear();
        self.screen = Screen::Editor;
    }

    // -- dictation ----------------------------------------------------------

    /// Mic toggle: stop when recording, otherwise start.
    pub fn toggle_dictation(&mut self) {
        let Some(handle) = &self.dictation else {
            return;
        };

        let command = if self.editor.recording {
            DictationCommand::Stop
        } else {
            // Indicator goes up immediately; a denial event takes it down
            self.editor.recording = true;
            DictationCommand::Start
        };

        if let Err(e) = handle.send(command) {
            warn!("Dictation command failed: {}", e);
            self.editor.recording = false;
        }
    }

    fn stop_dictation(&mut self) {
        if self.editor.recording {
            if let Some(handle) = &self.dictation {
                let _ = handle.send(DictationCommand::Stop);
            }
            self.editor.recording = false;
        }
    }

    /// Drain pending dictation events; called once per frame.
    pub fn poll_events(&mut self) {
        let Some(handle) = &self.dictation else {
            return;
        };

        // Collect first so the handle borrow ends before we mutate
        let mut events = Vec::new();
        while let Some(event) = handle.try_recv_event() {
            events.push(event);
        }

        for event in events {
            self.apply_dictation_event(event);
        }
    }

    /// Apply a single dictation event to the editor draft.
    pub fn apply_dictation_event(&mut self, event: DictationEvent) {
        match event {
            DictationEvent::Transcript(text) => {
                append_transcript(&mut self.editor.content, &text);
            }
            DictationEvent::Ended => {
                self.editor.recording = false;
            }
            DictationEvent::PermissionDenied => {
                self.editor.recording = false;
                if !self.permission_notice_shown {
                    self.permission_notice_shown = true;
                    self.notice = Some(FlexNotesError::PermissionDenied.user_message());
                }
            }
            DictationEvent::Error(e) => {
                warn!("Dictation error: {}", e);
                self.editor.recording = false;
            }
            DictationEvent::Shutdown => {
                self.editor.recording = false;
            }
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn state_with_cards(cards: Vec<Card>) -> AppState {
        let mut state = AppState::new();
        state.collection = CardCollection::from_cards(cards);
        state
    }

    #[test]
    fn test_blank_title_blocks_save_without_mutation() {
        let mut state = AppState::new();
        state.open_editor(None);
        state.editor.title = "   ".to_string();
        state.editor.content = "some body".to_string();

        assert!(!state.save_editor());
        assert!(state.collection.is_empty());
        assert!(state.notice.is_some());
        assert_eq!(state.screen, Screen::Editor);
    }

    #[test]
    fn test_save_new_card_appends_and_returns_home() {
        let mut state = AppState::new();
        state.open_editor(None);
        state.editor.title = "  Shopping  ".to_string();
        state.editor.content = " milk \n".to_string();

        assert!(state.save_editor());
        assert_eq!(state.collection.len(), 1);
        assert_eq!(state.collection.cards()[0].title, "Shopping");
        assert_eq!(state.collection.cards()[0].content, "milk");
        assert_eq!(state.screen, Screen::Home);
    }

    #[test]
    fn test_save_existing_card_replaces_in_place() {
        let mut state = state_with_cards(vec![
            Card { id: 1, title: "A".into(), width: 100, content: "a".into() },
            Card { id: 2, title: "B".into(), width: 100, content: "b".into() },
        ]);

        state.open_editor(Some(1));
        assert_eq!(state.editor.title, "B");
        state.editor.content = "b edited".to_string();

        assert!(state.save_editor());
        assert_eq!(state.collection.len(), 2);
        assert_eq!(state.collection.cards()[1].id, 2);
        assert_eq!(state.collection.cards()[1].content, "b edited");
        assert_eq!(state.collection.cards()[0].title, "A");
    }

    #[test]
    fn test_open_editor_with_stale_index_creates_new() {
        let mut state = AppState::new();
        state.open_editor(Some(3));
        assert_eq!(state.editor.index, None);
    }

    #[test]
    fn test_blank_body_blocks_prompter() {
        let mut state = AppState::new();
        state.open_editor(None);
        state.editor.content = "  \n ".to_string();

        assert!(!state.open_prompter());
        assert!(state.prompter.is_none());
        assert!(state.notice.is_some());
    }

    #[test]
    fn test_prompter_session_lifecycle() {
        let mut state = AppState::new();
        state.open_editor(None);
        state.editor.content = "Read me".to_string();

        assert!(state.open_prompter());
        assert_eq!(state.screen, Screen::Prompter);
        assert_eq!(state.prompter_text, "Read me");
        assert!(state.prompter.is_some());

        state.close_prompter();
        assert_eq!(state.screen, Screen::Editor);
        assert!(state.prompter.is_none());
    }

    #[test]
    fn test_transcripts_append_space_separated() {
        let mut state = AppState::new();
        state.open_editor(None);

        state.apply_dictation_event(DictationEvent::Transcript("buy milk".to_string()));
        state.apply_dictation_event(DictationEvent::Transcript("and bread".to_string()));
        assert_eq!(state.editor.content, "buy milk and bread");
    }

    #[test]
    fn test_ended_clears_recording_indicator() {
        let mut state = AppState::new();
        state.editor.recording = true;
        state.apply_dictation_event(DictationEvent::Ended);
        assert!(!state.editor.recording);
    }

    #[test]
    fn test_permission_denied_notices_once() {
        let mut state = AppState::new();
        state.editor.recording = true;

        state.apply_dictation_event(DictationEvent::PermissionDenied);
        assert!(!state.editor.recording);
        assert!(state.notice.is_some());

        state.notice = None;
        state.apply_dictation_event(DictationEvent::PermissionDenied);
        assert!(state.notice.is_none(), "denial notices only once");
    }

    #[test]
    fn test_delete_card() {
        let mut state = state_with_cards(vec![
            Card { id: 1, title: "A".into(), width: 100, content: "".into() },
            Card { id: 2, title: "B".into(), width: 100, content: "".into() },
        ]);

        state.delete_card(0);
        assert_eq!(state.collection.len(), 1);
        assert_eq!(state.collection.cards()[0].id, 2);
    }
}

//! UI components for the FlexNotes screens

mod card_list;
mod editor;
mod prompter_view;

pub use card_list::CardList;
pub use editor::Editor;
pub use prompter_view::PrompterView;

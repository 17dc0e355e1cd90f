pub mod note_editor;
pub mod note_list;
pub mod ui;

pub use note_editor::NoteEditor;
pub use note_list::NoteList;

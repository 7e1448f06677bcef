// Model - Musical data model of the composer grid

pub mod color;
pub mod key;
pub mod note;
pub mod sheet;
pub mod template;

pub use color::NoteColor;
pub use key::{Key, Transpose};
pub use note::Note;
pub use sheet::{SHEET_CAPACITY, paginate};
pub use template::Template;

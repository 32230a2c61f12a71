pub mod bookmark;
pub mod collection;

pub use bookmark::{BookmarkRecord, BookmarkSet};
pub use collection::Collections;

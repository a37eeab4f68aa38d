//! Story data records edited by the authoring tool.
//!
//! The records here are owned by the project file. Editors mutate them in
//! place and ask the owner to persist; nothing in this crate knows about UI.

pub mod error;
pub mod model;

pub use error::LibraryError;
pub use model::dialogue::{DialogueNode, DialogueOption, DialogueTree};
pub use model::layout::EditorLayout;
pub use model::location::{Choice, Location, NAVIGATE_ACTION};
pub use model::project::Project;

//! Lyricsmith Core - reference tables, style prompts and selection state

pub mod catalog;
pub mod copy;
pub mod error;
pub mod request;
pub mod state;
pub mod style;
pub mod tags;

pub use catalog::{Catalog, Category, EntryKind, ReferenceTable};
pub use copy::{master_prompt, CopyIndicators, CopyTarget, COPY_INDICATOR_DURATION};
pub use error::StudioError;
pub use request::GenerationRequest;
pub use state::{SelectionState, FILE_TOPIC_PREFIX};
pub use style::{compose_style, StyleSelection};
pub use tags::clean_prompt_tags;

//! Knowledge lookup implementations

mod in_memory;
mod loader;

pub use in_memory::{InMemoryKnowledgeBase, ManualPassage, DEFAULT_TOP_K};
pub use loader::{load_manuals, split_passages};

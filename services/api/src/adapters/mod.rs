pub mod fs_preview;
pub mod memory_store;

pub use fs_preview::FsPreviewStore;
pub use memory_store::MemoryExtractionStore;

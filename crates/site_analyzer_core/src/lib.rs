pub mod analyzer;
pub mod domain;
pub mod ports;
pub mod render;

pub use domain::{
    Asset, Extraction, ExtractionReport, Framework, PreviewHandle, PreviewSource,
    DEFAULT_LIST_LIMIT,
};
pub use ports::{ExtractionStore, PortError, PortResult, PreviewStore};

// Adapters layer: concrete implementations of the domain ports (submission sink, document, viewport).

pub mod document;
pub mod sink;
pub mod viewport;

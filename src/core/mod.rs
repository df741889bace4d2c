/// Field descriptors, field values and emptiness rules
pub mod field;

/// Forward and reverse field mapping resolution
pub mod mapping;

/// The record abstraction walked by the renderer
pub mod record;

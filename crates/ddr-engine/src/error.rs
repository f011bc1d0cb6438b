use thiserror::Error;

/// The engine's only hard failure; every other malformed-input condition
/// degrades into sentinel sections instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// No findings survived normalization, validation and merging. A
    /// client-correctable condition (empty or unusable input), not a system
    /// fault.
    #[error("extraction failed: no observations detected in the supplied documents")]
    EmptyExtraction,
}

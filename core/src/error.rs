//! Error type for template construction and application.

use crate::jamo::JamoClass;
use crate::syllable::Syllable;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TemplateError>;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template not found: '{name}'")]
    TemplateNotFound { name: String },

    #[error(
        "template '{template}' selected {class} variant {variant} (declares {declared}) for '{syllable}' {indices:?}"
    )]
    VariantOutOfRange {
        template: String,
        class: JamoClass,
        variant: usize,
        declared: usize,
        syllable: Syllable,
        /// (choseong, jungseong, jongseong) alphabet indices of the input.
        indices: (usize, usize, usize),
    },

    #[error("no glyph at syllable codepoint U+{codepoint:04X}")]
    MissingSyllableGlyph { codepoint: u32 },

    #[error("glyph id {id} already in use (template '{template}', {class} grid)")]
    IdCollision {
        id: u32,
        template: String,
        class: JamoClass,
    },

    #[error("placeholder range starting at {start} with {count} ids overflows the id space")]
    PointerOverflow { start: u32, count: usize },

    #[error("invalid template '{template}': {reason}")]
    InvalidTemplate { template: String, reason: String },
}

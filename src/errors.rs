//! Error types with rich diagnostics using miette
//!
//! Reconciling a marker's position never fails; the only fallible input is
//! user-supplied glyph path data, whose errors carry source spans.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Errors raised while turning glyph path data into a [`Geometry`](crate::Geometry)
#[derive(Error, Diagnostic, Debug)]
pub enum GlyphError {
    #[error("invalid glyph path: {message}")]
    #[diagnostic(
        code(scatter_marker::glyph::syntax),
        help("glyph paths accept M, L, H, V and Z commands (upper or lower case)")
    )]
    Syntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("glyph coordinate is not finite: {value}")]
    #[diagnostic(code(scatter_marker::glyph::non_finite))]
    NonFinite {
        value: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("overflows to infinity")]
        span: SourceSpan,
    },
}

//! Typed error variants for renderer construction and surface handling.
//!
//! Rendering itself never returns errors: per-row failures (a missing
//! line, an unclassifiable codepoint) degrade to skips so a frame always
//! completes and dirty state is always cleared. Only setup can fail.

use thiserror::Error;

/// Errors produced while constructing or reconfiguring a renderer.
#[derive(Debug, Error)]
pub enum RendererError {
    /// The surface has no usable 2D drawing context.
    ///
    /// This is fatal: without a context the renderer cannot measure
    /// fonts or paint, so the constructor refuses to produce an
    /// instance the caller would have to babysit.
    #[error("surface has no usable 2D drawing context")]
    ContextUnavailable,
}

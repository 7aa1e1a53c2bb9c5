//! Renderer/Exporter: turns a finished `Portfolio` into a static site.

pub mod bundle;
pub mod html;

use thiserror::Error;

pub use bundle::build_bundle;
pub use html::render_html;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

use std::path::PathBuf;

use thiserror::Error;

/// Failure writing a rendered frame out.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to encode {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

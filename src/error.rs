use thiserror::Error;

/// Everything that can go wrong before the render loop starts.
///
/// All variants are fatal: `main` reports them and exits nonzero instead of
/// entering the loop with a half-built pipeline.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("window creation failed: {0}")]
    WindowCreationFailed(#[from] winit::error::OsError),

    #[error("graphics device unavailable: {0}")]
    GraphicsLoaderFailed(String),

    #[error("shader compilation failed:\n{0}")]
    ShaderCompileFailed(String),

    #[error("program link failed: {0}")]
    ProgramLinkFailed(String),
}

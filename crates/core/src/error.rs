use thiserror::Error;

/// Errors that can occur while compiling a markdown document.
#[derive(Debug, Error)]
pub enum CompileError {
    /// Compile options carried no usable document path.
    #[error("compile options require a non-empty `filepath`")]
    MissingFilepath,
    /// The markdown engine rejected the document.
    #[error("markdown parse error: {message}")]
    Parse {
        /// Error message reported by the parser
        message: String,
    },
}

impl CompileError {
    /// Create a parse error from the engine's message
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}

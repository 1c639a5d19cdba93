use std::path::PathBuf;

/// The plugin error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The host asked for an output file the generated code cannot live in.
    #[error(r#"Plugin "typescript-swr" requires extension to be ".ts"!"#)]
    InvalidOutputExtension { path: PathBuf },
}

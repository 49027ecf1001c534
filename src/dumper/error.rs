use thiserror::Error;

#[derive(Error, Debug)]
pub enum DumpError {
    #[error("Failed to write entry for {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to flush output: {0}")]
    Flush(#[source] std::io::Error),
}

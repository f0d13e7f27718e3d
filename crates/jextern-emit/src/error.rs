use std::io;

/// Errors raised while emitting a top-level declaration.
///
/// Unmappable constructs never fail emission; they become sentinel text in
/// the output. Only sink I/O and flattening clashes are errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot open output for `{declaration}`: {source}")]
    SinkUnavailable {
        declaration: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output for `{declaration}`: {source}")]
    Write {
        declaration: String,
        #[source]
        source: io::Error,
    },

    #[error("`{second}` flattens to `{flattened}`, which is already taken by `{first}`")]
    NameCollision {
        flattened: String,
        first: String,
        second: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

use std::error::Error as StdError;

type Source = Box<dyn StdError + Send + Sync>;

/// A failed Euler run, tagged with which side failed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("model failed: {0}")]
    Model(#[source] Source),

    #[error("problem failed: {0}")]
    Problem(#[source] Source),
}

impl Error {
    pub(crate) fn model(err: impl StdError + Send + Sync + 'static) -> Self {
        Self::Model(Box::new(err))
    }

    pub(crate) fn problem(err: impl StdError + Send + Sync + 'static) -> Self {
        Self::Problem(Box::new(err))
    }

    /// Discards the tag, for callers that downcast to their own error type.
    #[must_use]
    pub fn into_source(self) -> Source {
        match self {
            Self::Model(source) | Self::Problem(source) => source,
        }
    }
}

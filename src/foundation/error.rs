pub type BurstResult<T> = Result<T, BurstError>;

#[derive(thiserror::Error, Debug)]
pub enum BurstError {
    #[error("config error: {0}")]
    Config(String),

    #[error("base image error: {0}")]
    BaseImage(String),

    #[error("composition error: {0}")]
    Compose(String),

    #[error("optimize error: {0}")]
    Optimize(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BurstError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn base_image(msg: impl Into<String>) -> Self {
        Self::BaseImage(msg.into())
    }

    pub fn compose(msg: impl Into<String>) -> Self {
        Self::Compose(msg.into())
    }

    pub fn optimize(msg: impl Into<String>) -> Self {
        Self::Optimize(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

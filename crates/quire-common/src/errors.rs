#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("settings parse error: {0}")]
    ParseError(String),

    #[error("settings write error: {0}")]
    WriteError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("path error: {0}")]
    PathError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("theme not found: {0}")]
    NotFound(String),

    #[error("theme already exists: {0}")]
    AlreadyExists(String),

    #[error("image error: {0}")]
    Image(String),
}

#[derive(Debug, thiserror::Error)]
pub enum QuireError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

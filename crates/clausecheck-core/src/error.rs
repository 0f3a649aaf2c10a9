use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalogue {path}: {source}")]
    Read {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("catalogue parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("catalogue has no categories")]
    Empty,

    #[error("category with an empty name")]
    UnnamedCategory,

    #[error("duplicate category: {0}")]
    DuplicateCategory(String),

    #[error("empty phrase in category: {0}")]
    EmptyPhrase(String),

    #[error("empty institution name")]
    EmptyInstitution,
}

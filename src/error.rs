use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("index name is empty; set PINECONE_INDEX_NAME or fix the compiled default")]
    EmptyIndexName,

    #[error("required environment variable {var} is not set")]
    MissingApiKey { var: &'static str },

    #[error("environment variable {var} is not valid unicode")]
    InvalidUnicode { var: &'static str },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

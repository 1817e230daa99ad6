//! Pinecone settings for the PDF-chat vector pipeline.
//!
//! This crate owns the names and geometry of the Pinecone index the pipeline
//! stores its document embeddings in: the index identifier, the (optional)
//! namespace, the vector dimension, and the distance metric. It does no
//! vector-store I/O itself; components that construct a client pull a
//! validated [`PineconeConfig`] from here and handle their own runtime
//! failures.
//!
//! ```rust,no_run
//! use pinecone_config::{pinecone, PineconeConfig};
//!
//! let config = PineconeConfig::from_env()?;
//! assert_eq!(pinecone::PINECONE_INDEX_NAME, "pdf");
//! // An empty namespace means the index's default namespace.
//! assert_eq!(config.namespace(), None);
//! # Ok::<(), pinecone_config::ConfigError>(())
//! ```

pub mod config;
pub mod error;
pub mod pinecone;

pub use config::PineconeConfig;
pub use error::{ConfigError, Result};

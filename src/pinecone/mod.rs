pub const PINECONE_INDEX_NAME: &str = "pdf";
pub const PINECONE_NAME_SPACE: &str = ""; // namespace is optional for your vectors
pub const VECTOR_SIZE: u64 = 1536; // text-embedding-ada-002 dimension
pub const DISTANCE_METRIC: &str = "cosine";
pub const DEFAULT_ENVIRONMENT: &str = "us-west4-gcp";

use crate::model::{FetchError, FetchRequest};

#[async_trait::async_trait]
pub trait RecordFetcher: Send + Sync {
    /// Returns the raw response body of a successful request.
    async fn fetch(&self, req: &FetchRequest) -> Result<String, FetchError>;
}

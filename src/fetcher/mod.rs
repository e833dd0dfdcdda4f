pub mod moenv;
pub mod traits;

pub use moenv::MoenvFetcher;
pub use traits::RecordFetcher;

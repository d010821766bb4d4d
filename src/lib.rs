// Library exports for idmerge
pub mod account;
pub mod error;
pub mod forest;
pub mod merge;
pub mod record_io;
pub mod tail;
pub mod union_find;

pub use account::Account;
pub use error::MergeError;
pub use forest::IdentifierForest;
pub use merge::{merge_accounts, AccountMerger};
pub use record_io::RecordFormat;

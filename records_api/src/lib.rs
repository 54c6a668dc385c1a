mod client;
mod errors;
mod query;
mod transform;
pub mod types;
pub use self::client::{Client, DEFAULT_BASE_URL, RECORDS_PATH};
pub use self::errors::Error;
pub use self::query::{Query, QueryCommon, QueryParams, RecordQuery, PAGE_SIZE};
pub use self::transform::{
    closed_primary_count, extract_ids, extract_open, is_primary_color, transform_data, MAX_PAGE,
};

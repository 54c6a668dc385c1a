mod common;
pub use self::common::{Query, QueryCommon, PAGE_SIZE};

mod record;
pub use self::record::{QueryParams, RecordQuery};

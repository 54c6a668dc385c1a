mod record;
pub use self::record::{Disposition, Record, RecordID};

mod summary;
pub use self::summary::{OpenRecord, Summary};

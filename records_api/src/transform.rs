//! Pure reshaping of a fetched batch into a [`Summary`].

use crate::{
    query::PAGE_SIZE,
    types::{OpenRecord, Record, RecordID, Summary},
};

/// Highest page the service is assumed to serve.
pub const MAX_PAGE: i64 = 50;

const PRIMARY_COLORS: [&str; 3] = ["red", "yellow", "blue"];

/// Returns true if `color` is red, yellow or blue, ignoring case.
pub fn is_primary_color(color: &str) -> bool {
    let color = color.to_lowercase();
    PRIMARY_COLORS.contains(&color.as_str())
}

pub fn extract_ids(data: &[Record]) -> Vec<RecordID> {
    data.iter().map(|record| record.id).collect()
}

/// Keeps the open records, annotating each with [`is_primary_color`].
pub fn extract_open(data: &[Record]) -> Vec<OpenRecord> {
    data.iter()
        .filter(|record| record.is_open())
        .map(|record| OpenRecord {
            record: record.clone(),
            is_primary: is_primary_color(&record.color),
        })
        .collect()
}

pub fn closed_primary_count(data: &[Record]) -> usize {
    data.iter()
        .filter(|record| record.is_closed() && is_primary_color(&record.color))
        .count()
}

/// Builds the [`Summary`] for a batch fetched from `page`.
///
/// `next_page` assumes a batch shorter than [`PAGE_SIZE`] is the last one
/// and that there are never more than [`MAX_PAGE`] pages. Neither is
/// guaranteed by the service.
pub fn transform_data(data: &[Record], page: i64) -> Summary {
    let ids = extract_ids(data);
    let next_page = if page >= MAX_PAGE || (ids.len() as i64) < PAGE_SIZE {
        None
    } else {
        Some(page + 1)
    };

    Summary {
        open: extract_open(data),
        closed_primary_count: closed_primary_count(data),
        previous_page: if page <= 1 { None } else { Some(page - 1) },
        next_page,
        ids,
    }
}

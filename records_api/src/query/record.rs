use serde::Serialize;
use url::Url;

use super::common::{Query, QueryCommon, PAGE_SIZE};

/// Wire name of the repeated color filter parameter.
const COLOR_KEY: &str = "color[]";

/// Query for one page of the records collection, optionally filtered by color.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordQuery {
    pub common: QueryCommon,
    pub colors: Vec<String>,
}

impl Query for RecordQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Option<Url> {
        let params = self.params()?;
        let mut url = url.clone();
        url.query_pairs_mut().extend_pairs(params.pairs());
        Some(url)
    }
}

impl RecordQuery {
    pub fn page(&self) -> i64 {
        self.common.page
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.colors.push(color.to_string());
        self
    }
    pub fn with_colors(mut self, colors: &[String]) -> Self {
        self.colors.extend_from_slice(colors);
        self
    }

    /// The request parameters this query resolves to, or `None` if the
    /// page's offset overflows.
    pub fn params(&self) -> Option<QueryParams> {
        QueryParams::new(self.common.page, &self.colors)
    }
}

/// Request parameters for one page of records.
///
/// `color` is only present when at least one color filter was given, and is
/// sent as one repeated key per value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QueryParams {
    pub limit: i64,
    pub offset: i64,
    #[serde(rename = "color", skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
}

impl QueryParams {
    /// Returns `None` when `(page - 1) * PAGE_SIZE` does not fit in an `i64`.
    pub fn new(page: i64, colors: &[String]) -> Option<Self> {
        Some(Self {
            limit: PAGE_SIZE,
            offset: QueryCommon { page }.offset()?,
            colors: if colors.is_empty() {
                None
            } else {
                Some(colors.to_vec())
            },
        })
    }

    /// Flattens the parameters into `(key, value)` pairs in wire order.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
        ];
        if let Some(colors) = &self.colors {
            pairs.extend(colors.iter().map(|color| (COLOR_KEY, color.clone())));
        }
        pairs
    }
}

use serde::{Deserialize, Serialize};

use super::enums::sort_orders::SortOrder;

/// A dotted `field.order` sort key, e.g. `vote_average.desc` or
/// `timestamp.asc`. The field half is interpreted by whichever view applies
/// the key; the order half must be `asc` or `desc`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SortKey {
    pub field: String,
    pub order: SortOrder,
}

impl SortKey {
    pub fn new(field: impl Into<String>, order: SortOrder) -> Self {
        Self {
            field: field.into(),
            order,
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let (field, order) = raw.rsplit_once('.')?;
        if field.is_empty() {
            return None;
        }
        Some(Self {
            field: field.to_string(),
            order: SortOrder::from_str(order)?,
        })
    }
}

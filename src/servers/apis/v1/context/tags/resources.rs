//! API resources for the [`tags`](crate::servers::apis::v1::context::tags)
//! API context.
use serde::{Deserialize, Serialize};

use crate::core::catalog;

/// A tag.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    /// Hex color code, for example `#E26C2D`.
    pub color: String,
    pub slug: String,
}

impl From<catalog::Tag> for Tag {
    fn from(tag: catalog::Tag) -> Self {
        Tag {
            id: tag.id,
            name: tag.name,
            color: tag.color,
            slug: tag.slug,
        }
    }
}

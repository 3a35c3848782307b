use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

use crate::v1::database::Database;

/// Settings of the domain services.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
pub struct Core {
    // Database configuration.
    #[serde(default = "Database::default")]
    pub database: Database,

    // Page sizes for the list endpoints.
    #[serde(default = "PaginationPolicy::default")]
    pub pagination: PaginationPolicy,

    // Where uploaded recipe images are kept and how they are linked.
    #[serde(default = "Media::default")]
    pub media: Media,

    // Shopping list export.
    #[serde(default = "ShoppingList::default")]
    pub shopping_list: ShoppingList,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
pub struct PaginationPolicy {
    /// Results per page when the client does not send a `limit`.
    #[serde(default = "PaginationPolicy::default_page_size")]
    pub default_page_size: u32,

    /// Upper bound for the `limit` sent by clients.
    #[serde(default = "PaginationPolicy::default_max_page_size")]
    pub max_page_size: u32,
}

impl Default for PaginationPolicy {
    fn default() -> Self {
        Self {
            default_page_size: Self::default_page_size(),
            max_page_size: Self::default_max_page_size(),
        }
    }
}

impl PaginationPolicy {
    fn default_page_size() -> u32 {
        6
    }

    fn default_max_page_size() -> u32 {
        100
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Media {
    /// Directory where uploaded files are written.
    #[serde(default = "Media::default_root")]
    pub root: Utf8PathBuf,

    /// URL path prefix the files are served under. It must start and end
    /// with a slash.
    #[serde(default = "Media::default_url_prefix")]
    pub url_prefix: String,
}

impl Default for Media {
    fn default() -> Self {
        Self {
            root: Self::default_root(),
            url_prefix: Self::default_url_prefix(),
        }
    }
}

impl Media {
    fn default_root() -> Utf8PathBuf {
        Utf8PathBuf::from("./storage/foodgram/media")
    }

    fn default_url_prefix() -> String {
        String::from("/media/")
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct ShoppingList {
    /// A TrueType font used to render the PDF. It defaults to the `DejaVu Sans`
    /// font shipped in `share/default/fonts`, which covers Cyrillic. Without
    /// a font the built-in Helvetica font is used, which only covers Latin-1
    /// characters.
    #[serde(default = "ShoppingList::default_font_path")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_path: Option<Utf8PathBuf>,
}

impl Default for ShoppingList {
    fn default() -> Self {
        Self {
            font_path: Self::default_font_path(),
        }
    }
}

impl ShoppingList {
    #[allow(clippy::unnecessary_wraps)]
    fn default_font_path() -> Option<Utf8PathBuf> {
        Some(Utf8PathBuf::from("./share/default/fonts/DejaVuSans.ttf"))
    }
}

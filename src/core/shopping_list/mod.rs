//! The shopping list: the ingredients of every recipe in the user's shopping
//! cart, summed per ingredient and unit.
pub mod pdf;

use serde::Serialize;
use tracing::debug;

use super::error::Error;
use super::users::User;
use super::Foodgram;

/// Content type of the exported document.
pub const CONTENT_TYPE: &str = "application/pdf";

/// File name suggested to the client for the exported document.
pub const FILE_NAME: &str = "shopping_list.pdf";

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ShoppingListItem {
    pub name: String,
    pub measurement_unit: String,
    pub amount: u64,
}

impl Foodgram {
    /// It returns the aggregated ingredients of the user's shopping cart,
    /// ordered by name.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the database query fails.
    pub fn shopping_list(&self, user: &User) -> Result<Vec<ShoppingListItem>, Error> {
        Ok(self.database.load_shopping_list(user.id)?)
    }

    /// It renders the user's shopping list as a PDF document.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the list cannot be loaded or rendered.
    pub fn shopping_list_pdf(&self, user: &User) -> Result<Vec<u8>, Error> {
        let items = self.shopping_list(user)?;

        let document = pdf::render(&items, self.shopping_list_font.as_deref())?;

        debug!(user_id = user.id, items = items.len(), bytes = document.len(), "shopping list rendered");

        Ok(document)
    }
}

//! Category endpoints.

use crate::client::ApiClient;
use crate::error::FetchError;
use atelier_commerce::catalog::Category;
use atelier_commerce::CategoryId;

impl ApiClient {
    /// List all categories in navigation order.
    pub fn list_categories(&self) -> Result<Vec<Category>, FetchError> {
        self.send(self.get("/categories"))?.error_for_status()?.json()
    }

    /// Create a category (admin).
    pub fn create_category(&self, category: &Category) -> Result<Category, FetchError> {
        self.send(self.post("/categories").json(category)?)?
            .error_for_status()?
            .json()
    }

    /// Update a category (admin).
    pub fn update_category(&self, category: &Category) -> Result<Category, FetchError> {
        self.send(
            self.put(&format!("/categories/{}", category.id))
                .json(category)?,
        )?
        .error_for_status()?
        .json()
    }

    /// Delete a category (admin).
    pub fn delete_category(&self, id: &CategoryId) -> Result<(), FetchError> {
        self.send(self.delete(&format!("/categories/{}", id)))?
            .error_for_status()?;
        Ok(())
    }
}

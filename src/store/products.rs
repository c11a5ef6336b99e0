use std::sync::Arc;

use crate::api::{ApiError, ProductionApi};
use crate::models::{Product, ProductPayload};

/// Cached product collection plus the status of the last operation.
pub struct ProductsStore {
    api: Arc<dyn ProductionApi>,
    items: Vec<Product>,
    loading: bool,
    error: Option<String>,
}

impl ProductsStore {
    pub fn new(api: Arc<dyn ProductionApi>) -> Self {
        Self {
            api,
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Normalized message from the last failed mutation, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Called whenever a create/edit form is (re)opened so a stale failure
    /// message never leaks into a new attempt.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Replaces the collection with the server's current list.
    ///
    /// A failed refresh keeps whatever is already cached and records
    /// nothing: stale data beats a blank table.
    pub async fn fetch_all(&mut self) {
        self.loading = true;
        self.error = None;
        match self.api.list_products().await {
            Ok(items) => self.items = items,
            Err(err) => tracing::warn!("product list refresh failed: {}", err),
        }
        self.loading = false;
    }

    /// Creates a product, appends the server-acknowledged entity and
    /// returns it.
    pub async fn create(&mut self, payload: &ProductPayload) -> Result<Product, ApiError> {
        match self.api.create_product(payload).await {
            Ok(created) => {
                self.items.push(created.clone());
                Ok(created)
            }
            Err(err) => self.record(err),
        }
    }

    /// Updates a product, replacing the cached item in place.
    ///
    /// The match is on the identity the server returned, not the requested
    /// id; a returned entity no longer in the cache is a no-op.
    pub async fn update(&mut self, id: i64, payload: &ProductPayload) -> Result<(), ApiError> {
        match self.api.update_product(id, payload).await {
            Ok(updated) => {
                if let Some(slot) = self
                    .items
                    .iter_mut()
                    .find(|p| p.product_id == updated.product_id)
                {
                    *slot = updated;
                }
                Ok(())
            }
            Err(err) => self.record(err),
        }
    }

    /// Deletes a product and removes it from the cache.
    pub async fn delete(&mut self, id: i64) -> Result<(), ApiError> {
        match self.api.delete_product(id).await {
            Ok(()) => {
                self.items.retain(|p| p.product_id != id);
                Ok(())
            }
            Err(err) => self.record(err),
        }
    }

    fn record<T>(&mut self, err: ApiError) -> Result<T, ApiError> {
        self.error = Some(err.to_string());
        Err(err)
    }
}

use std::sync::Arc;

use crate::api::{ApiError, ProductionApi};
use crate::models::{RawMaterial, RawMaterialPayload};

/// Cached raw-material catalog plus the status of the last operation.
///
/// The form module reads this collection to resolve material names back to
/// ids; it never mutates it.
pub struct RawMaterialsStore {
    api: Arc<dyn ProductionApi>,
    items: Vec<RawMaterial>,
    loading: bool,
    error: Option<String>,
}

impl RawMaterialsStore {
    pub fn new(api: Arc<dyn ProductionApi>) -> Self {
        Self {
            api,
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub fn items(&self) -> &[RawMaterial] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Replaces the catalog with the server's current list; a failed
    /// refresh keeps the cached catalog and records nothing.
    pub async fn fetch_all(&mut self) {
        self.loading = true;
        self.error = None;
        match self.api.list_raw_materials().await {
            Ok(items) => self.items = items,
            Err(err) => tracing::warn!("raw material list refresh failed: {}", err),
        }
        self.loading = false;
    }

    /// Creates a raw material, appends the server-acknowledged entity and
    /// returns it.
    pub async fn create(&mut self, payload: &RawMaterialPayload) -> Result<RawMaterial, ApiError> {
        match self.api.create_raw_material(payload).await {
            Ok(created) => {
                self.items.push(created.clone());
                Ok(created)
            }
            Err(err) => self.record(err),
        }
    }

    pub async fn update(&mut self, id: i64, payload: &RawMaterialPayload) -> Result<(), ApiError> {
        match self.api.update_raw_material(id, payload).await {
            Ok(updated) => {
                if let Some(slot) = self.items.iter_mut().find(|m| m.id == updated.id) {
                    *slot = updated;
                }
                Ok(())
            }
            Err(err) => self.record(err),
        }
    }

    /// Deletes a raw material. The server rejects this with a conflict when
    /// the material is still referenced by a product; that failure lands in
    /// `error` like any other mutation failure.
    pub async fn delete(&mut self, id: i64) -> Result<(), ApiError> {
        match self.api.delete_raw_material(id).await {
            Ok(()) => {
                self.items.retain(|m| m.id != id);
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

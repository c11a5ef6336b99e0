//! Entity stores: the client-side cache of the server's collections.
//!
//! Each store owns one entity type's items plus the status of the last
//! operation against it. Mutations take `&mut self`, so within one
//! [`AppState`] a store applies at most one operation at a time; the only
//! suspension point is the network call itself.

mod products;
mod raw_materials;
mod suggestions;

use std::sync::Arc;

pub use products::ProductsStore;
pub use raw_materials::RawMaterialsStore;
pub use suggestions::SuggestionsStore;

use crate::api::ProductionApi;

/// All client-side state, created once at startup and passed by reference.
///
/// `api` is exposed for the one-off reads (get by id) that bypass the
/// cached collections.
pub struct AppState {
    pub api: Arc<dyn ProductionApi>,
    pub products: ProductsStore,
    pub raw_materials: RawMaterialsStore,
    pub suggestions: SuggestionsStore,
}

impl AppState {
    pub fn new(api: Arc<dyn ProductionApi>) -> Self {
        Self {
            products: ProductsStore::new(api.clone()),
            raw_materials: RawMaterialsStore::new(api.clone()),
            suggestions: SuggestionsStore::new(api.clone()),
            api,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! A scriptable [`ProductionApi`] stub: each call pops the next queued
    //! result for its method group.

    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::api::{ApiError, ProductionApi};
    use crate::models::{
        Product, ProductPayload, RawMaterial, RawMaterialPayload, SuggestionReport,
    };

    #[derive(Default)]
    pub struct StubApi {
        pub product_lists: Mutex<VecDeque<Result<Vec<Product>, ApiError>>>,
        pub products: Mutex<VecDeque<Result<Product, ApiError>>>,
        pub material_lists: Mutex<VecDeque<Result<Vec<RawMaterial>, ApiError>>>,
        pub materials: Mutex<VecDeque<Result<RawMaterial, ApiError>>>,
        pub deletions: Mutex<VecDeque<Result<(), ApiError>>>,
        pub suggestions: Mutex<VecDeque<Result<SuggestionReport, ApiError>>>,
    }

    impl StubApi {
        pub fn new() -> Self {
            Self::default()
        }

        fn pop<T>(queue: &Mutex<VecDeque<Result<T, ApiError>>>) -> Result<T, ApiError> {
            queue
                .lock()
                .unwrap()
                .pop_front()
                .expect("stub has no queued result for this call")
        }
    }

    #[async_trait]
    impl ProductionApi for StubApi {
        async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
            Self::pop(&self.product_lists)
        }

        async fn get_product(&self, _id: i64) -> Result<Product, ApiError> {
            Self::pop(&self.products)
        }

        async fn create_product(&self, _payload: &ProductPayload) -> Result<Product, ApiError> {
            Self::pop(&self.products)
        }

        async fn update_product(
            &self,
            _id: i64,
            _payload: &ProductPayload,
        ) -> Result<Product, ApiError> {
            Self::pop(&self.products)
        }

        async fn delete_product(&self, _id: i64) -> Result<(), ApiError> {
            Self::pop(&self.deletions)
        }

        async fn get_suggestions(&self) -> Result<SuggestionReport, ApiError> {
            Self::pop(&self.suggestions)
        }

        async fn list_raw_materials(&self) -> Result<Vec<RawMaterial>, ApiError> {
            Self::pop(&self.material_lists)
        }

        async fn get_raw_material(&self, _id: i64) -> Result<RawMaterial, ApiError> {
            Self::pop(&self.materials)
        }

        async fn create_raw_material(
            &self,
            _payload: &RawMaterialPayload,
        ) -> Result<RawMaterial, ApiError> {
            Self::pop(&self.materials)
        }

        async fn update_raw_material(
            &self,
            _id: i64,
            _payload: &RawMaterialPayload,
        ) -> Result<RawMaterial, ApiError> {
            Self::pop(&self.materials)
        }

        async fn delete_raw_material(&self, _id: i64) -> Result<(), ApiError> {
            Self::pop(&self.deletions)
        }
    }
}

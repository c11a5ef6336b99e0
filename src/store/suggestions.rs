use std::sync::Arc;

use crate::api::{ApiError, ProductionApi};
use crate::models::SuggestionReport;

/// Holds the latest production-suggestion report.
///
/// The report is immutable once received. A new fetch discards the previous
/// report before the request is sent, so a calculation in progress never
/// shows stale numbers.
pub struct SuggestionsStore {
    api: Arc<dyn ProductionApi>,
    data: Option<SuggestionReport>,
    loading: bool,
    error: Option<String>,
}

impl SuggestionsStore {
    pub fn new(api: Arc<dyn ProductionApi>) -> Self {
        Self {
            api,
            data: None,
            loading: false,
            error: None,
        }
    }

    pub fn data(&self) -> Option<&SuggestionReport> {
        self.data.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Requests a fresh report, replacing the previous one entirely, and
    /// returns a borrow of the stored result.
    pub async fn fetch(&mut self) -> Result<&SuggestionReport, ApiError> {
        self.loading = true;
        self.error = None;
        self.data = None;
        let result = self.api.get_suggestions().await;
        self.loading = false;
        match result {
            Ok(report) => Ok(&*self.data.insert(report)),
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::StubApi;
    use super::*;
    use crate::models::SuggestionLine;

    fn report(total: f64) -> SuggestionReport {
        SuggestionReport {
            total_value: total,
            suggestions: vec![SuggestionLine {
                product_name: "Table".to_string(),
                quantity_produced: 2,
                subtotal: total,
            }],
        }
    }

    #[tokio::test]
    async fn test_fetch_stores_report() {
        let api = StubApi::new();
        api.suggestions.lock().unwrap().push_back(Ok(report(600.0)));
        let mut store = SuggestionsStore::new(Arc::new(api));

        let report = store.fetch().await.unwrap();
        assert_eq!(report.total_value, 600.0);

        assert_eq!(store.data().unwrap().total_value, 600.0);
        assert!(!store.is_loading());
        assert!(store.error().is_none());
    }

    #[tokio::test]
    async fn test_new_fetch_discards_previous_report() {
        let api = StubApi::new();
        {
            let mut q = api.suggestions.lock().unwrap();
            q.push_back(Ok(report(600.0)));
            q.push_back(Err(ApiError::Network("unreachable".to_string())));
        }
        let mut store = SuggestionsStore::new(Arc::new(api));

        store.fetch().await.unwrap();
        assert!(store.data().is_some());

        // A failed recalculation must not leave the stale report visible.
        let result = store.fetch().await;
        assert!(result.is_err());
        assert!(store.data().is_none());
        assert_eq!(store.error(), Some("unreachable"));
    }

    #[tokio::test]
    async fn test_fetch_replaces_report_wholesale() {
        let api = StubApi::new();
        {
            let mut q = api.suggestions.lock().unwrap();
            q.push_back(Ok(report(600.0)));
            q.push_back(Ok(report(900.0)));
        }
        let mut store = SuggestionsStore::new(Arc::new(api));

        store.fetch().await.unwrap();
        store.fetch().await.unwrap();

        assert_eq!(store.data().unwrap().total_value, 900.0);
        assert_eq!(store.data().unwrap().suggestions.len(), 1);
    }
}

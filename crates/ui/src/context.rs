use std::sync::Arc;

use services::ReviewService;

pub trait UiApp: Send + Sync {
    fn review_service(&self) -> Arc<ReviewService>;
}

#[derive(Clone)]
pub struct AppContext {
    review_service: Arc<ReviewService>,
    backend_label: String,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let review_service = app.review_service();
        let backend_label = review_service.backend_label();
        Self {
            review_service,
            backend_label,
        }
    }

    #[must_use]
    pub fn review_service(&self) -> Arc<ReviewService> {
        Arc::clone(&self.review_service)
    }

    /// Where requests go, for display only.
    #[must_use]
    pub fn backend_label(&self) -> &str {
        &self.backend_label
    }
}

// Provided by the composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

use crate::writing::backend::GenerationBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Live or mock, fixed for the lifetime of the process.
    pub backend: GenerationBackend,
}

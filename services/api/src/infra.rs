use metrics_exporter_prometheus::PrometheusHandle;
use persona_theatre::assessment::AssessmentEngine;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// One engine instance backs every session; it is immutable and shareable.
pub(crate) fn standard_engine() -> Arc<AssessmentEngine> {
    Arc::new(AssessmentEngine::standard())
}

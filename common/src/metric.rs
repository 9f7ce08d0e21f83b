use serde::{Deserialize, Serialize};

/// Cantidad maxima de ids por request de valores.
/// El JobManager corta query strings largas, asi que partimos en lotes.
pub const MAX_METRICS_REQUEST: usize = 50;

/// Métrica disponible para una task: `<subtask>.<ruta.de.la.métrica>`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricDescriptor {
    pub id: String,
}

/// Valor textual devuelto por el JobManager
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricValue {
    pub id: String,
    pub value: String,
}

/// Métrica sumada sobre todas las subtasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedMetric {
    pub name: String,
    pub total: f64,
}

/// Quita el índice de subtask: `"3.numRecordsIn"` -> `"numRecordsIn"`.
/// Un id sin punto queda con nombre vacio.
pub fn strip_subtask_index(id: &str) -> &str {
    match id.split_once('.') {
        Some((_, rest)) => rest,
        None => "",
    }
}

/// Valores solo alfabéticos ("NaN", "unavailable") no se agregan.
pub fn is_non_numeric_sentinel(value: &str) -> bool {
    !value.is_empty() && value.chars().all(char::is_alphabetic)
}

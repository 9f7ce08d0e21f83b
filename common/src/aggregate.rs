use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{Error, Result};
use crate::metric::{
    is_non_numeric_sentinel, strip_subtask_index, AggregatedMetric, MetricValue,
    MAX_METRICS_REQUEST,
};

/// De donde salen las métricas de una task (el JobManager, o un fake en tests).
#[allow(async_fn_in_trait)]
pub trait MetricSource {
    /// Ids de todas las métricas que exponen las subtasks.
    async fn available_metrics(&self, job_id: &str, task_id: &str) -> Result<Vec<String>>;

    /// Valores de `ids`. Nunca se llama con más de `MAX_METRICS_REQUEST` ids.
    async fn metric_values(
        &self,
        job_id: &str,
        task_id: &str,
        ids: &[String],
    ) -> Result<Vec<MetricValue>>;
}

/// Lotes consecutivos de a lo sumo `MAX_METRICS_REQUEST` ids.
pub fn batches(ids: &[String]) -> std::slice::Chunks<'_, String> {
    ids.chunks(MAX_METRICS_REQUEST)
}

/// Pide los valores lote por lote, de a un request por vez.
pub async fn fetch_values<S: MetricSource>(
    source: &S,
    job_id: &str,
    task_id: &str,
    ids: &[String],
) -> Result<Vec<MetricValue>> {
    let mut values = Vec::with_capacity(ids.len());
    for (n, batch) in batches(ids).enumerate() {
        debug!("lote {} de métricas: {} ids", n, batch.len());
        values.extend(source.metric_values(job_id, task_id, batch).await?);
    }
    Ok(values)
}

/// Suma los valores por nombre lógico (sin índice de subtask).
pub fn accumulate(values: &[MetricValue]) -> Result<BTreeMap<String, f64>> {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();

    for metric in values {
        if is_non_numeric_sentinel(&metric.value) {
            debug!("descartando {}={}", metric.id, metric.value);
            continue;
        }

        let value: f64 = metric
            .value
            .trim()
            .parse()
            .map_err(|_| Error::MalformedMetricValue {
                id: metric.id.clone(),
                value: metric.value.clone(),
            })?;

        *totals
            .entry(strip_subtask_index(&metric.id).to_string())
            .or_insert(0.0) += value;
    }

    Ok(totals)
}

/// Trae y agrega las métricas `ids` de la task.
pub async fn aggregate<S: MetricSource>(
    source: &S,
    job_id: &str,
    task_id: &str,
    ids: &[String],
) -> Result<BTreeMap<String, f64>> {
    let values = fetch_values(source, job_id, task_id, ids).await?;
    accumulate(&values)
}

pub fn into_rows(totals: BTreeMap<String, f64>) -> Vec<AggregatedMetric> {
    totals
        .into_iter()
        .map(|(name, total)| AggregatedMetric { name, total })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Fuente falsa: responde "1" para cada id y anota el tamaño de cada lote.
    #[derive(Default)]
    struct FakeSource {
        calls: Mutex<Vec<usize>>,
    }

    impl MetricSource for FakeSource {
        async fn available_metrics(&self, _job_id: &str, _task_id: &str) -> Result<Vec<String>> {
            Ok(Vec::new())
        }

        async fn metric_values(
            &self,
            _job_id: &str,
            _task_id: &str,
            ids: &[String],
        ) -> Result<Vec<MetricValue>> {
            self.calls.lock().unwrap().push(ids.len());
            Ok(ids
                .iter()
                .map(|id| MetricValue {
                    id: id.clone(),
                    value: "1".to_string(),
                })
                .collect())
        }
    }

    fn value(id: &str, value: &str) -> MetricValue {
        MetricValue {
            id: id.to_string(),
            value: value.to_string(),
        }
    }

    #[tokio::test]
    async fn fetches_in_batches_of_fifty() {
        let source = FakeSource::default();
        let ids: Vec<String> = (0..120).map(|i| format!("{}.m{}", i % 4, i)).collect();

        let totals = aggregate(&source, "j", "t", &ids).await.unwrap();

        assert_eq!(*source.calls.lock().unwrap(), vec![50, 50, 20]);
        assert_eq!(totals.len(), 120);
    }

    #[tokio::test]
    async fn empty_input_makes_no_requests() {
        let source = FakeSource::default();
        let totals = aggregate(&source, "j", "t", &[]).await.unwrap();

        assert!(totals.is_empty());
        assert!(source.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn sums_same_metric_across_subtasks() {
        let totals = accumulate(&[
            value("0.numRecordsIn", "10"),
            value("1.numRecordsIn", "32.5"),
            value("0.numRecordsOut", "7"),
        ])
        .unwrap();

        assert_eq!(totals["numRecordsIn"], 42.5);
        assert_eq!(totals["numRecordsOut"], 7.0);
        assert_eq!(totals.len(), 2);
    }

    #[test]
    fn alphabetic_values_are_skipped_without_zero_entry() {
        let totals = accumulate(&[
            value("0.latency", "NaN"),
            value("1.latency", "unavailable"),
            value("0.cnt", "3"),
        ])
        .unwrap();

        assert!(!totals.contains_key("latency"));
        assert_eq!(totals["cnt"], 3.0);
    }

    #[test]
    fn malformed_value_is_fatal() {
        let err = accumulate(&[value("0.cnt", "3"), value("1.cnt", "12 ms")]).unwrap_err();
        assert!(matches!(err, Error::MalformedMetricValue { id, .. } if id == "1.cnt"));
    }

    #[test]
    fn rows_come_out_sorted_by_name() {
        let totals = accumulate(&[value("0.b", "1"), value("0.a", "2")]).unwrap();
        let rows = into_rows(totals);
        assert_eq!(rows[0].name, "a");
        assert_eq!(rows[1].name, "b");
    }
}

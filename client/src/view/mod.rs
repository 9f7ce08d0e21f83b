pub mod format;
pub mod table;

use common::{AggregatedMetric, Vertex};
use serde::Serialize;

use format::format_duration_ms;
use table::render_table;

/// Fila del listado de jobs
#[derive(Debug, Clone, Serialize)]
pub struct JobRow {
    /// Hay otro job RUNNING con el mismo nombre
    pub dup: bool,
    pub id: String,
    pub name: String,
    pub duration_ms: i64,
    pub state: String,
}

pub fn render_jobs(rows: &[JobRow]) -> String {
    let headers = ["dup", "jid", "name", "duration", "state"];
    let rows = rows
        .iter()
        .map(|row| {
            vec![
                if row.dup { "*".to_string() } else { String::new() },
                row.id.clone(),
                row.name.clone(),
                format_duration_ms(row.duration_ms),
                row.state.clone(),
            ]
        })
        .collect::<Vec<_>>();
    render_table(&headers, &rows)
}

pub fn render_tasks(vertices: &[Vertex]) -> String {
    let headers = ["id", "parallelism", "status", "name"];
    let rows = vertices
        .iter()
        .map(|v| {
            vec![
                v.id.clone(),
                v.parallelism.to_string(),
                v.status.clone(),
                v.name.clone(),
            ]
        })
        .collect::<Vec<_>>();
    render_table(&headers, &rows)
}

pub fn render_metrics(metrics: &[AggregatedMetric]) -> String {
    let headers = ["metric", "value"];
    let rows = metrics
        .iter()
        .map(|m| vec![m.name.clone(), m.total.to_string()])
        .collect::<Vec<_>>();
    render_table(&headers, &rows)
}

pub fn to_pretty_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jobs_table_marks_duplicates() {
        let rows = vec![
            JobRow {
                dup: true,
                id: "abc".into(),
                name: "pipeline".into(),
                duration_ms: 61_000,
                state: "RUNNING".into(),
            },
            JobRow {
                dup: false,
                id: "def".into(),
                name: "ingest".into(),
                duration_ms: 500,
                state: "RUNNING".into(),
            },
        ];
        let out = render_jobs(&rows);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[1].starts_with("dup"));
        assert!(lines[3].starts_with('*'));
        assert!(lines[3].contains("0:01:01.000"));
        assert!(!lines[4].starts_with('*'));
    }

    #[test]
    fn metrics_table_prints_totals() {
        let out = render_metrics(&[AggregatedMetric {
            name: "numRecordsIn".into(),
            total: 42.5,
        }]);
        assert!(out.contains("numRecordsIn"));
        assert!(out.contains("42.5"));
    }

    #[test]
    fn metrics_json_keeps_names_and_totals() {
        let json = to_pretty_json(&vec![AggregatedMetric {
            name: "a.cnt".into(),
            total: 3.0,
        }])
        .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["name"], "a.cnt");
        assert_eq!(parsed[0]["total"], 3.0);
    }
}

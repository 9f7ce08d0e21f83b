use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::job::{JobDetail, JobId, TaskId, Vertex};

/// Pausa antes del siguiente request cuando hay jobs con nombre repetido,
/// para no martillar al JobManager desde scripts.
pub const THROTTLE_PAUSE: Duration = Duration::from_millis(100);

/// Aviso no fatal: hay varios jobs RUNNING con el mismo nombre.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbiguousJob {
    pub name: String,
    pub instances: usize,
    pub chosen_id: JobId,
}

impl std::fmt::Display for AmbiguousJob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Atención: hay {} instancias del job \"{}\". Usando \"{}\".",
            self.instances, self.name, self.chosen_id
        )
    }
}

/// Job elegido para un nombre, con la cantidad de jobs que comparten ese nombre.
#[derive(Debug, Clone, Copy)]
pub struct JobSelection<'a> {
    pub job: &'a JobDetail,
    pub duplicates: usize,
}

impl JobSelection<'_> {
    pub fn ambiguity(&self) -> Option<AmbiguousJob> {
        (self.duplicates > 1).then(|| AmbiguousJob {
            name: self.job.name.clone(),
            instances: self.duplicates,
            chosen_id: self.job.id.clone(),
        })
    }
}

/// Resultado de `locate`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located {
    pub job_id: JobId,
    pub task_id: TaskId,
    pub ambiguity: Option<AmbiguousJob>,
}

/// Cuenta cuántos jobs hay por nombre.
pub fn duplicate_counts(jobs: &[JobDetail]) -> HashMap<&str, usize> {
    let mut dup: HashMap<&str, usize> = HashMap::new();
    for job in jobs {
        *dup.entry(job.name.as_str()).or_insert(0) += 1;
    }
    dup
}

/// Elige el primer job con ese nombre, en el orden que devolvió el servidor.
pub fn select_job<'a>(jobs: &'a [JobDetail], job_name: &str) -> Result<JobSelection<'a>> {
    let duplicates = duplicate_counts(jobs).get(job_name).copied().unwrap_or(0);

    let job = jobs
        .iter()
        .find(|job| job.name == job_name)
        .ok_or_else(|| Error::JobNotFound(job_name.to_string()))?;

    if duplicates > 1 {
        debug!(
            "{} jobs se llaman \"{}\", usando {}",
            duplicates, job_name, job.id
        );
    }

    Ok(JobSelection { job, duplicates })
}

pub fn find_task<'a>(job: &'a JobDetail, task_name: &str) -> Result<&'a Vertex> {
    job.vertices
        .iter()
        .find(|v| v.name == task_name)
        .ok_or_else(|| Error::TaskNotFound {
            job: job.name.clone(),
            task: task_name.to_string(),
        })
}

/// Resuelve (job, task) por nombre a sus ids.
pub fn locate(jobs: &[JobDetail], job_name: &str, task_name: &str) -> Result<Located> {
    let selection = select_job(jobs, job_name)?;
    let task = find_task(selection.job, task_name)?;

    info!("job {} / task {}", selection.job.id, task.id);

    Ok(Located {
        job_id: selection.job.id.clone(),
        task_id: task.id.clone(),
        ambiguity: selection.ambiguity(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::JobStatus;

    fn job(id: &str, name: &str, tasks: &[(&str, &str)]) -> JobDetail {
        JobDetail {
            id: id.to_string(),
            name: name.to_string(),
            state: JobStatus::Running,
            duration: 1_000,
            vertices: tasks
                .iter()
                .map(|(tid, tname)| Vertex {
                    id: tid.to_string(),
                    name: tname.to_string(),
                    parallelism: 2,
                    status: "RUNNING".to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn locate_resolves_unique_job_and_task() {
        let jobs = vec![
            job("j1", "ingest", &[("t1", "Source"), ("t2", "Sink")]),
            job("j2", "pipeline", &[("t3", "Map")]),
        ];

        let located = locate(&jobs, "ingest", "Sink").unwrap();
        assert_eq!(located.job_id, "j1");
        assert_eq!(located.task_id, "t2");
        assert!(located.ambiguity.is_none());
    }

    #[test]
    fn duplicated_name_warns_and_uses_first_job() {
        let jobs = vec![
            job("old", "pipeline", &[("t1", "Map")]),
            job("new", "pipeline", &[("t9", "Map")]),
        ];

        let located = locate(&jobs, "pipeline", "Map").unwrap();
        assert_eq!(located.job_id, "old");
        assert_eq!(located.task_id, "t1");

        let warning = located.ambiguity.expect("debe avisar del duplicado");
        assert_eq!(warning.instances, 2);
        assert_eq!(warning.chosen_id, "old");
        assert!(warning.to_string().contains("\"old\""));
    }

    #[test]
    fn unknown_job_is_not_found() {
        let jobs = vec![job("j1", "ingest", &[("t1", "Source")])];
        let err = locate(&jobs, "pipeline", "Source").unwrap_err();
        assert!(matches!(err, Error::JobNotFound(name) if name == "pipeline"));
    }

    #[test]
    fn unknown_task_is_not_found() {
        let jobs = vec![job("j1", "ingest", &[("t1", "Source")])];
        let err = locate(&jobs, "ingest", "Sink").unwrap_err();
        assert!(matches!(err, Error::TaskNotFound { task, .. } if task == "Sink"));
    }

    #[test]
    fn duplicate_counts_groups_by_name() {
        let jobs = vec![
            job("a", "x", &[]),
            job("b", "y", &[]),
            job("c", "x", &[]),
        ];
        let dup = duplicate_counts(&jobs);
        assert_eq!(dup["x"], 2);
        assert_eq!(dup["y"], 1);
    }
}

use serde::{Deserialize, Serialize};

pub type JobId = String;
pub type TaskId = String;

/// Estado de un job tal como lo reporta el JobManager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Initializing,
    Created,
    Running,
    Failing,
    Failed,
    Cancelling,
    Canceled,
    Finished,
    Restarting,
    Suspended,
    Reconciling,
    /// Cualquier estado que todavía no conocemos
    #[serde(other)]
    Unknown,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Initializing => "INITIALIZING",
            JobStatus::Created => "CREATED",
            JobStatus::Running => "RUNNING",
            JobStatus::Failing => "FAILING",
            JobStatus::Failed => "FAILED",
            JobStatus::Cancelling => "CANCELLING",
            JobStatus::Canceled => "CANCELED",
            JobStatus::Finished => "FINISHED",
            JobStatus::Restarting => "RESTARTING",
            JobStatus::Suspended => "SUSPENDED",
            JobStatus::Reconciling => "RECONCILING",
            JobStatus::Unknown => "UNKNOWN",
        }
    }
}

/// Entrada de `GET /jobs`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobOverview {
    pub id: JobId,
    pub status: JobStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobsOverview {
    pub jobs: Vec<JobOverview>,
}

/// Detalle de `GET /jobs/{id}`.
///
/// El nombre no es único: un job redeployado puede convivir con la instancia
/// anterior mientras esta sigue corriendo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDetail {
    #[serde(rename = "jid", alias = "id")]
    pub id: JobId,
    pub name: String,
    pub state: JobStatus,

    /// Duración en milisegundos
    pub duration: i64,

    /// Vertices del grafo de ejecución (las "tasks")
    #[serde(default)]
    pub vertices: Vec<Vertex>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    pub id: TaskId,
    pub name: String,
    pub parallelism: u32,
    pub status: String,
}

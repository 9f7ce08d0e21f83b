use clap::{Args, Parser, Subcommand};

pub const DEFAULT_JOBMANAGER_URL: &str = "http://localhost:8081";

#[derive(Parser, Debug)]
#[command(name = "flinkmon", version)]
#[command(about = "Lista jobs, tasks y métricas agregadas de un JobManager")]
pub struct Cli {
    /// URL base del JobManager
    #[arg(long, env = "JOBMANAGER_URL", default_value = DEFAULT_JOBMANAGER_URL)]
    pub url: String,

    /// Host del JobManager (junto con --port reemplaza a --url)
    #[arg(long, requires = "port")]
    pub host: Option<String>,

    /// Puerto del JobManager
    #[arg(long, requires = "host")]
    pub port: Option<u16>,

    /// Desactiva los colores ANSI
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Logs de debug (requests, lotes de métricas)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lista los jobs en estado RUNNING
    Jobs(JobsArgs),
    /// Lista las tasks (vertices) de un job
    Tasks(TasksArgs),
    /// Muestra las métricas de una task, sumadas sobre sus subtasks
    Metrics(MetricsArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct JobsArgs {
    /// Salida en JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct TasksArgs {
    #[arg(long, alias = "job_name", value_name = "NOMBRE")]
    pub job_name: String,

    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct MetricsArgs {
    #[arg(long, alias = "job_name", value_name = "NOMBRE")]
    pub job_name: String,

    #[arg(long, alias = "task_name", value_name = "NOMBRE")]
    pub task_name: String,

    /// Nombres separados por coma, sin el índice de subtask
    #[arg(long, alias = "exact_metrics", value_name = "LISTA")]
    pub exact_metrics: Option<String>,

    /// Substrings separados por coma
    #[arg(long, alias = "like_metrics", value_name = "LISTA")]
    pub like_metrics: Option<String>,

    /// Ignora mayúsculas/minúsculas en --like-metrics
    #[arg(long, alias = "ignore_case")]
    pub ignore_case: bool,

    #[arg(long)]
    pub json: bool,
}

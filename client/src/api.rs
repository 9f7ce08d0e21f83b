use common::{
    Error, JobDetail, JobOverview, JobStatus, JobsOverview, MetricDescriptor, MetricSource,
    MetricValue, Result,
};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Cliente de la API REST del JobManager.
///
/// Los requests van de a uno: ningún método dispara llamadas en paralelo.
#[derive(Clone)]
pub struct FlinkApi {
    client: Client,
    base: String,
}

fn transport(err: reqwest::Error) -> Error {
    Error::transport(err.to_string())
}

impl FlinkApi {
    pub fn new(client: Client, base: impl Into<String>) -> Self {
        Self {
            client,
            base: base.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        let trimmed = path.trim_start_matches('/');
        format!("{}/{}", self.base.trim_end_matches('/'), trimmed)
    }

    async fn send_json<T>(&self, req: RequestBuilder, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let res = req.send().await.map_err(transport)?;
        let status = res.status();
        if !status.is_success() {
            return Err(Error::transport(format!("GET /{path} devolvió {status}")));
        }
        let body = res.bytes().await.map_err(transport)?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        debug!("GET {}", self.url(path));
        self.send_json(self.client.get(self.url(path)), path).await
    }

    /// `GET /jobs`: todos los jobs, en cualquier estado.
    pub async fn jobs(&self) -> Result<Vec<JobOverview>> {
        let overview: JobsOverview = self.get("jobs").await?;
        Ok(overview.jobs)
    }

    pub async fn job_detail(&self, job_id: &str) -> Result<JobDetail> {
        self.get(&format!("jobs/{job_id}")).await
    }

    /// Detalle de cada job RUNNING, en el orden que devolvió `/jobs`.
    pub async fn running_job_details(&self) -> Result<Vec<JobDetail>> {
        let mut details = Vec::new();
        for job in self.jobs().await? {
            if job.status == JobStatus::Running {
                details.push(self.job_detail(&job.id).await?);
            }
        }
        debug!("{} jobs RUNNING", details.len());
        Ok(details)
    }
}

impl MetricSource for FlinkApi {
    async fn available_metrics(&self, job_id: &str, task_id: &str) -> Result<Vec<String>> {
        let metrics: Vec<MetricDescriptor> = self
            .get(&format!("jobs/{job_id}/vertices/{task_id}/metrics"))
            .await?;
        Ok(metrics.into_iter().map(|m| m.id).collect())
    }

    async fn metric_values(
        &self,
        job_id: &str,
        task_id: &str,
        ids: &[String],
    ) -> Result<Vec<MetricValue>> {
        let path = format!("jobs/{job_id}/vertices/{task_id}/metrics");
        let req = self
            .client
            .get(self.url(&path))
            .query(&[("get", ids.join(","))]);
        debug!("GET {}?get=<{} ids>", self.url(&path), ids.len());
        self.send_json(req, &path).await
    }
}

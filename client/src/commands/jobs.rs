use anyhow::Result;
use common::locator::duplicate_counts;

use crate::api::FlinkApi;
use crate::args::JobsArgs;
use crate::commands::CommandContext;
use crate::view::{render_jobs, to_pretty_json, JobRow};

/// Jobs RUNNING, marcando los que comparten nombre.
pub async fn fetch_job_rows(api: &FlinkApi) -> Result<Vec<JobRow>> {
    let jobs = api.running_job_details().await?;
    let dup = duplicate_counts(&jobs);

    Ok(jobs
        .iter()
        .map(|job| JobRow {
            dup: dup.get(job.name.as_str()).copied().unwrap_or(0) > 1,
            id: job.id.clone(),
            name: job.name.clone(),
            duration_ms: job.duration,
            state: job.state.as_str().to_string(),
        })
        .collect())
}

pub async fn handle_jobs(ctx: &CommandContext, args: JobsArgs) -> Result<()> {
    let rows = fetch_job_rows(&ctx.api).await?;

    if args.json {
        println!("{}", to_pretty_json(&rows)?);
    } else {
        println!("{}", render_jobs(&rows));
    }
    Ok(())
}

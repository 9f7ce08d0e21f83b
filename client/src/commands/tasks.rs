use anyhow::Result;
use common::locator::select_job;
use common::Vertex;

use crate::args::TasksArgs;
use crate::commands::CommandContext;
use crate::view::{render_tasks, to_pretty_json};

pub async fn fetch_tasks(ctx: &CommandContext, job_name: &str) -> Result<Vec<Vertex>> {
    let jobs = ctx.api.running_job_details().await?;
    let selection = select_job(&jobs, job_name)?;

    if let Some(ambiguity) = selection.ambiguity() {
        ctx.report_ambiguity(&ambiguity).await;
    }

    Ok(selection.job.vertices.clone())
}

pub async fn handle_tasks(ctx: &CommandContext, args: TasksArgs) -> Result<()> {
    let tasks = fetch_tasks(ctx, &args.job_name).await?;

    if args.json {
        println!("{}", to_pretty_json(&tasks)?);
    } else {
        println!("{}", render_tasks(&tasks));
    }
    Ok(())
}

use anyhow::Result;
use common::aggregate::into_rows;
use common::{aggregate, locate, AggregatedMetric, MetricFilter, MetricSource};
use tracing::debug;

use crate::args::MetricsArgs;
use crate::commands::CommandContext;
use crate::view::{render_metrics, to_pretty_json};

/// job/task -> ids filtrados -> valores sumados por nombre.
pub async fn fetch_task_metrics(
    ctx: &CommandContext,
    args: &MetricsArgs,
) -> Result<Vec<AggregatedMetric>> {
    let jobs = ctx.api.running_job_details().await?;
    let located = locate(&jobs, &args.job_name, &args.task_name)?;

    if let Some(ambiguity) = &located.ambiguity {
        ctx.report_ambiguity(ambiguity).await;
    }

    let available = ctx
        .api
        .available_metrics(&located.job_id, &located.task_id)
        .await?;

    let filter = MetricFilter::from_lists(
        args.exact_metrics.as_deref(),
        args.like_metrics.as_deref(),
        args.ignore_case,
    );
    let ids = filter.apply(available);
    debug!("{} métricas seleccionadas", ids.len());

    let totals = aggregate(&ctx.api, &located.job_id, &located.task_id, &ids).await?;
    Ok(into_rows(totals))
}

pub async fn handle_metrics(ctx: &CommandContext, args: MetricsArgs) -> Result<()> {
    let metrics = fetch_task_metrics(ctx, &args).await?;

    if args.json {
        println!("{}", to_pretty_json(&metrics)?);
    } else {
        println!("{}", render_metrics(&metrics));
    }
    Ok(())
}

use anyhow::Result;
use common::AmbiguousJob;
use reqwest::Client;
use tokio::time::sleep;
use tracing::warn;

use crate::api::FlinkApi;
use crate::args::{Cli, Commands};
use crate::config::Settings;
use crate::view::format::{colorize, FAIL};

pub mod jobs;
pub mod metrics;
pub mod tasks;

#[derive(Clone)]
pub struct CommandContext {
    pub api: FlinkApi,
    pub settings: Settings,
}

impl CommandContext {
    pub fn new(settings: Settings) -> Self {
        let api = FlinkApi::new(Client::new(), settings.base_url.clone());
        Self { api, settings }
    }

    /// Avisa por stderr del job duplicado y frena un poco antes del próximo request.
    pub async fn report_ambiguity(&self, ambiguity: &AmbiguousJob) {
        warn!(
            "job \"{}\" duplicado ({} instancias), usando {}",
            ambiguity.name, ambiguity.instances, ambiguity.chosen_id
        );
        eprintln!(
            "{}",
            colorize(&ambiguity.to_string(), FAIL, self.settings.color)
        );
        sleep(self.settings.throttle).await;
    }
}

pub async fn run(cli: Cli, settings: Settings) -> Result<()> {
    let ctx = CommandContext::new(settings);

    match cli.command {
        Commands::Jobs(args) => jobs::handle_jobs(&ctx, args).await,
        Commands::Tasks(args) => tasks::handle_tasks(&ctx, args).await,
        Commands::Metrics(args) => metrics::handle_metrics(&ctx, args).await,
    }
}

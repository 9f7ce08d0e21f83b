use std::env;
use std::io::{self, IsTerminal};
use std::time::Duration;

use common::THROTTLE_PAUSE;

use crate::args::Cli;

/// Configuración resuelta una sola vez a partir de los argumentos y el entorno.
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub color: bool,
    /// Pausa después de avisar de un job duplicado
    pub throttle: Duration,
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            base_url: base_url(cli),
            color: color_enabled(
                cli.no_color,
                env::var("NO_COLOR").ok().as_deref(),
                io::stderr().is_terminal(),
            ),
            throttle: THROTTLE_PAUSE,
        }
    }
}

/// `--host`/`--port` ganan sobre `--url`.
pub fn base_url(cli: &Cli) -> String {
    match (&cli.host, cli.port) {
        (Some(host), Some(port)) => format!("http://{host}:{port}"),
        _ => cli.url.trim_end_matches('/').to_string(),
    }
}

pub fn color_enabled(no_color_flag: bool, no_color_env: Option<&str>, is_tty: bool) -> bool {
    let env_disables = no_color_env.is_some_and(|v| !v.is_empty());
    is_tty && !no_color_flag && !env_disables
}

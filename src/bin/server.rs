use std::path::PathBuf;

use anyhow::Result;
use clap::Parser as ClapParser;
use ui_components::config::ServerConfig;
use ui_components::server::run_server;

#[derive(clap::Parser, Debug)]
/// Serve the component demo page and the static assets. Options
/// override the `UI_*` environment variables, which override the
/// built-in defaults.
struct Args {
    /// Address to listen on, e.g. 127.0.0.1:3000
    #[clap(long)]
    listen: Option<String>,

    /// Directory holding the page templates
    #[clap(long)]
    templates: Option<PathBuf>,

    /// Directory served at the static prefix
    #[clap(long)]
    static_dir: Option<PathBuf>,

    /// URL path prefix for the static files
    #[clap(long)]
    static_prefix: Option<String>,

    /// max-age for static files, in seconds
    #[clap(long)]
    cache_timeout: Option<u64>,

    /// Directory for http_access.log and http_error.log (default:
    /// log to stderr)
    #[clap(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = ServerConfig::from_env()?;
    if let Some(v) = args.listen {
        config.listen_addr = v;
    }
    if let Some(v) = args.templates {
        config.template_dir = v;
    }
    if let Some(v) = args.static_dir {
        config.static_dir = v;
    }
    if let Some(v) = args.static_prefix {
        config.static_prefix = v;
    }
    if let Some(v) = args.cache_timeout {
        config.cache_timeout = v;
    }
    if let Some(v) = args.log_dir {
        config.log_dir = Some(v);
    }
    run_server(&config)
}

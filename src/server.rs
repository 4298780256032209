//! Wiring the router, templates and logs into a rouille server.

use std::sync::{Arc, Mutex};

use anyhow::{Result, Context, anyhow};
use rouille::{Request, Response, Server};

use crate::apachelog::{log_combined, Logs};
use crate::config::ServerConfig;
use crate::demo::demo_page;
use crate::handler::{ExactFnHandler, StaticFiles};
use crate::http_request_method::HttpRequestMethod;
use crate::http_response_status_codes::HttpResponseStatusCode;
use crate::router::MountRouter;
use crate::template_store::TemplateStore;
use crate::webutils::{component_response, errorpage_from_status};
use crate::warn;

/// Everything a request needs; read-only once built, except for the
/// log sinks.
pub struct App {
    pub router: MountRouter,
    pub logs: Arc<Mutex<Logs>>,
}

impl App {
    pub fn from_config(config: &ServerConfig) -> Result<App> {
        let templates = TemplateStore::open(&config.template_dir)?;
        let logs = match &config.log_dir {
            Some(dir) => Logs::open_in_basedir(dir)?,
            None => Logs::stderr(),
        };
        App::new(config, templates, logs)
    }

    pub fn new(
        config: &ServerConfig,
        templates: TemplateStore,
        logs: Arc<Mutex<Logs>>,
    ) -> Result<App> {
        let mut router = MountRouter::new();
        router
            .add("/", Arc::new(ExactFnHandler::new(
                move |_request: &Request, method: HttpRequestMethod| -> Result<Response> {
                    if !method.is_retrieval() {
                        return Ok(errorpage_from_status(
                            HttpResponseStatusCode::MethodNotAllowed405))
                    }
                    Ok(component_response(&demo_page(&templates)?))
                })))?
            .add(&config.static_prefix,
                 Arc::new(StaticFiles::new(&config.static_dir, config.cache_timeout)))?;
        Ok(App { router, logs })
    }

    pub fn handle(&self, request: &Request) -> Response {
        log_combined(request, &self.logs, || {
            // Handlers decide which methods they allow (405); only
            // unknown methods are not implemented.
            let method = match HttpRequestMethod::from_str(request.method()) {
                Ok(m) => m,
                Err(_) => {
                    warn!("method {:?} not implemented", request.method());
                    return Ok(errorpage_from_status(
                        HttpResponseStatusCode::NotImplemented501))
                }
            };
            Ok(self.router.handle_request(request, method)?
               .unwrap_or_else(
                   || errorpage_from_status(HttpResponseStatusCode::NotFound404)))
        })
    }
}

/// Run the server in the current thread, forever.
pub fn run_server(config: &ServerConfig) -> Result<()> {
    let app = Arc::new(App::from_config(config)?);
    let server = Server::new(config.listen_addr.as_str(), move |request: &Request| {
        app.handle(request)
    }).map_err(|e| anyhow!("{e}")).with_context(
        || anyhow!("starting server on {:?}", config.listen_addr))?;
    eprintln!("listening on http://{}", server.server_addr());
    server.run();
    Ok(())
}

//! Dispatch requests to handlers mounted at path prefixes.

use std::sync::Arc;

use anyhow::{Result, bail};
use kstring::KString;
use rouille::{Request, Response};

use crate::handler::Handler;
use crate::http_request_method::HttpRequestMethod;

/// Split a request path into its segments, dropping empty ones
/// (leading slash, duplicate or trailing slashes).
pub fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

struct Mount {
    prefix: Vec<KString>,
    handler: Arc<dyn Handler>,
}

/// Handlers are tried from the longest matching prefix to the
/// shortest; the first one accepting the request answers it.
#[derive(Default)]
pub struct MountRouter {
    mounts: Vec<Mount>,
}

impl MountRouter {
    pub fn new() -> MountRouter {
        MountRouter::default()
    }

    /// Using path *strings*, and chaining.
    pub fn add(&mut self, prefix: &str, handler: Arc<dyn Handler>) -> Result<&mut Self> {
        let prefix: Vec<KString> = path_segments(prefix).map(KString::from_ref).collect();
        if let Some(old) = self.mounts.iter().find(|m| m.prefix == prefix) {
            bail!("already contained an entry for {:?}: {:?}",
                  prefix.join("/"), old.handler)
        }
        let pos = self.mounts.iter()
            .position(|m| m.prefix.len() < prefix.len())
            .unwrap_or(self.mounts.len());
        self.mounts.insert(pos, Mount { prefix, handler });
        Ok(self)
    }

    /// Ok(None) if no handler accepted the request.
    pub fn handle_request(
        &self,
        request: &Request,
        method: HttpRequestMethod,
    ) -> Result<Option<Response>> {
        let url = request.url();
        let segments: Vec<KString> = path_segments(&url).map(KString::from_ref).collect();
        for Mount { prefix, handler } in &self.mounts {
            if let Some(rest) = segments.strip_prefix(prefix.as_slice()) {
                if let Some(response) = handler.call(request, method, rest)? {
                    return Ok(Some(response))
                }
            }
        }
        Ok(None)
    }
}

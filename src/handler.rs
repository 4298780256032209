use std::fs::{self, File};
use std::io::ErrorKind;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use std::{fmt::Debug, any::type_name, path::PathBuf, borrow::Cow};

use anyhow::{Result, Context, anyhow};
use httpdate::{fmt_http_date, parse_http_date};
use kstring::KString;
use rouille::{Request, Response, extension_to_mime, ResponseBody};

use crate::http_request_method::HttpRequestMethod;
use crate::http_response_status_codes::HttpResponseStatusCode;
use crate::webutils::errorpage_from_status;
use crate::warn;

// Can't just check `mtime > modsince` since mtime has a nsec value,
// where modsince (from an HTTP date) has 0 there. Require the file to
// be at least a second newer.
fn file_is_newer_than_snapshot_time(mtime: SystemTime, modsince: SystemTime) -> bool {
    match mtime.duration_since(modsince) {
        // file is older than snapshot time, or has been restored to
        // an older version; in any case, it is not newer
        Err(_e) => false,
        Ok(secsnewer) => secsnewer >= Duration::from_secs(1)
    }
}

/// Whether an `If-None-Match` header value matches `etag_quoted`.
fn etag_matches(if_none_match: &str, etag_quoted: &str) -> bool {
    if_none_match.split(',').map(str::trim).any(|tag| {
        tag == "*" || tag.strip_prefix("W/").unwrap_or(tag) == etag_quoted
    })
}

macro_rules! cow {
    ($a:expr, $b:expr) => {
        (Cow::from($a), Cow::from($b))
    }
}

/// Resolve "." and ".." and drop empty segments. Returns None if the
/// path would leave the base.
fn canonicalize_path<'s, S>(path: &'s [S]) -> Option<Vec<&'s str>>
where S: AsRef<str> + 's
{
    let mut out = Vec::new();
    for segment in path {
        match segment.as_ref() {
            "." => (),
            ".." =>
                if out.pop().is_none() {
                    return None
                },
            // multiple slashes to one
            "" => (),
            segment => out.push(segment)
        }
    }
    Some(out)
}


pub trait Handler: Debug + Send + Sync {
    /// `pathrest` is the part of the request path below the mount
    /// point of the handler. Returning Ok(None) means the handler is
    /// refusing to handle the request; the caller answers with 404
    /// unless another handler picks it up. Err means the handler
    /// accepted the request but failed to handle it (500).
    fn call(
        &self,
        request: &Request,
        method: HttpRequestMethod,
        pathrest: &[KString],
    ) -> Result<Option<Response>>;
}

// ------------------------------------------------------------------
/// Serve files from the local file system. Every response carries
/// `Cache-Control: max-age={cache_timeout}, must-revalidate`.
#[derive(Debug)]
pub struct StaticFiles {
    /// Base directory in the local file system from which to serve
    /// the files. ".." may not lead outside of it.
    basepath: PathBuf,
    /// Seconds; 0 means clients always revalidate.
    cache_timeout: u64,
}

impl StaticFiles {
    pub fn new(basepath: impl Into<PathBuf>, cache_timeout: u64) -> StaticFiles {
        StaticFiles {
            basepath: basepath.into(),
            cache_timeout,
        }
    }

    pub fn cache_control(&self) -> String {
        format!("max-age={}, must-revalidate", self.cache_timeout)
    }
}

impl Handler for StaticFiles {
    /// Returns None if the file does not exist, or is a directory.
    fn call(
        &self,
        request: &Request,
        method: HttpRequestMethod,
        pathrest: &[KString],
    ) -> Result<Option<Response>> {
        if !method.is_retrieval() {
            let mut response = errorpage_from_status(
                HttpResponseStatusCode::MethodNotAllowed405);
            response.headers.push(cow!("Allow", "GET, HEAD"));
            return Ok(Some(response))
        }
        let canonpath = match canonicalize_path(pathrest) {
            Some(p) => p,
            None => return Ok(None)
        };
        if canonpath.is_empty() {
            // a directory, and there are no directory listings
            return Ok(None)
        }
        let full_path: PathBuf = self.basepath.join(canonpath.join("/"));

        let metadata =
            match fs::metadata(&full_path) {
                Ok(m) => m,
                Err(e) =>
                    match e.kind() {
                        ErrorKind::NotFound => return Ok(None),
                        _ => return Err(e).with_context(
                            || anyhow!("can't stat file: {:?}", full_path))
                    }
            };
        if metadata.is_dir() {
            return Ok(None)
        }
        if !metadata.is_file() {
            warn!("neither file nor dir, device file or fifo or socket? {full_path:?}");
            return Ok(None)
        }

        let mimetype =
            match full_path.extension().and_then(|e| e.to_str()) {
                Some(extension) => extension_to_mime(extension),
                None => "application/octet-stream",
            };
        let fh = match File::open(&full_path) {
            Ok(fh) => fh,
            Err(e) =>
                match e.kind() {
                    ErrorKind::NotFound => return Ok(None),
                    _ => return Err(e).with_context(
                        || anyhow!("can't open file for reading: {:?}", full_path))
                }
        };
        let size = metadata.len();
        let mtime: SystemTime = metadata.modified()?;
        let mtime_seconds = mtime.duration_since(UNIX_EPOCH)?.as_secs();
        let etag_quoted = format!("\"{mtime_seconds:x}-{size:x}\"");

        let headers = vec![
            cow!("Content-Type", mimetype),
            cow!("Last-Modified", fmt_http_date(mtime)),
            cow!("ETag", etag_quoted.clone()),
            cow!("Cache-Control", self.cache_control()),
        ];

        let not_modified =
            if let Some(nonematch_str) = request.header("If-None-Match") {
                etag_matches(nonematch_str, &etag_quoted)
            } else if let Some(modsince_str) = request.header("If-Modified-Since") {
                match parse_http_date(modsince_str) {
                    Ok(modsince) => !file_is_newer_than_snapshot_time(mtime, modsince),
                    Err(e) => {
                        warn!("ignoring invalid If-Modified-Since {modsince_str:?}: {e}");
                        false
                    }
                }
            } else {
                false
            };

        let (status, data) =
            if not_modified {
                (HttpResponseStatusCode::NotModified304, ResponseBody::empty())
            } else {
                // Also for HEAD, so the size is reported; the server
                // drops the body itself.
                let size = usize::try_from(size).with_context(
                    || anyhow!("file too large: {:?}", full_path))?;
                (HttpResponseStatusCode::OK200, ResponseBody::from_reader_and_size(fh, size))
            };
        Ok(Some(Response {
            status_code: status.code(),
            headers,
            data,
            upgrade: None,
        }))
    }
}


// ------------------------------------------------------------------
/// A Handler that does not allow a path surplus, passing the request
/// to the handler Fn.
#[derive(Clone, Copy)]
pub struct ExactFnHandler<F>
where F: Fn(&Request, HttpRequestMethod) -> Result<Response> + Send + Sync
{
    handler: F
}

impl<F> ExactFnHandler<F>
where F: Fn(&Request, HttpRequestMethod) -> Result<Response> + Send + Sync
{
    pub fn new(handler: F) -> Self {
        Self { handler }
    }
}

impl<F> Handler for ExactFnHandler<F>
where F: Fn(&Request, HttpRequestMethod) -> Result<Response> + Send + Sync
{
    fn call(
        &self,
        request: &Request,
        method: HttpRequestMethod,
        pathrest: &[KString],
    ) -> Result<Option<Response>> {
        if pathrest.is_empty() {
            Ok(Some((self.handler)(request, method)?))
        } else {
            // refuse to handle if there is a rest (-> 404)
            Ok(None)
        }
    }
}

impl<F> Debug for ExactFnHandler<F>
where F: Fn(&Request, HttpRequestMethod) -> Result<Response> + Send + Sync
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("ExactFnHandler({})", type_name::<F>()))
    }
}

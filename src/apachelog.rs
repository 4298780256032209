//! Write HTTP access log files in the Combined Log Format (extended
//! Common Log Format) for access logs (Apache style), as per
//! <https://httpd.apache.org/docs/2.4/logs.html>.

use std::mem::swap;
use std::panic;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, Instant};
use std::io::{stderr, BufWriter, Write};

use anyhow::Result;
use chrono::{DateTime, Utc, Datelike, Timelike};
use rouille::{Request, Response, ResponseBody};

use crate::easy_fs::open_log_output;
use crate::http_response_status_codes::HttpResponseStatusCode;
use crate::webutils::errorpage_from_status;
use crate::warn;

static MONTHS: &[&str; 12] = &["Jan", "Feb", "Mar", "Apr", "May", "Jun",
                               "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

// "06/Dec/2023:02:02:47 +0000"
pub fn write_time(
    outp: &mut impl Write,
    time: SystemTime
) -> Result<()> {
    let dt: DateTime<Utc> = DateTime::from(time);
    write!(outp, "{:02}/{}/{:04}:{:02}:{:02}:{:02} +0000",
           dt.day(), MONTHS[dt.month0() as usize], dt.year(),
           dt.hour(), dt.minute(), dt.second())?;
    Ok(())
}

fn request_line(request: &Request) -> String {
    let protocol = if request.is_secure() { "HTTPS" } else { "HTTP" };
    format!("{} {} {protocol}/1.1", request.method(), request.raw_url())
}

// 18.134.151.89 - - [06/Dec/2023:02:02:47 +0100] "GET /login.jsp HTTP/1.1" 404 447 "-" "curl/8.0"
// We also add duration at the end.

/// Write one access log entry.
pub fn write_combined(
    outp: &mut impl Write,
    request: &Request,
    duration: Duration,
    response: &mut Response, // temporarily swaps out ResponseBody and back
) -> Result<()> {
    // the time when the log entry is made, not when the request started
    let now = SystemTime::now();
    write!(outp, "{} - - [", request.remote_addr().ip())?;
    write_time(outp, now)?;
    let len = {
        // The body length is private in ResponseBody, get it by
        // taking the body apart and reassembling it.
        let mut responsebody = ResponseBody::empty();
        swap(&mut responsebody, &mut response.data);
        let (data, length) = responsebody.into_reader_and_size();
        responsebody =
            if let Some(len) = length {
                ResponseBody::from_reader_and_size(data, len)
            } else {
                ResponseBody::from_reader(data)
            };
        swap(&mut responsebody, &mut response.data);
        length
    };
    writeln!(outp, "] {:?} {} {} {:?} {:?} {duration:?}",
             request_line(request),
             response.status_code,
             len.unwrap_or(0),
             request.header("Referer").unwrap_or("-"),
             request.header("User-Agent").unwrap_or("-")
    )?;
    outp.flush()?;
    Ok(())
}

/// Write one error log entry.
fn write_error(
    outp: &mut impl Write,
    request: &Request,
    duration: Duration,
    err: &anyhow::Error,
) -> Result<()> {
    let now = SystemTime::now();
    write!(outp, "[")?;
    write_time(outp, now)?;
    writeln!(outp, "] [error] [client {}] {:?} {duration:?}: {err:#}",
             request.remote_addr().ip(),
             request_line(request))?;
    outp.flush()?;
    Ok(())
}

fn write_panic_stderr(request: &Request, duration: Duration) {
    let mut outp = BufWriter::new(stderr().lock());
    let _ = writeln!(&mut outp, "[panic] handling {:?} after {duration:?}",
                     request_line(request));
    let _ = outp.flush();
}


/// The log sinks to write to: the access log for requests that
/// produced a response, the error log for handler failures. The code
/// calls flush once per entry.
pub struct Logs {
    pub access_log: Box<dyn Write + Send + Sync>,
    pub error_log: Box<dyn Write + Send + Sync>,
}

impl Logs {
    pub fn stderr() -> Arc<Mutex<Logs>> {
        Arc::new(Mutex::new(Logs {
            access_log: Box::new(stderr()),
            error_log: Box::new(stderr()),
        }))
    }

    pub fn open_in_basedir(logbasedir: &Path) -> Result<Arc<Mutex<Logs>>> {
        Ok(Arc::new(Mutex::new(Logs {
            access_log: open_log_output(logbasedir.join("http_access.log"))?,
            error_log: open_log_output(logbasedir.join("http_error.log"))?,
        })))
    }
}


/// Run `handler`, log its outcome, and turn errors into a 500 page.
pub fn log_combined<F>(
    request: &Request,
    logs: &Mutex<Logs>,
    handler: F
) -> Response
where
    F: FnOnce() -> Result<Response>,
{
    let start_instant = Instant::now();

    // Always resume unwinding afterwards, rouille reports the panic.
    let result = panic::catch_unwind(panic::AssertUnwindSafe(handler));
    let elapsed = start_instant.elapsed();

    match result {
        Ok(Ok(mut response)) => {
            match logs.lock() {
                Ok(mut logs) =>
                    if let Err(e) = write_combined(
                        &mut logs.access_log, request, elapsed, &mut response)
                    {
                        warn!("could not write to access log: {e:#}")
                    },
                Err(_) => warn!("logs mutex poisoned, not logging")
            }
            response
        }
        Ok(Err(err)) => {
            match logs.lock() {
                Ok(mut logs) =>
                    if let Err(e) = write_error(
                        &mut logs.error_log, request, elapsed, &err)
                    {
                        warn!("could not write to error log: {e:#}")
                    },
                Err(_) => warn!("logs mutex poisoned, not logging")
            }
            errorpage_from_status(HttpResponseStatusCode::InternalServerError500)
        }
        Err(payload) => {
            write_panic_stderr(request, elapsed);
            panic::resume_unwind(payload);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::UNIX_EPOCH;

    use anyhow::anyhow;

    use super::*;

    /// A sink whose contents can be inspected after handing out a
    /// boxed writer.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().expect("not poisoned").write(buf)
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().expect("not poisoned").clone())
                .expect("utf-8")
        }
    }

    fn logs() -> (SharedBuf, SharedBuf, Mutex<Logs>) {
        let access = SharedBuf::default();
        let error = SharedBuf::default();
        let logs = Mutex::new(Logs {
            access_log: Box::new(access.clone()),
            error_log: Box::new(error.clone()),
        });
        (access, error, logs)
    }

    #[test]
    fn t_write_time() {
        let mut out = Vec::new();
        write_time(&mut out, UNIX_EPOCH + Duration::from_secs(1701828167))
            .expect("write to vec");
        assert_eq!(String::from_utf8(out).expect("utf-8"), "06/Dec/2023:02:02:47 +0000");
    }

    #[test]
    fn t_access_log() {
        let (access, error, logs) = logs();
        let request = Request::fake_http(
            "GET", "/x?y=1", vec![("User-Agent".into(), "test".into())], vec![]);
        let response = log_combined(&request, &logs, || Ok(Response::text("hello")));
        assert_eq!(response.status_code, 200);
        let line = access.contents();
        assert!(line.starts_with("127.0.0.1 - - ["), "{line}");
        assert!(line.contains("] \"GET /x?y=1 HTTP/1.1\" 200 5 \"-\" \"test\" "), "{line}");
        assert_eq!(error.contents(), "");
    }

    #[test]
    fn t_error_log() {
        let (access, error, logs) = logs();
        let request = Request::fake_http("GET", "/broken", vec![], vec![]);
        let response = log_combined(&request, &logs, || Err(anyhow!("it broke")));
        assert_eq!(response.status_code, 500);
        let line = error.contents();
        assert!(line.contains("[error] [client 127.0.0.1] \"GET /broken HTTP/1.1\""),
                "{line}");
        assert!(line.ends_with(": it broke\n"), "{line}");
        assert_eq!(access.contents(), "");
    }

    #[test]
    fn t_panic_is_resumed() {
        let (access, error, logs) = logs();
        let request = Request::fake_http("GET", "/panics", vec![], vec![]);
        let result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
            log_combined(&request, &logs, || -> Result<Response> { panic!("boom") })
        }));
        assert!(result.is_err());
        assert_eq!(access.contents(), "");
        assert_eq!(error.contents(), "");
    }
}

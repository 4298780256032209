use std::borrow::Cow;

use rouille::{Response, ResponseBody};

use crate::component::Component;
use crate::http_response_status_codes::HttpResponseStatusCode;

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

pub fn errorpage_from_status(status: HttpResponseStatusCode) -> Response {
    let title = status.title();
    let explanation = status.desc();
    let resp = format!("<html><head><title>{title}</title></head><body><h1>{title}</h1>\
                        <p>{explanation}</p></body></html>\n");
    htmlresponse(status, resp)
}

pub fn htmlresponse(status: HttpResponseStatusCode, html: String) -> Response {
    Response {
        status_code: status.code(),
        headers: vec![(Cow::from("Content-Type"), Cow::from(HTML_CONTENT_TYPE))],
        data: ResponseBody::from_string(html),
        upgrade: None,
    }
}

/// A 200 response carrying the component's already rendered HTML.
pub fn component_response(component: &dyn Component) -> Response {
    htmlresponse(HttpResponseStatusCode::OK200, component.html().to_string())
}

/// Get the body of a response as a string, for tests.
#[cfg(test)]
pub fn response_body_string(response: Response) -> String {
    use std::io::Read;
    let (mut reader, _size) = response.data.into_reader_and_size();
    let mut s = String::new();
    reader.read_to_string(&mut s).expect("body is utf-8");
    s
}

#[cfg(test)]
pub fn response_header<'r>(response: &'r Response, name: &str) -> Option<&'r str> {
    response.headers.iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| &**v)
}

//! Pattern matching help for HTTP request methods.

// https://developer.mozilla.org/en-US/docs/Web/HTTP/Methods

use anyhow::{Result, bail};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpRequestMethod {
    GET,
    HEAD,
    POST,
    PUT,
    DELETE,
    CONNECT,
    OPTIONS,
    TRACE,
    PATCH,
}

impl HttpRequestMethod {
    pub fn from_str(s: &str) -> Result<Self> {
        match s {
            "GET" => Ok(Self::GET),
            "HEAD" => Ok(Self::HEAD),
            "POST" => Ok(Self::POST),
            "PUT" => Ok(Self::PUT),
            "PATCH" => Ok(Self::PATCH),
            "DELETE" => Ok(Self::DELETE),
            "OPTIONS" => Ok(Self::OPTIONS),
            "CONNECT" => Ok(Self::CONNECT),
            "TRACE" => Ok(Self::TRACE),
            _ => bail!("invalid http request method {s:?}")
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::GET => "GET",
            Self::HEAD => "HEAD",
            Self::POST => "POST",
            Self::PUT => "PUT",
            Self::PATCH => "PATCH",
            Self::DELETE => "DELETE",
            Self::OPTIONS => "OPTIONS",
            Self::CONNECT => "CONNECT",
            Self::TRACE => "TRACE",
        }
    }

    /// GET or HEAD, the methods that only retrieve a representation.
    pub fn is_retrieval(self) -> bool {
        match self {
            Self::GET | Self::HEAD => true,
            _ => false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_from_str() {
        assert_eq!(HttpRequestMethod::from_str("HEAD").unwrap(), HttpRequestMethod::HEAD);
        assert!(HttpRequestMethod::from_str("get").is_err());
        assert_eq!(HttpRequestMethod::from_str("PATCH").unwrap().as_str(), "PATCH");
    }

    #[test]
    fn t_groups() {
        assert!(HttpRequestMethod::GET.is_retrieval());
        assert!(!HttpRequestMethod::POST.is_retrieval());
        assert!(HttpRequestMethod::HEAD.is_retrieval());
        assert!(!HttpRequestMethod::DELETE.is_retrieval());
    }
}

//! The HTTP response status codes this server sends.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpResponseStatusCode {
    OK200,
    NotModified304,
    NotFound404,
    MethodNotAllowed405,
    InternalServerError500,
    NotImplemented501,
}

impl HttpResponseStatusCode {
    pub fn code(self) -> u16 {
        match self {
            Self::OK200 => 200,
            Self::NotModified304 => 304,
            Self::NotFound404 => 404,
            Self::MethodNotAllowed405 => 405,
            Self::InternalServerError500 => 500,
            Self::NotImplemented501 => 501,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::OK200 => "OK",
            Self::NotModified304 => "Not Modified",
            Self::NotFound404 => "Not Found",
            Self::MethodNotAllowed405 => "Method Not Allowed",
            Self::InternalServerError500 => "Internal Server Error",
            Self::NotImplemented501 => "Not Implemented",
        }
    }

    pub fn desc(self) -> &'static str {
        match self {
            Self::OK200 => "The request succeeded.",
            Self::NotModified304 =>
                "There is no need to retransmit the requested resource.",
            Self::NotFound404 =>
                "The requested resource was not found on this server.",
            Self::MethodNotAllowed405 =>
                "The request method is not supported by the target resource.",
            Self::InternalServerError500 =>
                "The server encountered an unexpected condition that prevented \
                 it from fulfilling the request.",
            Self::NotImplemented501 =>
                "The request method is not supported by the server.",
        }
    }
}

pub mod transport;

pub use transport::{
    BasicAuth, HttpTransport, Method, ReqwestTransport, TransportRequest, TransportResponse,
    REQUEST_TIMEOUT,
};

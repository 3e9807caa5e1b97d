//! HTTP middleware layered onto the router in `main`.

pub mod security_headers;

//! HTTP plumbing: routes, the shared transport, and rate limiting.

pub(crate) mod rate_limit;
pub(crate) mod route;
pub(crate) mod transport;

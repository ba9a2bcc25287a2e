//! Request execution: the HTTP client capability, outcome classification,
//! the per-request worker, and the bounded dispatch pool.
mod classify;
mod client;
mod pool;
mod worker;


pub use classify::classify;
pub use client::{HttpGet, ReqwestClient, TransportFailure};
pub use pool::DispatchPool;
pub use worker::execute;

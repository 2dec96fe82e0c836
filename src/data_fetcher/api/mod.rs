//! HTTP access to the upstream cricket statistics API.
//!
//! `client` owns the credential gate and the retrying fetch primitive;
//! `endpoints` is the pure routing catalog; `operations` exposes the named
//! calls the rest of the application uses.

pub mod client;
pub mod endpoints;
pub mod operations;

pub use client::CricketApi;

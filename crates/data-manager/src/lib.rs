//! Data layer for the CTC Charts dashboard
//!
//! Fetches each chart's JSON from its endpoint and transforms it into the
//! normalized [`ChartSpec`](ctc_charts_shared::ChartSpec) the rendering
//! engine consumes. The transformers are pure; the only I/O lives in
//! [`fetcher`].

pub mod client;
pub mod fetcher;
pub mod transform;

pub use client::ChartDataClient;
pub use fetcher::FetchClient;

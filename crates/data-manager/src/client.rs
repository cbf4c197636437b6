//! Typed endpoint client
//!
//! The mapping endpoint -> payload shape is fixed per chart and encoded in
//! the method signatures here; structural payloads are re-validated after
//! deserialization so a length mismatch surfaces as a `Shape` error at the
//! ingestion boundary.

use crate::fetcher::FetchClient;
use ctc_charts_shared::{
    BubbleRow, CategoricalPayload, ChartsResult, MatrixPayload, ScatterRow, StackedPayload,
};

pub struct ChartDataClient {
    fetch: FetchClient,
}

impl ChartDataClient {
    pub fn new(base_url: String) -> Self {
        Self {
            fetch: FetchClient::new(base_url),
        }
    }

    /// `{labels, values}` endpoints (bar, line, pie charts)
    pub async fn categorical(&self, path: &str) -> ChartsResult<CategoricalPayload> {
        let payload: CategoricalPayload = self.fetch.fetch_json(path).await?;
        payload.validate()?;
        Ok(payload)
    }

    /// `{skills, locations, matrix}` endpoint (heatmap)
    pub async fn matrix(&self, path: &str) -> ChartsResult<MatrixPayload> {
        let payload: MatrixPayload = self.fetch.fetch_json(path).await?;
        payload.validate()?;
        Ok(payload)
    }

    /// `{locations, skills, values}` endpoint (stacked bar)
    pub async fn stacked(&self, path: &str) -> ChartsResult<StackedPayload> {
        let payload: StackedPayload = self.fetch.fetch_json(path).await?;
        payload.validate()?;
        Ok(payload)
    }

    /// Row-oriented scatter endpoint
    pub async fn scatter_rows(&self, path: &str) -> ChartsResult<Vec<ScatterRow>> {
        self.fetch.fetch_json(path).await
    }

    /// Row-oriented bubble endpoint
    pub async fn bubble_rows(&self, path: &str) -> ChartsResult<Vec<BubbleRow>> {
        self.fetch.fetch_json(path).await
    }
}

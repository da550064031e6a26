use serde::Serialize;
use crate::analysis::EchoedParams;
use crate::plot::{ComparisonChart, CurveParams};
use crate::AnalysisError;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct DataSummary {
    pub mean: f64,
    pub std_dev: f64,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct ComparisonResponse {
    /// PNG chart as a `data:` URI
    pub image: String,
    pub width: u32,
    pub height: u32,
    pub column: String,
    pub data: DataSummary,
    pub reference: CurveParams,
    #[serde(flatten)]
    pub params: EchoedParams,
}

impl ComparisonResponse {
    pub fn new(chart: ComparisonChart, params: EchoedParams) -> Self {
        let ComparisonChart { model, image } = chart;
        Self {
            image: image.data_uri,
            width: image.width,
            height: image.height,
            data: DataSummary {
                mean: model.data.mean,
                std_dev: model.data.std_dev,
                count: model.histogram.total_observations,
            },
            reference: model.reference,
            column: model.label,
            params,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub kind: &'static str,
    pub message: String,
    #[serde(flatten)]
    pub params: EchoedParams,
}

impl ErrorResponse {
    pub fn new(error: &AnalysisError, params: EchoedParams, expose_detail: bool) -> Self {
        Self {
            kind: error.kind(),
            message: error.user_message(expose_detail),
            params,
        }
    }
}

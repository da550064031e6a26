use plotters::element::DashedPathElement;
use plotters::prelude::*;
use serde::Serialize;
use tracing::debug;
use crate::constants::{CHART_HEIGHT, CHART_WIDTH, CURVE_POINTS, HISTOGRAM_BINS};
use crate::plot::fonts::{self, FONT_FAMILY};
use crate::plot::{encode_png, EncodedImage, PlotError, Result};
use crate::stats::{DensityCurve, DensityHistogram, Domain, ReferenceDistribution, Sample};

const HISTOGRAM_FILL: RGBColor = RGBColor(0x64, 0x95, 0xED);
const CURVE_STROKE: u32 = 3;

/// Mean and standard deviation shown for one of the two distributions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurveParams {
    pub mean: f64,
    pub std_dev: f64,
}

/// The data-side overlay.
///
/// A sample whose values are all equal has zero variance and no normal
/// density; it is drawn as a vertical spike at its mean instead.
#[derive(Debug, Clone, PartialEq)]
pub enum DataCurve {
    Density(DensityCurve),
    Spike { at: f64 },
}

/// Everything the comparison chart shows, computed before any drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonModel {
    pub label: String,
    pub data: CurveParams,
    pub reference: CurveParams,
    pub domain: Domain,
    pub data_curve: DataCurve,
    pub reference_curve: DensityCurve,
    pub histogram: DensityHistogram,
}

impl ComparisonModel {
    /// Fails when the axis range overflows or the densities are too small to
    /// scale an axis on; the plotting backend cannot lay out such ranges.
    pub fn build(sample: &Sample, reference: &ReferenceDistribution, label: &str) -> Result<Self> {
        let domain = Domain::covering(sample, reference);
        if !domain.span().is_finite() {
            return Err(PlotError::InvalidData(format!(
                "x range [{:e}, {:e}] exceeds the floating-point range",
                domain.start, domain.end
            )));
        }
        let grid = domain.grid(CURVE_POINTS);

        let data_curve = if sample.is_degenerate() {
            DataCurve::Spike { at: sample.mean() }
        } else {
            DataCurve::Density(DensityCurve::evaluate(&grid, sample.mean(), sample.std_dev()))
        };
        let reference_curve = DensityCurve::evaluate(&grid, reference.mean(), reference.std_dev());

        let model = Self {
            label: label.to_string(),
            data: CurveParams {
                mean: sample.mean(),
                std_dev: sample.std_dev(),
            },
            reference: CurveParams {
                mean: reference.mean(),
                std_dev: reference.std_dev(),
            },
            domain,
            data_curve,
            reference_curve,
            histogram: DensityHistogram::from_sample(sample, HISTOGRAM_BINS),
        };

        let y_max = model.y_max();
        if !y_max.is_normal() {
            return Err(PlotError::InvalidData(format!(
                "density axis top {:e} is not a normal float",
                y_max
            )));
        }

        Ok(model)
    }

    pub fn title(&self) -> String {
        format!("Normal curve comparison for: {}", self.label)
    }

    pub fn data_legend(&self) -> String {
        format!(
            "Normal curve (data): μ={:.2}, σ={:.2}",
            self.data.mean, self.data.std_dev
        )
    }

    pub fn reference_legend(&self) -> String {
        format!(
            "Reference curve: μ={:.2}, σ={:.2}",
            self.reference.mean, self.reference.std_dev
        )
    }

    /// Top of the y axis: the tallest bar or curve plus 5% headroom.
    pub fn y_max(&self) -> f64 {
        let data_peak = match &self.data_curve {
            DataCurve::Density(curve) => curve.peak(),
            DataCurve::Spike { .. } => 0.0,
        };
        let top = self
            .histogram
            .max_density()
            .max(data_peak)
            .max(self.reference_curve.peak());

        if top > 0.0 { top * 1.05 } else { 1.0 }
    }

    fn data_points(&self) -> Vec<(f64, f64)> {
        match &self.data_curve {
            DataCurve::Density(curve) => curve.points.clone(),
            DataCurve::Spike { at } => vec![(*at, 0.0), (*at, self.y_max())],
        }
    }
}

/// A rendered chart and the numbers it was drawn from.
#[derive(Debug, Clone)]
pub struct ComparisonChart {
    pub model: ComparisonModel,
    pub image: EncodedImage,
}

/// Renders a sample's histogram with its fitted normal curve against a
/// reference normal curve.
///
/// Each call draws into its own pixel buffer, so a comparator can be shared
/// freely between concurrent requests.
#[derive(Debug, Clone, Copy)]
pub struct DistributionComparator {
    width: u32,
    height: u32,
}

impl Default for DistributionComparator {
    fn default() -> Self {
        Self::new(CHART_WIDTH, CHART_HEIGHT)
    }
}

impl DistributionComparator {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn render(
        &self,
        sample: &Sample,
        reference: &ReferenceDistribution,
        label: &str,
    ) -> Result<ComparisonChart> {
        let model = ComparisonModel::build(sample, reference, label)?;
        debug!(
            "Rendering comparison for '{}': n={}, data μ={:.4} σ={:.4}, reference μ={:.4} σ={:.4}",
            label,
            sample.len(),
            model.data.mean,
            model.data.std_dev,
            model.reference.mean,
            model.reference.std_dev
        );

        let png = self.render_png(&model)?;
        let image = EncodedImage::from_png(&png, self.width, self.height);

        Ok(ComparisonChart { model, image })
    }

    pub fn render_png(&self, model: &ComparisonModel) -> Result<Vec<u8>> {
        fonts::ensure_registered()?;

        let mut buffer = vec![0u8; self.width as usize * self.height as usize * 3];
        self.draw(model, &mut buffer)?;

        encode_png(buffer, self.width, self.height)
    }

    // The drawing area borrows `buffer` and is dropped on return
    fn draw(&self, model: &ComparisonModel, buffer: &mut [u8]) -> Result<()> {
        let root = BitMapBackend::with_buffer(buffer, (self.width, self.height)).into_drawing_area();

        root.fill(&WHITE)
            .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(model.title(), (FONT_FAMILY, 30))
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(85)
            .build_cartesian_2d(model.domain.start..model.domain.end, 0.0..model.y_max())
            .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

        chart
            .configure_mesh()
            .x_desc(model.label.clone())
            .y_desc("probability density")
            .axis_desc_style((FONT_FAMILY, 22))
            .label_style((FONT_FAMILY, 16))
            .y_label_formatter(&|y| format!("{:.2}", y))
            .bold_line_style(BLACK.mix(0.2))
            .light_line_style(BLACK.mix(0.06))
            .draw()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        chart
            .draw_series(model.histogram.buckets.iter().map(|b| {
                Rectangle::new(
                    [(b.range_start, 0.0), (b.range_end, b.density)],
                    HISTOGRAM_FILL.mix(0.6).filled(),
                )
            }))
            .map_err(|e| PlotError::Drawing(e.to_string()))?
            .label("Data histogram")
            .legend(|(x, y)| Rectangle::new([(x, y - 6), (x + 30, y + 6)], HISTOGRAM_FILL.mix(0.6).filled()));

        // Solid black for the data, dashed red for the reference: distinguishable without color
        chart
            .draw_series(LineSeries::new(model.data_points(), BLACK.stroke_width(CURVE_STROKE)))
            .map_err(|e| PlotError::Drawing(e.to_string()))?
            .label(model.data_legend())
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 30, y)], BLACK.stroke_width(CURVE_STROKE)));

        chart
            .draw_series(DashedLineSeries::new(
                model.reference_curve.points.clone(),
                12,
                8,
                RED.stroke_width(CURVE_STROKE),
            ))
            .map_err(|e| PlotError::Drawing(e.to_string()))?
            .label(model.reference_legend())
            .legend(|(x, y)| {
                DashedPathElement::new(vec![(x, y), (x + 30, y)], 6, 4, RED.stroke_width(CURVE_STROKE))
            });

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .label_font((FONT_FAMILY, 16))
            .background_style(WHITE.mix(0.85))
            .border_style(BLACK.mix(0.4))
            .draw()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        root.present()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        Ok(())
    }
}

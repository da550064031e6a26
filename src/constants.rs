/// Equal-width histogram bins, independent of sample size.
pub const HISTOGRAM_BINS: usize = 30;

/// Points in the x grid both density curves are evaluated on.
pub const CURVE_POINTS: usize = 500;

/// Standard deviations covered on each side of both distributions.
pub const DOMAIN_SIGMAS: f64 = 3.0;

/// Fraction of the covered span added as padding on each side.
pub const DOMAIN_PADDING: f64 = 0.1;

pub const CHART_WIDTH: u32 = 1200;
pub const CHART_HEIGHT: u32 = 700;

pub const ACCEPTED_EXTENSIONS: [&str; 2] = [".xlsx", ".xls"];

// Multipart field names of the upload form
pub const FIELD_FILE: &str = "excel_file";
pub const FIELD_COLUMN: &str = "column_name";
pub const FIELD_REF_MEAN: &str = "ref_mean";
pub const FIELD_REF_STD_DEV: &str = "ref_std_dev";

pub const DEFAULT_REF_MEAN: &str = "0";
pub const DEFAULT_REF_STD_DEV: &str = "1";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 50001;
pub const DEFAULT_MAX_UPLOAD_MB: usize = 16;

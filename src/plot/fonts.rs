use std::sync::OnceLock;
use plotters::style::{register_font, FontStyle};
use crate::plot::{PlotError, Result};

pub const FONT_FAMILY: &str = "sans-serif";

static DEJAVU_SANS: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");
static REGISTERED: OnceLock<bool> = OnceLock::new();

/// Registers the bundled font under [`FONT_FAMILY`] once per process.
///
/// Text is rasterised from these bytes, so rendering does not depend on
/// fonts installed on the host.
pub fn ensure_registered() -> Result<()> {
    let ok = *REGISTERED.get_or_init(|| {
        register_font(FONT_FAMILY, FontStyle::Normal, DEJAVU_SANS).is_ok()
    });

    if ok {
        Ok(())
    } else {
        Err(PlotError::Font)
    }
}

use std::sync::Arc;
use crate::config::ServerConfig;
use crate::plot::DistributionComparator;
use crate::workbook::{CalamineReader, WorkbookReader};

#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
    pub reader: Arc<dyn WorkbookReader>,
    pub comparator: DistributionComparator,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self::with_reader(config, Arc::new(CalamineReader))
    }

    pub fn with_reader(config: ServerConfig, reader: Arc<dyn WorkbookReader>) -> Self {
        Self {
            config,
            reader,
            comparator: DistributionComparator::default(),
        }
    }
}

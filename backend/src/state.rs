use std::sync::Arc;

use crate::{config::Config, services::holiday_source::HolidaySource};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub holiday_source: Arc<dyn HolidaySource>,
}

impl AppState {
    pub fn new(config: Config, holiday_source: Arc<dyn HolidaySource>) -> Self {
        Self {
            config,
            holiday_source,
        }
    }

    /// Today's date in the configured zone.
    pub fn today(&self) -> chrono::NaiveDate {
        crate::utils::time::today_local(&self.config.time_zone)
    }
}

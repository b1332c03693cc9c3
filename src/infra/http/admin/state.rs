use std::sync::Arc;

use crate::application::{
    admin::posts::AdminPostService, export::CsvQuoting, repos::HealthRepo,
};

/// Request-independent knobs for the admin surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdminSettings {
    pub csv_quoting: CsvQuoting,
}

#[derive(Clone)]
pub struct AdminState {
    pub posts: Arc<AdminPostService>,
    pub health: Arc<dyn HealthRepo>,
    pub settings: AdminSettings,
}

// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use salon_app::catalog::Catalog;
use salon_app::{AuthForm, AuthOutcome, SettingItem};
use std::time::Duration;
use tracing::{debug, info};

/// Serves the bundled demo catalog. There is no backend yet, so links
/// only report where they would navigate.
pub struct CatalogRuntime {
    status_clear_after: Duration,
}

impl CatalogRuntime {
    pub fn new(status_clear_after: Duration) -> Self {
        Self { status_clear_after }
    }
}

impl salon_tui::AppRuntime for CatalogRuntime {
    fn load_catalog(&mut self) -> Result<Catalog> {
        let catalog = Catalog::demo();
        debug!(
            appointments = catalog.appointments.len(),
            customers = catalog.customers.len(),
            services = catalog.services.len(),
            "loaded demo catalog"
        );
        Ok(catalog)
    }

    fn submit_auth(&mut self, form: &AuthForm) -> Result<AuthOutcome> {
        Ok(form.submit())
    }

    fn follow_setting_link(&mut self, item: &SettingItem) -> Result<String> {
        info!(link = %item.id, "navigate to {}", item.id);
        Ok(format!("navigate to {}", item.id))
    }

    fn status_clear_after(&self) -> Duration {
        self.status_clear_after
    }
}

// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::collections::BTreeMap;

use time::Date;

use crate::catalog::Catalog;
use crate::{
    Appointment, AppointmentBucket, CategoryOption, Customer, DashboardStat, ListConfig,
    ListError, ListViewModel, Service, ServiceCategory, SettingItem, SettingItemKind, SettingKey,
    SettingsSection, UNSET_CATEGORY,
};

pub const ALL_CATEGORY: CategoryOption = CategoryOption::new(UNSET_CATEGORY, "All");

pub type AppointmentsView = ListViewModel<Appointment>;
pub type CustomersView = ListViewModel<Customer>;
pub type ServicesView = ListViewModel<Service>;

fn appointment_customer(appointment: &Appointment) -> &str {
    &appointment.customer
}

fn appointment_service(appointment: &Appointment) -> &str {
    &appointment.service
}

fn appointment_bucket(appointment: &Appointment) -> &str {
    appointment.status.bucket().as_str()
}

fn customer_name(customer: &Customer) -> &str {
    &customer.name
}

fn customer_phone(customer: &Customer) -> &str {
    &customer.phone
}

fn customer_email(customer: &Customer) -> &str {
    &customer.email
}

fn service_name(service: &Service) -> &str {
    &service.name
}

fn service_description(service: &Service) -> &str {
    &service.description
}

fn service_category(service: &Service) -> &str {
    service.category.as_str()
}

/// Tabs over status buckets; starts on upcoming and has no "all" tab.
pub fn appointments_config() -> ListConfig<Appointment> {
    ListConfig::new("appointments")
        .text_field("customer", appointment_customer)
        .text_field("service", appointment_service)
        .category_field(
            "bucket",
            appointment_bucket,
            AppointmentBucket::ALL
                .into_iter()
                .map(|bucket| CategoryOption::new(bucket.as_str(), bucket.label())),
        )
        .initial_category(AppointmentBucket::Upcoming.as_str())
}

pub fn customers_config() -> ListConfig<Customer> {
    ListConfig::new("customers")
        .text_field("name", customer_name)
        .text_field("phone", customer_phone)
        .text_field("email", customer_email)
}

pub fn services_config() -> ListConfig<Service> {
    ListConfig::new("services")
        .text_field("name", service_name)
        .text_field("description", service_description)
        .category_field(
            "category",
            service_category,
            ServiceCategory::ALL
                .into_iter()
                .map(|category| CategoryOption::new(category.as_str(), category.label())),
        )
        .all_option(ALL_CATEGORY)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsScreen {
    sections: Vec<SettingsSection>,
    toggles: BTreeMap<SettingKey, bool>,
}

impl SettingsScreen {
    pub fn new(sections: Vec<SettingsSection>) -> Self {
        let toggles = SettingKey::ALL
            .into_iter()
            .map(|key| (key, key.default_value()))
            .collect();
        Self { sections, toggles }
    }

    pub fn sections(&self) -> &[SettingsSection] {
        &self.sections
    }

    /// Items across all sections in display order.
    pub fn items(&self) -> impl Iterator<Item = &SettingItem> + '_ {
        self.sections.iter().flat_map(|section| section.items.iter())
    }

    pub fn item_count(&self) -> usize {
        self.items().count()
    }

    pub fn item(&self, index: usize) -> Option<&SettingItem> {
        self.items().nth(index)
    }

    pub fn value(&self, key: SettingKey) -> bool {
        self.toggles
            .get(&key)
            .copied()
            .unwrap_or_else(|| key.default_value())
    }

    pub fn toggle(&mut self, key: SettingKey) -> bool {
        let value = !self.value(key);
        self.toggles.insert(key, value);
        value
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub today: Date,
    pub stats: Vec<DashboardStat>,
    pub todays_appointments: Vec<Appointment>,
}

impl DashboardView {
    pub fn new(today: Date, stats: Vec<DashboardStat>, appointments: &[Appointment]) -> Self {
        let todays_appointments = appointments
            .iter()
            .filter(|appointment| {
                appointment.date == today
                    && appointment.status.bucket() == AppointmentBucket::Upcoming
            })
            .cloned()
            .collect();
        Self {
            today,
            stats,
            todays_appointments,
        }
    }
}

/// All screen state for one signed-in session.
#[derive(Debug)]
pub struct SalonScreens {
    pub dashboard: DashboardView,
    pub appointments: AppointmentsView,
    pub customers: CustomersView,
    pub services: ServicesView,
    pub settings: SettingsScreen,
}

impl SalonScreens {
    pub fn from_catalog(catalog: Catalog) -> Result<Self, ListError> {
        let dashboard = DashboardView::new(catalog.today, catalog.stats, &catalog.appointments);
        Ok(Self {
            dashboard,
            appointments: ListViewModel::new(catalog.appointments, appointments_config())?,
            customers: ListViewModel::new(catalog.customers, customers_config())?,
            services: ListViewModel::new(catalog.services, services_config())?,
            settings: SettingsScreen::new(catalog.settings),
        })
    }

    pub fn today(&self) -> Date {
        self.dashboard.today
    }
}

impl SettingItem {
    pub fn toggle_key(&self) -> Option<SettingKey> {
        match self.kind {
            SettingItemKind::Toggle(key) => Some(key),
            SettingItemKind::Link => None,
        }
    }
}

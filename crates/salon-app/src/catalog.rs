// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Built-in mock data. Every screen reads from this catalog; nothing is
//! persisted and every run starts from the same state.

use time::macros::{date, time};
use time::{Date, Time};

use crate::{
    Appointment, AppointmentId, AppointmentStatus, Customer, CustomerId, DashboardStat, Service,
    ServiceCategory, ServiceId, SettingItem, SettingItemKind, SettingKey, SettingsSection,
};

pub const REFERENCE_DATE: Date = date!(2025 - 06 - 29);
pub const MANAGER_NAME: &str = "Salon Manager";
pub const MANAGER_EMAIL: &str = "manager@glamoursalon.com";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub today: Date,
    pub appointments: Vec<Appointment>,
    pub customers: Vec<Customer>,
    pub services: Vec<Service>,
    pub settings: Vec<SettingsSection>,
    pub stats: Vec<DashboardStat>,
}

impl Catalog {
    pub fn demo() -> Self {
        Self {
            today: REFERENCE_DATE,
            appointments: appointments(),
            customers: customers(),
            services: services(),
            settings: settings_sections(),
            stats: dashboard_stats(),
        }
    }
}

fn appointment(
    id: i64,
    customer: &str,
    service: &str,
    date: Date,
    time: Time,
    status: AppointmentStatus,
) -> Appointment {
    Appointment {
        id: AppointmentId::new(id),
        customer: customer.to_owned(),
        service: service.to_owned(),
        date,
        time,
        status,
    }
}

pub fn appointments() -> Vec<Appointment> {
    use AppointmentStatus::*;

    let today = REFERENCE_DATE;
    let tomorrow = date!(2025 - 06 - 30);
    let yesterday = date!(2025 - 06 - 28);
    let two_days_ago = date!(2025 - 06 - 27);
    let three_days_ago = date!(2025 - 06 - 26);
    vec![
        appointment(1, "Priya Sharma", "Haircut & Styling", today, time!(10:30), Confirmed),
        appointment(2, "Rahul Verma", "Beard Trim", today, time!(11:45), Confirmed),
        appointment(3, "Ananya Patel", "Full Facial", today, time!(14:15), Pending),
        appointment(4, "Vikram Singh", "Hair Color", tomorrow, time!(16:00), Confirmed),
        appointment(5, "Neha Gupta", "Manicure", tomorrow, time!(11:00), Pending),
        appointment(6, "Arjun Kumar", "Haircut", yesterday, time!(15:30), Completed),
        appointment(7, "Meera Reddy", "Spa Treatment", yesterday, time!(13:15), Completed),
        appointment(8, "Raj Malhotra", "Beard Trim", two_days_ago, time!(11:00), Completed),
        appointment(9, "Sonia Verma", "Hair Styling", three_days_ago, time!(16:45), NoShow),
        appointment(10, "Karan Khanna", "Full Body Massage", yesterday, time!(14:00), Cancelled),
        appointment(11, "Pooja Sharma", "Pedicure", two_days_ago, time!(10:30), Cancelled),
    ]
}

#[allow(clippy::too_many_arguments)]
fn customer(
    id: i64,
    name: &str,
    phone: &str,
    email: &str,
    last_visit: Date,
    total_visits: u32,
    total_spent_paise: i64,
    preferred_services: &[&str],
) -> Customer {
    Customer {
        id: CustomerId::new(id),
        name: name.to_owned(),
        phone: phone.to_owned(),
        email: email.to_owned(),
        last_visit,
        total_visits,
        total_spent_paise,
        preferred_services: preferred_services
            .iter()
            .map(|service| (*service).to_owned())
            .collect(),
    }
}

pub fn customers() -> Vec<Customer> {
    vec![
        customer(
            1,
            "Priya Sharma",
            "+91 98765 43210",
            "priya.s@example.com",
            date!(2025 - 06 - 27),
            8,
            4_850_00,
            &["Haircut", "Hair Color", "Facial"],
        ),
        customer(
            2,
            "Rahul Verma",
            "+91 87654 32109",
            "rahul.v@example.com",
            REFERENCE_DATE,
            5,
            2_350_00,
            &["Beard Trim", "Haircut"],
        ),
        customer(
            3,
            "Ananya Patel",
            "+91 76543 21098",
            "ananya.p@example.com",
            date!(2025 - 06 - 22),
            12,
            8_750_00,
            &["Facial", "Manicure", "Pedicure"],
        ),
        customer(
            4,
            "Vikram Singh",
            "+91 65432 10987",
            "vikram.s@example.com",
            date!(2025 - 06 - 26),
            3,
            1_850_00,
            &["Hair Color", "Haircut"],
        ),
        customer(
            5,
            "Neha Gupta",
            "+91 54321 09876",
            "neha.g@example.com",
            date!(2025 - 06 - 15),
            7,
            5_200_00,
            &["Manicure", "Pedicure", "Facial"],
        ),
    ]
}

fn service(
    id: i64,
    name: &str,
    category: ServiceCategory,
    price_paise: i64,
    duration_minutes: u32,
    description: &str,
    popular: bool,
) -> Service {
    Service {
        id: ServiceId::new(id),
        name: name.to_owned(),
        category,
        price_paise,
        duration_minutes,
        description: description.to_owned(),
        popular,
    }
}

pub fn services() -> Vec<Service> {
    use ServiceCategory::*;

    vec![
        service(
            1,
            "Haircut & Styling",
            Hair,
            450_00,
            45,
            "Professional haircut and styling by our expert stylists.",
            true,
        ),
        service(
            2,
            "Hair Color",
            Hair,
            1_200_00,
            90,
            "Full hair coloring with premium products.",
            false,
        ),
        service(
            3,
            "Beard Trim",
            Hair,
            250_00,
            20,
            "Precise beard trimming and shaping.",
            true,
        ),
        service(
            4,
            "Facial",
            Face,
            850_00,
            60,
            "Deep cleansing facial with premium products.",
            true,
        ),
        service(
            5,
            "Manicure",
            Nails,
            350_00,
            30,
            "Professional nail care for your hands.",
            false,
        ),
        service(
            6,
            "Pedicure",
            Nails,
            450_00,
            45,
            "Complete foot care treatment.",
            false,
        ),
        service(
            7,
            "Full Body Massage",
            Spa,
            1_500_00,
            75,
            "Relaxing full body massage to relieve stress and tension.",
            true,
        ),
        service(
            8,
            "Bridal Package",
            Packages,
            8_000_00,
            180,
            "Complete bridal makeup, hair styling, and more.",
            false,
        ),
    ]
}

fn link(id: &str, title: &str, description: &str) -> SettingItem {
    SettingItem {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        kind: SettingItemKind::Link,
        badge: None,
    }
}

fn toggle(key: SettingKey, title: &str, description: &str) -> SettingItem {
    SettingItem {
        id: key.as_str().to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        kind: SettingItemKind::Toggle(key),
        badge: None,
    }
}

fn section(title: &str, items: Vec<SettingItem>) -> SettingsSection {
    SettingsSection {
        title: title.to_owned(),
        items,
    }
}

pub fn settings_sections() -> Vec<SettingsSection> {
    vec![
        section(
            "Business Settings",
            vec![
                link(
                    "business-profile",
                    "Business Profile",
                    "Update your salon details and logo",
                ),
                link(
                    "working-hours",
                    "Working Hours",
                    "Set your salon operating hours",
                ),
                link("locations", "Locations", "Manage multiple salon branches"),
                link("staff", "Staff Management", "Add and manage your salon staff"),
            ],
        ),
        section(
            "App Settings",
            vec![
                toggle(
                    SettingKey::Notifications,
                    "Notifications",
                    "Enable push notifications",
                ),
                toggle(SettingKey::DarkMode, "Dark Mode", "Enable dark theme"),
                toggle(
                    SettingKey::AutoBackup,
                    "Auto Backup",
                    "Automatically backup your data",
                ),
            ],
        ),
        section(
            "Billing & Subscription",
            vec![
                SettingItem {
                    badge: Some("Basic".to_owned()),
                    ..link(
                        "subscription",
                        "Subscription Plan",
                        "Currently on Basic Plan (₹499/month)",
                    )
                },
                link(
                    "payment-history",
                    "Payment History",
                    "View your payment records",
                ),
                link(
                    "billing-info",
                    "Billing Information",
                    "Update your billing details",
                ),
            ],
        ),
        section(
            "Support & Help",
            vec![
                link("help-center", "Help Center", "Get help with using the app"),
                link(
                    "contact-support",
                    "Contact Support",
                    "Reach out to our support team",
                ),
                link("feedback", "Send Feedback", "Help us improve our app"),
            ],
        ),
    ]
}

pub fn dashboard_stats() -> Vec<DashboardStat> {
    [
        ("Appointments", "24"),
        ("Customers", "156"),
        ("Revenue", "₹12,450"),
    ]
    .into_iter()
    .map(|(title, value)| DashboardStat {
        title: title.to_owned(),
        value: value.to_owned(),
    })
    .collect()
}

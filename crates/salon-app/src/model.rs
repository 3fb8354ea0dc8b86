// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use time::macros::format_description;
use time::{Date, Time};

use crate::ids::*;
use crate::listview::ListRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentStatus {
    Confirmed,
    Pending,
    Completed,
    Cancelled,
    NoShow,
}

impl AppointmentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::Pending => "Pending",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::NoShow => "No Show",
        }
    }

    /// The appointments tab a status is listed under.
    pub const fn bucket(self) -> AppointmentBucket {
        match self {
            Self::Confirmed | Self::Pending => AppointmentBucket::Upcoming,
            Self::Completed | Self::NoShow => AppointmentBucket::Past,
            Self::Cancelled => AppointmentBucket::Cancelled,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentBucket {
    Upcoming,
    Past,
    Cancelled,
}

impl AppointmentBucket {
    pub const ALL: [Self; 3] = [Self::Upcoming, Self::Past, Self::Cancelled];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Past => "past",
            Self::Cancelled => "cancelled",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Past => "Past",
            Self::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceCategory {
    Hair,
    Face,
    Nails,
    Spa,
    Packages,
}

impl ServiceCategory {
    pub const ALL: [Self; 5] = [
        Self::Hair,
        Self::Face,
        Self::Nails,
        Self::Spa,
        Self::Packages,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hair => "hair",
            Self::Face => "face",
            Self::Nails => "nails",
            Self::Spa => "spa",
            Self::Packages => "packages",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Hair => "Hair",
            Self::Face => "Face",
            Self::Nails => "Nails",
            Self::Spa => "Spa",
            Self::Packages => "Packages",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabKind {
    Dashboard,
    Appointments,
    Customers,
    Services,
    Settings,
}

impl TabKind {
    pub const ALL: [Self; 5] = [
        Self::Dashboard,
        Self::Appointments,
        Self::Customers,
        Self::Services,
        Self::Settings,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Appointments => "appointments",
            Self::Customers => "customers",
            Self::Services => "services",
            Self::Settings => "settings",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Appointments => "Appointments",
            Self::Customers => "Customers",
            Self::Services => "Services",
            Self::Settings => "Settings",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.label().eq_ignore_ascii_case(value.trim()))
    }

    pub const fn has_list(self) -> bool {
        matches!(self, Self::Appointments | Self::Customers | Self::Services)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScreen {
    Login,
    Register,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Auth(AuthScreen),
    Main,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Nav,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SettingKey {
    Notifications,
    DarkMode,
    AutoBackup,
}

impl SettingKey {
    pub const ALL: [Self; 3] = [Self::Notifications, Self::DarkMode, Self::AutoBackup];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Notifications => "notifications",
            Self::DarkMode => "dark-mode",
            Self::AutoBackup => "auto-backup",
        }
    }

    pub const fn default_value(self) -> bool {
        match self {
            Self::Notifications | Self::AutoBackup => true,
            Self::DarkMode => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingItemKind {
    Link,
    Toggle(SettingKey),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: SettingItemKind,
    pub badge: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsSection {
    pub title: String,
    pub items: Vec<SettingItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStat {
    pub title: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub id: AppointmentId,
    pub customer: String,
    pub service: String,
    pub date: Date,
    pub time: Time,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub last_visit: Date,
    pub total_visits: u32,
    pub total_spent_paise: i64,
    pub preferred_services: Vec<String>,
}

impl Customer {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    pub category: ServiceCategory,
    pub price_paise: i64,
    pub duration_minutes: u32,
    pub description: String,
    pub popular: bool,
}

impl ListRecord for Appointment {
    type Id = AppointmentId;

    fn record_id(&self) -> Self::Id {
        self.id
    }
}

impl ListRecord for Customer {
    type Id = CustomerId;

    fn record_id(&self) -> Self::Id {
        self.id
    }
}

impl ListRecord for Service {
    type Id = ServiceId;

    fn record_id(&self) -> Self::Id {
        self.id
    }
}

/// Formats paise as rupees with Indian digit grouping (`₹1,25,000`).
pub fn format_rupees(paise: i64) -> String {
    let sign = if paise < 0 { "-" } else { "" };
    let paise = paise.unsigned_abs();
    let rupees = paise / 100;
    let remainder = paise % 100;
    let grouped = group_indian_digits(rupees);
    if remainder == 0 {
        format!("{sign}₹{grouped}")
    } else {
        format!("{sign}₹{grouped}.{remainder:02}")
    }
}

fn group_indian_digits(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

pub fn format_clock(value: Time) -> String {
    let hour = value.hour();
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let hour = match hour % 12 {
        0 => 12,
        other => other,
    };
    format!("{hour}:{:02} {suffix}", value.minute())
}

pub fn format_duration_minutes(minutes: u32) -> String {
    format!("{minutes} min")
}

/// `Today`, `Tomorrow`, `Yesterday`, otherwise a short calendar date.
pub fn relative_day_label(date: Date, today: Date) -> String {
    match (date - today).whole_days() {
        0 => "Today".to_owned(),
        1 => "Tomorrow".to_owned(),
        -1 => "Yesterday".to_owned(),
        _ => format_short_date(date),
    }
}

pub fn last_visit_label(last_visit: Date, today: Date) -> String {
    let days = (today - last_visit).whole_days();
    match days {
        i64::MIN..=0 => "Today".to_owned(),
        1 => "Yesterday".to_owned(),
        2..=6 => format!("{days} days ago"),
        7..=13 => "1 week ago".to_owned(),
        _ => format!("{} weeks ago", days / 7),
    }
}

pub fn format_short_date(date: Date) -> String {
    date.format(format_description!("[day padding:none] [month repr:short]"))
        .unwrap_or_else(|_| date.to_string())
}

pub fn format_long_date(date: Date) -> String {
    date.format(format_description!(
        "[month repr:long] [day padding:none], [year]"
    ))
    .unwrap_or_else(|_| date.to_string())
}

// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use salon_app::catalog::REFERENCE_DATE;
use salon_app::{
    Appointment, AppointmentId, AppointmentStatus, Customer, CustomerId, Service, ServiceCategory,
    ServiceId,
};
use std::path::PathBuf;
use time::{Date, Duration, Time};

const FIRST_NAMES: [&str; 16] = [
    "Priya", "Rahul", "Ananya", "Vikram", "Neha", "Arjun", "Meera", "Raj", "Sonia", "Karan",
    "Pooja", "Aditi", "Rohan", "Kavya", "Ishaan", "Divya",
];
const LAST_NAMES: [&str; 12] = [
    "Sharma", "Verma", "Patel", "Singh", "Gupta", "Kumar", "Reddy", "Malhotra", "Khanna", "Iyer",
    "Nair", "Mehta",
];
const EMAIL_DOMAINS: [&str; 4] = ["example.com", "mail.test", "salon.test", "inbox.test"];

const SERVICE_NAMES: [(&str, ServiceCategory); 14] = [
    ("Haircut", ServiceCategory::Hair),
    ("Hair Color", ServiceCategory::Hair),
    ("Beard Trim", ServiceCategory::Hair),
    ("Keratin Treatment", ServiceCategory::Hair),
    ("Facial", ServiceCategory::Face),
    ("Threading", ServiceCategory::Face),
    ("Cleanup", ServiceCategory::Face),
    ("Manicure", ServiceCategory::Nails),
    ("Pedicure", ServiceCategory::Nails),
    ("Nail Art", ServiceCategory::Nails),
    ("Head Massage", ServiceCategory::Spa),
    ("Full Body Massage", ServiceCategory::Spa),
    ("Bridal Package", ServiceCategory::Packages),
    ("Groom Package", ServiceCategory::Packages),
];

const STATUSES: [AppointmentStatus; 5] = [
    AppointmentStatus::Confirmed,
    AppointmentStatus::Pending,
    AppointmentStatus::Completed,
    AppointmentStatus::Cancelled,
    AppointmentStatus::NoShow,
];

const WORDS: [&str; 20] = [
    "premium",
    "relaxing",
    "deep",
    "cleansing",
    "styling",
    "trim",
    "organic",
    "herbal",
    "glow",
    "care",
    "professional",
    "express",
    "classic",
    "signature",
    "hydrating",
    "polish",
    "expert",
    "soothing",
    "fresh",
    "treatment",
];

/// Substrings worth probing a generated collection with.
pub const PROBE_QUERIES: [&str; 12] = [
    "", " ", "a", "SHARMA", "priya", "hair", "Massage", "+91", "@", ".test", "zzz", "  Trim  ",
];

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }

    fn bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

/// Seeded generator for salon records. Ids are assigned sequentially per
/// record type so generated collections never collide.
#[derive(Debug, Clone)]
pub struct SalonFaker {
    rng: DeterministicRng,
    next_appointment: i64,
    next_customer: i64,
    next_service: i64,
}

impl SalonFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
            next_appointment: 1,
            next_customer: 1,
            next_service: 1,
        }
    }

    pub fn int_n(&mut self, n: usize) -> usize {
        self.rng.int_n(n)
    }

    pub fn customer(&mut self) -> Customer {
        let first = self.pick(&FIRST_NAMES);
        let last = self.pick(&LAST_NAMES);
        let id = self.next_customer;
        self.next_customer += 1;

        let name = self.vary_case(&format!("{first} {last}"));
        let email = format!(
            "{}.{}{}@{}",
            first.to_lowercase(),
            last.chars().next().unwrap_or('x').to_ascii_lowercase(),
            id,
            self.pick(&EMAIL_DOMAINS),
        );
        let phone = format!(
            "+91 {:05} {:05}",
            self.int_range(60_000, 99_999),
            self.int_range(0, 99_999)
        );
        let preferred = (0..self.int_range(1, 3))
            .map(|_| self.pick_service().0.to_owned())
            .collect();

        Customer {
            id: CustomerId::new(id),
            name,
            phone,
            email,
            last_visit: self.date_near_reference(60),
            total_visits: self.int_range(1, 40) as u32,
            total_spent_paise: self.int_range(250, 50_000) * 100,
            preferred_services: preferred,
        }
    }

    pub fn service(&mut self) -> Service {
        let (name, category) = self.pick_service();
        let id = self.next_service;
        self.next_service += 1;
        let description = self.sentence(3, 8);

        Service {
            id: ServiceId::new(id),
            name: self.vary_case(name),
            category,
            price_paise: self.int_range(2, 120) * 50_00,
            duration_minutes: self.int_range(2, 36) as u32 * 5,
            description,
            popular: self.rng.bool(),
        }
    }

    pub fn appointment(&mut self) -> Appointment {
        let id = self.next_appointment;
        self.next_appointment += 1;
        let customer = format!("{} {}", self.pick(&FIRST_NAMES), self.pick(&LAST_NAMES));
        let service = self.pick_service().0.to_owned();
        let hour = self.int_range(9, 19) as u8;
        let minute = [0, 15, 30, 45][self.rng.int_n(4)];

        Appointment {
            id: AppointmentId::new(id),
            customer: self.vary_case(&customer),
            service,
            date: self.date_near_reference(7),
            time: Time::from_hms(hour, minute, 0).unwrap_or(Time::MIDNIGHT),
            status: STATUSES[self.rng.int_n(STATUSES.len())],
        }
    }

    pub fn customers(&mut self, count: usize) -> Vec<Customer> {
        (0..count).map(|_| self.customer()).collect()
    }

    pub fn services(&mut self, count: usize) -> Vec<Service> {
        (0..count).map(|_| self.service()).collect()
    }

    pub fn appointments(&mut self, count: usize) -> Vec<Appointment> {
        (0..count).map(|_| self.appointment()).collect()
    }

    /// A query drawn either from a record's own text or from the probe list.
    pub fn query_from(&mut self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        if chars.is_empty() || self.rng.int_n(3) == 0 {
            return PROBE_QUERIES[self.rng.int_n(PROBE_QUERIES.len())].to_owned();
        }
        let start = self.rng.int_n(chars.len());
        let len = 1 + self.rng.int_n((chars.len() - start).min(6));
        let slice: String = chars[start..start + len].iter().collect();
        self.vary_case(&slice)
    }

    fn pick<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[self.rng.int_n(items.len())]
    }

    fn pick_service(&mut self) -> (&'static str, ServiceCategory) {
        SERVICE_NAMES[self.rng.int_n(SERVICE_NAMES.len())]
    }

    fn int_range(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        let span = max - min + 1;
        min + (self.rng.next_u64() % (span as u64)) as i64
    }

    fn date_near_reference(&mut self, spread_days: i64) -> Date {
        let offset = self.int_range(-spread_days, spread_days);
        REFERENCE_DATE
            .checked_add(Duration::days(offset))
            .unwrap_or(REFERENCE_DATE)
    }

    fn vary_case(&mut self, value: &str) -> String {
        match self.rng.int_n(4) {
            0 => value.to_uppercase(),
            1 => value.to_lowercase(),
            _ => value.to_owned(),
        }
    }

    fn sentence(&mut self, min_words: i64, max_words: i64) -> String {
        let count = self.int_range(min_words, max_words) as usize;
        let mut sentence = (0..count)
            .map(|_| self.pick(&WORDS))
            .collect::<Vec<_>>()
            .join(" ");
        if let Some(first) = sentence.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        sentence.push('.');
        sentence
    }
}

pub fn temp_config_path() -> Result<(tempfile::TempDir, PathBuf)> {
    let dir = tempfile::tempdir().context("create temp dir")?;
    let path = dir.path().join("config.toml");
    Ok((dir, path))
}

pub fn reference_date() -> Date {
    REFERENCE_DATE
}

pub fn service_names() -> impl Iterator<Item = &'static str> {
    SERVICE_NAMES.into_iter().map(|(name, _)| name)
}

#[cfg(test)]
mod tests {
    use super::{SalonFaker, reference_date, service_names};
    use std::collections::BTreeSet;
    use time::Duration;

    #[test]
    fn new_deterministic_seed() {
        let mut left = SalonFaker::new(42);
        let mut right = SalonFaker::new(42);
        assert_eq!(left.customer(), right.customer());
        assert_eq!(left.service(), right.service());
        assert_eq!(left.appointment(), right.appointment());
    }

    #[test]
    fn ids_are_sequential_per_kind() {
        let mut faker = SalonFaker::new(7);
        let customers = faker.customers(5);
        let services = faker.services(3);
        let ids: Vec<_> = customers.iter().map(|c| c.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(services[2].id.get(), 3);
    }

    #[test]
    fn customer_fields_are_populated() {
        let mut faker = SalonFaker::new(3);
        let customer = faker.customer();
        assert!(!customer.name.is_empty());
        assert!(customer.phone.starts_with("+91 "));
        assert!(customer.email.contains('@'));
        assert!(!customer.preferred_services.is_empty());
        assert!(customer.total_spent_paise > 0);
    }

    #[test]
    fn appointment_dates_stay_near_reference() {
        let mut faker = SalonFaker::new(11);
        for appointment in faker.appointments(50) {
            let gap = appointment.date - reference_date();
            assert!(gap.abs() <= Duration::days(7), "gap {gap}");
        }
    }

    #[test]
    fn service_names_come_from_known_list() {
        let known: BTreeSet<_> = service_names().map(str::to_lowercase).collect();
        let mut faker = SalonFaker::new(5);
        for service in faker.services(30) {
            assert!(known.contains(&service.name.to_lowercase()), "{}", service.name);
            assert_eq!(service.duration_minutes % 5, 0);
        }
    }

    #[test]
    fn variety_across_seeds() {
        let mut names = BTreeSet::new();
        for seed in 0_u64..20_u64 {
            let mut faker = SalonFaker::new(seed);
            names.insert(faker.customer().name.to_lowercase());
        }
        assert!(names.len() >= 10, "got {}", names.len());
    }

    #[test]
    fn query_from_draws_substrings_or_probes() {
        let mut faker = SalonFaker::new(9);
        for _ in 0..100 {
            let query = faker.query_from("Priya Sharma");
            let trimmed = query.trim().to_lowercase();
            let is_probe = super::PROBE_QUERIES.contains(&query.as_str());
            assert!(is_probe || "priya sharma".contains(&trimmed), "{query:?}");
        }
    }

    #[test]
    fn int_n() {
        let mut faker = SalonFaker::new(42);
        for _ in 0..100 {
            assert!(faker.int_n(5) < 5);
        }
    }
}

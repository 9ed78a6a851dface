//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{Context, Result};
use tracing::warn;

use reisekosten_calendar::Region;
use reisekosten_mail::{Envelope, SmtpSettings};
use reisekosten_workdays::{Customer, Policy, Rates};

use crate::config::{Config, CustomerToml, EmailToml, RatesToml, SmtpToml};

/// Parses a province code, falling back to the default region with a warning.
pub fn parse_region(code: &str) -> Region {
    if Region::parse(code).is_none() {
        warn!(
            province = code,
            fallback = %Region::DEFAULT,
            "unknown province code, using default region"
        );
    }
    Region::from_code(code)
}

pub fn build_customer(c: &CustomerToml) -> Customer {
    Customer::new(c.id.as_str(), c.name.as_str(), c.distance)
        .with_route(c.from.as_str(), c.to.as_str())
        .with_reason(c.reason.as_str())
        .with_region(parse_region(&c.province))
}

/// Converts the customer list, keeping the configured order.
pub fn build_customers(config: &Config) -> Vec<Customer> {
    config.customers.iter().map(build_customer).collect()
}

pub fn build_policy(config: &Config) -> Policy {
    Policy::new(config.holiday_period_exclusion)
}

pub fn build_rates(r: &RatesToml) -> Result<Rates> {
    Rates::new(r.km, r.meal_allowance).context("invalid [rates] section")
}

pub fn build_smtp_settings(s: &SmtpToml) -> SmtpSettings {
    SmtpSettings {
        host: s.host.clone(),
        port: s.port,
        user: s.user.clone(),
        pass: s.pass.clone(),
    }
}

pub fn build_envelope(e: &EmailToml) -> Envelope {
    Envelope {
        from: e.from.clone(),
        to: e.to.clone(),
    }
}

//! Customer trip relationships.

use reisekosten_calendar::Region;

/// One customer trip relationship.
///
/// The position of a customer in the input list fixes its place in the
/// round-robin rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    id: String,
    name: String,
    from: String,
    to: String,
    reason: String,
    region: Region,
    distance_km: u32,
}

impl Customer {
    /// Creates a customer in the default region with an empty route.
    ///
    /// # Arguments
    ///
    /// * `id` - Short identifier printed in front of the customer header.
    /// * `name` - Display name.
    /// * `distance_km` - One-way distance in kilometres.
    pub fn new(id: impl Into<String>, name: impl Into<String>, distance_km: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            from: String::new(),
            to: String::new(),
            reason: String::new(),
            region: Region::DEFAULT,
            distance_km,
        }
    }

    /// Sets origin and destination.
    pub fn with_route(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.from = from.into();
        self.to = to.into();
        self
    }

    /// Sets the reason for travel.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    /// Sets the holiday region.
    pub fn with_region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn region(&self) -> Region {
        self.region
    }

    /// One-way distance in kilometres.
    pub fn distance_km(&self) -> u32 {
        self.distance_km
    }
}

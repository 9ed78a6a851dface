//! German federal states as holiday jurisdictions.

use std::fmt;

use tracing::debug;

/// A holiday jurisdiction: one of the 16 German federal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    /// Baden-Württemberg.
    BW,
    /// Bayern.
    BY,
    /// Berlin.
    BE,
    /// Brandenburg.
    BB,
    /// Bremen.
    HB,
    /// Hamburg.
    HH,
    /// Hessen.
    HE,
    /// Mecklenburg-Vorpommern.
    MV,
    /// Niedersachsen.
    NI,
    /// Nordrhein-Westfalen.
    NW,
    /// Rheinland-Pfalz.
    RP,
    /// Saarland.
    SL,
    /// Sachsen.
    SN,
    /// Sachsen-Anhalt.
    ST,
    /// Schleswig-Holstein.
    SH,
    /// Thüringen.
    TH,
}

impl Region {
    /// Region used whenever a code is not recognised.
    pub const DEFAULT: Region = Region::BW;

    /// All supported regions in table order.
    pub const ALL: [Region; 16] = [
        Region::BW,
        Region::BY,
        Region::BE,
        Region::BB,
        Region::HB,
        Region::HH,
        Region::HE,
        Region::MV,
        Region::NI,
        Region::NW,
        Region::RP,
        Region::SL,
        Region::SN,
        Region::ST,
        Region::SH,
        Region::TH,
    ];

    /// Strictly parses a case-sensitive state code such as `"BY"`.
    ///
    /// Returns `None` for anything not in the table, including `""` and
    /// lower-case codes.
    pub fn parse(code: &str) -> Option<Region> {
        Self::ALL.into_iter().find(|r| r.code() == code)
    }

    /// Resolves a state code, falling back to [`Region::DEFAULT`].
    ///
    /// Never fails: unknown or empty codes silently map to Baden-Württemberg.
    pub fn from_code(code: &str) -> Region {
        Self::parse(code).unwrap_or_else(|| {
            debug!(code, fallback = Self::DEFAULT.code(), "unknown region code");
            Self::DEFAULT
        })
    }

    /// Returns the two-letter state code.
    pub fn code(self) -> &'static str {
        match self {
            Region::BW => "BW",
            Region::BY => "BY",
            Region::BE => "BE",
            Region::BB => "BB",
            Region::HB => "HB",
            Region::HH => "HH",
            Region::HE => "HE",
            Region::MV => "MV",
            Region::NI => "NI",
            Region::NW => "NW",
            Region::RP => "RP",
            Region::SL => "SL",
            Region::SN => "SN",
            Region::ST => "ST",
            Region::SH => "SH",
            Region::TH => "TH",
        }
    }

    /// Returns the German name of the state.
    pub fn name(self) -> &'static str {
        match self {
            Region::BW => "Baden-Württemberg",
            Region::BY => "Bayern",
            Region::BE => "Berlin",
            Region::BB => "Brandenburg",
            Region::HB => "Bremen",
            Region::HH => "Hamburg",
            Region::HE => "Hessen",
            Region::MV => "Mecklenburg-Vorpommern",
            Region::NI => "Niedersachsen",
            Region::NW => "Nordrhein-Westfalen",
            Region::RP => "Rheinland-Pfalz",
            Region::SL => "Saarland",
            Region::SN => "Sachsen",
            Region::ST => "Sachsen-Anhalt",
            Region::SH => "Schleswig-Holstein",
            Region::TH => "Thüringen",
        }
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

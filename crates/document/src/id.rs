//! Document reference numbers ("Belegnummer").

use rand::Rng;
use reisekosten_calendar::YearMonth;

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const SUFFIX_LEN: usize = 4;

/// Returns a fresh reference number `RK-YYYY-MM-XXXX` for `period`.
///
/// The suffix is random; this is the only randomness in the pipeline.
pub fn document_id(period: YearMonth) -> String {
    document_id_with(period, &mut rand::rng())
}

/// Like [`document_id`], drawing the suffix from `rng`.
pub fn document_id_with<R: Rng + ?Sized>(period: YearMonth, rng: &mut R) -> String {
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| char::from(CHARSET[rng.random_range(0..CHARSET.len())]))
        .collect();
    format!("RK-{}-{:02}-{suffix}", period.year(), period.month())
}

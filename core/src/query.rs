use crate::error::{FareError, Result};
use crate::string_normalization::normalize_code;
use rustc_hash::FxHashSet;

/// A fare request that has passed boundary validation: both codes are known
/// airports and the stopover count is within the allowed range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FareQuery {
    pub from: String,
    pub to: String,
    pub stopovers: u32,
}

impl FareQuery {
    pub fn validate(
        from: &str,
        to: &str,
        stopovers: i64,
        known_codes: &FxHashSet<String>,
        max_stopovers: u32,
    ) -> Result<Self> {
        let from = require_known_code("from", from, known_codes)?;
        let to = require_known_code("to", to, known_codes)?;
        let stopovers = check_stopovers(stopovers, max_stopovers)?;

        Ok(Self {
            from,
            to,
            stopovers,
        })
    }

    pub fn max_legs(&self) -> usize {
        self.stopovers as usize + 1
    }
}

fn require_known_code(
    field: &'static str,
    raw_code: &str,
    known_codes: &FxHashSet<String>,
) -> Result<String> {
    let code = normalize_code(raw_code);

    if code.is_empty() {
        return Err(FareError::MissingField(field));
    }
    if !known_codes.contains(&code) {
        return Err(FareError::UnknownAirport(code));
    }

    Ok(code)
}

fn check_stopovers(stopovers: i64, max_stopovers: u32) -> Result<u32> {
    if stopovers < 0 || stopovers > i64::from(max_stopovers) {
        return Err(FareError::StopoversOutOfRange {
            value: stopovers,
            max: max_stopovers,
        });
    }
    Ok(stopovers as u32)
}

//! Place-of-supply resolution
//!
//! Company settings store the registered state as `"<code>-<StateName>"`
//! (e.g. `"29-Karnataka"`), while documents carry the buyer's state as a
//! plain name. Supply is intra-state when the two name the same state.

use serde::{Deserialize, Serialize};

use crate::types::TaxMode;

/// GST state codes as printed on GSTINs
pub const GST_STATE_CODES: &[(&str, &str)] = &[
    ("01", "Jammu and Kashmir"),
    ("02", "Himachal Pradesh"),
    ("03", "Punjab"),
    ("04", "Chandigarh"),
    ("05", "Uttarakhand"),
    ("06", "Haryana"),
    ("07", "Delhi"),
    ("08", "Rajasthan"),
    ("09", "Uttar Pradesh"),
    ("10", "Bihar"),
    ("11", "Sikkim"),
    ("12", "Arunachal Pradesh"),
    ("13", "Nagaland"),
    ("14", "Manipur"),
    ("15", "Mizoram"),
    ("16", "Tripura"),
    ("17", "Meghalaya"),
    ("18", "Assam"),
    ("19", "West Bengal"),
    ("20", "Jharkhand"),
    ("21", "Odisha"),
    ("22", "Chhattisgarh"),
    ("23", "Madhya Pradesh"),
    ("24", "Gujarat"),
    ("26", "Dadra and Nagar Haveli and Daman and Diu"),
    ("27", "Maharashtra"),
    ("29", "Karnataka"),
    ("30", "Goa"),
    ("31", "Lakshadweep"),
    ("32", "Kerala"),
    ("33", "Tamil Nadu"),
    ("34", "Puducherry"),
    ("35", "Andaman and Nicobar Islands"),
    ("36", "Telangana"),
    ("37", "Andhra Pradesh"),
    ("38", "Ladakh"),
    ("97", "Other Territory"),
];

/// Outcome of comparing seller and buyer states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateResolution {
    pub is_intra_state: bool,
    /// `Domestic` for intra-state, `InterState` otherwise
    pub mode: TaxMode,
}

/// Extract the state name from a `"<code>-<StateName>"` label
///
/// Labels without a hyphen are returned whole.
pub fn extract_state_name(label: &str) -> &str {
    match label.split_once('-') {
        Some((_, name)) => name.trim(),
        None => label.trim(),
    }
}

/// Place of supply after defaulting a blank value to the company's state
pub fn effective_place_of_supply<'a>(
    company_state_label: &'a str,
    place_of_supply: &'a str,
) -> &'a str {
    let place = place_of_supply.trim();
    if place.is_empty() {
        extract_state_name(company_state_label)
    } else {
        place
    }
}

/// Decide between CGST/SGST and IGST for a document
pub fn resolve_mode(company_state_label: &str, place_of_supply: &str) -> StateResolution {
    let company_state = extract_state_name(company_state_label);
    let place = effective_place_of_supply(company_state_label, place_of_supply);

    let is_intra_state = company_state.eq_ignore_ascii_case(place);
    let mode = if is_intra_state {
        TaxMode::Domestic
    } else {
        TaxMode::InterState
    };

    tracing::trace!(company_state, place, is_intra_state, "resolved place of supply");

    StateResolution {
        is_intra_state,
        mode,
    }
}

/// Build the `"<code>-<StateName>"` label for a state name
pub fn state_label_for(state_name: &str) -> Option<String> {
    let wanted = state_name.trim();
    GST_STATE_CODES
        .iter()
        .find(|(_, name)| name.eq_ignore_ascii_case(wanted))
        .map(|(code, name)| format!("{}-{}", code, name))
}

/// Look up a state name by its two-digit GST code
pub fn state_name_for_code(code: &str) -> Option<&'static str> {
    GST_STATE_CODES
        .iter()
        .find(|(c, _)| *c == code.trim())
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_state_name() {
        assert_eq!(extract_state_name("29-Karnataka"), "Karnataka");
        assert_eq!(extract_state_name("Karnataka"), "Karnataka");
        assert_eq!(extract_state_name("07 - Delhi"), "Delhi");
        assert_eq!(extract_state_name("99-Some-Place"), "Some-Place");
    }

    #[test]
    fn test_same_state_is_domestic() {
        let resolution = resolve_mode("29-Karnataka", "Karnataka");
        assert!(resolution.is_intra_state);
        assert_eq!(resolution.mode, TaxMode::Domestic);
    }

    #[test]
    fn test_comparison_ignores_case() {
        let resolution = resolve_mode("29-Karnataka", "KARNATAKA");
        assert!(resolution.is_intra_state);
    }

    #[test]
    fn test_other_state_is_inter_state() {
        let resolution = resolve_mode("29-Karnataka", "Maharashtra");
        assert!(!resolution.is_intra_state);
        assert_eq!(resolution.mode, TaxMode::InterState);
    }

    #[test]
    fn test_blank_place_defaults_to_company_state() {
        assert_eq!(effective_place_of_supply("29-Karnataka", "  "), "Karnataka");
        assert_eq!(resolve_mode("29-Karnataka", "").mode, TaxMode::Domestic);
    }

    #[test]
    fn test_state_code_lookup() {
        assert_eq!(state_label_for("karnataka"), Some("29-Karnataka".to_string()));
        assert_eq!(state_name_for_code("27"), Some("Maharashtra"));
        assert_eq!(state_name_for_code("25"), None);
        assert_eq!(state_label_for("Atlantis"), None);
    }
}

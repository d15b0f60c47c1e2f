use serde::Deserialize;
use crate::config;

// VIES fills unavailable name/address with this
const VIES_UNAVAILABLE: &str = "---";

#[derive(Clone, Debug, PartialEq)]
pub struct VatLookupRequest {
    pub vat: String,
    pub csrf_token: String,
}

impl VatLookupRequest {
    /// Build a request when both inputs carry something, `None` otherwise.
    pub fn from_inputs(country_code: &str, vat_number: &str, csrf_token: &str) -> Option<Self> {
        let country_code = country_code.trim();
        let vat_number = vat_number.trim();
        if country_code.is_empty() || vat_number.is_empty() {
            return None;
        }
        Some(VatLookupRequest {
            vat: format!("{}{}", country_code.to_uppercase(), vat_number),
            csrf_token: csrf_token.to_string(),
        })
    }

    pub fn form_body(&self) -> String {
        format!(
            "vat={}&{}={}",
            urlencoding::encode(&self.vat),
            config::CSRF_FIELD_NAME,
            urlencoding::encode(&self.csrf_token)
        )
    }
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct VatLookupResult {
    pub valid: bool,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, rename = "countryCode")]
    pub country_code: Option<String>,
    #[serde(default, rename = "vatNumber")]
    pub vat_number: Option<String>,
    #[serde(default)]
    pub fault_code: Option<String>,
    #[serde(default)]
    pub fault_message: Option<String>,
}

/// Values to write into the billing form after a valid lookup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AutofillPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postcode: Option<String>,
}

impl AutofillPatch {
    /// `None` for invalid results, those never touch the form.
    pub fn from_result(result: &VatLookupResult) -> Option<Self> {
        if !result.valid {
            return None;
        }

        let mut patch = AutofillPatch {
            name: available(result.name.as_deref()),
            ..Default::default()
        };

        if let Some(address) = available(result.address.as_deref()) {
            let lines: Vec<&str> = address
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect();
            if let Some(first) = lines.first() {
                patch.address = Some(first.to_string());
            }
            // The last line holds the city, also when it is the only one
            if let Some(last) = lines.last() {
                let (postcode, city) = split_postcode_city(last);
                patch.postcode = postcode;
                patch.city = Some(city);
            }
        }

        Some(patch)
    }
}

fn available(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty() && *value != VIES_UNAVAILABLE)
        .map(str::to_string)
}

/// Split the last address line into postcode and city. VIES separates the
/// two with a double space; the half with more digits is the postcode.
pub fn split_postcode_city(line: &str) -> (Option<String>, String) {
    let Some((left, right)) = line.split_once("  ") else {
        return (None, line.trim().to_string());
    };
    let (left, right) = (left.trim(), right.trim());
    if left.is_empty() || right.is_empty() {
        return (None, line.trim().to_string());
    }

    let digits = |s: &str| s.chars().filter(char::is_ascii_digit).count();
    if digits(left) > digits(right) {
        (Some(left.to_string()), right.to_string())
    } else {
        (Some(right.to_string()), left.to_string())
    }
}

/// Country dropdown value for a VAT prefix. Greece uses `EL` in VAT numbers
/// and Northern Ireland traders use `XI`.
pub fn country_for_vat_prefix(prefix: &str) -> Option<String> {
    let prefix = prefix.trim().to_uppercase();
    match prefix.as_str() {
        "" => None,
        "EL" => Some("GR".to_string()),
        "XI" => Some("GB".to_string()),
        _ => Some(prefix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid(address: &str) -> VatLookupResult {
        VatLookupResult {
            valid: true,
            name: Some("ACME s.r.o.".to_string()),
            address: Some(address.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_multiline_address_splits_postcode() {
        let patch = AutofillPatch::from_result(&valid("Street 1\nCity  12345")).unwrap();
        assert_eq!(patch.name.as_deref(), Some("ACME s.r.o."));
        assert_eq!(patch.address.as_deref(), Some("Street 1"));
        assert_eq!(patch.city.as_deref(), Some("City"));
        assert_eq!(patch.postcode.as_deref(), Some("12345"));
    }

    #[test]
    fn test_postcode_first_layout() {
        let patch = AutofillPatch::from_result(&valid("Nádražní 12\nPraha 5\n150 00  PRAHA 5")).unwrap();
        assert_eq!(patch.address.as_deref(), Some("Nádražní 12"));
        assert_eq!(patch.postcode.as_deref(), Some("150 00"));
        assert_eq!(patch.city.as_deref(), Some("PRAHA 5"));
    }

    #[test]
    fn test_last_line_without_separator_is_city() {
        let patch = AutofillPatch::from_result(&valid("Main Street 4\n1010 Wien")).unwrap();
        assert_eq!(patch.address.as_deref(), Some("Main Street 4"));
        assert_eq!(patch.city.as_deref(), Some("1010 Wien"));
        assert_eq!(patch.postcode, None);
    }

    #[test]
    fn test_single_line_address_is_also_the_city() {
        let patch = AutofillPatch::from_result(&valid("Street 1")).unwrap();
        assert_eq!(patch.address.as_deref(), Some("Street 1"));
        assert_eq!(patch.city.as_deref(), Some("Street 1"));
        assert_eq!(patch.postcode, None);

        let patch = AutofillPatch::from_result(&valid("Town  999")).unwrap();
        assert_eq!(patch.address.as_deref(), Some("Town  999"));
        assert_eq!(patch.city.as_deref(), Some("Town"));
        assert_eq!(patch.postcode.as_deref(), Some("999"));
    }

    #[test]
    fn test_blank_lines_and_placeholders_are_skipped() {
        let patch = AutofillPatch::from_result(&VatLookupResult {
            valid: true,
            name: Some("---".to_string()),
            address: Some("\n  Street 1 \n\nTown  999\n".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(patch.name, None);
        assert_eq!(patch.address.as_deref(), Some("Street 1"));
        assert_eq!(patch.city.as_deref(), Some("Town"));
        assert_eq!(patch.postcode.as_deref(), Some("999"));

        let patch = AutofillPatch::from_result(&VatLookupResult {
            valid: true,
            address: Some("---".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(patch, AutofillPatch::default());
    }

    #[test]
    fn test_invalid_result_yields_no_patch() {
        let mut result = valid("Street 1\nCity  12345");
        result.valid = false;
        assert_eq!(AutofillPatch::from_result(&result), None);
    }

    #[test]
    fn test_decode_backend_response() {
        let result: VatLookupResult = serde_json::from_str(
            r#"{"valid": true, "name": "Weblate s.r.o.", "address": "Nábřežní 1\n123 45  Praha", "countryCode": "CZ", "vatNumber": "21668027"}"#,
        )
        .unwrap();
        assert!(result.valid);
        assert_eq!(result.country_code.as_deref(), Some("CZ"));
        assert_eq!(result.vat_number.as_deref(), Some("21668027"));

        let result: VatLookupResult = serde_json::from_str(
            r#"{"valid": false, "fault_code": "soap:Server", "fault_message": "MS_UNAVAILABLE"}"#,
        )
        .unwrap();
        assert!(!result.valid);
        assert_eq!(result.fault_message.as_deref(), Some("MS_UNAVAILABLE"));
        assert_eq!(result.name, None);
    }

    #[test]
    fn test_request_needs_both_inputs() {
        assert_eq!(VatLookupRequest::from_inputs("", "123", "t"), None);
        assert_eq!(VatLookupRequest::from_inputs("CZ", "  ", "t"), None);

        let request = VatLookupRequest::from_inputs(" cz", "21668027 ", "tok+en").unwrap();
        assert_eq!(request.vat, "CZ21668027");
        assert_eq!(request.form_body(), "vat=CZ21668027&csrfmiddlewaretoken=tok%2Ben");
    }

    #[test]
    fn test_country_for_vat_prefix() {
        assert_eq!(country_for_vat_prefix("cz"), Some("CZ".to_string()));
        assert_eq!(country_for_vat_prefix("EL"), Some("GR".to_string()));
        assert_eq!(country_for_vat_prefix("xi"), Some("GB".to_string()));
        assert_eq!(country_for_vat_prefix("  "), None);
    }
}

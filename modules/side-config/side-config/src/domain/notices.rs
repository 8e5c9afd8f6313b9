//! Operator-facing notice and prompt texts.

use side_config_sdk::FieldKind;

pub const CERT_VERIFICATION_TITLE: &str = "CERT VERIFICATION";
pub const CERT_VERIFICATION_TOGGLED: &str = "CERT VERIFICATION TOGGLED";

#[must_use]
pub fn load_failed(status: u16) -> String {
    format!("ERROR RETRIEVING NODE SIDE CONFIG: {status}")
}

#[must_use]
pub fn field_set(field: FieldKind) -> String {
    format!("{} SET", field.label())
}

#[must_use]
pub fn field_set_failed(field: FieldKind, status_text: &str) -> String {
    format!("ERROR SETTING {}: {status_text}", field.label())
}

/// Confirmation question for switching verification to `enable`.
#[must_use]
pub fn cert_verification_prompt(enable: bool) -> String {
    let action = if enable { "enable" } else { "disable" };
    format!("Are you sure you want to {action} certificate verification ?")
}

#[must_use]
pub fn cert_toggle_failed(status_text: &str) -> String {
    format!("ERROR TOGGLING CERT VERIFICATION: {status_text}")
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn field_notices_use_labels() {
        assert_eq!(field_set(FieldKind::ApiHeader), "API HEADER SET");
        assert_eq!(
            field_set_failed(FieldKind::Password, "Forbidden"),
            "ERROR SETTING PASSWORD: Forbidden"
        );
    }

    #[test]
    fn cert_prompt_names_new_state() {
        assert!(cert_verification_prompt(false).contains("disable"));
        assert!(cert_verification_prompt(true).contains("enable"));
    }
}

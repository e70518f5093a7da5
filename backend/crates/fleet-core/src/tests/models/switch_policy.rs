use crate::SwitchPolicy;

use std::str::FromStr;

#[test]
fn test_switch_policy_default_is_unconditional() {
    assert_eq!(SwitchPolicy::default(), SwitchPolicy::Unconditional);
}

#[test]
fn test_switch_policy_from_str_is_case_insensitive() {
    assert_eq!(
        SwitchPolicy::from_str("Reconfirm").unwrap(),
        SwitchPolicy::Reconfirm
    );
    assert_eq!(
        SwitchPolicy::from_str("unconditional").unwrap(),
        SwitchPolicy::Unconditional
    );
    assert!(SwitchPolicy::from_str("sometimes").is_err());
}

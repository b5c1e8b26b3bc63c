//! Profile edit flow: form validation gating store updates.

#![allow(clippy::unwrap_used)]

use mart_integration_tests::TestContext;
use mart_storefront::profile::Address;
use mart_storefront::validate::{ProfileField, ProfileForm};

fn filled_form() -> ProfileForm {
    ProfileForm {
        name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        phone: "+1 (555) 123-4567".to_owned(),
        address: Address {
            street: "123 Main St".to_owned(),
            city: "Springfield".to_owned(),
            state: "IL".to_owned(),
            zip_code: "62704".to_owned(),
            country: "United States".to_owned(),
        },
    }
}

#[test]
fn test_valid_edit_saves_and_completes_profile() {
    let ctx = TestContext::new();
    let mut state = ctx.state();
    assert!(!state.profile().is_complete());

    let form = filled_form();
    form.validate().unwrap();
    let (profile_update, address_update) = form.into_updates();
    state.profile_mut().update(profile_update).unwrap();
    state.profile_mut().update_address(address_update).unwrap();

    assert!(state.profile().is_complete());
    assert_eq!(state.profile().profile().name, "Ada Lovelace");
}

#[test]
fn test_invalid_form_blocks_save_and_store_is_untouched() {
    let ctx = TestContext::new();
    let state = ctx.state();

    let mut form = filled_form();
    form.address.zip_code = "1234".to_owned();

    // The form gates the save: on failure, nothing reaches the store.
    let errors = form.validate().unwrap_err();
    assert_eq!(
        errors.get(ProfileField::ZipCode),
        Some("Invalid ZIP code format")
    );
    assert_eq!(state.profile().profile().name, "");
    assert!(ctx.persisted("user").is_none());
}

#[test]
fn test_zip_code_accepted_shapes() {
    let mut form = filled_form();

    form.address.zip_code = "12345".to_owned();
    assert!(form.validate().is_ok());

    form.address.zip_code = "12345-6789".to_owned();
    assert!(form.validate().is_ok());

    form.address.zip_code = "1234".to_owned();
    assert!(form.validate().is_err());
}

#[test]
fn test_profile_survives_a_new_application_run() {
    let ctx = TestContext::new();
    {
        let mut state = ctx.state();
        let (profile_update, address_update) = filled_form().into_updates();
        state.profile_mut().update(profile_update).unwrap();
        state.profile_mut().update_address(address_update).unwrap();
    }

    let state = ctx.state();
    assert!(state.profile().is_complete());
    assert_eq!(state.profile().profile().address.zip_code, "62704");

    // Persisted shape uses the camelCase key names.
    let raw = ctx.persisted("user").unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed["address"]["zipCode"], "62704");
}

#[test]
fn test_completeness_is_emptiness_only() {
    let ctx = TestContext::new();
    let mut state = ctx.state();

    let mut form = filled_form();
    // Skip validation entirely: the store accepts free-form values, and
    // completeness only checks that fields are non-empty.
    form.email = "not an email at all".to_owned();
    let (profile_update, address_update) = form.into_updates();
    state.profile_mut().update(profile_update).unwrap();
    state.profile_mut().update_address(address_update).unwrap();

    assert!(state.profile().is_complete());
}

#[test]
fn test_reset_restores_the_default_profile() {
    let ctx = TestContext::new();
    let mut state = ctx.state();

    let (profile_update, address_update) = filled_form().into_updates();
    state.profile_mut().update(profile_update).unwrap();
    state.profile_mut().update_address(address_update).unwrap();
    assert!(state.profile().is_complete());

    state.profile_mut().reset().unwrap();
    assert!(!state.profile().is_complete());
    assert_eq!(state.profile().profile().name, "");

    // The reset is mirrored to storage too.
    let state = ctx.state();
    assert_eq!(state.profile().profile().name, "");
}

#[test]
fn test_editing_flag_has_no_business_effect() {
    let ctx = TestContext::new();
    let mut state = ctx.state();

    state.profile_mut().set_editing(true);
    assert!(state.profile().is_editing());
    assert!(!state.profile().is_complete());
    assert!(ctx.persisted("user").is_none());
}

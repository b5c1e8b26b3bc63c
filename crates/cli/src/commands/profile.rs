//! Profile commands.
//!
//! # Usage
//!
//! ```bash
//! mart profile show
//! mart profile edit --name "Ada Lovelace" --email ada@example.com \
//!     --phone "(555) 123-4567" --street "123 Main St" --city Springfield \
//!     --state IL --zip 62704 --country "United States"
//! mart profile reset
//! ```
//!
//! Edits are validated as a whole before anything is saved; a failing form
//! leaves the stored profile untouched.

use clap::Subcommand;

use mart_storefront::state::AppState;
use mart_storefront::validate::ProfileForm;

/// Profile actions.
#[derive(Debug, Subcommand)]
pub enum ProfileAction {
    /// Show the stored profile
    Show,
    /// Edit profile fields (unspecified fields keep their value)
    Edit {
        /// Full name
        #[arg(long)]
        name: Option<String>,
        /// Email address
        #[arg(long)]
        email: Option<String>,
        /// Phone number
        #[arg(long)]
        phone: Option<String>,
        /// Street address
        #[arg(long)]
        street: Option<String>,
        /// City
        #[arg(long)]
        city: Option<String>,
        /// State
        #[arg(long)]
        state: Option<String>,
        /// ZIP code
        #[arg(long)]
        zip: Option<String>,
        /// Country
        #[arg(long)]
        country: Option<String>,
    },
    /// Restore the default empty profile
    Reset,
}

/// Dispatch a profile action.
///
/// # Errors
///
/// Returns an error when the form fails validation or persisting fails.
pub fn run(state: &mut AppState, action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ProfileAction::Show => show(state),
        ProfileAction::Edit {
            name,
            email,
            phone,
            street,
            city,
            state: state_field,
            zip,
            country,
        } => {
            state.profile_mut().set_editing(true);

            // Seed the form from the stored profile, then apply the edits.
            let mut form = ProfileForm::from_profile(state.profile().profile());
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(email) = email {
                form.email = email;
            }
            if let Some(phone) = phone {
                form.phone = phone;
            }
            if let Some(street) = street {
                form.address.street = street;
            }
            if let Some(city) = city {
                form.address.city = city;
            }
            if let Some(state_field) = state_field {
                form.address.state = state_field;
            }
            if let Some(zip) = zip {
                form.address.zip_code = zip;
            }
            if let Some(country) = country {
                form.address.country = country;
            }

            if let Err(errors) = form.validate() {
                for (field, message) in errors.iter() {
                    println!("  {field}: {message}");
                }
                println!("Please fix the errors in the form");
                state.profile_mut().set_editing(false);
                return Err(errors.into());
            }

            let (profile_update, address_update) = form.into_updates();
            state.profile_mut().update(profile_update)?;
            state.profile_mut().update_address(address_update)?;
            state.profile_mut().set_editing(false);
            println!("Profile updated successfully!");
        }
        ProfileAction::Reset => {
            state.profile_mut().reset()?;
            println!("Profile reset to defaults");
        }
    }
    Ok(())
}

fn show(state: &AppState) {
    let profile = state.profile().profile();

    println!("My Profile");
    println!("  Full Name: {}", or_not_set(&profile.name));
    println!("  Email:     {}", or_not_set(&profile.email));
    println!("  Phone:     {}", or_not_set(&profile.phone));
    println!();
    println!("Shipping Address");
    if profile.address.street.is_empty() {
        println!("  No address set");
    } else {
        println!("  {}", profile.address.street);
        println!(
            "  {}, {} {}",
            profile.address.city, profile.address.state, profile.address.zip_code
        );
        println!("  {}", profile.address.country);
    }
    println!();
    if state.profile().is_complete() {
        println!("Profile is complete ✓");
    } else {
        println!("Profile is incomplete; run `mart profile edit` to fill it in");
    }
}

fn or_not_set(value: &str) -> &str {
    if value.is_empty() { "Not set" } else { value }
}

//! Profile-based configuration persisted as JSON under the home directory.

pub mod profile;
pub mod store;

pub use profile::{
    add_profile, list_profiles, set_active_profile, switch_profile_interactive,
};
pub use store::{Config, Profile, config_path};

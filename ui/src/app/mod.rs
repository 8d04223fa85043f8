pub mod profile_settings;

pub use profile_settings::ProfileSettings;

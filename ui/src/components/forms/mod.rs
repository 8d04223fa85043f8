pub mod profile_fields_editor;

pub use profile_fields_editor::*;

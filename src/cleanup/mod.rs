//! Confirmed removal of unused assets

mod safe_delete;

pub use safe_delete::SafeDeleter;

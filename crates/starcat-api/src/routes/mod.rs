//! HTTP route handlers.

pub mod favorites;
pub mod health;
pub mod people;
pub mod planets;
pub mod profiles;
pub mod users;

/// Treat absent and empty-string fields the same way: both fail the
/// presence check.
pub(crate) fn required(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

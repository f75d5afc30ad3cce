//! One-time consistency check of the static lookup tables.

use std::sync::OnceLock;

use bazi_base::{BaziError, validate_tables};

static TABLES: OnceLock<Result<(), BaziError>> = OnceLock::new();

/// Validate the static tables on first use and return the cached outcome
/// on every later call.
pub fn ensure_tables() -> Result<(), BaziError> {
    TABLES.get_or_init(validate_tables).clone()
}

/// True once [`ensure_tables`] has run.
pub fn tables_checked() -> bool {
    TABLES.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_valid_and_cached() {
        assert!(ensure_tables().is_ok());
        assert!(tables_checked());
        assert!(ensure_tables().is_ok());
    }
}

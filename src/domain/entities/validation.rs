//! Field validation shared by entity drafts

/// A single rejected input field
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct InvalidField {
    pub field: &'static str,
    pub message: String,
}

impl InvalidField {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

pub(crate) fn require(field: &'static str, value: &str) -> Result<(), InvalidField> {
    if value.trim().is_empty() {
        return Err(InvalidField::new(field, "is required"));
    }
    Ok(())
}

/// Loose `local@domain.tld` shape check, no whitespace anywhere.
pub(crate) fn require_email(field: &'static str, value: &str) -> Result<(), InvalidField> {
    require(field, value)?;

    let value = value.trim();
    let well_formed = !value.chars().any(char::is_whitespace)
        && value.split_once('@').is_some_and(|(local, domain)| {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .rsplit_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        });

    if !well_formed {
        return Err(InvalidField::new(field, "is not a valid email address"));
    }
    Ok(())
}

//! View models shared across components.

use linklift_api_models::Country;

/// Severity of a transient notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Neutral information.
    Info,
    /// Completed action.
    Success,
    /// Failed action.
    Error,
}

/// A transient notification shown by the toast host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Identity used for dismissal.
    pub id: u64,
    /// Message body.
    pub message: String,
    /// Visual severity.
    pub kind: ToastKind,
}

/// A country option for the campaign form selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountryOption {
    /// Code submitted to the server.
    pub code: String,
    /// Name shown in the dropdown.
    pub label: String,
}

impl From<Country> for CountryOption {
    fn from(value: Country) -> Self {
        Self {
            code: value.code,
            label: value.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_maps_code_and_name() {
        let option: CountryOption = Country {
            code: "us".into(),
            name: "United States".into(),
        }
        .into();
        assert_eq!(option.code, "us");
        assert_eq!(option.label, "United States");
    }
}

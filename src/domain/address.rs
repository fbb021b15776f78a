use serde::Serialize;

/// A postal address. Immutable once built with [`Address::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    first_name: String,
    last_name: String,
    street: String,
    postal_code: String,
    city: String,
}

impl Address {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        street: impl Into<String>,
        postal_code: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            street: street.into(),
            postal_code: postal_code.into(),
            city: city.into(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

use strum::{AsRefStr, Display, EnumString, IntoStaticStr};

use crate::field::PendingFields;

/// The fields that jointly determine the geocoding input.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum AddressField {
    Address,
    City,
    Country,
    Zip,
}

impl AddressField {
    pub const ALL: [Self; 4] = [Self::Address, Self::City, Self::Country, Self::Zip];

    /// The order in which the fields are joined into a query string.
    pub const QUERY_ORDER: [Self; 4] = [Self::Address, Self::Zip, Self::City, Self::Country];

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub address : String,
    pub zip     : String,
    pub city    : String,
    pub country : String,
}

impl Address {
    pub fn field(&self, field: AddressField) -> &str {
        match field {
            AddressField::Address => &self.address,
            AddressField::Zip => &self.zip,
            AddressField::City => &self.city,
            AddressField::Country => &self.country,
        }
    }

    pub fn field_mut(&mut self, field: AddressField) -> &mut String {
        match field {
            AddressField::Address => &mut self.address,
            AddressField::Zip => &mut self.zip,
            AddressField::City => &mut self.city,
            AddressField::Country => &mut self.country,
        }
    }

    /// Every address field that is present in `pending` replaces the
    /// current value, even if the pending value is empty.
    pub fn overrule_with(&mut self, pending: &PendingFields) {
        for field in AddressField::ALL {
            if let Some(value) = pending.get(field.as_str()) {
                *self.field_mut(field) = value.to_string();
            }
        }
    }

    /// Joins all fields with a single space. Empty fields are not skipped.
    pub fn to_query_string(&self) -> String {
        AddressField::QUERY_ORDER
            .iter()
            .map(|f| self.field(*f))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

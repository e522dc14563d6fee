pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{address_builder::*, notification_builder::*};

pub mod notification_builder {

    use super::*;
    use crate::{field::*, id::*, notification::*, operation::*};

    #[derive(Debug)]
    pub struct ChangeNotificationBuild {
        notification: ChangeNotification,
    }

    impl ChangeNotificationBuild {
        pub fn entity_type(mut self, entity_type: &str) -> Self {
            self.notification.entity_type = entity_type.into();
            self
        }
        pub fn operation(mut self, op: &str) -> Self {
            self.notification.operation = op.into();
            self
        }
        pub fn id(mut self, id: u64) -> Self {
            self.notification.entity_id = id.into();
            self
        }
        pub fn field(mut self, name: &str, value: impl Into<FieldValue>) -> Self {
            self.notification.pending_fields.insert(name, value);
            self
        }
        pub fn finish(self) -> ChangeNotification {
            self.notification
        }
    }

    impl Builder for ChangeNotification {
        type Build = ChangeNotificationBuild;
        fn build() -> Self::Build {
            ChangeNotificationBuild {
                notification: ChangeNotification {
                    entity_type: "fe_users".into(),
                    operation: Operation::Update,
                    entity_id: EntityId::default(),
                    pending_fields: PendingFields::default(),
                },
            }
        }
    }
}

pub mod address_builder {

    use super::*;
    use crate::address::*;

    #[derive(Debug)]
    pub struct AddressBuild {
        addr: Address,
    }

    impl AddressBuild {
        pub fn address(mut self, address: &str) -> Self {
            self.addr.address = address.into();
            self
        }
        pub fn zip(mut self, zip: &str) -> Self {
            self.addr.zip = zip.into();
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.addr.city = city.into();
            self
        }
        pub fn country(mut self, country: &str) -> Self {
            self.addr.country = country.into();
            self
        }
        pub fn finish(self) -> Address {
            self.addr
        }
    }

    impl Builder for Address {
        type Build = AddressBuild;
        fn build() -> Self::Build {
            AddressBuild {
                addr: Address::default(),
            }
        }
    }
}

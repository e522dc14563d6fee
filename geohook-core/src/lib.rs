pub mod entities {
    pub use geohook_entities::{
        address::*, field::*, geo::*, geocode::*, id::*, notification::*, operation::*,
        record::*,
    };
}

pub mod gateways;
pub mod hook;
pub mod repositories;
pub mod usecases;

pub use self::hook::GeocodeHook;

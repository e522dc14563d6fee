use std::{fmt, num::ParseIntError, str::FromStr};

/// Stable integer identifier of a record in the host's storage.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct EntityId(u64);

impl EntityId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl From<u64> for EntityId {
    fn from(from: u64) -> Self {
        Self(from)
    }
}

impl From<EntityId> for u64 {
    fn from(from: EntityId) -> Self {
        from.0
    }
}

impl FromStr for EntityId {
    type Err = ParseIntError;
    fn from_str(s: &str) -> Result<EntityId, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_from_str() {
        assert_eq!(EntityId::new(5), "5".parse().unwrap());
        assert_eq!(EntityId::new(42), " 42 ".parse().unwrap());
        assert!("-1".parse::<EntityId>().is_err());
        assert!("five".parse::<EntityId>().is_err());
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_type!(
    /// Portal instance (tenant) identifier.
    CompanyId
);
id_type!(
    /// Site or scope group identifier.
    GroupId
);
id_type!(
    /// Identifier of the user whose preferences are read and written.
    UserId
);

impl GroupId {
    /// Sentinel scope used by the global administration view.
    pub const DEFAULT: Self = Self(0);

    #[must_use]
    pub const fn is_default(self) -> bool {
        self.0 == Self::DEFAULT.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_group_is_zero() {
        assert_eq!(GroupId::DEFAULT, GroupId(0));
        assert!(GroupId::from(0).is_default());
        assert!(!GroupId(20_121).is_default());
    }

    #[test]
    fn ids_serialize_transparently() {
        let json = serde_json::to_string(&CompanyId(10_157)).unwrap();
        assert_eq!(json, "10157");
        assert_eq!(serde_json::from_str::<UserId>("42").unwrap(), UserId(42));
    }
}

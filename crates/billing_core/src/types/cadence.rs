//! Billing cadence enumeration.

use std::fmt;
use std::str::FromStr;

/// Billing cadence for a subscription.
///
/// Selects the generation strategy for invoice dates: one invoice per
/// day, one per week on a chosen weekday, or one per month on a chosen
/// day-of-month.
///
/// # Examples
///
/// ```
/// use billing_core::types::Cadence;
///
/// let cadence: Cadence = "MONTHLY".parse().unwrap();
/// assert_eq!(cadence, Cadence::Monthly);
/// assert_eq!(cadence.name(), "MONTHLY");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cadence {
    /// One invoice for every calendar day in the range.
    Daily,
    /// One invoice per week on a fixed weekday.
    Weekly,
    /// One invoice per month on a fixed day-of-month.
    Monthly,
}

impl Cadence {
    /// Returns the canonical wire name.
    pub fn name(&self) -> &'static str {
        match self {
            Cadence::Daily => "DAILY",
            Cadence::Weekly => "WEEKLY",
            Cadence::Monthly => "MONTHLY",
        }
    }
}

impl FromStr for Cadence {
    type Err = String;

    /// Parses a cadence from its name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DAILY" => Ok(Cadence::Daily),
            "WEEKLY" => Ok(Cadence::Weekly),
            "MONTHLY" => Ok(Cadence::Monthly),
            _ => Err(format!("Unknown cadence: {}", s)),
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Cadence;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for Cadence {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for Cadence {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            Cadence::from_str(&s).map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name() {
        assert_eq!(Cadence::Daily.name(), "DAILY");
        assert_eq!(Cadence::Weekly.name(), "WEEKLY");
        assert_eq!(Cadence::Monthly.name(), "MONTHLY");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("DAILY".parse::<Cadence>().unwrap(), Cadence::Daily);
        assert_eq!("weekly".parse::<Cadence>().unwrap(), Cadence::Weekly);
        assert_eq!("Monthly".parse::<Cadence>().unwrap(), Cadence::Monthly);
        assert!("YEARLY".parse::<Cadence>().is_err());
        assert!("".parse::<Cadence>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Cadence::Weekly), "WEEKLY");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        for cadence in [Cadence::Daily, Cadence::Weekly, Cadence::Monthly] {
            let json = serde_json::to_string(&cadence).unwrap();
            let parsed: Cadence = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, cadence);
        }
        assert_eq!(serde_json::to_string(&Cadence::Daily).unwrap(), "\"DAILY\"");
    }
}

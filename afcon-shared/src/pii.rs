use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Sensitive traveller data (passport numbers and the like).
///
/// `Debug` and `Display` print a fixed mask so a record can be handed to
/// `tracing` without leaking the value. Serialization writes the real value,
/// since the client has to see what it entered on the review screen.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Masked<T>(pub T);

const MASK: &str = "********";

impl<T> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MASK)
    }
}

impl<T> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MASK)
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<T> Masked<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Borrow the unmasked value.
    pub fn expose(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl From<String> for Masked<String> {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Masked<String> {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_and_display_are_masked() {
        let passport = Masked::from("AB1234567");
        assert_eq!(format!("{:?}", passport), "********");
        assert_eq!(format!("{}", passport), "********");
        assert_eq!(passport.expose(), "AB1234567");
    }

    #[test]
    fn test_json_keeps_real_value() {
        let passport = Masked::from("AB1234567");
        assert_eq!(serde_json::to_string(&passport).unwrap(), "\"AB1234567\"");

        let back: Masked<String> = serde_json::from_str("\"CD7654321\"").unwrap();
        assert_eq!(back.into_inner(), "CD7654321");
    }
}

use crate::prelude::*;
use crate::ErrorKind;
use std::str::FromStr;

/// A vehicle plate: one or more uppercase ASCII letters and decimal digits.
///
/// No normalization is applied. `a000bc` is rejected, not upper-cased.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Deref, Into)]
pub struct Plate(String);

/// Error type for plate tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlateError {
    #[error("Invalid plate format: plate is empty")]
    Empty,

    #[error("Invalid plate format: must contain only uppercase letters/digits, got `{0}`")]
    InvalidCharacters(String),
}

impl PlateError {
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::PlateFormat
    }
}

/// Whether `token` is a well-formed plate.
pub fn is_valid_plate(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(is_plate_byte)
}

const fn is_plate_byte(b: u8) -> bool {
    b.is_ascii_uppercase() || b.is_ascii_digit()
}

impl Plate {
    /// # Errors
    /// Returns `PlateError` when `token` is empty or holds anything besides `A-Z0-9`.
    pub fn parse(token: &str) -> Result<Self, PlateError> {
        if token.is_empty() {
            return Err(PlateError::Empty);
        }
        if !is_valid_plate(token) {
            return Err(PlateError::InvalidCharacters(token.to_owned()));
        }
        Ok(Self(token.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The leading character, which the plate-letter sort keys on.
    pub fn first_char(&self) -> char {
        self.0.bytes().next().map_or('\0', char::from)
    }
}

impl FromStr for Plate {
    type Err = PlateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for Plate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Plate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("A000BC")]
    #[case("Z999ZZ")]
    #[case("A")]
    #[case("7")]
    #[case("ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789")]
    fn test_valid_plates(#[case] token: &str) {
        assert!(is_valid_plate(token));
        let plate = Plate::parse(token).unwrap();
        assert_eq!(plate.as_str(), token);
        assert_eq!(plate.to_string(), token);
    }

    #[rstest]
    #[case("")]
    #[case("a000bc")]
    #[case("A000bC")]
    #[case("A000-BC")]
    #[case("A000 BC")]
    #[case("A000BC.")]
    #[case("А000ВС")] // Cyrillic look-alikes
    #[case("É1")]
    fn test_invalid_plates(#[case] token: &str) {
        assert!(!is_valid_plate(token));
        let err = Plate::parse(token).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PlateFormat);
    }

    #[test]
    fn test_empty_and_bad_characters_are_distinguished() {
        assert_eq!(Plate::parse(""), Err(PlateError::Empty));
        assert_eq!(
            Plate::parse("a000bc"),
            Err(PlateError::InvalidCharacters("a000bc".to_owned()))
        );
        assert_eq!(
            PlateError::InvalidCharacters("a000bc".to_owned()).to_string(),
            "Invalid plate format: must contain only uppercase letters/digits, got `a000bc`"
        );
    }

    #[test]
    fn test_first_char() {
        assert_eq!(Plate::parse("K009VO").unwrap().first_char(), 'K');
        assert_eq!(Plate::parse("9K").unwrap().first_char(), '9');
        assert_eq!(Plate::parse("Z").unwrap().first_char(), 'Z');
    }

    #[test]
    fn test_first_char_orders_digits_before_letters() {
        let keys: Vec<char> = ["A1", "91", "Z0", "0Z"]
            .iter()
            .map(|token| Plate::parse(token).unwrap().first_char())
            .collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec!['0', '9', 'A', 'Z']);
    }

    #[test]
    fn test_deref_and_into() {
        let plate: Plate = "E003EK".parse().unwrap();
        assert_eq!(plate.len(), 6);
        let inner: String = plate.into();
        assert_eq!(inner, "E003EK");
    }

    #[test]
    fn test_serde_validation() {
        let plate: Plate = serde_json::from_str("\"A000BC\"").unwrap();
        assert_eq!(serde_json::to_string(&plate).unwrap(), "\"A000BC\"");

        let result: Result<Plate, _> = serde_json::from_str("\"a000bc\"");
        assert!(result.is_err());
        let result: Result<Plate, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}

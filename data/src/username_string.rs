use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::Error;
use serde::de::Unexpected::Str;
use thiserror::Error;

pub const MAX_USERNAME_LEN: usize = 64;

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct UsernameString(String);

#[derive(Debug, Error, Eq, PartialEq)]
pub enum UsernameParseError {
    #[error("username is empty")]
    Empty,

    #[error("username is longer than {MAX_USERNAME_LEN} characters")]
    TooLong,

    #[error("username contains a forbidden character {0:?}")]
    ForbiddenCharacter(char),
}

impl FromStr for UsernameString {
    type Err = UsernameParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(UsernameParseError::Empty);
        }
        if s.chars().count() > MAX_USERNAME_LEN {
            return Err(UsernameParseError::TooLong);
        }
        if let Some(c) = s.chars().find(|c| !is_username_char(*c)) {
            return Err(UsernameParseError::ForbiddenCharacter(c));
        }
        Ok(UsernameString(s.to_string()))
    }
}

fn is_username_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')
}

impl Deref for UsernameString {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0[..]
    }
}

impl Display for UsernameString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for UsernameString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for UsernameString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Visitor;
        impl serde::de::Visitor<'_> for Visitor {
            type Value = UsernameString;

            fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
                formatter.write_str("string containing a valid username")
            }

            fn visit_str<E>(self, v: &str) -> Result<UsernameString, E>
            where
                E: Error
            {
                UsernameString::from_str(v)
                    .map_err(|_| Error::invalid_value(Str(v), &self))
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}

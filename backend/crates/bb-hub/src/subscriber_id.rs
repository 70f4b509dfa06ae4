use std::borrow::Borrow;
use std::fmt;

use uuid::Uuid;

/// Opaque subscriber identifier, `<prefix><uuid v4>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(String);

impl SubscriberId {
    pub fn generate(prefix: &str) -> Self {
        Self(format!("{prefix}{}", Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for SubscriberId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<String> for SubscriberId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SubscriberId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<SubscriberId> for String {
    fn from(id: SubscriberId) -> Self {
        id.0
    }
}

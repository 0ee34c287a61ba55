use serde::{Deserialize, Serialize};

use crate::domain::error::{EngineError, EngineResult};

/// Certificate policy OIDs a certificate must satisfy, in dot notation.
///
/// Order is preserved as supplied (it becomes the initial policy set of the
/// validation request); repeated identifiers are collapsed to their first
/// occurrence. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct RequiredPolicies(Vec<String>);

impl RequiredPolicies {
    pub fn new<I, S>(oids: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for oid in oids {
            let oid = oid.into();
            if oid.is_empty() {
                return Err(EngineError::Config(
                    "policy OIDs cannot contain empty entries".into(),
                ));
            }
            if !out.contains(&oid) {
                out.push(oid);
            }
        }
        if out.is_empty() {
            return Err(EngineError::Config("policy OIDs cannot be null or empty".into()));
        }
        Ok(Self(out))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<String>> for RequiredPolicies {
    type Error = EngineError;

    fn try_from(v: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(v)
    }
}

impl From<RequiredPolicies> for Vec<String> {
    fn from(p: RequiredPolicies) -> Self {
        p.0
    }
}

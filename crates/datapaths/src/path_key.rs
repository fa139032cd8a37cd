//! # Path Keys

use std::str::FromStr;

use crate::{DPResult, DataPathsError};

/// The keys of a [`PathsConfig`](crate::PathsConfig).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
    strum::EnumString,
    strum::Display,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PathKey {
    /// The dataset directory.
    DataPath,

    /// The cache directory.
    CachePath,
}

impl PathKey {
    /// All keys, in authored order.
    pub const ALL: [PathKey; 2] = [PathKey::DataPath, PathKey::CachePath];

    /// The key name, as consumers read it.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Parse a key name.
    ///
    /// Names are matched exactly; `"Data_Path"` is not `"data_path"`.
    pub fn parse(name: &str) -> DPResult<Self> {
        Self::from_str(name).map_err(|_| DataPathsError::UnknownKey(name.to_string()))
    }
}

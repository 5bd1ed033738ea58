// Copyright 2025 RisingWave Labs
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ErrorCode, Result};

/// Knobs of logical property derivation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct OptimizerConfig {
    /// Upper bound of interesting orderings kept on one plan node. Orderings found later in the
    /// bottom-up derivation are dropped first.
    #[serde(default = "default::max_interesting_orderings")]
    pub max_interesting_orderings: usize,

    /// Whether lax dependencies and lax keys are promoted to strict ones once all of their
    /// determinant columns are proven not null.
    #[serde(default = "default::promote_lax_keys")]
    pub promote_lax_keys: bool,

    /// Whether interesting orderings are derived at all. When disabled, every node exposes an
    /// empty ordering set and each ordering requirement needs an explicit sort.
    #[serde(default = "default::derive_interesting_orderings")]
    pub derive_interesting_orderings: bool,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        toml::from_str("").unwrap()
    }
}

impl OptimizerConfig {
    pub fn init(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_str = fs::read_to_string(path).map_err(|e| {
            ErrorCode::InvalidConfig(format!(
                "failed to open config file '{}': {}",
                path.to_string_lossy(),
                e
            ))
        })?;
        Self::from_toml(&config_str)
    }

    pub fn from_toml(config_str: &str) -> Result<Self> {
        let config: OptimizerConfig = toml::from_str(config_str)?;
        if config.max_interesting_orderings == 0 {
            return Err(ErrorCode::InvalidConfig(
                "max_interesting_orderings should be positive".to_owned(),
            )
            .into());
        }
        Ok(config)
    }
}

mod default {
    pub fn max_interesting_orderings() -> usize {
        16
    }

    pub fn promote_lax_keys() -> bool {
        true
    }

    pub fn derive_interesting_orderings() -> bool {
        true
    }
}

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

use thiserror::Error;

pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

pub type Result<T> = std::result::Result<T, PlanPropError>;

#[derive(Error, Debug)]
pub enum ErrorCode {
    #[error("internal error: {0}")]
    InternalError(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("failed to parse config: {0}")]
    ParseConfig(#[from] toml::de::Error),
    #[error("catalog error: {0}")]
    CatalogError(#[source] BoxedError),
}

/// The error type of the planner crates.
///
/// Only the surfaces that talk to the outside world (catalog lookups, config loading) return it.
/// Property derivation itself never fails: a violated precondition there is a bug and panics.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct PlanPropError {
    inner: Box<ErrorCode>,
}

impl PlanPropError {
    pub fn inner(&self) -> &ErrorCode {
        &self.inner
    }
}

impl From<ErrorCode> for PlanPropError {
    fn from(code: ErrorCode) -> Self {
        Self {
            inner: Box::new(code),
        }
    }
}

impl From<toml::de::Error> for PlanPropError {
    fn from(e: toml::de::Error) -> Self {
        ErrorCode::ParseConfig(e).into()
    }
}

/// Returns early with an [`ErrorCode::InternalError`] built from the format arguments.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::error::ErrorCode::InternalError(format!($($arg)*)).into())
    };
}

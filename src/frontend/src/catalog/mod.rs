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

//! Definitions of catalog structs.
//!
//! The root is [`root_catalog::Catalog`], an in-memory registry of the tables visible to one
//! optimization pass. Scans take a [`TableCatalog`] and read the columns, primary key and indexes
//! from it.

use planprop_common::error::{ErrorCode, PlanPropError};
use thiserror::Error;

pub(crate) mod root_catalog;
pub(crate) mod table_catalog;

pub use root_catalog::Catalog;
pub use table_catalog::TableCatalog;

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{0} not found: {1}")]
    NotFound(&'static str, String),
    #[error("{0} with name {1} exists")]
    Duplicated(&'static str, String),
}

impl From<CatalogError> for PlanPropError {
    fn from(e: CatalogError) -> Self {
        ErrorCode::CatalogError(Box::new(e)).into()
    }
}

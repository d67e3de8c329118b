#![deny(clippy::all, clippy::perf)]
#![warn(clippy::nursery, clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod controller;
pub mod form;
pub mod model;
pub mod query;
pub mod render;
pub mod utils;

pub use client::Client;
pub use config::Config;
pub use controller::{handle, Action, Call, Reply};
pub use form::{Availability, Flash, FormState};
pub use model::{NewProduct, Product, ProductId, ProductPatch};
pub use query::SearchQuery;
pub use render::ResultTable;
pub use utils::{Error, Result};

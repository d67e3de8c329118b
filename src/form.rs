//! Field binder: moves data between the text the operator typed and the
//! typed request/response bodies.

use crate::{
    model::{NewProduct, Product, ProductPatch},
    query::SearchQuery,
    render::ResultTable,
    utils::{Error, Result},
};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};
use tap::Pipe;

/// The availability control. `Unknown` means "leave it alone" for updates
/// and "don't filter" for searches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Availability {
    #[default]
    Unknown,
    True,
    False,
}

impl Availability {
    pub const fn as_bool(self) -> Option<bool> {
        match self {
            Self::Unknown => None,
            Self::True => Some(true),
            Self::False => Some(false),
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Unknown => Self::True,
            Self::True => Self::False,
            Self::False => Self::Unknown,
        }
    }
}

impl From<bool> for Availability {
    fn from(available: bool) -> Self {
        if available {
            Self::True
        } else {
            Self::False
        }
    }
}

impl From<&str> for Availability {
    fn from(text: &str) -> Self {
        match text.trim() {
            "" | "UNKNOWN" => Self::Unknown,
            "True" | "true" | "1" => Self::True,
            _ => Self::False,
        }
    }
}

impl Display for Availability {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => f.write_str("UNKNOWN"),
            Self::True => f.write_str("True"),
            Self::False => f.write_str("False"),
        }
    }
}

/// Status line shown after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flash {
    Success(String),
    Failure(String),
}

impl Flash {
    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Failure(text) => text,
        }
    }

    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}

/// Everything on the page: one product's worth of input fields, the flash
/// area and the last search results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub available: Availability,
    pub price: String,
    pub rating: String,
    pub no_of_users_rated: String,

    pub flash: Option<Flash>,
    pub results: Option<ResultTable>,
}

fn non_empty(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_owned())
    }
}

fn parse_float(field: &'static str, text: &str) -> Result<Option<f64>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    match f64::from_str(text) {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(Error::InvalidNumber {
            field,
            value: text.to_owned(),
        }),
    }
}

/// Integers also accept a float and truncate it, so a rating shown as
/// `4.00` can be sent back as `4`.
#[allow(clippy::cast_possible_truncation)]
fn parse_int(field: &'static str, text: &str) -> Result<Option<i64>> {
    let trimmed = text.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(Some(value));
    }
    // i64 spans [-2^63, 2^63); anything outside would saturate
    const BOUND: f64 = 9_223_372_036_854_775_808.0;
    match parse_float(field, text)?.map(f64::trunc) {
        Some(value) if !(-BOUND..BOUND).contains(&value) => Err(Error::InvalidNumber {
            field,
            value: trimmed.to_owned(),
        }),
        value => Ok(value.map(|value| value as i64)),
    }
}

impl FormState {
    /// Identifier for the id-addressed actions.
    pub fn product_id(&self) -> Result<&str> {
        match self.id.trim() {
            "" => Err(Error::MissingId),
            id => Ok(id),
        }
    }

    /// Full create body. Empty numeric inputs are left out of the body,
    /// anything else that isn't a number is rejected before sending.
    pub fn create_payload(&self) -> Result<NewProduct> {
        Ok(NewProduct {
            name: self.name.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            available: self.available == Availability::True,
            price: parse_float("price", &self.price)?,
            rating: parse_float("rating", &self.rating)?,
            no_of_users_rated: parse_int("no_of_users_rated", &self.no_of_users_rated)?,
        })
    }

    /// Sparse update body with only the non-empty inputs.
    pub fn update_payload(&self) -> Result<ProductPatch> {
        Ok(ProductPatch {
            name: non_empty(&self.name),
            category: non_empty(&self.category),
            description: non_empty(&self.description),
            available: self.available.as_bool(),
            price: parse_float("price", &self.price)?,
            rating: parse_float("rating", &self.rating)?,
            no_of_users_rated: parse_int("no_of_users_rated", &self.no_of_users_rated)?,
        })
    }

    pub fn search_query(&self) -> SearchQuery {
        let mut query = SearchQuery::new();
        query.push("name", &*self.name).push("category", &*self.category);
        if self.available == Availability::True {
            query.push("available", "True");
        }
        query.push("rating", &*self.rating).push("price", &*self.price);
        query
    }

    /// The rating to submit through add-rating.
    pub fn new_rating(&self) -> Result<i64> {
        parse_int("rating", &self.rating)?.ok_or_else(|| Error::InvalidNumber {
            field: "rating",
            value: self.rating.clone(),
        })
    }

    pub fn new_price(&self) -> Result<f64> {
        parse_float("price", &self.price)?.ok_or_else(|| Error::InvalidNumber {
            field: "price",
            value: self.price.clone(),
        })
    }

    /// Overwrites every field with `product`.
    pub fn write_product(&mut self, product: &Product) {
        self.id = product.id.to_string();
        self.name = product.name.clone();
        self.category = product.category.clone();
        self.description = product.description.clone();
        self.available = product.available.into();
        self.price = product.price.to_string();
        self.rating = product
            .rating
            .map(|rating| format!("{rating:.2}"))
            .unwrap_or_default();
        self.no_of_users_rated = product.no_of_users_rated.to_string();
    }

    /// Blanks the product fields. The identifier survives.
    pub fn clear_fields(&mut self) {
        let id = std::mem::take(&mut self.id);
        *self = Self {
            id,
            flash: self.flash.take(),
            results: self.results.take(),
            ..Self::default()
        };
    }

    /// The "clear" action: identifier, fields and flash.
    pub fn clear(&mut self) {
        self.clear_fields();
        self.id.clear();
        self.flash = None;
    }

    /// Shows search results and mirrors the first one into the fields.
    pub fn show_results(&mut self, products: &[Product]) {
        self.results = ResultTable::new(products).pipe(Some);
        if let Some(first) = products.first() {
            self.write_product(first);
        }
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.flash = Some(Flash::Success(text.into()));
    }

    pub fn failure(&mut self, error: &Error) {
        self.flash = Some(Flash::Failure(error.to_string()));
    }
}

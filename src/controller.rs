//! One action, one request: builds the call from the form, sends it, and
//! binds the outcome back into the form.

use crate::{
    client::Client,
    form::FormState,
    model::{NewProduct, Product, ProductPatch},
    query::SearchQuery,
    utils::{Error, Result},
};
use std::fmt::{self, Display, Formatter};
use tracing::{debug, warn};

pub const SUCCESS: &str = "Success";
pub const RATING_ADDED: &str = "Rating added";
pub const PRICE_UPDATED: &str = "Price updated";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Create,
    Retrieve,
    Update,
    Delete,
    Search,
    Clear,
    AddRating,
    UpdatePrice,
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Create => "create",
            Self::Retrieve => "retrieve",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Search => "search",
            Self::Clear => "clear",
            Self::AddRating => "add-rating",
            Self::UpdatePrice => "set-price",
        })
    }
}

/// A fully built request, detached from the form so it can be moved into
/// a future.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Create(NewProduct),
    Retrieve(String),
    Update(String, ProductPatch),
    Delete(String),
    Search(SearchQuery),
    AddRating(String, i64),
    UpdatePrice(String, f64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Product(Product),
    Products(Vec<Product>),
    /// Delete with an empty body.
    Gone,
}

impl From<Product> for Reply {
    fn from(product: Product) -> Self {
        Self::Product(product)
    }
}

impl Call {
    pub async fn send(self, client: &Client) -> Result<Reply> {
        Ok(match self {
            Self::Create(product) => client.create_product(&product).await?.into(),
            Self::Retrieve(id) => client.product(&id).await?.into(),
            Self::Update(id, patch) => client.update_product(&id, &patch).await?.into(),
            Self::Delete(id) => client
                .delete_product(&id)
                .await?
                .map_or(Reply::Gone, Reply::Product),
            Self::Search(query) => Reply::Products(client.search_products(&query).await?),
            Self::AddRating(id, rating) => client.add_rating(&id, rating).await?.into(),
            Self::UpdatePrice(id, price) => client.update_price(&id, price).await?.into(),
        })
    }
}

impl FormState {
    /// Reads the fields an action needs. `Ok(None)` for the local-only clear.
    pub fn call(&self, action: Action) -> Result<Option<Call>> {
        let id = || self.product_id().map(ToOwned::to_owned);
        let call = match action {
            Action::Clear => return Ok(None),
            Action::Create => Call::Create(self.create_payload()?),
            Action::Retrieve => Call::Retrieve(id()?),
            Action::Update => Call::Update(id()?, self.update_payload()?),
            Action::Delete => Call::Delete(id()?),
            Action::Search => Call::Search(self.search_query()),
            Action::AddRating => Call::AddRating(id()?, self.new_rating()?),
            Action::UpdatePrice => Call::UpdatePrice(id()?, self.new_price()?),
        };
        Ok(Some(call))
    }

    /// Binds the outcome of `action` into the form.
    #[must_use]
    pub fn apply(mut self, action: Action, outcome: Result<Reply>) -> Self {
        match outcome {
            Ok(reply) => {
                match reply {
                    Reply::Product(product) => self.write_product(&product),
                    Reply::Products(products) => self.show_results(&products),
                    Reply::Gone => self.clear_fields(),
                }
                self.success(match action {
                    Action::AddRating => RATING_ADDED,
                    Action::UpdatePrice => PRICE_UPDATED,
                    _ => SUCCESS,
                });
            }
            Err(error) => {
                warn!(%action, %error);
                if action == Action::Retrieve {
                    self.clear_fields();
                }
                self.failure(&error);
            }
        }
        self
    }

    /// Handles a local failure that happened before anything was sent.
    #[must_use]
    pub fn reject(mut self, action: Action, error: &Error) -> Self {
        warn!(%action, %error, "not sent");
        if action == Action::Retrieve {
            self.clear_fields();
        }
        self.failure(error);
        self
    }
}

/// Runs `action` end to end: at most one request, then the updated form.
pub async fn handle(client: &Client, action: Action, mut form: FormState) -> FormState {
    debug!(%action, "dispatch");
    match form.call(action) {
        Ok(None) => {
            form.clear();
            form
        }
        Ok(Some(call)) => {
            let outcome = call.send(client).await;
            form.apply(action, outcome)
        }
        Err(error) => form.reject(action, &error),
    }
}

use crate::{
    model::{ErrorBody, NewProduct, Product, ProductPatch},
    query::SearchQuery,
    utils::{Error, Result},
};
use json::json;
use reqwest::{header::LOCATION, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::{
    fmt::{Debug, Formatter},
    ops::Deref,
};
use tap::Pipe;
use tracing::debug;

macro_rules! api {
    ($api:expr, $($tt:tt)*) => {
        format!("{}/{}", $api, format!($($tt)*))
    };
}

/// Thin REST client over the products service. `api` is the base URL that
/// already ends in `/api`.
pub struct Client {
    api: String,
    inner: reqwest::Client,
}

impl Debug for Client {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Client {{ api: {}, client: reqwest::Client }}", self.api)
    }
}

impl Deref for Client {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

/// Turns a response into `T`, or into [`Error::Remote`] carrying the
/// backend's `message` for anything outside 2xx.
async fn read<T: DeserializeOwned>(res: Response) -> Result<T> {
    let status = res.status();
    if status.is_success() {
        return Ok(res.json().await?);
    }
    Err(remote(status, res).await)
}

async fn remote(status: StatusCode, res: Response) -> Error {
    let body = res.bytes().await.unwrap_or_default();
    let message = json::from_slice::<ErrorBody>(&body)
        .ok()
        .and_then(|body| body.message);
    debug!(%status, ?message, "request failed");
    Error::remote(status, message)
}

impl Client {
    pub const DEFAULT_API: &'static str = "http://localhost:8080/api";

    pub fn new(api: &str, inner: reqwest::Client) -> Self {
        Self {
            api: api.trim_end_matches('/').to_owned(),
            inner,
        }
    }

    pub fn api(&self) -> &str {
        &self.api
    }

    #[tracing::instrument(skip(self))]
    pub async fn create_product(&self, product: &NewProduct) -> Result<Product> {
        let res = self
            .post(api!(self.api, "products"))
            .json(product)
            .send()
            .await?;
        if let Some(location) = res.headers().get(LOCATION) {
            debug!(?location, "created");
        }
        read(res).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn product(&self, id: &str) -> Result<Product> {
        self.get(api!(self.api, "products/{}", segment(id)))
            .send()
            .await?
            .pipe(read)
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn update_product(&self, id: &str, patch: &ProductPatch) -> Result<Product> {
        self.put(api!(self.api, "products/{}", segment(id)))
            .json(patch)
            .send()
            .await?
            .pipe(read)
            .await
    }

    /// The service answers `204 No Content`, in which case there is nothing
    /// to show and `None` comes back.
    #[tracing::instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> Result<Option<Product>> {
        let res = self
            .delete(api!(self.api, "products/{}", segment(id)))
            .send()
            .await?;
        let status = res.status();
        if !status.is_success() {
            return Err(remote(status, res).await);
        }
        let body = res.bytes().await?;
        if status == StatusCode::NO_CONTENT || body.iter().all(u8::is_ascii_whitespace) {
            Ok(None)
        } else {
            Ok(Some(json::from_slice(&body)?))
        }
    }

    #[tracing::instrument(skip(self, query), fields(query = %query))]
    pub async fn search_products(&self, query: &SearchQuery) -> Result<Vec<Product>> {
        let url = if query.is_empty() {
            api!(self.api, "products")
        } else {
            api!(self.api, "products?{query}")
        };
        self.get(url).send().await?.pipe(read).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn add_rating(&self, id: &str, rating: i64) -> Result<Product> {
        self.put(api!(self.api, "products/{}/rating", segment(id)))
            .json(&json!({ "rating": rating }))
            .send()
            .await?
            .pipe(read)
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn update_price(&self, id: &str, price: f64) -> Result<Product> {
        self.put(api!(self.api, "products/{}/price", segment(id)))
            .json(&json!({ "price": price }))
            .send()
            .await?
            .pipe(read)
            .await
    }
}

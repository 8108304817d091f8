//! A client for a hosted database that exposes its tables through a
//! PostgREST-style REST API.
//!
//! Every table lives at `{base_url}/rest/v1/{table}`. Rows are filtered with
//! query parameters of the form `id=eq.42`, and writes ask for the affected
//! rows to be sent back with the `Prefer: return=representation` header.

use reqwest::{Client, Method, RequestBuilder};
use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, config::parse_base_url};

const REST_PATH: &str = "rest/v1";
const PREFER: &str = "Prefer";
const RETURN_REPRESENTATION: &str = "return=representation";

/// A handle to a remote database.
///
/// Cloning is cheap and clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct RemoteDatabase {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RemoteDatabase {
    /// Create a client for the database at `base_url` that authenticates with `api_key`.
    ///
    /// # Errors
    /// Returns [Error::InvalidConfig] if `base_url` is not an absolute URL.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, Error> {
        Ok(Self {
            client: Client::new(),
            base_url: parse_base_url(base_url)?,
            api_key: api_key.to_owned(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{REST_PATH}/{table}", self.base_url)
    }

    fn request(&self, method: Method, table: &str) -> RequestBuilder {
        self.client
            .request(method, self.table_url(table))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Fetch every row of `table` in ascending ID order.
    pub async fn select_all<T: DeserializeOwned>(&self, table: &str) -> Result<Vec<T>, Error> {
        let request = self
            .request(Method::GET, table)
            .query(&[("select", "*"), ("order", "id.asc")]);

        fetch_rows(request).await
    }

    /// Fetch the row of `table` with `id`, if there is one.
    pub async fn select_by_id<T: DeserializeOwned>(
        &self,
        table: &str,
        id: i64,
    ) -> Result<Option<T>, Error> {
        let filter = id_filter(id);
        let request = self
            .request(Method::GET, table)
            .query(&[("select", "*"), ("id", filter.as_str())]);

        at_most_one(fetch_rows(request).await?)
    }

    /// Insert `row` into `table` and return the stored row, including the
    /// columns filled in by the database such as the ID.
    pub async fn insert<B, T>(&self, table: &str, row: &B) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .request(Method::POST, table)
            .header(PREFER, RETURN_REPRESENTATION)
            .json(row);

        at_most_one(fetch_rows(request).await?)?.ok_or_else(|| {
            Error::BackingStoreResponse(format!("inserting into {table} returned no rows"))
        })
    }

    /// Set the columns in `changes` on the row of `table` with `id` and return
    /// the updated row, or `None` if no row has that ID.
    pub async fn update_by_id<B, T>(
        &self,
        table: &str,
        id: i64,
        changes: &B,
    ) -> Result<Option<T>, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let filter = id_filter(id);
        let request = self
            .request(Method::PATCH, table)
            .query(&[("id", filter.as_str())])
            .header(PREFER, RETURN_REPRESENTATION)
            .json(changes);

        at_most_one(fetch_rows(request).await?)
    }

    /// Delete the row of `table` with `id` and return it, or `None` if no row
    /// has that ID.
    pub async fn delete_by_id<T: DeserializeOwned>(
        &self,
        table: &str,
        id: i64,
    ) -> Result<Option<T>, Error> {
        let filter = id_filter(id);
        let request = self
            .request(Method::DELETE, table)
            .query(&[("id", filter.as_str())])
            .header(PREFER, RETURN_REPRESENTATION);

        at_most_one(fetch_rows(request).await?)
    }
}

fn id_filter(id: i64) -> String {
    format!("eq.{id}")
}

async fn fetch_rows<T: DeserializeOwned>(request: RequestBuilder) -> Result<Vec<T>, Error> {
    let response = request.send().await?;
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::error!("the backing database responded with {status}: {body}");
        return Err(Error::BackingStoreStatus(status.as_u16(), body));
    }

    Ok(response.json::<Vec<T>>().await?)
}

/// Filtering on the primary key can match at most one row.
fn at_most_one<T>(rows: Vec<T>) -> Result<Option<T>, Error> {
    let row_count = rows.len();
    let mut rows = rows.into_iter();

    match (rows.next(), row_count) {
        (row, 0 | 1) => Ok(row),
        _ => Err(Error::BackingStoreResponse(format!(
            "expected at most one row, got {row_count}"
        ))),
    }
}

//! A small stand-in for a PostgREST-style database API.
//!
//! Supports the subset used by [RemoteDatabase]: listing a table, filtering
//! on `id=eq.N`, inserting a single row and patching or deleting by ID.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Map, Value, json};

use crate::{RemoteDatabase, test_utils::TEST_API_KEY};

#[derive(Debug, Default)]
struct Table {
    rows: Vec<Value>,
    next_id: i64,
    last_body: Option<Value>,
    patch_count: usize,
}

impl Table {
    fn insert(&mut self, row: Value) -> Value {
        let mut row = match row {
            Value::Object(fields) => fields,
            _ => Map::new(),
        };

        let id = match row.get("id").and_then(Value::as_i64) {
            Some(id) => id,
            None => self.next_id + 1,
        };
        self.next_id = self.next_id.max(id);
        row.insert("id".to_owned(), json!(id));

        let row = Value::Object(row);
        self.rows.push(row.clone());
        row
    }
}

type Tables = Arc<Mutex<HashMap<String, Table>>>;

pub(crate) struct FakeRestServer {
    pub base_url: String,
    tables: Tables,
}

impl FakeRestServer {
    pub async fn spawn() -> Self {
        let tables = Tables::default();
        let app = Router::new()
            .route(
                "/rest/v1/{table}",
                get(select_rows)
                    .post(insert_row)
                    .patch(update_rows)
                    .delete(delete_rows),
            )
            .with_state(tables.clone());

        Self {
            base_url: super::serve(app).await,
            tables,
        }
    }

    /// A client for this server that uses the accepted key.
    pub fn database(&self) -> RemoteDatabase {
        RemoteDatabase::new(&self.base_url, TEST_API_KEY).expect("Could not create database client")
    }

    /// Insert `rows` directly, assigning IDs to rows that lack one.
    pub fn seed(&self, table: &str, rows: Vec<Value>) {
        let mut tables = self.tables.lock().unwrap();
        let table = tables.entry(table.to_owned()).or_default();

        for row in rows {
            table.insert(row);
        }
    }

    pub fn rows(&self, table: &str) -> Vec<Value> {
        self.with_table(table, |table| table.rows.clone())
    }

    /// The body of the last insert or update sent to `table`.
    pub fn last_body(&self, table: &str) -> Option<Value> {
        self.with_table(table, |table| table.last_body.clone())
    }

    pub fn patch_count(&self, table: &str) -> usize {
        self.with_table(table, |table| table.patch_count)
    }

    fn with_table<T>(&self, table: &str, f: impl FnOnce(&Table) -> T) -> T {
        let mut tables = self.tables.lock().unwrap();
        f(tables.entry(table.to_owned()).or_default())
    }
}

fn check_api_key(headers: &HeaderMap) -> Result<(), Response> {
    match headers.get("apikey") {
        Some(key) if key == TEST_API_KEY => Ok(()),
        _ => Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid API key" })),
        )
            .into_response()),
    }
}

fn id_filter(query: &HashMap<String, String>) -> Option<i64> {
    query
        .get("id")
        .and_then(|filter| filter.strip_prefix("eq."))
        .and_then(|id| id.parse().ok())
}

fn matches(row: &Value, filter: Option<i64>) -> bool {
    filter.is_none_or(|id| row["id"].as_i64() == Some(id))
}

async fn select_rows(
    State(tables): State<Tables>,
    Path(table): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = check_api_key(&headers) {
        return response;
    }

    let filter = id_filter(&query);
    let mut tables = tables.lock().unwrap();
    let mut rows: Vec<Value> = tables
        .entry(table)
        .or_default()
        .rows
        .iter()
        .filter(|row| matches(row, filter))
        .cloned()
        .collect();
    rows.sort_by_key(|row| row["id"].as_i64());

    Json(rows).into_response()
}

async fn insert_row(
    State(tables): State<Tables>,
    Path(table): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(response) = check_api_key(&headers) {
        return response;
    }

    let mut tables = tables.lock().unwrap();
    let table = tables.entry(table).or_default();
    table.last_body = Some(body.clone());
    let row = table.insert(body);

    (StatusCode::CREATED, Json(vec![row])).into_response()
}

async fn update_rows(
    State(tables): State<Tables>,
    Path(table): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(response) = check_api_key(&headers) {
        return response;
    }

    let filter = id_filter(&query);
    let mut tables = tables.lock().unwrap();
    let table = tables.entry(table).or_default();
    table.patch_count += 1;
    table.last_body = Some(body.clone());

    let mut updated = Vec::new();
    for row in table.rows.iter_mut().filter(|row| matches(row, filter)) {
        if let (Value::Object(fields), Value::Object(changes)) = (&mut *row, &body) {
            for (column, value) in changes {
                fields.insert(column.clone(), value.clone());
            }
        }
        updated.push(row.clone());
    }

    Json(updated).into_response()
}

async fn delete_rows(
    State(tables): State<Tables>,
    Path(table): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = check_api_key(&headers) {
        return response;
    }

    let filter = id_filter(&query);
    let mut tables = tables.lock().unwrap();
    let table = tables.entry(table).or_default();
    let (deleted, kept): (Vec<Value>, Vec<Value>) = table
        .rows
        .drain(..)
        .partition(|row| matches(row, filter));
    table.rows = kept;

    Json(deleted).into_response()
}

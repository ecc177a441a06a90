//! Request dispatch: validation, path parsing and store calls.
//!
//! # Design
//! `Dispatcher` owns the validator and the resource path it serves, but
//! not the store. The store is passed in per call, so a host decides how it
//! is shared and locked. Validation failures return before the path is
//! parsed and before the store is touched.
//!
//! Operations are selected by method and by whether the path carries an id:
//!
//! | method | id | store call | success |
//! |---|---|---|---|
//! | `read` | yes | `get` | `1 Ok` + category |
//! | `read` | no | `list` | `1 Ok` + array |
//! | `create` | no | `create` | `2 Created` + category |
//! | `update` | yes | `update` | `3 Updated` |
//! | `delete` | yes | `delete` | `1 Ok` |
//! | `echo` | n/a | none | `1 Ok` + request body |

use tracing::{debug, error, warn};

use crate::error::DispatchError;
use crate::method::Method;
use crate::path;
use crate::protocol::{Request, Response};
use crate::status::StatusCode;
use crate::store::ResourceStore;
use crate::structured::{JsonSyntax, StructuredData};
use crate::types::{CreateCategory, UpdateCategory};
use crate::validator::{rejection, RequestValidator};

/// Resource path served when none is configured.
pub const DEFAULT_RESOURCE: &str = "/api/categories";

const BAD_REQUEST: &str = "Bad Request";
const ILLEGAL_BODY: &str = "illegal body";
const DUPLICATE_ID: &str = "duplicate id";

/// Turns protocol requests into store calls and responses.
#[derive(Debug, Clone)]
pub struct Dispatcher<D = JsonSyntax> {
    validator: RequestValidator<D>,
    resource: String,
}

impl Dispatcher<JsonSyntax> {
    pub fn new() -> Self {
        Self::with_validator(RequestValidator::new())
    }
}

impl Default for Dispatcher<JsonSyntax> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: StructuredData> Dispatcher<D> {
    pub fn with_validator(validator: RequestValidator<D>) -> Self {
        Self {
            validator,
            resource: DEFAULT_RESOURCE.to_string(),
        }
    }

    /// Serve `resource` (e.g. `/api/products`) instead of the default.
    pub fn with_resource(mut self, resource: &str) -> Self {
        self.resource = resource.to_string();
        self
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Process one request against `store`.
    pub fn handle<S>(&self, store: &mut S, request: Option<&Request>) -> Response
    where
        S: ResourceStore + ?Sized,
    {
        let Some(request) = request else {
            return self.validator.validate(None);
        };
        let method = match self.validator.check(request) {
            Ok(method) => method,
            Err(issues) => {
                debug!(method = %request.method, path = %request.path, "request rejected");
                return rejection(&issues);
            }
        };

        match self.route(store, method, request) {
            Ok(response) => response,
            Err(err) => {
                match &err {
                    DispatchError::Serialization(_) | DispatchError::IdsExhausted => {
                        error!(%method, path = %request.path, "{err}")
                    }
                    _ => warn!(%method, path = %request.path, "{err}"),
                }
                err.into()
            }
        }
    }

    fn route<S>(
        &self,
        store: &mut S,
        method: Method,
        request: &Request,
    ) -> Result<Response, DispatchError>
    where
        S: ResourceStore + ?Sized,
    {
        let body = request.body.as_deref().unwrap_or_default();
        if method == Method::Echo {
            return Ok(Response::ok().with_body(body));
        }

        let parsed = path::parse(&request.path).map_err(|_| DispatchError::BadRequest(BAD_REQUEST))?;
        if parsed.resource != self.resource {
            return Err(DispatchError::BadRequest(BAD_REQUEST));
        }
        let key = parsed.key().map_err(|_| DispatchError::BadRequest(BAD_REQUEST))?;
        debug!(%method, resource = %parsed.resource, ?key, "path parsed");

        match (method, key) {
            (Method::Read, Some(id)) => read_one(&*store, id),
            (Method::Read, None) => read_all(&*store),
            (Method::Create, None) => create(store, body),
            (Method::Update, Some(id)) => update(store, id, body),
            (Method::Delete, Some(id)) => delete(store, id),
            _ => Err(DispatchError::BadRequest(BAD_REQUEST)),
        }
    }
}

fn read_one<S: ResourceStore + ?Sized>(store: &S, id: i64) -> Result<Response, DispatchError> {
    let category = store.get(id).ok_or(DispatchError::NotFound)?;
    Ok(Response::ok().with_body(serde_json::to_string(&category)?))
}

fn read_all<S: ResourceStore + ?Sized>(store: &S) -> Result<Response, DispatchError> {
    Ok(Response::ok().with_body(serde_json::to_string(&store.list())?))
}

fn create<S: ResourceStore + ?Sized>(store: &mut S, body: &str) -> Result<Response, DispatchError> {
    let input: CreateCategory =
        serde_json::from_str(body).map_err(|_| DispatchError::BadRequest(ILLEGAL_BODY))?;
    let id = match input.id {
        Some(id) => id,
        None => store.next_id().ok_or(DispatchError::IdsExhausted)?,
    };
    let category = input.into_category(id);
    let payload = serde_json::to_string(&category)?;
    if !store.create(category) {
        return Err(DispatchError::BadRequest(DUPLICATE_ID));
    }
    Ok(Response::status(StatusCode::Created).with_body(payload))
}

fn update<S: ResourceStore + ?Sized>(
    store: &mut S,
    id: i64,
    body: &str,
) -> Result<Response, DispatchError> {
    let changes: UpdateCategory =
        serde_json::from_str(body).map_err(|_| DispatchError::BadRequest(ILLEGAL_BODY))?;
    if !store.update(id, changes) {
        return Err(DispatchError::NotFound);
    }
    Ok(Response::status(StatusCode::Updated))
}

fn delete<S: ResourceStore + ?Sized>(store: &mut S, id: i64) -> Result<Response, DispatchError> {
    if !store.delete(id) {
        return Err(DispatchError::NotFound);
    }
    Ok(Response::ok())
}

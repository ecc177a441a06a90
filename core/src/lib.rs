//! Validation and dispatch core for the category request protocol.
//!
//! # Overview
//! Accepts plain-data `Request` values (method, path, date, body), checks
//! them against the protocol grammar, resolves the path to a resource and
//! optional id, and runs the matching operation against a `ResourceStore`.
//! Every outcome is a `Response` value; nothing here touches the network.
//!
//! # Design
//! - `RequestValidator` returns a fresh, ordered issue list per call.
//! - `path::parse` yields the id as an `Option`, never a value plus flag.
//! - Body syntax is checked through the `StructuredData` trait.
//! - `Dispatcher` borrows the store per request; the host owns locking.
//!
//! ```
//! use category_core::{CategoryStore, Dispatcher, Request};
//!
//! let mut store = CategoryStore::seeded();
//! let request = Request::new("read", "/api/categories/1", "1700000000");
//! let response = Dispatcher::new().handle(&mut store, Some(&request));
//! assert_eq!(response.status, "1 Ok");
//! ```

pub mod dispatcher;
pub mod error;
pub mod method;
pub mod path;
pub mod protocol;
pub mod status;
pub mod store;
pub mod structured;
pub mod types;
pub mod validator;

pub use dispatcher::Dispatcher;
pub use error::DispatchError;
pub use method::Method;
pub use path::{ParsedPath, PathError};
pub use protocol::{Request, Response};
pub use status::StatusCode;
pub use store::{CategoryStore, ResourceStore};
pub use structured::{JsonSyntax, StructuredData};
pub use types::{Category, CreateCategory, UpdateCategory};
pub use validator::{Issue, RequestValidator};

//! GraphQL schema, resolvers and HTTP transport.
//!
//! The graph has two node types joined in both directions:
//!
//! ```graphql
//! type User    { id firstName age companyId company: Company }
//! type Company { id name description users: [User!] }
//! ```
//!
//! Every field that is not a stored property resolves through one request to
//! the REST store (see [`crate::store`]). Sibling fields resolve independently
//! and a failing store call only nulls its own field.
//!
//! ## Usage
//!
//! ```bash
//! # Serve the endpoint and the GraphiQL explorer on /graphql
//! roster serve --port 4000
//!
//! # Run a query in-process against the store
//! roster query '{ company(id: "1") { name users { firstName } } }'
//!
//! # Run a mutation
//! roster mutate 'addUser(firstName: "Ada", age: 36) { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `user`, `company`
//! - **Mutations**: `addUser`, `deleteUser`, `editUser`

mod schema;
mod server;
mod types;

pub use schema::{MutationRoot, QueryRoot, RosterSchema, build_schema};
pub use server::{router, run_server, serve};
pub use types::*;

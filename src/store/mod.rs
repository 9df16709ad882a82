//! Client for the external REST store.
//!
//! The store is a separate process (a json-server style resource server) that
//! owns all data. Every call here is a single HTTP request:
//!
//! | Operation                         | Request                      |
//! |-----------------------------------|------------------------------|
//! | [`StoreClient::get_user`]         | `GET /users/{id}`            |
//! | [`StoreClient::get_company`]      | `GET /companies/{id}`        |
//! | [`StoreClient::company_users`]    | `GET /companies/{id}/users`  |
//! | [`StoreClient::create_user`]      | `POST /users`                |
//! | [`StoreClient::update_user`]      | `PATCH /users/{id}`          |
//! | [`StoreClient::delete_user`]      | `DELETE /users/{id}`         |
//!
//! Responses are decoded and handed back unchanged. Nothing is cached.

mod client;

pub use client::StoreClient;

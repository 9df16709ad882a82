//! Records exchanged with the REST store.
//!
//! - [`User`] and [`Company`]: records as the store returns them
//! - [`NewUser`]: body of a create request
//! - [`UserPatch`] and [`Patch`]: body of a partial update, keeping the
//!   difference between an omitted field and an explicit `null`

mod company;
mod id;
mod user;

pub use company::Company;
pub use user::{NewUser, Patch, User, UserPatch};

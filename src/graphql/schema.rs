use async_graphql::{Context, EmptySubscription, MaybeUndefined, Object, Schema};

use crate::model::{NewUser, UserPatch};
use crate::store::StoreClient;

use super::types::*;

pub type RosterSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema once; it is shared by every request afterwards.
pub fn build_schema(store: StoreClient, max_depth: Option<usize>) -> RosterSchema {
    let builder = Schema::build(QueryRoot, MutationRoot, EmptySubscription).data(store);
    match max_depth {
        Some(depth) => builder.limit_depth(depth).finish(),
        None => builder.finish(),
    }
}

pub(super) fn store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a StoreClient> {
    ctx.data::<StoreClient>()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get a single user by ID
    async fn user(
        &self,
        ctx: &Context<'_>,
        id: Option<String>,
    ) -> async_graphql::Result<Option<User>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let user = store(ctx)?.get_user(&id).await?;
        Ok(Some(user.into()))
    }

    /// Get a single company by ID
    async fn company(
        &self,
        ctx: &Context<'_>,
        id: Option<String>,
    ) -> async_graphql::Result<Option<Company>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let company = store(ctx)?.get_company(&id).await?;
        Ok(Some(company.into()))
    }
}

pub struct MutationRoot;

// Mutation results are nullable so a store failure stays on its own field.
#[Object]
impl MutationRoot {
    /// Create a new user
    async fn add_user(
        &self,
        ctx: &Context<'_>,
        first_name: String,
        age: i32,
        company_id: Option<String>,
    ) -> async_graphql::Result<Option<User>> {
        tracing::info!(first_name = %first_name, age, "Creating user");
        if let Some(company_id) = company_id {
            tracing::debug!(company_id = %company_id, "companyId is not sent on create");
        }
        let new_user = NewUser::new(first_name, age);
        let user = store(ctx)?.create_user(&new_user).await?;
        Ok(Some(user.into()))
    }

    /// Delete a user. Resolves to null unless the store echoes the deleted record.
    async fn delete_user(
        &self,
        ctx: &Context<'_>,
        id: String,
    ) -> async_graphql::Result<Option<User>> {
        tracing::info!(id = %id, "Deleting user");
        let deleted = store(ctx)?.delete_user(&id).await?;
        Ok(deleted.map(Into::into))
    }

    /// Partially update a user with the supplied fields
    async fn edit_user(
        &self,
        ctx: &Context<'_>,
        id: String,
        first_name: MaybeUndefined<String>,
        age: MaybeUndefined<i32>,
        company_id: MaybeUndefined<String>,
    ) -> async_graphql::Result<Option<User>> {
        tracing::info!(id = %id, "Updating user");
        let mut patch = UserPatch::new(id);
        patch.first_name = first_name.into();
        patch.age = age.into();
        patch.company_id = company_id.into();

        let user = store(ctx)?.update_user(&patch).await?;
        Ok(Some(user.into()))
    }
}

use crate::model::{self, Patch};
use async_graphql::{ComplexObject, Context, MaybeUndefined, Result, SimpleObject};

use super::schema::store;

/// A person stored in the REST store.
#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct User {
    pub id: String,
    pub first_name: Option<String>,
    pub age: Option<i32>,
    pub company_id: Option<String>,
}

#[ComplexObject]
impl User {
    /// The company referenced by `companyId`
    async fn company(&self, ctx: &Context<'_>) -> Result<Option<Company>> {
        let Some(company_id) = self.company_id.as_deref() else {
            return Ok(None);
        };
        let company = store(ctx)?.get_company(company_id).await?;
        Ok(Some(company.into()))
    }
}

impl From<model::User> for User {
    fn from(u: model::User) -> Self {
        Self {
            id: u.id,
            first_name: u.first_name,
            age: u.age,
            company_id: u.company_id,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Company {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
}

#[ComplexObject]
impl Company {
    /// Users whose `companyId` points at this company
    async fn users(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<User>>>> {
        let users = store(ctx)?.company_users(&self.id).await?;
        Ok(Some(users.into_iter().map(|u| Some(u.into())).collect()))
    }
}

impl From<model::Company> for Company {
    fn from(c: model::Company) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
        }
    }
}

impl<T> From<MaybeUndefined<T>> for Patch<T> {
    fn from(value: MaybeUndefined<T>) -> Self {
        match value {
            MaybeUndefined::Undefined => Patch::Unset,
            MaybeUndefined::Null => Patch::Null,
            MaybeUndefined::Value(v) => Patch::Value(v),
        }
    }
}

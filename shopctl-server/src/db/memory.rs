//! In-process store with the same semantics as the PostgreSQL repositories
//!
//! Ids auto-increment from 1 per table and are never reused. Used by
//! `shopctl serve --in-memory` and by the router tests.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use super::repos::{DbError, Product, ProductStore, User, UserStore};
use crate::models::{ProductInput, UserInput};

#[derive(Debug, Clone)]
struct StoredUser {
    username: String,
    email: String,
    #[allow(dead_code)] // written, never read back
    password: String,
}

struct Table<T> {
    rows: BTreeMap<i64, T>,
    last_id: i64,
}

// Derived Default would require `T: Default`.
impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T> Table<T> {
    fn insert(&mut self, row: T) -> i64 {
        self.last_id += 1;
        self.rows.insert(self.last_id, row);
        self.last_id
    }

    fn replace(&mut self, id: i64, row: T) -> u64 {
        match self.rows.get_mut(&id) {
            Some(slot) => {
                *slot = row;
                1
            }
            None => 0,
        }
    }

    fn remove(&mut self, id: i64) -> u64 {
        u64::from(self.rows.remove(&id).is_some())
    }
}

#[derive(Default)]
struct Tables {
    products: Table<ProductInput>,
    users: Table<StoredUser>,
}

/// Mutex-guarded tables. The lock is never held across an await.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, DbError> {
        self.tables.lock().map_err(|_| DbError::Poisoned)
    }
}

fn product_row(id: i64, input: &ProductInput) -> Product {
    Product {
        id,
        name: input.name.clone(),
        description: input.description.clone(),
        price: input.price,
        stock_quantity: input.stock_quantity,
    }
}

fn user_row(id: i64, stored: &StoredUser) -> User {
    User {
        id,
        username: stored.username.clone(),
        email: stored.email.clone(),
    }
}

impl From<&UserInput> for StoredUser {
    fn from(input: &UserInput) -> Self {
        Self {
            username: input.username.clone(),
            email: input.email.clone(),
            password: input.password.clone(),
        }
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Product>, DbError> {
        let tables = self.lock()?;
        Ok(tables
            .products
            .rows
            .iter()
            .map(|(id, input)| product_row(*id, input))
            .collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Product>, DbError> {
        let tables = self.lock()?;
        Ok(tables.products.rows.get(&id).map(|input| product_row(id, input)))
    }

    async fn create(&self, input: &ProductInput) -> Result<i64, DbError> {
        Ok(self.lock()?.products.insert(input.clone()))
    }

    async fn update(&self, id: i64, input: &ProductInput) -> Result<u64, DbError> {
        Ok(self.lock()?.products.replace(id, input.clone()))
    }

    async fn delete(&self, id: i64) -> Result<u64, DbError> {
        Ok(self.lock()?.products.remove(id))
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn list(&self) -> Result<Vec<User>, DbError> {
        let tables = self.lock()?;
        Ok(tables
            .users
            .rows
            .iter()
            .map(|(id, stored)| user_row(*id, stored))
            .collect())
    }

    async fn get(&self, id: i64) -> Result<Option<User>, DbError> {
        let tables = self.lock()?;
        Ok(tables.users.rows.get(&id).map(|stored| user_row(id, stored)))
    }

    async fn create(&self, input: &UserInput) -> Result<i64, DbError> {
        Ok(self.lock()?.users.insert(StoredUser::from(input)))
    }

    async fn update(&self, id: i64, input: &UserInput) -> Result<u64, DbError> {
        Ok(self.lock()?.users.replace(id, StoredUser::from(input)))
    }

    async fn delete(&self, id: i64) -> Result<u64, DbError> {
        Ok(self.lock()?.users.remove(id))
    }
}

//! # Catalog Client
//!
//! Accounts and menu items: registration, seeding, restocking and lookups.
use crate::error::CounterError;
use crate::ledger::{CounterAnswer, CounterCommand, CounterLedger, CounterOutcome, CounterQuery};
use crate::model::{Category, MenuId, MenuItem, MenuItemCreate, User, UserCreate, UserId};
use async_trait::async_trait;
use ledger_actor::{LedgerClient, LedgerHandle};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct CatalogClient {
    inner: LedgerClient<CounterLedger>,
}

impl CatalogClient {
    pub fn new(inner: LedgerClient<CounterLedger>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn register_user(&self, params: UserCreate) -> Result<UserId, CounterError> {
        debug!("Sending request");
        match self.execute(CounterCommand::RegisterUser(params)).await? {
            CounterOutcome::UserRegistered(id) => Ok(id),
            _ => unreachable!("RegisterUser must return UserRegistered"),
        }
    }

    #[instrument(skip(self))]
    pub async fn add_menu_item(&self, params: MenuItemCreate) -> Result<MenuId, CounterError> {
        debug!("Sending request");
        match self.execute(CounterCommand::AddMenuItem(params)).await? {
            CounterOutcome::MenuItemAdded(id) => Ok(id),
            _ => unreachable!("AddMenuItem must return MenuItemAdded"),
        }
    }

    /// Adds stock to an item. Returns the new stock level.
    #[instrument(skip(self))]
    pub async fn restock(&self, menu_id: MenuId, quantity: u16) -> Result<u16, CounterError> {
        debug!("Restocking {} units of {}", quantity, menu_id);
        match self
            .execute(CounterCommand::Restock { menu_id, quantity })
            .await?
        {
            CounterOutcome::Restocked { stock, .. } => Ok(stock),
            _ => unreachable!("Restock must return Restocked"),
        }
    }

    #[instrument(skip(self))]
    pub async fn user(&self, id: UserId) -> Result<User, CounterError> {
        match self.query(CounterQuery::User(id)).await? {
            CounterAnswer::User(user) => Ok(user),
            _ => unreachable!("User must answer User"),
        }
    }

    #[instrument(skip(self))]
    pub async fn menu_item(&self, id: MenuId) -> Result<MenuItem, CounterError> {
        match self.query(CounterQuery::MenuItem(id)).await? {
            CounterAnswer::MenuItem(item) => Ok(item),
            _ => unreachable!("MenuItem must answer MenuItem"),
        }
    }

    /// The menu, optionally narrowed to one category.
    #[instrument(skip(self))]
    pub async fn menu(&self, category: Option<Category>) -> Result<Vec<MenuItem>, CounterError> {
        match self.query(CounterQuery::Menu(category)).await? {
            CounterAnswer::Menu(items) => Ok(items),
            _ => unreachable!("Menu must answer Menu"),
        }
    }
}

#[async_trait]
impl LedgerHandle<CounterLedger> for CatalogClient {
    fn inner(&self) -> &LedgerClient<CounterLedger> {
        &self.inner
    }
}

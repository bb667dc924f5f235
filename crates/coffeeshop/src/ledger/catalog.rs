//! Seeding operations: accounts and menu items.

use super::CounterLedger;
use crate::error::CounterError;
use crate::model::{MenuId, MenuItem, MenuItemCreate, User, UserCreate, UserId};

impl CounterLedger {
    pub(super) fn register_user(&mut self, params: UserCreate) -> Result<UserId, CounterError> {
        let name = params.name.trim();
        let email = params.email.trim();
        if name.is_empty() || email.is_empty() {
            return Err(CounterError::invalid("name and email are required"));
        }
        if self
            .users
            .iter()
            .any(|user| user.email.eq_ignore_ascii_case(email))
        {
            return Err(CounterError::invalid(format!("email {email} is taken")));
        }

        let (name, email) = (name.to_string(), email.to_string());
        Ok(self.users.insert_with(|id| User {
            id,
            name,
            email,
            password_hash: params.password_hash,
            balance: 0,
            role: params.role,
        }))
    }

    pub(super) fn add_menu_item(&mut self, params: MenuItemCreate) -> Result<MenuId, CounterError> {
        if params.name.trim().is_empty() {
            return Err(CounterError::invalid("menu item needs a name"));
        }
        if params.price < 0 {
            return Err(CounterError::invalid(format!(
                "negative price {} for {}",
                params.price, params.name
            )));
        }

        Ok(self.menu.insert_with(|id| MenuItem {
            id,
            name: params.name,
            description: params.description,
            price: params.price,
            stock: params.stock,
            image_url: params.image_url,
            category: params.category,
        }))
    }

    /// Adds stock to an item and returns the new level.
    pub(super) fn restock(&mut self, menu_id: MenuId, quantity: u16) -> Result<u16, CounterError> {
        if quantity == 0 {
            return Err(CounterError::invalid("restock quantity must be positive"));
        }
        let stock = self
            .menu_item(menu_id)?
            .stock
            .checked_add(quantity)
            .ok_or_else(|| CounterError::invalid(format!("stock overflow for {menu_id}")))?;

        self.menu.update(menu_id, |item| item.stock = stock);
        Ok(stock)
    }
}

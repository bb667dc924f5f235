use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MenuId(pub u32);

impl From<u32> for MenuId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MenuId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "menu_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Drinks,
    Foods,
}

/// A catalog entry. `price` is in the smallest currency unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuId,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub stock: u16,
    pub image_url: String,
    pub category: Category,
}

/// Payload for adding a menu item.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub description: String,
    pub price: i64,
    pub stock: u16,
    pub image_url: String,
    pub category: Category,
}

impl MenuItemCreate {
    pub fn new(name: impl Into<String>, price: i64, stock: u16, category: Category) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            price,
            stock,
            image_url: String::new(),
            category,
        }
    }
}

use uuid::Uuid;

use super::errors::DomainError;
use super::menu::{MenuItemInput, MenuItemView};
use super::order::{NewOrderInput, OrderStatus, OrderView};

pub trait OrderRepository: Send + Sync + 'static {
    fn create(&self, input: NewOrderInput) -> Result<OrderView, DomainError>;
    fn find_by_id(&self, id: Uuid) -> Result<Option<OrderView>, DomainError>;
    /// All orders, newest first.
    fn list(&self) -> Result<Vec<OrderView>, DomainError>;
    /// Validate the transition against the current status and write the new
    /// one atomically, refreshing `updated_at`.
    fn set_status(&self, id: Uuid, status: OrderStatus) -> Result<OrderView, DomainError>;
}

pub trait MenuRepository: Send + Sync + 'static {
    fn create(&self, input: MenuItemInput) -> Result<MenuItemView, DomainError>;
    fn update(&self, id: Uuid, input: MenuItemInput) -> Result<MenuItemView, DomainError>;
    fn delete(&self, id: Uuid) -> Result<(), DomainError>;
    fn list(&self) -> Result<Vec<MenuItemView>, DomainError>;
}

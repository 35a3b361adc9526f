use std::sync::Arc;

use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::order::{NewOrderInput, OrderStatus, OrderView};
use crate::domain::ports::OrderRepository;
use crate::realtime::events::{OrderAnnouncement, ServerEvent};
use crate::realtime::hub::BroadcastHub;

/// Order use cases. Every successful mutation publishes exactly one event
/// to the hub, strictly after the store has committed; reads publish
/// nothing.
pub struct OrderService<R> {
    repo: R,
    hub: Arc<BroadcastHub>,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repo: R, hub: Arc<BroadcastHub>) -> Self {
        Self { repo, hub }
    }

    pub fn create_order(&self, input: NewOrderInput) -> Result<OrderView, DomainError> {
        if input.items.is_empty() {
            return Err(DomainError::InvalidInput(
                "items: must not be empty".to_string(),
            ));
        }
        let order = self.repo.create(input)?;
        self.hub.broadcast(&ServerEvent::NewOrder {
            order: OrderAnnouncement::from(&order),
        });
        Ok(order)
    }

    pub fn get_order(&self, id: Uuid) -> Result<OrderView, DomainError> {
        self.repo.find_by_id(id)?.ok_or(DomainError::NotFound)
    }

    /// All orders, newest first.
    pub fn list_orders(&self) -> Result<Vec<OrderView>, DomainError> {
        self.repo.list()
    }

    pub fn set_status(&self, id: Uuid, status: OrderStatus) -> Result<OrderView, DomainError> {
        let order = self.repo.set_status(id, status)?;
        self.hub.broadcast(&ServerEvent::OrderUpdated {
            order_id: order.id,
            status: order.status,
        });
        Ok(order)
    }
}

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::menu::{MenuItemInput, MenuItemView};
use crate::domain::ports::MenuRepository;
use crate::realtime::events::ServerEvent;
use crate::realtime::hub::BroadcastHub;

/// Menu use cases. Dashboards re-fetch the menu on `menu_updated`, so the
/// event carries no payload; one is published per successful mutation.
pub struct MenuService<R> {
    repo: R,
    hub: Arc<BroadcastHub>,
}

impl<R: MenuRepository> MenuService<R> {
    pub fn new(repo: R, hub: Arc<BroadcastHub>) -> Self {
        Self { repo, hub }
    }

    pub fn create_item(&self, input: MenuItemInput) -> Result<MenuItemView, DomainError> {
        let item = self.repo.create(input)?;
        self.hub.broadcast(&ServerEvent::MenuUpdated);
        Ok(item)
    }

    pub fn update_item(
        &self,
        id: Uuid,
        input: MenuItemInput,
    ) -> Result<MenuItemView, DomainError> {
        let item = self.repo.update(id, input)?;
        self.hub.broadcast(&ServerEvent::MenuUpdated);
        Ok(item)
    }

    pub fn delete_item(&self, id: Uuid) -> Result<(), DomainError> {
        self.repo.delete(id)?;
        self.hub.broadcast(&ServerEvent::MenuUpdated);
        Ok(())
    }

    pub fn list_items(&self) -> Result<Vec<MenuItemView>, DomainError> {
        self.repo.list()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;
    use crate::realtime::events::ServerEvent;

    #[derive(Default)]
    struct InMemoryMenuRepository {
        items: Mutex<HashMap<Uuid, MenuItemView>>,
    }

    impl MenuRepository for InMemoryMenuRepository {
        fn create(&self, input: MenuItemInput) -> Result<MenuItemView, DomainError> {
            let item = MenuItemView {
                id: Uuid::new_v4(),
                name: input.name,
                description: input.description,
                price: input.price,
                category: input.category,
                available: input.available,
                preparation_time_minutes: input.preparation_time_minutes,
                tags: input.tags,
                nutrition_info: input.nutrition_info,
                ai_recommended: input.ai_recommended,
                image: input.image,
            };
            self.items.lock().unwrap().insert(item.id, item.clone());
            Ok(item)
        }

        fn update(&self, id: Uuid, input: MenuItemInput) -> Result<MenuItemView, DomainError> {
            let mut items = self.items.lock().unwrap();
            let item = items.get_mut(&id).ok_or(DomainError::NotFound)?;
            item.name = input.name;
            item.price = input.price;
            item.available = input.available;
            Ok(item.clone())
        }

        fn delete(&self, id: Uuid) -> Result<(), DomainError> {
            self.items
                .lock()
                .unwrap()
                .remove(&id)
                .map(|_| ())
                .ok_or(DomainError::NotFound)
        }

        fn list(&self) -> Result<Vec<MenuItemView>, DomainError> {
            Ok(self.items.lock().unwrap().values().cloned().collect())
        }
    }

    fn sample_item(name: &str) -> MenuItemInput {
        MenuItemInput {
            name: name.to_string(),
            description: "Rich and creamy tomato-based curry".to_string(),
            price: 320,
            category: "Main Course".to_string(),
            available: true,
            preparation_time_minutes: 20,
            tags: vec!["Popular".to_string()],
            nutrition_info: None,
            ai_recommended: true,
            image: None,
        }
    }

    fn service() -> (MenuService<InMemoryMenuRepository>, Arc<BroadcastHub>) {
        let hub = Arc::new(BroadcastHub::new());
        (
            MenuService::new(InMemoryMenuRepository::default(), hub.clone()),
            hub,
        )
    }

    #[tokio::test]
    async fn every_mutation_broadcasts_menu_updated() {
        let (service, hub) = service();
        let (_id, mut viewer) = hub.subscribe();

        let item = service.create_item(sample_item("Butter Chicken")).unwrap();
        service.update_item(item.id, sample_item("Paneer Tikka")).unwrap();
        service.delete_item(item.id).unwrap();

        for _ in 0..3 {
            assert_eq!(viewer.try_recv().unwrap(), ServerEvent::MenuUpdated);
        }
        assert!(viewer.try_recv().is_err());
    }

    #[tokio::test]
    async fn deleting_unknown_item_is_not_found_and_silent() {
        let (service, hub) = service();
        let (_id, mut viewer) = hub.subscribe();

        let err = service.delete_item(Uuid::new_v4()).unwrap_err();

        assert!(matches!(err, DomainError::NotFound));
        assert!(viewer.try_recv().is_err(), "failed delete must not broadcast");
    }

    #[tokio::test]
    async fn updating_unknown_item_is_not_found() {
        let (service, _hub) = service();
        let err = service
            .update_item(Uuid::new_v4(), sample_item("Ghost"))
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound));
    }

    #[tokio::test]
    async fn list_returns_created_items() {
        let (service, _hub) = service();
        service.create_item(sample_item("Butter Chicken")).unwrap();
        service.create_item(sample_item("Masala Chai")).unwrap();
        assert_eq!(service.list_items().unwrap().len(), 2);
    }
}

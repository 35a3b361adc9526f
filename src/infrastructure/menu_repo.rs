use diesel::prelude::*;
use serde_json::Value;
use uuid::Uuid;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::menu::{MenuItemInput, MenuItemView};
use crate::domain::ports::MenuRepository;
use crate::schema::menu_items;

use super::models::{MenuItemChanges, MenuItemRow, NewMenuItemRow};

pub struct DieselMenuRepository {
    pool: DbPool,
}

impl DieselMenuRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn to_row(id: Uuid, input: MenuItemInput) -> Result<NewMenuItemRow, DomainError> {
    let tags: Value = serde_json::to_value(&input.tags)
        .map_err(|e| DomainError::Internal(format!("encoding tags: {e}")))?;
    let nutrition_info = input
        .nutrition_info
        .as_ref()
        .map(serde_json::to_value)
        .transpose()
        .map_err(|e| DomainError::Internal(format!("encoding nutrition info: {e}")))?;
    Ok(NewMenuItemRow {
        id,
        name: input.name,
        description: input.description,
        price: input.price,
        category: input.category,
        available: input.available,
        preparation_time_minutes: input.preparation_time_minutes,
        tags,
        nutrition_info,
        ai_recommended: input.ai_recommended,
        image: input.image,
    })
}

impl MenuRepository for DieselMenuRepository {
    fn create(&self, input: MenuItemInput) -> Result<MenuItemView, DomainError> {
        let mut conn = self.pool.get()?;

        let row = to_row(Uuid::new_v4(), input)?;
        let inserted: MenuItemRow = diesel::insert_into(menu_items::table)
            .values(&row)
            .returning(MenuItemRow::as_returning())
            .get_result(&mut conn)?;

        inserted.into_view()
    }

    /// `image` and nutrition info are left as stored; updates replace the
    /// editable fields only.
    fn update(&self, id: Uuid, input: MenuItemInput) -> Result<MenuItemView, DomainError> {
        let mut conn = self.pool.get()?;

        let tags: Value = serde_json::to_value(&input.tags)
            .map_err(|e| DomainError::Internal(format!("encoding tags: {e}")))?;
        let changes = MenuItemChanges {
            name: input.name,
            description: input.description,
            price: input.price,
            category: input.category,
            available: input.available,
            preparation_time_minutes: input.preparation_time_minutes,
            tags,
            ai_recommended: input.ai_recommended,
        };
        let updated: Option<MenuItemRow> =
            diesel::update(menu_items::table.filter(menu_items::id.eq(id)))
                .set(&changes)
                .returning(MenuItemRow::as_returning())
                .get_result(&mut conn)
                .optional()?;

        updated.ok_or(DomainError::NotFound)?.into_view()
    }

    fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        let deleted =
            diesel::delete(menu_items::table.filter(menu_items::id.eq(id))).execute(&mut conn)?;
        if deleted == 0 {
            return Err(DomainError::NotFound);
        }
        Ok(())
    }

    fn list(&self) -> Result<Vec<MenuItemView>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = menu_items::table
            .select(MenuItemRow::as_select())
            .load(&mut conn)?;

        rows.into_iter().map(MenuItemRow::into_view).collect()
    }
}

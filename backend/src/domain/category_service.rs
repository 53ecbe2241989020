//! Category collection: add, remove and list, with write-through persistence.
//!
//! Removing a category never touches transactions. Transactions that still
//! point at a removed id render with [`CategoryLabel::Unknown`].

use log::{error, info};
use shared::{Category, CategoryLabel, TransactionType};

use crate::domain::models::{default_categories, palette_color, IdSequence, ValidationError};
use crate::storage::{CollectionRepository, Connection, CATEGORIES_KEY};

#[derive(Debug, Clone)]
pub struct CategoryService<C: Connection> {
    repository: CollectionRepository<C>,
    categories: Vec<Category>,
    ids: IdSequence,
}

impl<C: Connection> CategoryService<C> {
    /// Load the stored categories, or the seed set if none are usable
    pub fn new(connection: C) -> Self {
        let repository = CollectionRepository::new(connection);
        let categories = repository.load(CATEGORIES_KEY, default_categories);
        let ids = IdSequence::resume_after(categories.iter().map(|c| c.id.as_str()));

        Self {
            repository,
            categories,
            ids,
        }
    }

    /// Create a category. The name is trimmed; a blank name is rejected.
    pub fn add(&mut self, name: &str, category_type: TransactionType) -> Result<Category, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let category = Category {
            id: self.ids.next_id("cat"),
            name: name.to_string(),
            category_type,
            color: palette_color(self.categories.len()),
        };

        info!("Adding {} category '{}' ({})", category_type, category.name, category.id);
        self.categories.push(category.clone());
        self.persist();

        Ok(category)
    }

    /// Remove the category with `id`. Returns false if there was none.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.categories.len();
        self.categories.retain(|c| c.id != id);

        if self.categories.len() == before {
            return false;
        }

        info!("Removed category {}", id);
        self.persist();
        true
    }

    /// Categories in insertion order, optionally restricted to one type
    pub fn list(&self, category_type: Option<TransactionType>) -> Vec<&Category> {
        self.categories
            .iter()
            .filter(|c| category_type.map_or(true, |t| c.category_type == t))
            .collect()
    }

    pub fn all(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// How a transaction referencing `id` should show its category
    pub fn label_for(&self, id: &str) -> CategoryLabel {
        match self.get(id) {
            Some(category) => CategoryLabel::Known {
                name: category.name.clone(),
                color: category.color,
            },
            None => CategoryLabel::Unknown,
        }
    }

    fn persist(&self) {
        if let Err(e) = self.repository.save(CATEGORIES_KEY, &self.categories) {
            error!("Failed to save categories: {:#}", e);
        }
    }
}

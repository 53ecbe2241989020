//! Seed categories and palette assignment.

use shared::{Category, CategoryColor, TransactionType, CATEGORY_PALETTE};

/// Categories a fresh ledger starts with
pub fn default_categories() -> Vec<Category> {
    use CategoryColor::*;
    use TransactionType::*;

    [
        ("inc-1", "給料", Income, Blue),
        ("inc-2", "お小遣い", Income, Teal),
        ("inc-3", "その他収入", Income, Gray),
        ("exp-1", "食費", Expense, Orange),
        ("exp-2", "交通費", Expense, Cyan),
        ("exp-3", "日用品", Expense, Yellow),
        ("exp-4", "交際費", Expense, Pink),
        ("exp-5", "趣味", Expense, Purple),
        ("exp-6", "その他支出", Expense, Gray),
    ]
    .into_iter()
    .map(|(id, name, category_type, color)| Category {
        id: id.to_string(),
        name: name.to_string(),
        category_type,
        color,
    })
    .collect()
}

/// Color for the next category, cycling through the palette by how many
/// categories already exist
pub fn palette_color(existing_count: usize) -> CategoryColor {
    CATEGORY_PALETTE[existing_count % CATEGORY_PALETTE.len()]
}

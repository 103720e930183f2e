//! Category display formatting

use tabled::Tabled;

use crate::models::Category;

use super::table;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Icon")]
    icon: String,
    #[tabled(rename = "Color")]
    color: String,
    #[tabled(rename = "Used")]
    used: usize,
}

/// Format categories with how many transactions use each
pub fn format_category_list(categories: &[(Category, usize)]) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'finota init' to create default categories.\n"
            .to_string();
    }

    let rows = categories
        .iter()
        .map(|(category, used)| CategoryRow {
            id: category.id.to_string(),
            name: category.name.clone(),
            kind: category.kind.to_string(),
            icon: category.icon.clone(),
            color: category.color.clone(),
            used: *used,
        })
        .collect();

    format!("{}\n", table(rows))
}

/// Format category details for display
pub fn format_category_details(category: &Category, usage: usize) -> String {
    let mut output = String::new();

    output.push_str(&format!("Category: {}\n", category.name));
    output.push_str(&format!("  ID:           {}\n", category.id));
    output.push_str(&format!("  Type:         {}\n", category.kind));
    output.push_str(&format!("  Icon:         {}\n", category.icon));
    output.push_str(&format!("  Color:        {}\n", category.color));
    output.push_str(&format!("  Transactions: {}\n", usage));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;

    #[test]
    fn test_list() {
        let food = Category::with_style("Food", TransactionKind::Expense, "restaurant", "#ef4444");
        let output = format_category_list(&[(food, 3)]);
        assert!(output.contains("Food"));
        assert!(output.contains("restaurant"));
        assert!(output.contains("Expense"));
    }

    #[test]
    fn test_empty_list_hints_init() {
        assert!(format_category_list(&[]).contains("finota init"));
    }

    #[test]
    fn test_details() {
        let salary = Category::with_style("Salary", TransactionKind::Income, "briefcase", "#22c55e");
        let output = format_category_details(&salary, 12);
        assert!(output.starts_with("Category: Salary\n"));
        assert!(output.contains("Type:         Income"));
        assert!(output.contains("Transactions: 12"));
    }
}

//! Option lists for select widgets
//!
//! Both mappers keep input order and never deduplicate or sort.

use crate::enums::CatalogEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// One entry of a select: `value` is the id as text, which is what widgets bind to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// `(value, label)` pair as taken by `shared::components::ui::Select`
    pub fn into_pair(self) -> (String, String) {
        (self.value, self.label)
    }
}

/// Map records to options using the record's label and value fields.
///
/// ```rust,ignore
/// let options = to_select_options(&categories, |c| c.category_name.clone(), |c| c.category_id);
/// ```
pub fn to_select_options<T, L, V>(
    records: &[T],
    label_of: impl Fn(&T) -> L,
    value_of: impl Fn(&T) -> V,
) -> Vec<SelectOption>
where
    L: Into<String>,
    V: Display,
{
    records
        .iter()
        .map(|record| SelectOption {
            label: label_of(record).into(),
            value: value_of(record).to_string(),
        })
        .collect()
}

/// One option per enumeration entry, in declaration order.
pub fn enum_to_select_options<E: CatalogEnum>() -> Vec<SelectOption> {
    E::all()
        .iter()
        .map(|entry| SelectOption::new(entry.display_name(), entry.id().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_category::Category;
    use crate::enums::{HairStyle, PackingRule};

    fn category(id: i64, name: &str) -> Category {
        Category {
            category_id: id,
            category_name: name.to_string(),
        }
    }

    #[test]
    fn test_records_keep_order_and_duplicates() {
        let records = vec![category(5, "Wigs"), category(2, "Bulk"), category(5, "Wigs")];

        let options = to_select_options(&records, |c| c.category_name.clone(), |c| c.category_id);

        assert_eq!(
            options,
            vec![
                SelectOption::new("Wigs", "5"),
                SelectOption::new("Bulk", "2"),
                SelectOption::new("Wigs", "5"),
            ]
        );
    }

    #[test]
    fn test_empty_input_gives_empty_output() {
        let records: Vec<Category> = Vec::new();
        assert!(to_select_options(&records, |c| c.category_name.clone(), |c| c.category_id).is_empty());
    }

    #[test]
    fn test_enum_options_follow_declaration_order() {
        let options = enum_to_select_options::<HairStyle>();
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["1", "2", "3", "4"]);
        assert_eq!(options[3].label, "Body wave");

        assert_eq!(enum_to_select_options::<PackingRule>().len(), 3);
    }

    #[test]
    fn test_into_pair_puts_value_first() {
        assert_eq!(
            SelectOption::new("Gram", "1").into_pair(),
            ("1".to_string(), "Gram".to_string())
        );
    }
}

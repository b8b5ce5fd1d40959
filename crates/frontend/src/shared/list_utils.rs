/// Утилиты для работы со списками (поиск, индикаторы сортировки)
use crate::shared::components::table::SortDirection;

/// Поиск подстроки без учёта регистра; пустой запрос совпадает со всем
pub fn contains_ignore_case(text: &str, query: &str) -> bool {
    let query = query.trim();
    query.is_empty() || text.to_lowercase().contains(&query.to_lowercase())
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Ascending) => " ▲",
        Some(SortDirection::Descending) => " ▼",
        None => " ⇅",
    }
}

/// CSS класс индикатора: активная колонка подсвечивается
pub fn get_sort_class(direction: Option<SortDirection>) -> &'static str {
    if direction.is_some() {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Frutas Tropicales", "tropi"));
        assert!(contains_ignore_case("Frutas", "  "));
        assert!(contains_ignore_case("Ñame", "ñA"));
        assert!(!contains_ignore_case("Frutas", "verduras"));
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator(None), " ⇅");
        assert_eq!(get_sort_indicator(Some(SortDirection::Ascending)), " ▲");
        assert_eq!(get_sort_indicator(Some(SortDirection::Descending)), " ▼");
        assert_eq!(get_sort_class(None), "table__sort-indicator");
    }
}

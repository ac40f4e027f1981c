//! Утилиты форматирования ячеек и заголовков таблицы заказов

use contracts::dashboards::d400_forecast::AVG_WEEKLY_USAGE_KEY;
use serde_json::Value;

/// Заголовок колонки: подчёркивания заменяются пробелами
///
/// # Примеры
///
/// ```ignore
/// assert_eq!(column_title("Avg_Weekly_Usage"), "Avg Weekly Usage");
/// ```
pub fn column_title(key: &str) -> String {
    key.replace('_', " ")
}

/// Форматирует значение ячейки по имени колонки.
///
/// Числа выводятся с 2 знаками только для колонки среднего расхода
/// (`Avg_Weekly_Usage`), с 0 знаками для остальных числовых колонок.
/// Нечисловые значения проходят как есть.
pub fn format_cell(column: &str, value: Option<&Value>) -> String {
    let Some(value) = value else {
        return String::new();
    };

    match value.as_f64() {
        Some(n) if column == AVG_WEEKLY_USAGE_KEY => format!("{:.2}", n),
        Some(n) => format!("{:.0}", n),
        None => match value {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        },
    }
}

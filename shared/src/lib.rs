use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod grouping;
pub mod validation;

pub use grouping::{group_by_date, merge_groups, ExpenseGroup};
pub use validation::{
    ensure_category_listed, CategoryValidationError, ExpenseForm, ExpenseFormValidation,
    ExpenseValidationError,
};

/// A single expense as returned by the REST API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub name: String,
    /// Money spent, always positive
    pub amount: f64,
    /// Calendar date of the expense (YYYY-MM-DD), no time component
    pub date: NaiveDate,
    #[serde(default)]
    pub category: Option<Category>,
    /// Server-side creation timestamp, passed through untouched
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A user-managed expense category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// The signed-in user as reported by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// One page of a paged collection endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    /// True when no further pages exist for the query
    pub last: bool,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub number_of_elements: u32,
}

impl<T> Page<T> {
    /// Build a page without the server's totals (used by fakes and fixtures)
    pub fn new(content: Vec<T>, number: u32, last: bool) -> Self {
        let count = content.len() as u32;
        Self {
            content,
            last,
            first: number == 0,
            number,
            size: count,
            total_elements: 0,
            total_pages: 0,
            number_of_elements: count,
        }
    }
}

/// Request body for `PUT /expenses`. A missing id creates, a present id updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseUpsertRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub category_id: Option<String>,
    pub category: Option<Category>,
}

/// Request body for `PUT /categories`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpsertRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub color: Option<String>,
}

/// A calendar month, rendered on the wire as `YYYYMM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Returns `None` unless `month` is 1..=12 and the year fits in four digits
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) && (0..=9999).contains(&year) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month containing today's local date
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    /// Parse the `YYYYMM` wire format
    pub fn parse(value: &str) -> Option<Self> {
        if value.len() != 6 || !value.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let year = value[..4].parse::<i32>().ok()?;
        let month = value[4..].parse::<u32>().ok()?;
        Self::new(year, month)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Move forward (positive) or backward (negative) by whole months
    pub fn add_months(&self, delta: i32) -> Self {
        let index = self.year * 12 + (self.month as i32 - 1) + delta;
        Self {
            year: index.div_euclid(12),
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    /// Display label such as "May 2024"
    pub fn label(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}", self.year, self.month)
    }
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "January",
    }
}

/// Sort orders offered by the expense list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOption {
    CreatedAtDesc,
    CreatedAtAsc,
    #[default]
    DateDesc,
    DateAsc,
    NameAsc,
    NameDesc,
}

impl SortOption {
    pub const ALL: [SortOption; 6] = [
        SortOption::CreatedAtDesc,
        SortOption::CreatedAtAsc,
        SortOption::DateDesc,
        SortOption::DateAsc,
        SortOption::NameAsc,
        SortOption::NameDesc,
    ];

    /// Value of the `sort` query parameter
    pub fn as_param(&self) -> &'static str {
        match self {
            SortOption::CreatedAtDesc => "createdAt,DESC",
            SortOption::CreatedAtAsc => "createdAt,ASC",
            SortOption::DateDesc => "date,DESC",
            SortOption::DateAsc => "date,ASC",
            SortOption::NameAsc => "name,ASC",
            SortOption::NameDesc => "name,DESC",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::CreatedAtDesc => "Created at (newest first)",
            SortOption::CreatedAtAsc => "Created at (oldest first)",
            SortOption::DateDesc => "Date (newest first)",
            SortOption::DateAsc => "Date (oldest first)",
            SortOption::NameAsc => "Name (A-Z)",
            SortOption::NameDesc => "Name (Z-A)",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.as_param() == value)
    }
}

/// Query parameters for `GET /expenses`
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseCriteria {
    pub year_month: YearMonth,
    pub page: u32,
    pub size: u32,
    pub sort: SortOption,
    /// Free-text filter on the expense name
    pub name: Option<String>,
    pub category_ids: Vec<String>,
}

impl ExpenseCriteria {
    /// Render as query pairs. Blank names are left out and every category id
    /// becomes its own `categoryIds` pair.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("yearMonth", self.year_month.to_string()),
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
            ("sort", self.sort.as_param().to_string()),
        ];

        if let Some(name) = self.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            pairs.push(("name", name.to_string()));
        }

        for category_id in &self.category_ids {
            pairs.push(("categoryIds", category_id.clone()));
        }

        pairs
    }
}

/// Query parameters for `GET /categories`
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCriteria {
    pub sort: String,
}

impl Default for CategoryCriteria {
    fn default() -> Self {
        Self {
            sort: "name,asc".to_string(),
        }
    }
}

impl CategoryCriteria {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![("sort", self.sort.clone())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_year_month_display_is_wire_format() {
        let ym = YearMonth::new(2024, 5).unwrap();
        assert_eq!(ym.to_string(), "202405");
        assert_eq!(YearMonth::new(987, 12).unwrap().to_string(), "098712");
    }

    #[test]
    fn test_year_month_rejects_invalid_month() {
        assert!(YearMonth::new(2024, 0).is_none());
        assert!(YearMonth::new(2024, 13).is_none());
        assert!(YearMonth::new(10000, 1).is_none());
    }

    #[test]
    fn test_year_month_parse() {
        assert_eq!(YearMonth::parse("202412"), YearMonth::new(2024, 12));
        assert!(YearMonth::parse("2024-12").is_none());
        assert!(YearMonth::parse("202413").is_none());
        assert!(YearMonth::parse("20241").is_none());
    }

    #[test]
    fn test_year_month_navigation_wraps_years() {
        let january = YearMonth::new(2024, 1).unwrap();
        assert_eq!(january.add_months(-1), YearMonth::new(2023, 12).unwrap());
        assert_eq!(january.add_months(11), YearMonth::new(2024, 12).unwrap());
        assert_eq!(january.add_months(12), YearMonth::new(2025, 1).unwrap());
        assert_eq!(january.add_months(-25), YearMonth::new(2021, 12).unwrap());
        assert_eq!(january.add_months(0), january);
    }

    #[test]
    fn test_year_month_first_day_and_label() {
        let ym = YearMonth::from_date(date("2024-05-17"));
        assert_eq!(ym.first_day(), date("2024-05-01"));
        assert_eq!(ym.label(), "May 2024");
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(9), "September");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(13), "January");
    }

    #[test]
    fn test_sort_option_params_round_trip() {
        for option in SortOption::ALL {
            assert_eq!(SortOption::from_param(option.as_param()), Some(option));
        }
        assert_eq!(SortOption::default().as_param(), "date,DESC");
        assert_eq!(SortOption::from_param("amount,ASC"), None);
    }

    #[test]
    fn test_criteria_query_pairs_minimal() {
        let criteria = ExpenseCriteria {
            year_month: YearMonth::new(2024, 5).unwrap(),
            page: 0,
            size: 10,
            sort: SortOption::DateDesc,
            name: Some("   ".to_string()),
            category_ids: vec![],
        };

        assert_eq!(
            criteria.query_pairs(),
            vec![
                ("yearMonth", "202405".to_string()),
                ("page", "0".to_string()),
                ("size", "10".to_string()),
                ("sort", "date,DESC".to_string()),
            ]
        );
    }

    #[test]
    fn test_criteria_query_pairs_with_filters() {
        let criteria = ExpenseCriteria {
            year_month: YearMonth::new(2023, 11).unwrap(),
            page: 3,
            size: 10,
            sort: SortOption::NameAsc,
            name: Some("  coffee ".to_string()),
            category_ids: vec!["c1".to_string(), "c2".to_string()],
        };

        let pairs = criteria.query_pairs();
        assert!(pairs.contains(&("name", "coffee".to_string())));
        assert!(pairs.contains(&("page", "3".to_string())));
        let category_ids: Vec<_> = pairs
            .iter()
            .filter(|(key, _)| *key == "categoryIds")
            .map(|(_, value)| value.as_str())
            .collect();
        assert_eq!(category_ids, vec!["c1", "c2"]);
    }

    #[test]
    fn test_expense_deserializes_camel_case() {
        let json = r##"{
            "id": "42",
            "name": "Groceries",
            "amount": 23.5,
            "date": "2024-05-01",
            "category": { "id": "c1", "name": "Food", "color": "#ff0000" },
            "createdAt": "2024-05-01T10:15:00"
        }"##;

        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.date, date("2024-05-01"));
        let category = expense.category.unwrap();
        assert_eq!(category.name, "Food");
        assert_eq!(category.color.as_deref(), Some("#ff0000"));
        assert_eq!(expense.created_at.as_deref(), Some("2024-05-01T10:15:00"));
    }

    #[test]
    fn test_page_metadata_is_optional() {
        let json = r#"{ "content": [], "last": true }"#;
        let page: Page<Expense> = serde_json::from_str(json).unwrap();
        assert!(page.last);
        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 0);
    }

    #[test]
    fn test_upsert_request_omits_missing_id() {
        let request = ExpenseUpsertRequest {
            id: None,
            name: "Lunch".to_string(),
            amount: 12.0,
            date: date("2024-05-02"),
            category_id: None,
            category: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["date"], "2024-05-02");
        assert!(value.get("categoryId").is_some());
    }
}

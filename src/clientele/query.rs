use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Fields the collection can be ordered by.
///
/// Name fields compare case-insensitively; email and phone compare as-is.
/// The asymmetry is inherited behavior, kept on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    Id,
    FirstName,
    #[default]
    LastName,
    Email,
    Phone,
    CreatedAt,
}

impl FromStr for SortField {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortField::Id),
            "firstName" | "first-name" | "first_name" => Ok(SortField::FirstName),
            "lastName" | "last-name" | "last_name" => Ok(SortField::LastName),
            "email" => Ok(SortField::Email),
            "phone" => Ok(SortField::Phone),
            "createdAt" | "created-at" | "created_at" => Ok(SortField::CreatedAt),
            other => Err(StoreError::Store(format!("Unknown sort field: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDir {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDir::Asc),
            "desc" => Ok(SortDir::Desc),
            other => Err(StoreError::Store(format!(
                "Unknown sort direction: {}",
                other
            ))),
        }
    }
}

/// A zero-indexed page request. A size of 0 is treated as 1 rather than
/// rejected, so a sloppy caller gets an answer instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
}

impl PageRequest {
    pub fn new(page: usize, size: usize) -> Self {
        Self { page, size }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 0, size: 10 }
    }
}

/// One page of results plus the totals a pager needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: usize,
    pub total_pages: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_field_parses_wire_and_flag_spellings() {
        assert_eq!("lastName".parse::<SortField>().unwrap(), SortField::LastName);
        assert_eq!("last-name".parse::<SortField>().unwrap(), SortField::LastName);
        assert_eq!("createdAt".parse::<SortField>().unwrap(), SortField::CreatedAt);
        assert!("surname".parse::<SortField>().is_err());
    }

    #[test]
    fn sort_dir_is_case_insensitive() {
        assert_eq!("DESC".parse::<SortDir>().unwrap(), SortDir::Desc);
        assert_eq!("asc".parse::<SortDir>().unwrap(), SortDir::Asc);
        assert!("down".parse::<SortDir>().is_err());
    }

    #[test]
    fn page_serializes_with_wire_field_names() {
        let page = Page {
            content: vec![1, 2],
            total_elements: 5,
            total_pages: 3,
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["totalElements"], 5);
        assert_eq!(json["totalPages"], 3);
    }
}

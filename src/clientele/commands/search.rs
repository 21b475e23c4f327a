use crate::error::Result;
use crate::model::{Address, Customer};
use crate::query::{Page, PageRequest, SortDir, SortField};
use crate::store::DataStore;

use super::helpers::{paginate, sort_customers};

/// Case-insensitive substring search over full name, email, and phone.
/// A blank term returns the whole collection, paged and sorted like `list`.
pub fn run<S: DataStore>(
    store: &S,
    term: &str,
    req: PageRequest,
    field: SortField,
    dir: SortDir,
) -> Result<Page<Customer>> {
    let mut customers = store.list_customers()?;
    let needle = term.trim().to_lowercase();
    if !needle.is_empty() {
        customers.retain(|c| {
            c.full_name().to_lowercase().contains(&needle)
                || c.email.to_lowercase().contains(&needle)
                || c.phone.contains(&needle)
        });
    }
    sort_customers(&mut customers, field, dir);
    Ok(paginate(customers, req))
}

/// Address-level filters for [`by_address`]. Absent or blank fields are
/// wildcards; each present field is a case-insensitive substring predicate.
#[derive(Debug, Clone, Default)]
pub struct AddressFilter {
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
}

impl AddressFilter {
    fn predicate(value: &Option<String>, field: &str) -> bool {
        match value.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(needle) => field.to_lowercase().contains(&needle.to_lowercase()),
        }
    }

    pub fn matches(&self, address: &Address) -> bool {
        Self::predicate(&self.city, &address.city)
            && Self::predicate(&self.state, &address.state)
            && Self::predicate(&self.pincode, &address.pincode)
    }
}

/// Advanced search: a customer matches when at least one of its addresses
/// satisfies every provided filter.
pub fn by_address<S: DataStore>(
    store: &S,
    filter: &AddressFilter,
    req: PageRequest,
    field: SortField,
    dir: SortDir,
) -> Result<Page<Customer>> {
    let mut customers = store.list_customers()?;
    customers.retain(|c| c.addresses.iter().any(|a| filter.matches(a)));
    sort_customers(&mut customers, field, dir);
    Ok(paginate(customers, req))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn all(store: &crate::store::memory::InMemoryStore, term: &str) -> Vec<Customer> {
        run(
            store,
            term,
            PageRequest::new(0, 50),
            SortField::LastName,
            SortDir::Asc,
        )
        .unwrap()
        .content
    }

    #[test]
    fn matches_the_full_name_case_insensitively() {
        let fixture = StoreFixture::seeded();
        let found = all(&fixture.store, "jane");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].full_name(), "Jane Smith");
    }

    #[test]
    fn matches_across_the_name_boundary() {
        let fixture = StoreFixture::seeded();
        let found = all(&fixture.store, "jane smith");
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn matches_email_and_phone() {
        let fixture = StoreFixture::seeded();
        assert_eq!(all(&fixture.store, "robert.j@")[0].id, 3);
        assert_eq!(all(&fixture.store, "0987654321")[0].id, 2);
    }

    #[test]
    fn blank_term_returns_everything() {
        let fixture = StoreFixture::seeded();
        assert_eq!(all(&fixture.store, "").len(), 5);
        assert_eq!(all(&fixture.store, "   ").len(), 5);
    }

    #[test]
    fn unmatched_term_returns_an_empty_page() {
        let fixture = StoreFixture::seeded();
        let page = run(
            &fixture.store,
            "zebra",
            PageRequest::default(),
            SortField::default(),
            SortDir::default(),
        )
        .unwrap();
        assert!(page.content.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn city_filter_matches_by_owned_address() {
        let fixture = StoreFixture::seeded();
        let filter = AddressFilter {
            city: Some("chicago".into()),
            ..AddressFilter::default()
        };
        let page = by_address(
            &fixture.store,
            &filter,
            PageRequest::default(),
            SortField::default(),
            SortDir::default(),
        )
        .unwrap();
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].full_name(), "Robert Johnson");
    }

    #[test]
    fn all_provided_filters_must_hit_the_same_address() {
        let fixture = StoreFixture::seeded();
        // John has NY addresses with pincodes 10001 and 11201; "NY" + "11201"
        // match on his Brooklyn address, but "NY" + "02101" match nowhere.
        let brooklyn = AddressFilter {
            state: Some("NY".into()),
            pincode: Some("11201".into()),
            ..AddressFilter::default()
        };
        let mixed = AddressFilter {
            state: Some("NY".into()),
            pincode: Some("02101".into()),
            ..AddressFilter::default()
        };
        let req = PageRequest::default();
        let (field, dir) = (SortField::default(), SortDir::default());
        let hits = by_address(&fixture.store, &brooklyn, req, field, dir).unwrap();
        assert_eq!(hits.content.len(), 1);
        let misses = by_address(&fixture.store, &mixed, req, field, dir).unwrap();
        assert!(misses.content.is_empty());
    }

    #[test]
    fn empty_filter_is_a_wildcard() {
        let fixture = StoreFixture::seeded();
        let page = by_address(
            &fixture.store,
            &AddressFilter::default(),
            PageRequest::new(0, 50),
            SortField::default(),
            SortDir::default(),
        )
        .unwrap();
        assert_eq!(page.content.len(), 5);
    }
}

use crate::error::Result;
use crate::model::Customer;
use crate::query::{Page, PageRequest, SortDir, SortField};
use crate::store::DataStore;

use super::helpers::{paginate, sort_customers};

pub fn run<S: DataStore>(
    store: &S,
    req: PageRequest,
    field: SortField,
    dir: SortDir,
) -> Result<Page<Customer>> {
    let mut customers = store.list_customers()?;
    sort_customers(&mut customers, field, dir);
    Ok(paginate(customers, req))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn pages_a_sorted_collection() {
        let mut fixture = StoreFixture::seeded();
        // Trim to three customers so the slicing is easy to eyeball
        fixture.store.delete_customer(4).unwrap();
        fixture.store.delete_customer(5).unwrap();

        let page = run(
            &fixture.store,
            PageRequest::new(1, 2),
            SortField::LastName,
            SortDir::Asc,
        )
        .unwrap();

        // Doe, Johnson | Smith → second page holds only Smith
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].last_name, "Smith");
        assert_eq!(page.total_elements, 3);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn first_page_in_descending_order() {
        let fixture = StoreFixture::seeded();
        let page = run(
            &fixture.store,
            PageRequest::new(0, 10),
            SortField::LastName,
            SortDir::Desc,
        )
        .unwrap();
        assert_eq!(page.content[0].last_name, "Wilson");
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn empty_store_lists_an_empty_page() {
        let fixture = StoreFixture::new();
        let page = run(
            &fixture.store,
            PageRequest::default(),
            SortField::default(),
            SortDir::default(),
        )
        .unwrap();
        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 0);
        assert_eq!(page.total_pages, 0);
    }
}

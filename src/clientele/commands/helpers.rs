use std::cmp::Ordering;

use crate::error::{Result, StoreError};
use crate::model::{Address, AddressId, Customer, CustomerId};
use crate::query::{Page, PageRequest, SortDir, SortField};
use crate::store::DataStore;

/// Reject the (email, phone) pair if another customer already uses either.
/// Email comparison is case-insensitive; phone is exact. Pass the customer's
/// own id on update so it doesn't collide with itself.
pub fn check_unique_contact<S: DataStore>(
    store: &S,
    email: &str,
    phone: &str,
    exclude: Option<CustomerId>,
) -> Result<()> {
    for customer in store.list_customers()? {
        if Some(customer.id) == exclude {
            continue;
        }
        if customer.email.eq_ignore_ascii_case(email) {
            return Err(StoreError::DuplicateEmail(email.to_string()));
        }
        if customer.phone == phone {
            return Err(StoreError::DuplicatePhone(phone.to_string()));
        }
    }
    Ok(())
}

/// Reject the candidate if a sibling address already names the same
/// (street, city, state, pincode) location.
pub fn check_unique_address(
    siblings: &[Address],
    candidate: &Address,
    exclude: Option<AddressId>,
) -> Result<()> {
    for sibling in siblings {
        if Some(sibling.id) == exclude {
            continue;
        }
        if sibling.same_location(candidate) {
            return Err(StoreError::DuplicateAddress);
        }
    }
    Ok(())
}

/// Locate the customer owning the given address by scanning the collection.
pub fn find_owner<S: DataStore>(store: &S, address_id: AddressId) -> Result<Customer> {
    store
        .list_customers()?
        .into_iter()
        .find(|c| c.addresses.iter().any(|a| a.id == address_id))
        .ok_or(StoreError::AddressNotFound(address_id))
}

fn compare(a: &Customer, b: &Customer, field: SortField) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        // Name fields compare case-insensitively; email and phone do not.
        SortField::FirstName => a
            .first_name
            .to_lowercase()
            .cmp(&b.first_name.to_lowercase()),
        SortField::LastName => a.last_name.to_lowercase().cmp(&b.last_name.to_lowercase()),
        SortField::Email => a.email.cmp(&b.email),
        SortField::Phone => a.phone.cmp(&b.phone),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}

pub fn sort_customers(customers: &mut [Customer], field: SortField, dir: SortDir) {
    customers.sort_by(|a, b| {
        let ord = compare(a, b, field);
        match dir {
            SortDir::Asc => ord,
            SortDir::Desc => ord.reverse(),
        }
    });
}

/// Slice one page out of the full result set, with pager totals.
pub fn paginate<T>(items: Vec<T>, req: PageRequest) -> Page<T> {
    let size = req.size.max(1);
    let total_elements = items.len();
    let total_pages = total_elements.div_ceil(size);
    let start = req.page.saturating_mul(size);
    let content = items.into_iter().skip(start).take(size).collect();
    Page {
        content,
        total_elements,
        total_pages,
    }
}

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;
use timeago::Formatter;
use unicode_width::UnicodeWidthStr;

use clientele::envelope::Envelope;
use clientele::model::{Address, Customer};
use clientele::query::Page;

const NAME_WIDTH: usize = 24;
const EMAIL_WIDTH: usize = 30;
const PHONE_WIDTH: usize = 12;

pub(crate) fn print_json<T: Serialize>(envelope: &Envelope<T>) {
    match serde_json::to_string_pretty(envelope) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("{}", format!("Error: {}", e).red()),
    }
}

pub(crate) fn print_failure<T>(envelope: &Envelope<T>) {
    let message = envelope.error_message.as_deref().unwrap_or("Unknown error");
    eprintln!("{}", format!("{}: {}", envelope.error_code, message).red());
}

fn pad_cell(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    format!("{}{}", text, " ".repeat(width - text_width))
}

fn format_time_ago(time: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = (now - time).to_std().unwrap_or_default();
    Formatter::new().convert(duration)
}

pub(crate) fn print_customer_page(page: &Page<Customer>) {
    if page.content.is_empty() {
        println!("No customers found.");
        return;
    }

    for customer in &page.content {
        println!(
            "{} {} {} {} {} {}",
            format!("{}.", customer.id).yellow(),
            pad_cell(&customer.full_name(), NAME_WIDTH).bold(),
            pad_cell(&customer.email, EMAIL_WIDTH),
            pad_cell(&customer.phone, PHONE_WIDTH),
            format!("{} addr", customer.num_addresses()).dimmed(),
            format_time_ago(customer.created_at).dimmed()
        );
    }
    println!(
        "{}",
        format!(
            "{} customer(s), {} page(s)",
            page.total_elements, page.total_pages
        )
        .dimmed()
    );
}

pub(crate) fn print_customer(customer: &Customer) {
    println!(
        "{} {}",
        format!("{}.", customer.id).yellow(),
        customer.full_name().bold()
    );
    println!("  email: {}", customer.email);
    println!("  phone: {}", customer.phone);
    println!("  since: {}", format_time_ago(customer.created_at));
    print_addresses(&customer.addresses);
}

pub(crate) fn print_addresses(addresses: &[Address]) {
    for address in addresses {
        let street2 = address
            .street2
            .as_deref()
            .map(|s| format!(", {}", s))
            .unwrap_or_default();
        println!(
            "  {} {}{}, {}, {} {}, {}",
            format!("#{}", address.id).yellow(),
            address.street,
            street2,
            address.city,
            address.state,
            address.pincode,
            address.country
        );
    }
}

pub(crate) fn print_address(address: &Address) {
    print_addresses(std::slice::from_ref(address));
}

pub(crate) fn print_success(message: &str) {
    println!("{}", message.green());
}

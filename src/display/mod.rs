//! Display formatting for terminal output
//!
//! Formats contacts for terminal output in table and detail views.

use crate::models::Contact;

/// Format a list of keyed contacts as a table
pub fn format_contact_list(contacts: &[(String, Contact)]) -> String {
    if contacts.is_empty() {
        return "No contacts found.".to_string();
    }

    // Calculate column widths
    let key_width = contacts
        .iter()
        .map(|(key, _)| key.len())
        .max()
        .unwrap_or(3)
        .max(3);

    let name_width = contacts
        .iter()
        .map(|(_, c)| c.first_name.len() + c.last_name.len() + 1)
        .max()
        .unwrap_or(4)
        .max(4);

    let phone_width = contacts
        .iter()
        .map(|(_, c)| c.phone_number.len())
        .max()
        .unwrap_or(5)
        .max(5);

    // Build header
    let mut output = String::new();
    output.push_str(&format!(
        "{:<key_width$}  {:<name_width$}  {:<phone_width$}  {}\n",
        "Key",
        "Name",
        "Phone",
        "Email",
        key_width = key_width,
        name_width = name_width,
        phone_width = phone_width,
    ));

    // Separator line
    output.push_str(&format!(
        "{:-<key_width$}  {:-<name_width$}  {:-<phone_width$}  {:-<5}\n",
        "",
        "",
        "",
        "",
        key_width = key_width,
        name_width = name_width,
        phone_width = phone_width,
    ));

    // Contact rows
    for (key, contact) in contacts {
        output.push_str(&format!(
            "{:<key_width$}  {:<name_width$}  {:<phone_width$}  {}\n",
            key,
            format!("{} {}", contact.first_name, contact.last_name),
            contact.phone_number,
            contact.email_address,
            key_width = key_width,
            name_width = name_width,
            phone_width = phone_width,
        ));
    }

    output
}

/// Format a single contact in detail view
///
/// `date_format` is the strftime format from settings, applied to the
/// contact's timestamps.
pub fn format_contact_details(key: &str, contact: &Contact, date_format: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Key:        {}\n", key));
    output.push_str(&format!("First name: {}\n", contact.first_name));
    output.push_str(&format!("Last name:  {}\n", contact.last_name));
    output.push_str(&format!("Phone:      {}\n", contact.phone_number));
    output.push_str(&format!("Email:      {}\n", contact.email_address));
    output.push_str(&format!(
        "Created:    {}\n",
        contact.created_at.format(date_format)
    ));
    output.push_str(&format!(
        "Updated:    {}\n",
        contact.updated_at.format(date_format)
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        assert_eq!(format_contact_list(&[]), "No contacts found.");
    }

    #[test]
    fn test_list_contains_all_rows() {
        let contacts = vec![
            (
                "Jane_Smith".to_string(),
                Contact::new("Jane", "Smith", "555-0101", "jane@example.com"),
            ),
            (
                "John_Doe".to_string(),
                Contact::new("John", "Doe", "555-0100", "john@example.com"),
            ),
        ];

        let output = format_contact_list(&contacts);
        assert!(output.contains("Jane_Smith"));
        assert!(output.contains("John Doe"));
        assert!(output.contains("555-0101"));
        assert!(output.contains("john@example.com"));
    }

    #[test]
    fn test_details_view() {
        let contact = Contact::new("John", "Doe", "555-0100", "john@example.com");
        let output = format_contact_details("John_Doe", &contact, "%Y-%m-%d");

        assert!(output.contains("Key:        John_Doe"));
        assert!(output.contains("First name: John"));
        assert!(output.contains("Email:      john@example.com"));
    }

    #[test]
    fn test_details_view_formats_timestamps() {
        let contact = Contact::new("John", "Doe", "555-0100", "john@example.com");
        let output = format_contact_details("John_Doe", &contact, "%Y-%m-%d");

        let created = contact.created_at.format("%Y-%m-%d").to_string();
        assert!(output.contains(&format!("Created:    {}", created)));
        assert!(output.contains("Updated:    "));
    }
}

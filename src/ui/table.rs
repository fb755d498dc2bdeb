//! Text rendering of store state.

use serde_json::Value;

use crate::users::{Attributes, User, UsersState};

const HEADERS: [&str; 7] = ["ID", "Name", "Username", "Email", "Phone", "Website", "Company"];
const EMPTY_CELL: &str = "-";

/// Render the directory listing.
///
/// Mirrors the list page: loading placeholder, error banner, empty
/// message or the table itself.
pub fn render_list(state: &UsersState) -> String {
    if state.loading {
        return "Loading...".to_string();
    }

    let mut out = String::new();
    if let Some(error) = &state.error {
        out.push_str(&format!("Error: {}\n", error));
    }

    if state.users.is_empty() {
        out.push_str("No users found.");
        return out;
    }

    let rows: Vec<[String; 7]> = state.users.iter().map(row).collect();
    let mut widths = HEADERS.map(|h| h.chars().count());
    for r in &rows {
        for (w, cell) in widths.iter_mut().zip(r.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let header = HEADERS.map(String::from);
    push_row(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);
    for r in &rows {
        push_row(&mut out, r, &widths);
    }
    out.push_str(&format!("{} user(s)", state.users.len()));
    out
}

fn row(user: &User) -> [String; 7] {
    [
        user.id.to_string(),
        user.name.clone(),
        user.username.clone(),
        user.email.clone(),
        user.phone.clone().unwrap_or_else(|| EMPTY_CELL.to_string()),
        user.website.clone().unwrap_or_else(|| EMPTY_CELL.to_string()),
        user.company_name().unwrap_or(EMPTY_CELL).to_string(),
    ]
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

/// Render a single user with nested bags flattened.
pub fn render_detail(user: &User) -> String {
    let mut lines = vec![
        format!("ID:       {}", user.id),
        format!("Name:     {}", user.name),
        format!("Username: {}", user.username),
        format!("Email:    {}", user.email),
        format!("Phone:    {}", user.phone.as_deref().unwrap_or(EMPTY_CELL)),
        format!("Website:  {}", user.website.as_deref().unwrap_or(EMPTY_CELL)),
        format!("Avatar:   {}", user.avatar),
    ];

    for (label, bag) in [("Address", &user.address), ("Company", &user.company)] {
        match bag {
            Some(bag) if !bag.is_empty() => {
                lines.push(format!("{}:", label));
                flatten(bag, "", &mut lines);
            }
            _ => lines.push(format!("{}: {}", label, EMPTY_CELL)),
        }
    }

    lines.join("\n")
}

fn flatten(bag: &Attributes, prefix: &str, lines: &mut Vec<String>) {
    for (key, value) in bag {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match value {
            Value::Object(inner) => flatten(inner, &path, lines),
            Value::String(s) => lines.push(format!("  {}: {}", path, s)),
            Value::Null => lines.push(format!("  {}: {}", path, EMPTY_CELL)),
            other => lines.push(format!("  {}: {}", path, other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(id: i64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            username: name.to_lowercase(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: None,
            website: None,
            address: None,
            company: None,
            avatar: "https://i.pravatar.cc/150?img=36".to_string(),
        }
    }

    #[test]
    fn loading_hides_table() {
        let state = UsersState {
            users: vec![user(1, "Alice")],
            loading: true,
            error: None,
        };
        assert_eq!(render_list(&state), "Loading...");
    }

    #[test]
    fn error_banner_above_empty_message() {
        let state = UsersState {
            error: Some("HTTP 500".to_string()),
            ..Default::default()
        };
        assert_eq!(render_list(&state), "Error: HTTP 500\nNo users found.");
    }

    #[test]
    fn table_columns_align() {
        let mut bob = user(2, "Bob");
        bob.company = json!({"name": "Acme"}).as_object().cloned();
        let state = UsersState {
            users: vec![user(1, "Alice"), bob],
            ..Default::default()
        };
        let out = render_list(&state);
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].starts_with("ID  Name   Username"));
        assert!(lines[2].starts_with("1   Alice  alice"));
        assert!(lines[3].ends_with("Acme"));
        assert_eq!(lines.last(), Some(&"2 user(s)"));
    }

    #[test]
    fn detail_flattens_nested_bags() {
        let mut u = user(1, "Leanne");
        u.address = json!({"city": "Gwenborough", "geo": {"lat": "-37.3159"}})
            .as_object()
            .cloned();
        let out = render_detail(&u);

        assert!(out.contains("  city: Gwenborough"));
        assert!(out.contains("  geo.lat: -37.3159"));
        assert!(out.contains("Company: -"));
        assert!(out.contains("Avatar:   https://i.pravatar.cc/150?img=36"));
    }
}

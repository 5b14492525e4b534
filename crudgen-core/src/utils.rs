//! Shared string helpers.

/// Convert a string to PascalCase (e.g., "blog_post" -> "BlogPost", "order-item" -> "OrderItem")
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-', ' '])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to kebab-case (e.g., "ShopApi" -> "shop-api", "my_app" -> "my-app")
pub fn to_kebab_case(s: &str) -> String {
    let mut result = String::new();
    let mut prev_lower = false;
    for c in s.chars() {
        if c == '_' || c == ' ' || c == '-' {
            if !result.ends_with('-') && !result.is_empty() {
                result.push('-');
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower {
            result.push('-');
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        result.extend(c.to_lowercase());
    }
    result
}

//! Derived naming helpers used by renderers

/// `user_orders` -> `UserOrders`
pub fn camel_cased(input: &str) -> String {
    input
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

pub fn has_upper(input: &str) -> bool {
    input.chars().any(char::is_uppercase)
}

pub fn quoted(input: &str) -> String {
    format!("\"{}\"", input)
}

/// Naive English singular form, enough for table names
pub fn singular(input: &str) -> String {
    if let Some(stem) = input.strip_suffix("ies")
        && !stem.is_empty()
    {
        return format!("{}y", stem);
    }

    if let Some(stem) = input.strip_suffix("sses") {
        return format!("{}ss", stem);
    }

    if ["ss", "us", "is"].iter().any(|suffix| input.ends_with(suffix)) {
        return input.to_string();
    }

    match input.strip_suffix('s') {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => input.to_string(),
    }
}

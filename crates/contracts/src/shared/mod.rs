pub mod envelope;
pub mod error;

/// Turn a wire code like "sample_collected" into "Sample Collected".
///
/// Fallback for codes the enums do not know (the backend occasionally grows
/// states like "rescheduled" ahead of this client).
pub fn humanize_code(code: &str) -> String {
    code.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humanizes_snake_case_codes() {
        assert_eq!(humanize_code("sample_collected"), "Sample Collected");
        assert_eq!(humanize_code("open"), "Open");
        assert_eq!(humanize_code(""), "");
    }
}

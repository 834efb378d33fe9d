use unidecode::unidecode;

/// Folds a free-text airport name or search query into a comparable form.
pub fn clean_str(input: &str) -> String {
    unidecode(input) // Convert Unicode to ASCII
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

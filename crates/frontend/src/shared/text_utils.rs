/// Turn a snake_case category key into a human label.
/// Example: "lamination_type" -> "Lamination Type"
pub fn title_case_key(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
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
    fn snake_case_keys_become_titles() {
        assert_eq!(title_case_key("lamination_type"), "Lamination Type");
        assert_eq!(title_case_key("finish"), "Finish");
        assert_eq!(title_case_key(""), "");
    }
}

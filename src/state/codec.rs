use url::form_urlencoded;

/// Encodes one URL path component the way the console backend decodes it:
/// spaces become `+`, everything outside `[A-Za-z0-9*-._]` is `%XX`.
pub fn encode_component(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}

/// The backend reads any non-empty string as true.
pub fn python_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commas_and_spaces_are_encoded() {
        assert_eq!(encode_component("bob,ann marie"), "bob%2Cann+marie");
        assert_eq!(encode_component("é"), "%C3%A9");
    }
}

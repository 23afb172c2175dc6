use tabarnam_migrate::modules::migration::sas::stable_url;

#[test]
fn test_signed_url_is_stripped_to_its_stable_form() {
    let url = "https://cdn.example.com/logos/acme.png?sv=2022-11-02&se=2025-01-01&sig=abc%2Fdef";

    assert_eq!(
        stable_url(url).as_deref(),
        Some("https://cdn.example.com/logos/acme.png")
    );
}

#[test]
fn test_single_sas_param_is_enough() {
    let url = "https://cdn.example.com/logo.png?sig=abc";

    assert_eq!(
        stable_url(url).as_deref(),
        Some("https://cdn.example.com/logo.png")
    );
}

#[test]
fn test_unsigned_query_is_left_alone() {
    assert_eq!(stable_url("https://cdn.example.com/logo.png?width=100"), None);
}

#[test]
fn test_url_without_query_is_left_alone() {
    assert_eq!(stable_url("https://cdn.example.com/logo.png"), None);
}

#[test]
fn test_unparseable_value_is_left_alone() {
    assert_eq!(stable_url("not a url"), None);
    assert_eq!(stable_url(""), None);
}

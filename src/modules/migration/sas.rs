use url::{Position, Url};

const SAS_PARAMS: [&str; 3] = ["sv", "sig", "se"];

/// Stable form of a SAS-signed logo URL: the same URL with its query
/// string removed. `None` when the URL carries no SAS signature
/// parameters or does not parse.
pub fn stable_url(logo_url: &str) -> Option<String> {
    let parsed = Url::parse(logo_url).ok()?;

    let signed = parsed
        .query_pairs()
        .any(|(name, _)| SAS_PARAMS.contains(&name.as_ref()));
    if !signed {
        return None;
    }

    Some(parsed[..Position::AfterPath].to_string())
}

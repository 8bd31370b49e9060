use url::Url;

use crate::relay::types::Identifiers;

/// Parses `callback_url` and pulls the tenant and correlation identifiers out
/// of its path: segments at index 2 and 3 of the path split on `/` (the split
/// keeps the leading empty segment, so `/tenants/T1/corr/C1` yields tenant
/// `T1` and correlation `corr`).
///
/// Only a syntactically invalid URL is an error. A path with fewer segments
/// yields `None` for the missing identifiers.
pub fn extract_identifiers(callback_url: &str) -> Result<Identifiers, url::ParseError> {
    let parsed = Url::parse(callback_url)?;
    let segments: Vec<&str> = parsed.path().split('/').collect();

    Ok(Identifiers {
        tenant_id: segments.get(2).map(|s| s.to_string()),
        correlation_id: segments.get(3).map(|s| s.to_string()),
    })
}

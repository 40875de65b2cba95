use apz_events::LinkData;
use std::collections::BTreeMap;
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("invalid link {link:?}: {source}")]
    Invalid {
        link: String,
        #[source]
        source: url::ParseError,
    },
}

/// Split a link into its components.
///
/// Repeated query keys keep the last value.
pub fn parse_link(link: &str) -> Result<LinkData, LinkError> {
    let url = Url::parse(link).map_err(|source| LinkError::Invalid {
        link: link.to_string(),
        source,
    })?;

    let query_params: BTreeMap<String, String> = url
        .query_pairs()
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    Ok(LinkData {
        host: url.host_str().unwrap_or_default().to_string(),
        path: url.path().to_string(),
        scheme: url.scheme().to_string(),
        full_url: link.to_string(),
        query_params,
    })
}

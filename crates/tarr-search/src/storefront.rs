use url::Url;

/// Storefront search page for `name`: `<base>/?s=<name>&post_type=product`.
pub fn storefront_search_url(base_url: &str, name: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(base_url)?;
    url.query_pairs_mut()
        .clear()
        .append_pair("s", name)
        .append_pair("post_type", "product");
    Ok(url)
}

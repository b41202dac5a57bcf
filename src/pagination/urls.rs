use url::Url;
use url::form_urlencoded::Serializer;

/// Rebuild the current URL's query with `page` set to the target page.
///
/// The path and every other query parameter are kept verbatim and in
/// order. The first `page` parameter is overwritten in place (any later
/// duplicates are dropped); when the query has none, one is appended.
/// The result is `<path>?<query>`, the shape a page link navigates to.
pub fn page_href(current_url: &Url, page: usize) -> String {
    let mut query = Serializer::new(String::new());
    let mut replaced = false;

    for (key, value) in current_url.query_pairs() {
        if key == "page" {
            if !replaced {
                query.append_pair("page", &page.to_string());
                replaced = true;
            }
        } else {
            query.append_pair(&key, &value);
        }
    }
    if !replaced {
        query.append_pair("page", &page.to_string());
    }

    format!("{}?{}", current_url.path(), query.finish())
}

//! Detail-page parsing: a venue page into its postal address.

use std::sync::LazyLock;

use scraper::{Html, Selector};

static LOCATION_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".content .location").expect("invalid location selector"));

/// Extracts the venue's postal address from its detail page.
///
/// Looks for the `.location` element inside the page's `.content` region and
/// returns its trimmed text. Returns an empty string when absent — the
/// geocode step treats that as an unresolvable address and drops the record;
/// it is not a parse error.
#[must_use]
pub fn parse_detail(html: &str) -> String {
    let document = Html::parse_document(html);
    document
        .select(&LOCATION_SELECTOR)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_trimmed_address() {
        let html = r#"
            <html><body>
                <div class="content">
                    <h1>Alpha Bistro</h1>
                    <div class="location">
                        1 Main St, Chicago, IL 60602
                    </div>
                </div>
            </body></html>"#;
        assert_eq!(parse_detail(html), "1 Main St, Chicago, IL 60602");
    }

    #[test]
    fn missing_location_yields_empty_string() {
        let html = r#"<html><body><div class="content"><h1>Beta Bar</h1></div></body></html>"#;
        assert_eq!(parse_detail(html), "");
    }

    #[test]
    fn missing_content_region_yields_empty_string() {
        let html = r#"<html><body><div class="location">2 Oak Ave</div></body></html>"#;
        assert_eq!(parse_detail(html), "");
    }

    #[test]
    fn first_location_wins() {
        let html = r#"
            <div class="content">
                <span class="location">1 Main St</span>
                <span class="location">99 Other Rd</span>
            </div>"#;
        assert_eq!(parse_detail(html), "1 Main St");
    }

    #[test]
    fn nested_markup_text_is_joined() {
        let html = r#"
            <div class="content">
                <div class="location"><span>3 Elm</span> <span>Ct</span></div>
            </div>"#;
        assert_eq!(parse_detail(html), "3 Elm Ct");
    }
}

//! Listing-page parsing: the directory's sitemap page into venue candidates.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use venuemap_core::{slugify, VenueListing};

static ITEM_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#seoContainer .item").expect("invalid item selector"));
static NAME_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h2").expect("invalid name selector"));
static CATEGORY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").expect("invalid category selector"));
static LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a").expect("invalid link selector"));

/// Parses the listing page into venue candidates, in document order.
///
/// Each `.item` node inside the `#seoContainer` region yields one
/// [`VenueListing`]: the `h2` text as the name, the first `p` text as the
/// category, and the first anchor's `href` resolved against the site origin
/// derived from `listing_url`. Items without a name or link are skipped.
/// A page without the container yields an empty vec — a valid (empty) run,
/// not an error.
#[must_use]
pub fn parse_listing(html: &str, listing_url: &str) -> Vec<VenueListing> {
    let origin = site_origin(listing_url);
    let document = Html::parse_document(html);

    let mut venues = Vec::new();
    for item in document.select(&ITEM_SELECTOR) {
        let name = item
            .select(&NAME_SELECTOR)
            .next()
            .map(element_text)
            .unwrap_or_default();
        if name.is_empty() {
            tracing::debug!("skipping listing item without a name");
            continue;
        }

        let Some(href) = item
            .select(&LINK_SELECTOR)
            .next()
            .and_then(|a| a.value().attr("href"))
        else {
            tracing::debug!(name, "skipping listing item without a link");
            continue;
        };

        let category = item
            .select(&CATEGORY_SELECTOR)
            .next()
            .map(element_text)
            .unwrap_or_default();

        let slug = slugify(&name);
        venues.push(VenueListing {
            name,
            category,
            detail_url: resolve_href(&origin, href),
            slug,
        });
    }

    venues
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_owned()
}

/// Extracts the scheme+host origin from the listing URL.
///
/// Given `"https://www.example.com/discovery/sitemap/us/chicago"`, returns
/// `"https://www.example.com"`, so relative detail hrefs resolve against the
/// site root regardless of the listing page's path depth.
#[must_use]
pub fn site_origin(listing_url: &str) -> String {
    Url::parse(listing_url).map_or_else(
        |e| {
            tracing::warn!(
                listing_url,
                error = %e,
                "could not parse listing URL — falling back to string split for origin extraction"
            );
            // fallback: take "https://host" by splitting on '/' and taking first 3 parts
            listing_url
                .trim_end_matches('/')
                .splitn(4, '/')
                .take(3)
                .collect::<Vec<_>>()
                .join("/")
        },
        |u| u.origin().ascii_serialization(),
    )
}

fn resolve_href(origin: &str, href: &str) -> String {
    match Url::parse(origin).and_then(|base| base.join(href)) {
        Ok(resolved) => resolved.to_string(),
        Err(e) => {
            tracing::warn!(origin, href, error = %e, "could not resolve href; concatenating");
            format!("{origin}{href}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING_URL: &str = "https://www.theworlds50best.com/discovery/sitemap/us/chicago";

    fn listing_page(items: &str) -> String {
        format!(
            r#"<html><body>
                <div id="seoContainer"><div class="list">{items}</div></div>
            </body></html>"#
        )
    }

    #[test]
    fn parses_items_in_document_order() {
        let html = listing_page(
            r##"
            <div class="item">
                <a href="/discovery/establishments/alpha-bistro">
                    <h2>Alpha Bistro</h2>
                    <p>Restaurant</p>
                    <p>Featured</p>
                </a>
            </div>
            <div class="item">
                <a href="/discovery/establishments/beta-bar">
                    <h2>Beta Bar</h2>
                    <p>Bar</p>
                </a>
            </div>
            "##,
        );

        let venues = parse_listing(&html, LISTING_URL);
        assert_eq!(venues.len(), 2);

        assert_eq!(venues[0].name, "Alpha Bistro");
        assert_eq!(venues[0].category, "Restaurant");
        assert_eq!(
            venues[0].detail_url,
            "https://www.theworlds50best.com/discovery/establishments/alpha-bistro"
        );
        assert_eq!(venues[0].slug, "alpha-bistro");

        assert_eq!(venues[1].name, "Beta Bar");
        assert_eq!(venues[1].category, "Bar");
    }

    #[test]
    fn category_is_first_paragraph_only() {
        let html = listing_page(
            r##"
            <div class="item">
                <a href="/x"><h2>Gamma</h2><p>Cocktail Bar</p><p>Open late</p></a>
            </div>
            "##,
        );
        let venues = parse_listing(&html, LISTING_URL);
        assert_eq!(venues[0].category, "Cocktail Bar");
    }

    #[test]
    fn missing_container_yields_empty_vec() {
        let html = "<html><body><div class=\"item\"><h2>Orphan</h2></div></body></html>";
        assert!(parse_listing(html, LISTING_URL).is_empty());
    }

    #[test]
    fn empty_container_yields_empty_vec() {
        let html = listing_page("");
        assert!(parse_listing(&html, LISTING_URL).is_empty());
    }

    #[test]
    fn item_without_link_is_skipped() {
        let html = listing_page(
            r##"
            <div class="item"><h2>No Link</h2><p>Restaurant</p></div>
            <div class="item"><a href="/ok"><h2>Has Link</h2><p>Bar</p></a></div>
            "##,
        );
        let venues = parse_listing(&html, LISTING_URL);
        assert_eq!(venues.len(), 1);
        assert_eq!(venues[0].name, "Has Link");
    }

    #[test]
    fn item_without_name_is_skipped() {
        let html = listing_page(r##"<div class="item"><a href="/x"><p>Bar</p></a></div>"##);
        assert!(parse_listing(&html, LISTING_URL).is_empty());
    }

    #[test]
    fn absolute_href_is_preserved() {
        let html = listing_page(
            r##"
            <div class="item">
                <a href="https://other.example.com/venue"><h2>Delta</h2><p>Cafe</p></a>
            </div>
            "##,
        );
        let venues = parse_listing(&html, LISTING_URL);
        assert_eq!(venues[0].detail_url, "https://other.example.com/venue");
    }

    #[test]
    fn name_text_is_trimmed() {
        let html = listing_page(
            r##"<div class="item"><a href="/x"><h2>  Epsilon  </h2><p> Bar </p></a></div>"##,
        );
        let venues = parse_listing(&html, LISTING_URL);
        assert_eq!(venues[0].name, "Epsilon");
        assert_eq!(venues[0].category, "Bar");
    }

    #[test]
    fn site_origin_strips_path() {
        assert_eq!(
            site_origin("https://www.theworlds50best.com/discovery/sitemap/us/chicago"),
            "https://www.theworlds50best.com"
        );
    }

    #[test]
    fn site_origin_bare_domain() {
        assert_eq!(
            site_origin("https://www.theworlds50best.com"),
            "https://www.theworlds50best.com"
        );
    }

    #[test]
    fn site_origin_fallback_on_unparseable_input() {
        assert_eq!(site_origin("nonsense"), "nonsense");
    }
}

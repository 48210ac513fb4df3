//! Domain types shared across the scrape → geocode → export pipeline.

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// A venue discovered on the listing page, before its detail page has been
/// visited. One per listing item, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueListing {
    pub name: String,
    pub category: String,
    pub detail_url: String,
    pub slug: String,
}

/// A fully resolved venue: address scraped from the detail page and
/// coordinates returned by the geocoder. This is the unit written to the
/// output artifact — there is no partial variant. Wire keys match what the
/// map front end expects (`url`, `type`, `lat`, `lng`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    #[serde(rename = "url")]
    pub detail_url: String,
    #[serde(rename = "type")]
    pub category: String,
    pub address: String,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
    pub slug: String,
}

/// Generate a URL-safe slug from a venue name.
///
/// Lower-cases, strips accents via NFD decomposition, replaces `&` with
/// `and`, drops everything that is not ASCII alphanumeric/space/hyphen, and
/// collapses whitespace and hyphen runs into single hyphens. Deterministic:
/// two venues with the same normalized name collide to the same slug.
#[must_use]
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .replace('&', "and")
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c
            } else if c.is_whitespace() {
                '-'
            } else {
                '\0'
            }
        })
        .filter(|&c| c != '\0')
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_simple_name() {
        assert_eq!(slugify("Alpha Bistro"), "alpha-bistro");
    }

    #[test]
    fn slug_apostrophe_and_ampersand() {
        assert_eq!(slugify("Giordano's & Sons"), "giordanos-and-sons");
    }

    #[test]
    fn slug_strips_accents() {
        assert_eq!(slugify("Café São Paulo"), "cafe-sao-paulo");
    }

    #[test]
    fn slug_collapses_whitespace_runs() {
        assert_eq!(slugify("The   Purple  Pig"), "the-purple-pig");
    }

    #[test]
    fn slug_trims_leading_and_trailing_hyphens() {
        assert_eq!(slugify("  Oriole  "), "oriole");
        assert_eq!(slugify("- Smyth -"), "smyth");
    }

    #[test]
    fn slug_collapses_hyphen_runs() {
        assert_eq!(slugify("El -- Ideas"), "el-ideas");
    }

    #[test]
    fn slug_empty_after_normalization() {
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn slug_is_deterministic() {
        assert_eq!(slugify("Kasama"), slugify("Kasama"));
    }

    #[test]
    fn place_wire_keys() {
        let place = Place {
            name: "Alpha Bistro".to_owned(),
            detail_url: "https://example.com/alpha".to_owned(),
            category: "Restaurant".to_owned(),
            address: "1 Main St".to_owned(),
            latitude: 41.88,
            longitude: -87.63,
            slug: "alpha-bistro".to_owned(),
        };
        let json = serde_json::to_value(&place).unwrap();
        assert_eq!(json["name"], "Alpha Bistro");
        assert_eq!(json["url"], "https://example.com/alpha");
        assert_eq!(json["type"], "Restaurant");
        assert_eq!(json["address"], "1 Main St");
        assert_eq!(json["lat"], 41.88);
        assert_eq!(json["lng"], -87.63);
        assert_eq!(json["slug"], "alpha-bistro");
    }

    #[test]
    fn place_round_trips_through_wire_names() {
        let json = r#"{
            "name": "Beta Bar",
            "url": "https://example.com/beta",
            "type": "Bar",
            "address": "2 Oak Ave",
            "lat": 41.9,
            "lng": -87.6,
            "slug": "beta-bar"
        }"#;
        let place: Place = serde_json::from_str(json).unwrap();
        assert_eq!(place.detail_url, "https://example.com/beta");
        assert_eq!(place.category, "Bar");
        assert_eq!(place.latitude, 41.9);
    }
}

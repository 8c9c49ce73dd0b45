//! URL query-string codec for shareable filtered views.
//!
//! Decoding is total: missing or malformed parameters fall back to their
//! defaults. Encoding emits a parameter only when its dimension is active,
//! so an unfiltered view has an empty query string.

use super::{FilterOptions, PriceRange, StockStatus};
use url::form_urlencoded;

pub const SEARCH_KEY: &str = "search";
pub const MIN_PRICE_KEY: &str = "minPrice";
pub const MAX_PRICE_KEY: &str = "maxPrice";
pub const STOCK_KEY: &str = "stock";
pub const CATEGORIES_KEY: &str = "categories";
pub const SUBCATEGORIES_KEY: &str = "subcategories";

/// Separator for multi-valued selections.
pub const LIST_SEPARATOR: &str = ",";

/// Bidirectional mapping between [`FilterOptions`] and a query string.
///
/// The codec's price bounds are the defaults for `minPrice`/`maxPrice` and
/// the range every decoded price is clamped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UrlCodec {
    bounds: PriceRange,
}

/// First occurrence of each recognised key.
#[derive(Default)]
struct RawParams {
    search: Option<String>,
    min_price: Option<String>,
    max_price: Option<String>,
    stock: Option<String>,
    categories: Option<String>,
    subcategories: Option<String>,
}

impl RawParams {
    fn parse(query: &str) -> Self {
        let mut raw = RawParams::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = match &*key {
                SEARCH_KEY => &mut raw.search,
                MIN_PRICE_KEY => &mut raw.min_price,
                MAX_PRICE_KEY => &mut raw.max_price,
                STOCK_KEY => &mut raw.stock,
                CATEGORIES_KEY => &mut raw.categories,
                SUBCATEGORIES_KEY => &mut raw.subcategories,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        raw
    }
}

impl UrlCodec {
    /// Create a codec over custom price bounds.
    pub fn new(bounds: PriceRange) -> Self {
        Self { bounds }
    }

    /// The default price range of decoded filters.
    pub fn bounds(&self) -> &PriceRange {
        &self.bounds
    }

    /// Decode a query string, with or without its leading `?`.
    pub fn decode(&self, query: &str) -> FilterOptions {
        let query = query.strip_prefix('?').unwrap_or(query);
        let raw = RawParams::parse(query);

        let min = raw
            .min_price
            .as_deref()
            .and_then(|value| parse_price(MIN_PRICE_KEY, value))
            .unwrap_or(self.bounds.min());
        let max = raw
            .max_price
            .as_deref()
            .and_then(|value| parse_price(MAX_PRICE_KEY, value))
            .unwrap_or(self.bounds.max());

        let (min, max) = (
            min.clamp(self.bounds.min(), self.bounds.max()),
            max.clamp(self.bounds.min(), self.bounds.max()),
        );
        if min > max {
            tracing::debug!(min, max, "swapping inverted price bounds from query string");
        }

        let stock_status = match raw.stock.as_deref() {
            None => StockStatus::All,
            Some(value) => value.parse().unwrap_or_else(|_| {
                tracing::debug!(value, "ignoring unknown stock parameter");
                StockStatus::All
            }),
        };

        FilterOptions {
            search: raw.search.unwrap_or_default(),
            price_range: PriceRange::ordered(min, max),
            stock_status,
            categories: split_list(raw.categories.as_deref()),
            subcategories: split_list(raw.subcategories.as_deref()),
        }
    }

    /// The parameters `encode` would emit, in emission order.
    ///
    /// `search` is emitted as typed whenever it is non-empty, so a
    /// whitespace-only search stays in the URL although it is not counted
    /// as an active filter and the header offers no reset for it.
    pub fn encode_pairs(&self, filters: &FilterOptions) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if !filters.search.is_empty() {
            pairs.push((SEARCH_KEY, filters.search.clone()));
        }
        if filters.price_range.min() > self.bounds.min() {
            pairs.push((MIN_PRICE_KEY, filters.price_range.min().to_string()));
        }
        if filters.price_range.max() < self.bounds.max() {
            pairs.push((MAX_PRICE_KEY, filters.price_range.max().to_string()));
        }
        if filters.stock_status != StockStatus::All {
            pairs.push((STOCK_KEY, filters.stock_status.as_str().to_string()));
        }
        if !filters.categories.is_empty() {
            pairs.push((CATEGORIES_KEY, join_list(&filters.categories)));
        }
        if !filters.subcategories.is_empty() {
            pairs.push((SUBCATEGORIES_KEY, join_list(&filters.subcategories)));
        }

        pairs
    }

    /// Encode into a query string without the leading `?`.
    ///
    /// The result replaces the whole query; nothing from a previous state
    /// survives.
    pub fn encode(&self, filters: &FilterOptions) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.encode_pairs(filters) {
            serializer.append_pair(key, &value);
        }
        serializer.finish()
    }

    /// Build a link to `path` carrying the encoded filters.
    pub fn href(&self, path: &str, filters: &FilterOptions) -> String {
        let query = self.encode(filters);
        if query.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, query)
        }
    }
}

/// Decode with the standard `0..=10000` price bounds.
pub fn decode(query: &str) -> FilterOptions {
    UrlCodec::default().decode(query)
}

/// Encode with the standard `0..=10000` price bounds.
pub fn encode(filters: &FilterOptions) -> String {
    UrlCodec::default().encode(filters)
}

/// Parse a price parameter; `None` for anything that is not a finite,
/// non-negative number.
fn parse_price(key: &str, value: &str) -> Option<u32> {
    match value.trim().parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => {
            Some(price.round().min(f64::from(u32::MAX)) as u32)
        }
        _ => {
            tracing::debug!(key, value, "ignoring malformed price parameter");
            None
        }
    }
}

fn split_list<T>(value: Option<&str>) -> Vec<T>
where
    T: for<'a> From<&'a str> + PartialEq,
{
    let mut ids: Vec<T> = Vec::new();
    for piece in value.unwrap_or_default().split(LIST_SEPARATOR) {
        if piece.is_empty() {
            continue;
        }
        let id = T::from(piece);
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}

/// Whether `id` survives a trip through a comma-joined list parameter.
pub(crate) fn is_list_value(id: &str) -> bool {
    !id.is_empty() && !id.contains(LIST_SEPARATOR)
}

fn join_list<T: AsRef<str>>(ids: &[T]) -> String {
    ids.iter()
        .map(|id| id.as_ref())
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{CategoryId, SubcategoryId};

    #[test]
    fn test_empty_query_decodes_to_defaults() {
        assert_eq!(decode(""), FilterOptions::default());
        assert_eq!(decode("?"), FilterOptions::default());
    }

    #[test]
    fn test_leading_question_mark_is_ignored() {
        assert_eq!(decode("?search=tv").search, "tv");
    }

    #[test]
    fn test_percent_encoded_search() {
        let filters = decode("search=red+shoes%20%26+socks");
        assert_eq!(filters.search, "red shoes & socks");
        assert_eq!(encode(&filters), "search=red+shoes+%26+socks");
    }

    #[test]
    fn test_whitespace_search_is_encoded_but_inactive() {
        let filters = FilterOptions::default().with_search("   ");
        assert_eq!(encode(&filters), "search=+++");
        assert_eq!(decode("search=+++"), filters);
        assert_eq!(crate::filter::count_active_filters(&filters, &PriceRange::DEFAULT), 0);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let filters = decode("stock=in-stock&stock=out-of-stock&search=a&search=b");
        assert_eq!(filters.stock_status, StockStatus::InStock);
        assert_eq!(filters.search, "a");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        assert_eq!(decode("page=2&sort=price_asc"), FilterOptions::default());
    }

    #[test]
    fn test_malformed_prices_fall_back() {
        for value in ["abc", "", "-5", "NaN", "inf", "1e400"] {
            let filters = decode(&format!("minPrice={}&maxPrice={}", value, value));
            assert_eq!(filters.price_range, PriceRange::DEFAULT, "value {:?}", value);
        }
    }

    #[test]
    fn test_fractional_prices_round() {
        let filters = decode("minPrice=99.6&maxPrice=200.4");
        assert_eq!(filters.price_range, PriceRange::new(100, 200).unwrap());
    }

    #[test]
    fn test_prices_clamp_into_bounds() {
        let filters = decode("maxPrice=25000");
        assert_eq!(filters.price_range, PriceRange::DEFAULT);
        assert_eq!(encode(&filters), "");
    }

    #[test]
    fn test_inverted_prices_are_swapped() {
        let filters = decode("minPrice=3000&maxPrice=1000");
        assert_eq!(filters.price_range, PriceRange::new(1000, 3000).unwrap());
    }

    #[test]
    fn test_min_above_default_max_is_swapped_with_clamped_max() {
        let filters = decode("minPrice=12000&maxPrice=4000");
        assert_eq!(filters.price_range, PriceRange::new(4000, 10_000).unwrap());
    }

    #[test]
    fn test_invalid_stock_falls_back() {
        assert_eq!(decode("stock=sold-out").stock_status, StockStatus::All);
        assert_eq!(decode("stock=IN-STOCK").stock_status, StockStatus::All);
    }

    #[test]
    fn test_lists_drop_empty_and_duplicate_pieces() {
        let filters = decode("categories=c1,,c2,c1,&subcategories=,");
        assert_eq!(filters.categories, vec![CategoryId::new("c1"), CategoryId::new("c2")]);
        assert!(filters.subcategories.is_empty());
    }

    #[test]
    fn test_encode_defaults_is_empty() {
        assert_eq!(encode(&FilterOptions::default()), "");
    }

    #[test]
    fn test_encode_joins_lists() {
        let filters = FilterOptions::default()
            .with_category("c1")
            .with_category("c2")
            .with_subcategory(SubcategoryId::new("s1"));
        assert_eq!(encode(&filters), "categories=c1%2Cc2&subcategories=s1");
        assert_eq!(decode(&encode(&filters)), filters);
    }

    #[test]
    fn test_encode_key_order() {
        let filters = FilterOptions::default()
            .with_subcategory("s")
            .with_category("c")
            .with_stock_status(StockStatus::OutOfStock)
            .with_price_range(PriceRange::new(1, 2).unwrap())
            .with_search("q");
        let keys: Vec<_> = UrlCodec::default()
            .encode_pairs(&filters)
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        assert_eq!(
            keys,
            vec![SEARCH_KEY, MIN_PRICE_KEY, MAX_PRICE_KEY, STOCK_KEY, CATEGORIES_KEY, SUBCATEGORIES_KEY]
        );
    }

    #[test]
    fn test_custom_bounds() {
        let codec = UrlCodec::new(PriceRange::new(100, 500).unwrap());
        let filters = codec.decode("");
        assert_eq!(filters.price_range, *codec.bounds());
        assert_eq!(codec.encode(&filters), "");
        assert_eq!(codec.decode("minPrice=50").price_range.min(), 100);
    }

    #[test]
    fn test_href() {
        let codec = UrlCodec::default();
        assert_eq!(codec.href("/products", &FilterOptions::default()), "/products");
        let filters = FilterOptions::default().with_search("tv");
        assert_eq!(codec.href("/products", &filters), "/products?search=tv");
    }
}

use contactdesk_models::pagination::{Pagination, PaginationLimit, PaginationPage};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub mod contact;

/// Page selection of a listing. Invalid values are clamped instead of
/// rejected.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ApiPaginationQuery {
    /// Page number, starting at 1 (default: 1)
    #[schemars(with = "Option<u64>")]
    pub page: Option<String>,
    /// Number of items per page, between 1 and 100 (default: 20)
    #[schemars(with = "Option<u64>")]
    pub limit: Option<String>,
}

impl ApiPaginationQuery {
    /// Collects the pagination parameters from decoded query pairs. If a
    /// parameter is repeated, the last occurrence wins.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        pairs
            .into_iter()
            .fold(Self::default(), |mut query, (key, value)| {
                match key.as_str() {
                    "page" => query.page = Some(value),
                    "limit" => query.limit = Some(value),
                    _ => {}
                }
                query
            })
    }
}

impl From<ApiPaginationQuery> for Pagination {
    fn from(value: ApiPaginationQuery) -> Self {
        Self {
            page: value
                .page
                .map(|x| PaginationPage::new(parse_int(&x)))
                .unwrap_or_default(),
            limit: value
                .limit
                .map(|x| PaginationLimit::new(parse_int(&x)))
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct ApiPaginationMeta {
    /// The current page
    pub page: u64,
    /// The number of items per page
    pub limit: u64,
    /// The total number of items
    pub total: u64,
    /// The number of pages, at least 1
    pub pages: u64,
}

/// Reads `s` like an integer cast: leading whitespace is skipped and the
/// longest numeric prefix (optionally with a fraction or an exponent) is
/// truncated towards zero. Anything else is 0. Out of range values saturate.
fn parse_int(s: &str) -> i64 {
    let s = s.trim_start();
    let end = s
        .find(|c: char| !matches!(c, '0'..='9' | '+' | '-' | '.' | 'e' | 'E'))
        .unwrap_or(s.len());
    let candidate = &s[..end];

    let number = (1..=candidate.len())
        .rev()
        .map(|n| &candidate[..n])
        .find(|x| x.parse::<f64>().is_ok());

    match number {
        Some(n) if n.contains(['.', 'e', 'E']) => n.parse::<f64>().map_or(0, |x| x as i64),
        Some(n) => parse_integer(n),
        None => 0,
    }
}

fn parse_integer(s: &str) -> i64 {
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });

    if negative {
        magnitude.saturating_neg()
    } else {
        magnitude
    }
}

//! radiko areas (prefectures) and current-area lookup.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::api::client::HttpClient;
use crate::api::types::HttpRequest;
use crate::error::{Error, Result};

/// Page reporting the area the caller's IP address belongs to.
const AREA_URL: &str = "https://api.radiko.jp/apparea/area";

/// Prefectures radiko uses as broadcast areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AreaPrefecture {
    Hokkaido,
    Aomori,
    Iwate,
    Miyagi,
    Akita,
    Yamagata,
    Fukushima,
    Ibaraki,
    Tochigi,
    Gunma,
    Saitama,
    Chiba,
    Tokyo,
    Kanagawa,
    Niigata,
    Toyama,
    Ishikawa,
    Fukui,
    Yamanashi,
    Nagano,
    Gifu,
    Shizuoka,
    Aichi,
    Mie,
    Shiga,
    Kyoto,
    Osaka,
    Hyogo,
    Nara,
    Wakayama,
    Tottori,
    Shimane,
    Okayama,
    Hiroshima,
    Yamaguchi,
    Tokushima,
    Kagawa,
    Ehime,
    Kouchi,
    Fukuoka,
    Saga,
    Nagasaki,
    Kumamoto,
    Oita,
    Miyazaki,
    Kagoshima,
    Okinawa,
}

impl AreaPrefecture {
    /// All prefectures in area id order (JP1..JP47).
    pub const ALL: [AreaPrefecture; 47] = [
        Self::Hokkaido,
        Self::Aomori,
        Self::Iwate,
        Self::Miyagi,
        Self::Akita,
        Self::Yamagata,
        Self::Fukushima,
        Self::Ibaraki,
        Self::Tochigi,
        Self::Gunma,
        Self::Saitama,
        Self::Chiba,
        Self::Tokyo,
        Self::Kanagawa,
        Self::Niigata,
        Self::Toyama,
        Self::Ishikawa,
        Self::Fukui,
        Self::Yamanashi,
        Self::Nagano,
        Self::Gifu,
        Self::Shizuoka,
        Self::Aichi,
        Self::Mie,
        Self::Shiga,
        Self::Kyoto,
        Self::Osaka,
        Self::Hyogo,
        Self::Nara,
        Self::Wakayama,
        Self::Tottori,
        Self::Shimane,
        Self::Okayama,
        Self::Hiroshima,
        Self::Yamaguchi,
        Self::Tokushima,
        Self::Kagawa,
        Self::Ehime,
        Self::Kouchi,
        Self::Fukuoka,
        Self::Saga,
        Self::Nagasaki,
        Self::Kumamoto,
        Self::Oita,
        Self::Miyazaki,
        Self::Kagoshima,
        Self::Okinawa,
    ];

    /// The radiko area id, e.g. `JP13`.
    pub fn area_id(&self) -> String {
        format!("JP{}", self.number())
    }

    /// Prefecture name in kanji.
    pub fn kanji_name(&self) -> &'static str {
        const NAMES: [&str; 47] = [
            "北海道", "青森", "岩手", "宮城", "秋田", "山形", "福島", "茨城", "栃木", "群馬",
            "埼玉", "千葉", "東京", "神奈川", "新潟", "富山", "石川", "福井", "山梨", "長野",
            "岐阜", "静岡", "愛知", "三重", "滋賀", "京都", "大阪", "兵庫", "奈良", "和歌山",
            "鳥取", "島根", "岡山", "広島", "山口", "徳島", "香川", "愛媛", "高知", "福岡",
            "佐賀", "長崎", "熊本", "大分", "宮崎", "鹿児島", "沖縄",
        ];
        NAMES[self.number() - 1]
    }

    /// Look up a prefecture by its area id. Matching is exact.
    pub fn from_area_id(area_id: &str) -> Option<Self> {
        let number: usize = area_id.strip_prefix("JP")?.parse().ok()?;
        // Reject forms like "JP013" that parse to a valid number.
        if format!("JP{}", number) != area_id {
            return None;
        }
        Self::ALL.get(number.checked_sub(1)?).copied()
    }

    fn number(&self) -> usize {
        *self as usize + 1
    }
}

impl fmt::Display for AreaPrefecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.kanji_name(), self.area_id())
    }
}

/// Resolve an area id or fail with a response error.
pub fn resolve_area(area_id: &str) -> Result<AreaPrefecture> {
    AreaPrefecture::from_area_id(area_id).ok_or_else(|| Error::response("unknown area_id"))
}

/// Looks up the area radiko assigns to this client.
pub struct AreaService {
    client: Arc<dyn HttpClient>,
}

impl AreaService {
    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self { client }
    }

    /// Fetch the current area from the apparea page.
    pub async fn current_area(&self) -> Result<AreaPrefecture> {
        tracing::debug!("GET {}", AREA_URL);
        let response = self.client.get(&HttpRequest::new(AREA_URL)).await?;
        let body = response.validated_body()?;
        tracing::debug!("Area response: {}", body);

        let area = parse_area_page(body)?;
        tracing::debug!("Current area: {}", area.area_id());
        Ok(area)
    }
}

/// Extract the area from the first `<span>` element's class attribute.
fn parse_area_page(body: &str) -> Result<AreaPrefecture> {
    let span_pattern = Regex::new(r"(?i)<span\b([^>]*)>").expect("valid span regex");
    let class_pattern =
        Regex::new(r#"(?i)\bclass\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("valid class regex");

    let attributes = span_pattern
        .captures(body)
        .and_then(|c| c.get(1))
        .ok_or_else(|| Error::response("<span> does not exist"))?
        .as_str();

    let area_id = class_pattern
        .captures(attributes)
        .and_then(|c| c.get(1).or_else(|| c.get(2)))
        .map(|m| m.as_str().trim())
        .unwrap_or("");

    if area_id.is_empty() {
        return Err(Error::response("class attribute of <span> does not exist"));
    }

    resolve_area(area_id)
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const DEFAULT_MIN_DIST: i32 = 0;
pub const DEFAULT_MAX_DIST: i32 = 15000;

/// 查询串原样反序列化的过滤参数，全部是可选字符串
#[derive(Debug, Default, Deserialize)]
pub struct RouteFilterParams {
    pub airline: Option<String>,
    pub departure: Option<String>,
    pub arrival: Option<String>,
    pub aircraft: Option<String>,
    #[serde(rename = "minDist")]
    pub min_dist: Option<String>,
    #[serde(rename = "maxDist")]
    pub max_dist: Option<String>,
    pub codeshares: Option<String>,
}

/// 校验后的航线过滤条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteFilter {
    pub airline: Option<String>,
    pub departure: Option<String>,
    pub arrival: Option<String>,
    pub aircraft: Option<String>,
    pub min_dist: i32,
    pub max_dist: i32,
    pub codeshares: bool,
}

impl Default for RouteFilter {
    fn default() -> Self {
        Self {
            airline: None,
            departure: None,
            arrival: None,
            aircraft: None,
            min_dist: DEFAULT_MIN_DIST,
            max_dist: DEFAULT_MAX_DIST,
            codeshares: false,
        }
    }
}

impl From<RouteFilterParams> for RouteFilter {
    fn from(p: RouteFilterParams) -> Self {
        Self {
            airline: non_empty(p.airline),
            departure: non_empty(p.departure),
            arrival: non_empty(p.arrival),
            aircraft: non_empty(p.aircraft),
            min_dist: parse_dist(p.min_dist.as_deref(), DEFAULT_MIN_DIST),
            max_dist: parse_dist(p.max_dist.as_deref(), DEFAULT_MAX_DIST),
            codeshares: p.codeshares.as_deref() == Some("true"),
        }
    }
}

// 空串等同于未指定
fn non_empty(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

// 只取开头的整数部分（"12.5" -> 12, "100km" -> 100）；没有前导整数时回落到默认值
fn parse_dist(raw: Option<&str>, default: i32) -> i32 {
    raw.and_then(leading_int).unwrap_or(default)
}

fn leading_int(s: &str) -> Option<i32> {
    let s = s.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign_len..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    // 超出 i32 范围同样视为无效
    s[..sign_len + digits].parse().ok()
}

/// 主查询返回的一行航线记录
#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
pub struct RouteRecord {
    pub route_id: i64,
    pub airline_id: i64,
    pub airline_name: String,
    pub airline_alliance: Option<String>,
    pub departure: String,
    pub arrival: String,
    pub distance: Decimal,
    pub aircraft_type: String,
    #[sqlx(skip)]
    pub codeshares: Vec<String>,
}

/// 批量联盟查询的结果：(联盟, 航司 ID, 航司名)
#[derive(Debug, Clone, FromRow, PartialEq)]
pub struct AllianceMember {
    pub alliance: String,
    pub airline_id: i64,
    pub airline_name: String,
}

#[derive(Debug, Serialize)]
pub struct RoutesPage {
    pub routes: Vec<RouteRecord>,
}

use crate::models::route::RouteFilter;

const BASE_SELECT: &str = "SELECT r.route_id::INT8 AS route_id, a.airline_id::INT8 AS airline_id, \
a.airline_name, a.airline_alliance, ap1.icao_code AS departure, ap2.icao_code AS arrival, \
r.distance::NUMERIC AS distance, ar.aircraft_type \
FROM Airlines a \
JOIN AirlineRoutes alr ON a.airline_id = alr.airline_id \
JOIN Routes r ON alr.route_id = r.route_id \
JOIN Airports ap1 ON r.origin_airport_id = ap1.airport_id \
JOIN Airports ap2 ON r.destination_airport_id = ap2.airport_id \
JOIN AircraftOnRoutes ar ON alr.airline_route_id = ar.airline_route_id \
WHERE r.distance BETWEEN $1 AND $2";

const ORDER_BY: &str = " ORDER BY r.route_id, a.airline_id, ar.aircraft_type";

/// 联盟成员的批量查询，$1 为联盟名数组
pub const ALLIANCE_MEMBERS_SQL: &str = "SELECT airline_alliance AS alliance, \
airline_id::INT8 AS airline_id, airline_name \
FROM Airlines WHERE airline_alliance = ANY($1) ORDER BY airline_alliance, airline_name";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
    Int(i32),
    Text(String),
}

/// 编译后的查询：SQL 文本与按位置排列的绑定值
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledQuery {
    pub sql: String,
    pub binds: Vec<BindValue>,
}

#[derive(Debug, Clone, Copy)]
enum Match {
    Substring,
    Exact,
}

/// 可选过滤子句，顺序固定：airline -> departure -> arrival -> aircraft
const CLAUSES: [(&str, Match); 4] = [
    ("a.airline_name", Match::Substring),
    ("ap1.icao_code", Match::Substring),
    ("ap2.icao_code", Match::Substring),
    ("ar.aircraft_type", Match::Exact),
];

/// 把过滤条件编译成参数化 SQL。
/// 用户输入只会出现在 binds 里，不进入 SQL 文本。
pub fn compile(filter: &RouteFilter) -> CompiledQuery {
    let mut sql = String::from(BASE_SELECT);
    let mut binds = vec![BindValue::Int(filter.min_dist), BindValue::Int(filter.max_dist)];

    let values = [
        filter.airline.as_deref(),
        filter.departure.as_deref(),
        filter.arrival.as_deref(),
        filter.aircraft.as_deref(),
    ];

    for ((column, kind), value) in CLAUSES.iter().zip(values) {
        let Some(value) = value else { continue };
        let idx = binds.len() + 1;
        match kind {
            Match::Substring => {
                sql.push_str(&format!(" AND {column} ILIKE ${idx}"));
                binds.push(BindValue::Text(format!("%{}%", escape_like(value))));
            }
            Match::Exact => {
                sql.push_str(&format!(" AND {column} = ${idx}"));
                binds.push(BindValue::Text(value.to_string()));
            }
        }
    }

    sql.push_str(ORDER_BY);
    CompiledQuery { sql, binds }
}

// LIKE 的通配符按字面量匹配（Postgres 默认转义符为反斜杠）
fn escape_like(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

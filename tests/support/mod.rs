#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body, Bytes},
    http::{Request, StatusCode},
    Router,
};
use rust_decimal::Decimal;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

use route_match::api::create_router;
use route_match::ax_state::AppState;
use route_match::infra::route_store::{QueryError, RouteStore};
use route_match::infra::timezone_client::TimezoneClient;
use route_match::models::route::{AllianceMember, RouteFilter, RouteRecord};

pub struct Airline {
    pub id: i64,
    pub name: &'static str,
    pub alliance: Option<&'static str>,
}

pub const AIRLINES: &[Airline] = &[
    Airline { id: 1, name: "British Airways", alliance: Some("oneworld") },
    Airline { id: 2, name: "American Airlines", alliance: Some("oneworld") },
    Airline { id: 3, name: "Iberia", alliance: Some("oneworld") },
    Airline { id: 4, name: "Delta Air Lines", alliance: Some("SkyTeam") },
    Airline { id: 5, name: "Air France", alliance: Some("SkyTeam") },
    Airline { id: 6, name: "Ryanair", alliance: None },
];

/// (route_id, airline_id, departure, arrival, distance, aircraft)
const ROUTES: &[(i64, i64, &str, &str, i64, &str)] = &[
    (1, 1, "EGLL", "KJFK", 5540, "B77W"),
    (2, 2, "KJFK", "EGLL", 5540, "B77W"),
    (3, 3, "LEMD", "EGLL", 1250, "A320"),
    (4, 4, "KATL", "LFPG", 7050, "A359"),
    (5, 5, "LFPG", "KJFK", 5830, "A359"),
    (6, 6, "EIDW", "EGSS", 470, "B738"),
    (7, 1, "EGLL", "YSSY", 17020, "A388"),
];

fn airline(id: i64) -> &'static Airline {
    AIRLINES.iter().find(|a| a.id == id).expect("unknown airline")
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// 内存版航线库，按与 SQL 相同的语义过滤
#[derive(Default)]
pub struct InMemoryRouteStore {
    pub route_queries: AtomicUsize,
    pub alliance_queries: AtomicUsize,
    pub fail: bool,
    pub delay: Option<Duration>,
}

impl InMemoryRouteStore {
    pub fn failing() -> Self {
        Self { fail: true, ..Default::default() }
    }

    pub fn slow(delay: Duration) -> Self {
        Self { delay: Some(delay), ..Default::default() }
    }
}

#[async_trait]
impl RouteStore for InMemoryRouteStore {
    async fn fetch_routes(&self, filter: &RouteFilter) -> Result<Vec<RouteRecord>, QueryError> {
        self.route_queries.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            return Err(QueryError::Database(sqlx::Error::PoolClosed));
        }

        let min = Decimal::from(filter.min_dist);
        let max = Decimal::from(filter.max_dist);
        let rows = ROUTES
            .iter()
            .map(|&(route_id, airline_id, dep, arr, dist, aircraft)| {
                let a = airline(airline_id);
                RouteRecord {
                    route_id,
                    airline_id,
                    airline_name: a.name.to_string(),
                    airline_alliance: a.alliance.map(str::to_string),
                    departure: dep.to_string(),
                    arrival: arr.to_string(),
                    distance: Decimal::from(dist),
                    aircraft_type: aircraft.to_string(),
                    codeshares: vec![],
                }
            })
            .filter(|r| r.distance >= min && r.distance <= max)
            .filter(|r| filter.airline.as_deref().map_or(true, |v| contains_ci(&r.airline_name, v)))
            .filter(|r| filter.departure.as_deref().map_or(true, |v| contains_ci(&r.departure, v)))
            .filter(|r| filter.arrival.as_deref().map_or(true, |v| contains_ci(&r.arrival, v)))
            .filter(|r| filter.aircraft.as_deref().map_or(true, |v| r.aircraft_type == v))
            .collect();
        Ok(rows)
    }

    async fn fetch_alliance_members(
        &self,
        alliances: &[String],
    ) -> Result<Vec<AllianceMember>, QueryError> {
        self.alliance_queries.fetch_add(1, Ordering::SeqCst);
        Ok(AIRLINES
            .iter()
            .filter_map(|a| {
                let alliance = a.alliance?;
                alliances.iter().any(|x| x == alliance).then(|| AllianceMember {
                    alliance: alliance.to_string(),
                    airline_id: a.id,
                    airline_name: a.name.to_string(),
                })
            })
            .collect())
    }
}

pub fn timezone_client(base_url: &str) -> TimezoneClient {
    TimezoneClient::new(base_url, "test-key".to_string(), Duration::from_secs(5)).expect("client")
}

pub fn app_with(
    store: Arc<InMemoryRouteStore>,
    timezone_base: &str,
    db_timeout: Duration,
) -> Router {
    let state = Arc::new(AppState {
        routes: store,
        timezone: timezone_client(timezone_base),
        db_timeout,
    });
    create_router(state)
}

pub fn app(store: Arc<InMemoryRouteStore>) -> Router {
    app_with(store, "http://127.0.0.1:9", Duration::from_secs(5))
}

pub async fn get_raw(app: Router, uri: &str) -> (StatusCode, Bytes) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, to_bytes(response.into_body(), usize::MAX).await.unwrap())
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, bytes) = get_raw(app, uri).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

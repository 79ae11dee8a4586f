use std::collections::{BTreeSet, HashMap};

use crate::models::route::{AllianceMember, RouteRecord};

/// 主结果集中出现过的联盟（去重、有序）
pub fn distinct_alliances(rows: &[RouteRecord]) -> Vec<String> {
    rows.iter()
        .filter_map(|r| r.airline_alliance.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// 按联盟分组后回填每行的代码共享航司，排除本行航司自身
pub fn attach_codeshares(rows: &mut [RouteRecord], members: &[AllianceMember]) {
    let mut by_alliance: HashMap<&str, Vec<&AllianceMember>> = HashMap::new();
    for m in members {
        by_alliance.entry(m.alliance.as_str()).or_default().push(m);
    }

    for row in rows.iter_mut() {
        row.codeshares = match row.airline_alliance.as_deref() {
            Some(alliance) => by_alliance
                .get(alliance)
                .map(|partners| {
                    partners
                        .iter()
                        .filter(|m| m.airline_id != row.airline_id)
                        .map(|m| m.airline_name.clone())
                        .collect()
                })
                .unwrap_or_default(),
            None => Vec::new(),
        };
    }
}

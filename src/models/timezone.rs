use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct TimezoneQuery {
    pub lat: Option<String>,
    pub lng: Option<String>,
}

impl TimezoneQuery {
    /// 两个坐标都存在且非空时返回 (lat, lng)
    pub fn coordinates(&self) -> Option<(&str, &str)> {
        let lat = self.lat.as_deref().filter(|s| !s.is_empty())?;
        let lng = self.lng.as_deref().filter(|s| !s.is_empty())?;
        Some((lat, lng))
    }
}

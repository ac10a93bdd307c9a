use core::team::MarketSize;
use serde::Deserialize;

const STATIC_FRANCHISES_JSON: &str = include_str!("../data/franchises.json");

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FranchiseEntity {
    pub id: u32,
    pub city: String,
    pub nickname: String,
    pub market_size: MarketSize,
    pub roster_strength: i32,
}

impl FranchiseEntity {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.city, self.nickname)
    }
}

pub struct FranchiseLoader;

impl FranchiseLoader {
    pub fn load() -> Result<Vec<FranchiseEntity>, serde_json::Error> {
        serde_json::from_str(STATIC_FRANCHISES_JSON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_embedded_franchises_load() {
        let franchises = FranchiseLoader::load().unwrap();

        assert_eq!(franchises.len(), 32);

        let ids: HashSet<u32> = franchises.iter().map(|f| f.id).collect();
        assert_eq!(ids.len(), franchises.len());
        assert!(franchises.iter().all(|f| (0..=100).contains(&f.roster_strength)));
    }
}

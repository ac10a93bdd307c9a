use core::ownership::OwnerNamePool;
use serde::Deserialize;

const STATIC_NAMES_JSON: &str = include_str!("../data/names.json");

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerNamesEntity {
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
}

impl OwnerNamesEntity {
    pub fn to_pool(&self) -> OwnerNamePool {
        OwnerNamePool::new(self.first_names.clone(), self.last_names.clone())
    }
}

pub struct OwnerNamesLoader;

impl OwnerNamesLoader {
    pub fn load() -> Result<OwnerNamesEntity, serde_json::Error> {
        serde_json::from_str(STATIC_NAMES_JSON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_names_load() {
        let names = OwnerNamesLoader::load().unwrap();

        assert!(!names.first_names.is_empty());
        assert!(!names.last_names.is_empty());
    }
}

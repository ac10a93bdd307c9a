mod generators;
mod loaders;

pub use generators::*;
pub use loaders::*;

pub struct DatabaseEntity {
    pub franchises: Vec<FranchiseEntity>,
    pub names: OwnerNamesEntity,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load() -> Result<DatabaseEntity, serde_json::Error> {
        Ok(DatabaseEntity {
            franchises: FranchiseLoader::load()?,
            names: OwnerNamesLoader::load()?,
        })
    }
}

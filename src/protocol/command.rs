#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ping,
    CatalogList,
    CatalogLoad,
    CatalogReset,
    ResolveName,
    DecorateBuildings,
    BuildingsFetch,
    BuildingDetail,
    AssetVariants,
    MachinesStats,
    Unknown,
}

impl From<&str> for Command {
    fn from(s: &str) -> Self {
        match s {
            "ping" => Command::Ping,
            "catalog.list" => Command::CatalogList,
            "catalog.load" => Command::CatalogLoad,
            "catalog.reset" => Command::CatalogReset,
            "resolve_name" => Command::ResolveName,
            "decorate_buildings" => Command::DecorateBuildings,
            "buildings.fetch" => Command::BuildingsFetch,
            "building.detail" => Command::BuildingDetail,
            "asset.variants" => Command::AssetVariants,
            "machines.stats" => Command::MachinesStats,
            _ => Command::Unknown,
        }
    }
}

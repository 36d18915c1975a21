use crate::model::catalog::CatalogEntry;

const DORMS: &[(&str, &str)] = &[
    ("Archer House", "/src/images/dorms/archer1-big.jpg"),
    ("Baker Hall East", "/src/images/dorms/bakereast1-big.jpg"),
    ("Baker Hall West", "/src/images/dorms/bakerwest-big.jpg"),
    ("Barrett House", "/src/images/dorms/barrett-big.jpg"),
    ("Blackburn House", "/src/images/dorms/blackburn-house-big.jpg"),
    ("Bowen House", "/src/images/dorms/bowen-house-1-big.jpg"),
    ("Bradley Hall", "/src/images/dorms/bradley1-big.jpg"),
    ("Busch House", "/src/images/dorms/busch-house-big.jpg"),
    ("Canfield Hall", "/src/images/dorms/canfield2-big.jpg"),
    ("Drackett Tower", "/src/images/dorms/drackett-tower-big.jpg"),
    ("Fechko House", "/src/images/dorms/fechko1-big.jpg"),
    ("German House", "/src/images/dorms/german-house-2-big.jpg"),
    ("Halloran House", "/src/images/dorms/halloran2-big.jpg"),
    ("Hanley House", "/src/images/dorms/hanley1-big.jpg"),
    ("Haverfield House", "/src/images/dorms/haverfield2-big.jpg"),
    ("Houck House", "/src/images/dorms/houck2-big.jpg"),
    ("Houston House", "/src/images/dorms/houston-house-big.jpg"),
    ("Jones Tower", "/src/images/dorms/jones-tower-big.jpg"),
    ("Lawrence Tower", "/src/images/dorms/lane-ave-5-big.jpg"),
    ("Lincoln Tower", "/src/images/dorms/lincoln-tower-big.jpg"),
    ("Mack Hall", "/src/images/dorms/mack3-big.jpg"),
    ("Mendoza House", "/src/images/dorms/neilwood1-big.jpg"),
    ("Morrill Tower", "/src/images/dorms/morrill-big.jpg"),
    ("Morrison Tower", "/src/images/dorms/morrison1-big.jpg"),
    ("Neil Avenue Residence Hall", "/src/images/dorms/neil-ave-bldg-big.jpg"),
    ("Norton House", "/src/images/dorms/norton1-big.jpg"),
    ("Nosker House", "/src/images/dorms/nosker-house-big.jpg"),
    ("Park-Stradley Hall", "/src/images/dorms/2.HR_Exterior3_9859-sharp_website-1800x1200.jpg"),
    ("Paterson Hall", "/src/images/dorms/paterson1-big.jpg"),
    ("Pennsylvania Place", "/src/images/dorms/pennsylvania-place1-big.jpg"),
    ("Pomerene House", "/src/images/dorms/pomerene1-big.jpg"),
    ("Raney House", "/src/images/dorms/raney-house-1-big.jpg"),
    ("Scholars East", "/src/images/dorms/scholarseast1-big.jpg"),
    ("Scholars West", "/src/images/dorms/scholarswest1-big.jpg"),
    ("Scott House", "/src/images/dorms/scott-house-big.jpg"),
    ("Siebert Hall", "/src/images/dorms/siebert1-big.jpg"),
    ("Smith-Steeb Hall", "/src/images/dorms/smith-steeb-big.jpg"),
    ("Taylor Tower", "/src/images/dorms/taylor-tower-big.jpg"),
    ("Residence on Tenth", "/src/images/dorms/resontenth-big.jpg"),
    ("Torres House", "/src/images/dorms/torres-house-big.jpg"),
    ("Veteran's House", "/src/images/dorms/vetshouse-big.jpg"),
    ("Worthington Building", "/src/images/dorms/worthington1-big.jpg"),
    ("CFAES Wooster", "/src/images/dorms/ati-2-big.jpg"),
    ("Newark Campus", "/src/images/dorms/mcconnell-residence-hall-big.jpg"),
];

/// Residence-hall photo catalog in declaration order.
pub fn entries() -> Vec<CatalogEntry> {
    DORMS
        .iter()
        .map(|(name, image)| CatalogEntry::new(*name, *image))
        .collect()
}

//! Fixed demonstration content for each collection.
//!
//! Pure data: the catalog decides how (and whether) to insert it.

use crate::collection::Collection;
use crate::product::NewWatchProduct;

struct SeedItem {
    name: &'static str,
    price: f64,
    description: &'static str,
    material: &'static str,
    available: bool,
}

const HERITAGE: [SeedItem; 3] = [
    SeedItem {
        name: "Heritage Masterpiece",
        price: 48500.0,
        description: "Crafted over 800 hours by a single master watchmaker. Manufacture Cal. DX-01 with a 72-hour power reserve.",
        material: "18K Rose Gold",
        available: true,
    },
    SeedItem {
        name: "Heritage Classique",
        price: 32000.0,
        description: "A hand-guilloché dial and slim case drawn from the founding atelier's first pocket watches.",
        material: "18K Yellow Gold",
        available: true,
    },
    SeedItem {
        name: "Heritage Moonphase",
        price: 41500.0,
        description: "Astronomical moonphase complication accurate to one day in 122 years, set in an enamel dial.",
        material: "Platinum 950",
        available: true,
    },
];

const PRECISION: [SeedItem; 3] = [
    SeedItem {
        name: "Precision Chronometer",
        price: 28500.0,
        description: "Certified chronometer movement regulated in six positions, accurate to -2/+2 seconds per day.",
        material: "Grade 5 Titanium",
        available: true,
    },
    SeedItem {
        name: "Precision Tourbillon",
        price: 95000.0,
        description: "Flying one-minute tourbillon with a silicon escapement and a 100-hour power reserve.",
        material: "Grade 5 Titanium",
        available: false,
    },
    SeedItem {
        name: "Precision Diver 300",
        price: 18900.0,
        description: "Water resistant to 300 meters with a ceramic unidirectional bezel and helium escape valve.",
        material: "904L Stainless Steel",
        available: true,
    },
];

const AVANT_GARDE: [SeedItem; 3] = [
    SeedItem {
        name: "Avant-Garde Skeleton",
        price: 67000.0,
        description: "Fully openworked movement suspended in a sapphire case. Every bridge is visible from both sides.",
        material: "Sapphire Crystal",
        available: true,
    },
    SeedItem {
        name: "Avant-Garde Monolith",
        price: 54000.0,
        description: "Architectural case machined from a single block, with a jumping-hour display and no hands.",
        material: "Black Ceramic",
        available: true,
    },
    SeedItem {
        name: "Avant-Garde Eclipse",
        price: 120000.0,
        description: "Limited edition of 25. A rotating obsidian disc eclipses the hours as the day passes.",
        material: "Forged Carbon",
        available: false,
    },
];

/// The fixed seed list for `collection`, in insertion order.
pub fn seed_products(collection: Collection) -> Vec<NewWatchProduct> {
    let items: &[SeedItem] = match collection {
        Collection::Heritage => &HERITAGE,
        Collection::Precision => &PRECISION,
        Collection::AvantGarde => &AVANT_GARDE,
    };

    items
        .iter()
        .map(|item| {
            NewWatchProduct::new(
                item.name,
                collection.as_str(),
                item.price,
                item.description,
                item.material,
                item.available,
            )
        })
        .collect()
}

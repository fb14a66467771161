// SPDX-License-Identifier: MPL-2.0
//! Built-in site content.
//!
//! Used whenever no `content.toml` is supplied, and section by section when
//! the supplied file leaves a section out.

use crate::domain::gallery::GalleryImage;
use crate::domain::menu::{DietaryFlag, MenuCategory, MenuItem};
use crate::domain::navigation::NavItem;
use crate::domain::site::{CallToAction, OpeningHours, SiteIdentity};

pub fn identity() -> SiteIdentity {
    SiteIdentity {
        name: "Lorem Ipsum".to_string(),
        tagline: "Lorem ipsum dolor sit amet".to_string(),
        phone: "123-456-7890".to_string(),
        email: "lorem@lorem.com".to_string(),
        address: "123 Main St, Anytown, USA".to_string(),
        hours: vec![
            hours("Mon–Thu", "11:00", "22:00"),
            hours("Fri–Sat", "11:00", "23:00"),
            hours("Sun", "12:00", "21:00"),
        ],
        cta: Some(CallToAction {
            label: "Order Now".to_string(),
            href: "https://order.toasttab.com/".to_string(),
        }),
        instagram: Some("https://instagram.com/".to_string()),
        maps: Some("https://maps.google.com/".to_string()),
    }
}

fn hours(day: &str, open: &str, close: &str) -> OpeningHours {
    OpeningHours {
        day: day.to_string(),
        open: open.to_string(),
        close: close.to_string(),
    }
}

pub fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem::scroll("Home", "top"),
        NavItem::scroll("Menu", "menu"),
        NavItem::scroll("About", "about"),
        NavItem::scroll("Gallery", "gallery"),
        NavItem::scroll("Contact", "contact"),
        NavItem::scroll("Reservations", "reservations"),
    ]
}

pub fn categories() -> Vec<MenuCategory> {
    vec![
        MenuCategory::new("starters", "Starters").with_description("Begin your culinary journey"),
        MenuCategory::new("mains", "Main Course")
            .with_description("Signature dishes crafted with passion"),
        MenuCategory::new("desserts", "Desserts")
            .with_description("Sweet endings to a perfect meal"),
        MenuCategory::new("drinks", "Beverages").with_description("Perfectly paired drinks"),
    ]
}

pub fn items() -> Vec<MenuItem> {
    use DietaryFlag::{Signature, Spicy, Vegetarian};

    let dish = |id: &str, name: &str, description: &str, price: &str, category: &str| {
        MenuItem::new(id, name, price, category).with_description(description)
    };

    vec![
        // Starters
        dish(
            "1",
            "Truffle Infused Wild Mushroom Soup",
            "Creamy blend of forest mushrooms with aromatic truffle oil",
            "$12",
            "starters",
        )
        .with_flag(Vegetarian),
        dish(
            "2",
            "Pan-Seared Scallops",
            "Fresh scallops with citrus butter sauce and micro greens",
            "$18",
            "starters",
        )
        .with_flag(Signature),
        dish(
            "s3",
            "Crispy Calamari",
            "Tender calamari rings with spicy aioli and lemon",
            "$16",
            "starters",
        )
        .with_flag(Spicy),
        dish(
            "s4",
            "Burrata & Heirloom Tomatoes",
            "Fresh burrata with marinated tomatoes and basil",
            "$17",
            "starters",
        )
        .with_flag(Vegetarian),
        dish(
            "s5",
            "Duck Liver Pâté",
            "Smooth pâté with brioche and fig jam",
            "$19",
            "starters",
        )
        .with_flag(Signature),
        dish(
            "s6",
            "Vietnamese Spring Rolls",
            "Fresh rice paper rolls with prawns and herbs",
            "$14",
            "starters",
        ),
        // Mains
        dish(
            "3",
            "Grilled Wagyu Ribeye",
            "12oz premium wagyu beef with roasted garlic and herbs",
            "$65",
            "mains",
        )
        .with_flag(Signature),
        dish(
            "4",
            "Saffron Seafood Risotto",
            "Creamy arborio rice with fresh seafood and saffron",
            "$38",
            "mains",
        )
        .with_flag(Spicy),
        dish(
            "m3",
            "Chilean Sea Bass",
            "Pan-seared sea bass with miso glaze and baby bok choy",
            "$45",
            "mains",
        )
        .with_flag(Signature),
        dish(
            "m4",
            "Wild Mushroom Ravioli",
            "Handmade pasta filled with wild mushrooms and truffle cream",
            "$32",
            "mains",
        )
        .with_flag(Vegetarian),
        dish(
            "m5",
            "Rack of Lamb",
            "Herb-crusted lamb with mint pesto and roasted vegetables",
            "$48",
            "mains",
        ),
        dish(
            "m6",
            "Thai Red Curry Duck",
            "Crispy duck breast in aromatic red curry with lychees",
            "$42",
            "mains",
        )
        .with_flag(Spicy),
        // Desserts
        dish(
            "5",
            "Dark Chocolate Soufflé",
            "Warm chocolate soufflé with vanilla bean ice cream",
            "$14",
            "desserts",
        )
        .with_flag(Signature),
        dish(
            "6",
            "Artisanal Cheese Board",
            "Selection of fine cheeses with honey and nuts",
            "$22",
            "desserts",
        )
        .with_flag(Vegetarian),
        dish(
            "d3",
            "Crème Brûlée Trio",
            "Classic vanilla, matcha, and lavender crème brûlée",
            "$16",
            "desserts",
        )
        .with_flag(Signature),
        dish(
            "d4",
            "Tiramisu",
            "Traditional Italian tiramisu with mascarpone and coffee",
            "$13",
            "desserts",
        ),
        dish(
            "d5",
            "Mango Passion Fruit Pavlova",
            "Crispy meringue with tropical fruits and cream",
            "$15",
            "desserts",
        ),
        dish(
            "d6",
            "Green Tea Opera Cake",
            "Layered matcha cake with chocolate ganache",
            "$14",
            "desserts",
        ),
        // Drinks
        dish(
            "7",
            "Signature House Martini",
            "Premium vodka with a twist of citrus and olive",
            "$16",
            "drinks",
        )
        .with_flag(Signature),
        dish(
            "8",
            "Aged Wine Selection",
            "Curated selection of fine wines",
            "$12-45",
            "drinks",
        ),
        dish(
            "dr3",
            "Smoked Old Fashioned",
            "Bourbon with maple and aromatic bitters, smoked tableside",
            "$18",
            "drinks",
        )
        .with_flag(Signature),
        dish(
            "dr4",
            "Japanese Whisky Flight",
            "Tasting of three premium Japanese whiskies",
            "$35",
            "drinks",
        ),
        dish(
            "dr5",
            "Botanical Gin & Tonic",
            "Craft gin with artisanal tonic and fresh herbs",
            "$14",
            "drinks",
        ),
        dish(
            "dr6",
            "Non-Alcoholic Cocktail Selection",
            "Creative alcohol-free cocktails with fresh ingredients",
            "$10",
            "drinks",
        ),
    ]
}

pub fn gallery() -> Vec<GalleryImage> {
    (1..=6)
        .map(|n| {
            GalleryImage::new(
                format!("food-{n}"),
                format!("assets/gallery/food-{n}.jpg"),
                "Delicious dish",
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_default_item_belongs_to_a_default_category() {
        let ids: HashSet<_> = categories().into_iter().map(|c| c.id).collect();
        assert!(items().iter().all(|item| ids.contains(&item.category_id)));
    }

    #[test]
    fn each_category_holds_six_dishes() {
        let items = items();
        for category in categories() {
            let count = items
                .iter()
                .filter(|item| item.category_id == category.id)
                .count();
            assert_eq!(count, 6, "category {}", category.id);
        }
    }

    #[test]
    fn item_ids_are_unique() {
        let items = items();
        let ids: HashSet<_> = items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn nav_starts_with_top_anchor() {
        let nav = nav_items();
        assert!(nav[0].target.is_top());
        assert!(nav.iter().all(|item| item.is_scroll_link));
    }
}

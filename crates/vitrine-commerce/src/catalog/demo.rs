//! Seeded demo catalog.
//!
//! The storefront runs against this fixed dataset; there is no backing
//! product service.

use crate::catalog::{Catalog, Product, Review};
use crate::ids::{ProductId, ReviewId};
use crate::money::Money;

impl Catalog {
    /// The demo catalog the storefront browses.
    pub fn demo() -> Self {
        Self::new(demo_products(), demo_reviews())
    }
}

fn demo_products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Premium Wireless Headphones",
            "Over-ear wireless headphones with active noise cancellation, \
             30-hour battery life, and plush memory-foam earcups.",
            Money::new(299_99),
            Some(Money::new(249_99)),
            4.8,
            124,
            "Electronics",
            &["wireless", "headphones", "audio", "premium"],
            &[
                "Active noise cancellation",
                "30-hour battery life",
                "Bluetooth 5.2 connectivity",
            ],
            &[("Battery Life", "30 hours"), ("Weight", "250g")],
        ),
        product(
            "2",
            "Ultra-light Laptop",
            "A 1.2 kg ultrabook with a 14\" 4K display, 16 GB of RAM, and \
             all-day battery life for professionals on the go.",
            Money::new(1299_99),
            None,
            4.6,
            89,
            "Electronics",
            &["laptop", "ultrabook", "professional", "lightweight"],
            &["16GB RAM", "512GB SSD storage", "14\" 4K display"],
            &[("Display", "14\" 4K IPS"), ("Weight", "1.2kg")],
        ),
        product(
            "3",
            "Smart Fitness Watch",
            "Tracks heart rate, sleep, and workouts with a week of battery \
             and a bright always-on display.",
            Money::new(199_99),
            Some(Money::new(179_99)),
            4.7,
            203,
            "Electronics",
            &["fitness", "watch", "wearable", "health"],
            &["Heart rate monitoring", "Sleep tracking", "5 ATM water resistance"],
            &[("Battery", "7 days"), ("Water Resistance", "5 ATM")],
        ),
        product(
            "4",
            "Organic Cotton T-Shirt",
            "A relaxed-fit tee cut from heavyweight organic cotton, \
             pre-shrunk and garment dyed.",
            Money::new(34_99),
            None,
            4.4,
            57,
            "Clothing",
            &["tshirt", "organic", "cotton", "basics"],
            &["100% organic cotton", "Pre-shrunk", "Garment dyed"],
            &[("Material", "Organic cotton"), ("Fit", "Relaxed")],
        ),
        product(
            "5",
            "Pour-Over Coffee Kit",
            "Borosilicate glass dripper, double-wall carafe, and a matching \
             scoop for brewing a precise cup at home.",
            Money::new(64_99),
            Some(Money::new(54_99)),
            4.5,
            41,
            "Kitchen",
            &["coffee", "pour-over", "brewing"],
            &["Borosilicate glass", "Double-wall carafe", "Dishwasher safe"],
            &[("Capacity", "600ml"), ("Material", "Borosilicate glass")],
        ),
        product(
            "6",
            "Weatherproof Daypack",
            "A 22 L commuter pack with a padded laptop sleeve, taped seams, \
             and a roll-top closure.",
            Money::new(89_99),
            None,
            4.3,
            66,
            "Outdoors",
            &["backpack", "commuter", "weatherproof"],
            &["22L capacity", "Padded 15\" laptop sleeve", "Roll-top closure"],
            &[("Capacity", "22L"), ("Laptop Sleeve", "Up to 15\"")],
        ),
    ]
}

fn demo_reviews() -> Vec<Review> {
    vec![
        review(
            "101",
            "1",
            "Michael T.",
            5,
            "Best headphones I've ever owned",
            "The noise cancellation works perfectly even in noisy \
             environments, and I get close to the advertised 30 hours.",
            "2023-08-15",
        ),
        review(
            "102",
            "1",
            "Sarah J.",
            4,
            "Great sound, slightly tight fit",
            "Excellent sound quality, but they feel a bit tight after a few \
             hours of wear.",
            "2023-07-22",
        ),
        review(
            "201",
            "2",
            "Priya K.",
            5,
            "Featherweight workhorse",
            "Handles my whole dev toolchain without the fans ever spinning \
             up, and I barely notice it in my bag.",
            "2023-09-03",
        ),
        review(
            "301",
            "3",
            "Evan R.",
            4,
            "Solid tracker",
            "Sleep tracking is surprisingly accurate. The strap collects \
             lint, but that's my only complaint.",
            "2023-06-30",
        ),
        review(
            "501",
            "5",
            "Nadia B.",
            5,
            "Café-quality at home",
            "The dripper drains at a perfect rate. I've retired my old \
             plastic cone for good.",
            "2023-10-12",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    description: &str,
    price: Money,
    discount_price: Option<Money>,
    rating: f64,
    review_count: i64,
    category: &str,
    tags: &[&str],
    features: &[&str],
    specifications: &[(&str, &str)],
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        price,
        discount_price,
        rating,
        review_count,
        images: vec![format!("/images/products/{id}-main.jpg")],
        category: category.to_string(),
        tags: tags.iter().map(ToString::to_string).collect(),
        in_stock: true,
        features: features.iter().map(ToString::to_string).collect(),
        specifications: specifications
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect(),
    }
}

fn review(
    id: &str,
    product_id: &str,
    user_name: &str,
    rating: u8,
    title: &str,
    comment: &str,
    date: &str,
) -> Review {
    Review {
        id: ReviewId::new(id),
        product_id: ProductId::new(product_id),
        user_name: user_name.to_string(),
        rating,
        title: title.to_string(),
        comment: comment.to_string(),
        date: date.to_string(),
        verified: true,
    }
}

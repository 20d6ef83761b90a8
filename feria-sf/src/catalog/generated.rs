// AUTO-GENERATED by feria-cc. Do not edit by hand.
// Source: data/products.csv
// Generated: 2026-08-14T18:32:07Z

use feria_common::model::{Currency, Product};
use once_cell::sync::Lazy;

/// Compiled product catalog, in source order.
pub static PRODUCTS: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        Product {
            sku: "BR-0001".to_string(),
            id: "taza-nube".to_string(),
            title: "Taza Nube".to_string(),
            category: "tazas".to_string(),
            price_ars: 18500,
            currency: Currency::Ars,
            stock: 1,
            height_cm: Some(9),
            width_cm: Some(8),
            depth_cm: Some(8),
            weight_g: Some(320),
            shipping_class: "small".to_string(),
            finish: "esmalte brillante".to_string(),
            food_safe: Some(true),
            microwave_safe: Some(true),
            dishwasher_safe: Some(false),
            description: "Taza de cerámica gres esmaltada, pintada a mano. Capacidad 300 ml.".to_string(),
            care: "Lavar a mano con esponja suave. No apta para horno.".to_string(),
            tags: vec!["taza".to_string(), "esmaltado".to_string()],
            photos: vec!["/products/IMG_0001.jpg".to_string(), "/products/IMG_0002.jpg".to_string()],
        },
        Product {
            sku: "BR-0002".to_string(),
            id: "bowl-arena".to_string(),
            title: "Bowl Arena".to_string(),
            category: "bowls".to_string(),
            price_ars: 24000,
            currency: Currency::Ars,
            stock: 1,
            height_cm: Some(7),
            width_cm: Some(14),
            depth_cm: Some(14),
            weight_g: Some(540),
            shipping_class: "medium".to_string(),
            finish: "esmalte mate".to_string(),
            food_safe: Some(true),
            microwave_safe: Some(true),
            dishwasher_safe: Some(true),
            description: "Bowl de gres con textura de arena. Ideal para desayuno o ensaladas.".to_string(),
            care: "Apto microondas. Lavado suave recomendado.".to_string(),
            tags: vec!["bowl".to_string(), "gres".to_string()],
            photos: vec!["/products/IMG_0003.jpg".to_string()],
        },
        Product {
            sku: "BR-0003".to_string(),
            id: "plato-luna".to_string(),
            title: "Plato Luna".to_string(),
            category: "platos".to_string(),
            price_ars: 21000,
            currency: Currency::Ars,
            stock: 0,
            height_cm: Some(2),
            width_cm: Some(21),
            depth_cm: Some(21),
            weight_g: Some(600),
            shipping_class: "medium".to_string(),
            finish: "esmalte mate".to_string(),
            food_safe: Some(true),
            microwave_safe: Some(false),
            dishwasher_safe: None,
            description: "Plato llano de gres claro con borde irregular. Pieza única.".to_string(),
            care: "Apto microondas. Evitar cambios bruscos de temperatura.".to_string(),
            tags: vec!["plato".to_string(), "gres".to_string()],
            photos: vec!["/products/IMG_0004.jpg".to_string(), "/products/IMG_0005.jpg".to_string()],
        },
        Product {
            sku: "BR-0004".to_string(),
            id: "florero-rio".to_string(),
            title: "Florero Río".to_string(),
            category: "floreros".to_string(),
            price_ars: 36500,
            currency: Currency::Ars,
            stock: 1,
            height_cm: Some(18),
            width_cm: Some(10),
            depth_cm: Some(10),
            weight_g: None,
            shipping_class: "fragile".to_string(),
            finish: "esmalte reactivo".to_string(),
            food_safe: None,
            microwave_safe: None,
            dishwasher_safe: None,
            description: "Florero torneado con esmalte reactivo en tonos azules. Pieza única.".to_string(),
            care: "Limpiar por dentro con agua tibia. Uso decorativo.".to_string(),
            tags: vec!["florero".to_string(), "decoración".to_string()],
            photos: vec!["/products/IMG_0006.jpg".to_string()],
        },
        Product {
            sku: "BR-0005".to_string(),
            id: "posavasos-trigo".to_string(),
            title: "Set de posavasos Trigo".to_string(),
            category: "accesorios".to_string(),
            price_ars: 9800,
            currency: Currency::Ars,
            stock: 1,
            height_cm: Some(1),
            width_cm: Some(10),
            depth_cm: Some(10),
            weight_g: Some(380),
            shipping_class: "small".to_string(),
            finish: "".to_string(),
            food_safe: Some(false),
            microwave_safe: None,
            dishwasher_safe: None,
            description: "Set de cuatro posavasos de gres con relieve de espigas.".to_string(),
            care: "Limpiar con paño húmedo.".to_string(),
            tags: vec![],
            photos: vec!["/products/IMG_0007.jpg".to_string()],
        },
    ]
});

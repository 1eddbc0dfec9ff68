use crate::models::Item;

/// The two fixed records the inventory starts with.
pub fn initial_items() -> Vec<Item> {
    vec![
        Item {
            uid: "0".to_string(),
            name: "Cheese".to_string(),
            desc: "A fine block of cheese".to_string(),
            price: 4.99,
        },
        Item {
            uid: "1".to_string(),
            name: "Milk".to_string(),
            desc: "A jug of milk".to_string(),
            price: 3.25,
        },
    ]
}

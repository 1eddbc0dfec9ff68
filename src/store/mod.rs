use crate::models::Item;
use crate::seed;

/// The in-memory inventory: an insertion-ordered sequence of items.
///
/// Lives behind the `RwLock` in `AppState`; every handler takes the guard
/// for the whole read-modify-write, so no partial mutation is observable.
/// UIDs are not unique, so the UID-keyed operations act on all matches.
#[derive(Debug, Default)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// An inventory pre-populated with the fixed startup records.
    pub fn seeded() -> Self {
        Self {
            items: seed::initial_items(),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Owned copy of the full collection, used as every response body.
    pub fn snapshot(&self) -> Vec<Item> {
        self.items.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends unconditionally; fields are not validated.
    pub fn append(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Removes every item whose UID matches, preserving the relative order
    /// of the rest. Returns the number removed; zero is not an error here.
    pub fn remove_by_uid(&mut self, uid: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.uid != uid);
        before - self.items.len()
    }

    /// Replaces every matching item in place, keeping its position in the
    /// sequence. The caller is responsible for putting the path-supplied
    /// UID on `new` first. Returns the number replaced.
    pub fn replace_by_uid(&mut self, uid: &str, new: Item) -> usize {
        let mut replaced = 0;
        for slot in self.items.iter_mut().filter(|item| item.uid == uid) {
            *slot = new.clone();
            replaced += 1;
        }
        replaced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make(uid: &str, name: &str) -> Item {
        Item {
            uid: uid.to_string(),
            name: name.to_string(),
            desc: String::new(),
            price: 1.0,
        }
    }

    #[test]
    fn seeded_inventory_has_the_two_fixed_records() {
        let inv = Inventory::seeded();
        let names: Vec<&str> = inv.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Cheese", "Milk"]);
        assert_eq!(inv.items()[0].uid, "0");
        assert_eq!(inv.items()[1].uid, "1");
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut inv = Inventory::new();
        for n in 0..5 {
            inv.append(make(&n.to_string(), "x"));
        }
        let uids: Vec<&str> = inv.items().iter().map(|i| i.uid.as_str()).collect();
        assert_eq!(uids, vec!["0", "1", "2", "3", "4"]);
    }

    #[test]
    fn append_accepts_unvalidated_fields() {
        let mut inv = Inventory::new();
        inv.append(Item {
            uid: String::new(),
            name: String::new(),
            desc: String::new(),
            price: -9.99,
        });
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn remove_keeps_relative_order_of_the_rest() {
        let mut inv = Inventory::new();
        inv.append(make("a", "first"));
        inv.append(make("b", "second"));
        inv.append(make("c", "third"));

        assert_eq!(inv.remove_by_uid("b"), 1);
        let uids: Vec<&str> = inv.items().iter().map(|i| i.uid.as_str()).collect();
        assert_eq!(uids, vec!["a", "c"]);
    }

    #[test]
    fn remove_acts_on_every_duplicate() {
        let mut inv = Inventory::new();
        inv.append(make("dup", "one"));
        inv.append(make("x", "keep"));
        inv.append(make("dup", "two"));

        assert_eq!(inv.remove_by_uid("dup"), 2);
        assert_eq!(inv.len(), 1);
        assert_eq!(inv.items()[0].uid, "x");
    }

    #[test]
    fn remove_of_absent_uid_is_a_no_op() {
        let mut inv = Inventory::seeded();
        let before = inv.snapshot();
        assert_eq!(inv.remove_by_uid("nope"), 0);
        assert_eq!(inv.snapshot(), before);
    }

    #[test]
    fn replace_keeps_the_item_position() {
        let mut inv = Inventory::seeded();
        let replaced = inv.replace_by_uid(
            "0",
            Item {
                uid: "0".to_string(),
                name: "Aged Cheese".to_string(),
                desc: "Matured".to_string(),
                price: 6.00,
            },
        );
        assert_eq!(replaced, 1);
        assert_eq!(inv.items()[0].name, "Aged Cheese");
        assert_eq!(inv.items()[1].name, "Milk");
    }

    #[test]
    fn replace_acts_on_every_duplicate() {
        let mut inv = Inventory::new();
        inv.append(make("dup", "one"));
        inv.append(make("dup", "two"));

        assert_eq!(inv.replace_by_uid("dup", make("dup", "both")), 2);
        assert!(inv.items().iter().all(|i| i.name == "both"));
    }

    #[test]
    fn replace_of_absent_uid_changes_nothing() {
        let mut inv = Inventory::seeded();
        let before = inv.snapshot();
        assert_eq!(inv.replace_by_uid("nope", make("nope", "ghost")), 0);
        assert_eq!(inv.snapshot(), before);
    }
}

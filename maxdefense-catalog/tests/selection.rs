use maxdefense_catalog::{filter_items, generate_catalog, sum_items, Item, Selection};
use std::sync::Arc;

fn items(specs: &[(&str, u32, f64)]) -> Vec<Arc<Item>> {
    specs
        .iter()
        .map(|&(description, cost, defense)| Item::shared(description, cost, defense).unwrap())
        .collect()
}

#[test]
fn test_sum_items() {
    assert_eq!(sum_items(&[]), (0, 0.0));

    let catalog = items(&[("A", 2, 3.0), ("B", 3, 4.5), ("C", 4, 0.0)]);
    assert_eq!(sum_items(&catalog), (9, 7.5));

    let selection = Selection::from(catalog);
    assert_eq!(selection.total_cost(), 9);
    assert_eq!(selection.total_defense(), 7.5);
    assert!(Selection::new().is_empty());
}

#[test]
fn test_filter_items() {
    let catalog = items(&[
        ("A", 1, 0.0),
        ("B", 1, 5.0),
        ("C", 1, 10.0),
        ("D", 1, 10.5),
        ("E", 1, 1.0),
        ("F", 1, 7.0),
    ]);

    let filtered = filter_items(&catalog, 1.0, 10.0, 10);
    let names: Vec<&str> = filtered.iter().map(|item| item.description()).collect();
    assert_eq!(names, vec!["B", "C", "E", "F"]);

    let filtered = filter_items(&catalog, 1.0, 10.0, 2);
    let names: Vec<&str> = filtered.iter().map(|item| item.description()).collect();
    assert_eq!(names, vec!["B", "C"]);

    assert!(filter_items(&catalog, 1.0, 10.0, 0).is_empty());
    assert!(filter_items(&catalog, 20.0, 30.0, 10).is_empty());
    assert_eq!(catalog.len(), 6);
}

#[test]
fn test_filter_shares_items() {
    let catalog = items(&[("A", 1, 2.0), ("B", 1, 3.0)]);
    let filtered = filter_items(&catalog, 0.0, 100.0, 5);
    assert!(Arc::ptr_eq(&catalog[0], &filtered[0]));
    assert!(Arc::ptr_eq(&catalog[1], &filtered[1]));
}

#[test]
fn test_filter_properties() {
    let catalog = generate_catalog(&[9; 32], 200).unwrap();
    for (min, max, limit) in [(0.0, 100.0, 50), (10.0, 20.0, 500), (50.0, 50.0, 3)] {
        let filtered = filter_items(&catalog, min, max, limit);
        assert!(filtered.len() <= limit);
        assert!(filtered
            .iter()
            .all(|item| item.defense() >= min && item.defense() <= max));

        // Relative order follows the source
        let positions: Vec<usize> = filtered
            .iter()
            .map(|item| catalog.iter().position(|c| Arc::ptr_eq(c, item)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_selection_display() {
    assert_eq!(
        Selection::new().to_string(),
        "*** Armor Vector ***\n[empty armor list]\n"
    );

    let selection = Selection::from(items(&[("helm", 9, 4.0), ("boots", 2, 1.5)]));
    assert_eq!(
        selection.to_string(),
        "*** Armor Vector ***\n\
         Ye olde helm ==> Cost of 9 gold; Defense points = 4\n\
         Ye olde boots ==> Cost of 2 gold; Defense points = 1.5\n\
         > Grand total cost: 11 gold\n\
         > Grand total defense: 5.5\n"
    );
}

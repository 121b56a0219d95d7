//! Integration tests for the public hash table API

use prime_buckets::{is_prime, HashTable};

fn fill(table: &mut HashTable, n: usize, value: &str) {
    for i in 0..n {
        table.insert(&i.to_string(), value).unwrap();
    }
}

#[test]
fn test_insert_and_search() {
    let mut table: HashTable = HashTable::new().unwrap();
    table.insert("key", "value").unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.search("key"), Some("value"));
}

#[test]
fn test_search_with_invalid_key() {
    let mut table: HashTable = HashTable::new().unwrap();
    table.insert("key", "value").unwrap();
    assert_eq!(table.search("invalid key"), None);
}

#[test]
fn test_insert_with_duplicate_key() {
    let mut table: HashTable = HashTable::new().unwrap();
    table.insert("key", "value1").unwrap();
    table.insert("key", "value2").unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.search("key"), Some("value2"));
}

#[test]
fn test_caller_keeps_ownership() {
    let mut table: HashTable = HashTable::new().unwrap();
    let mut key: String = String::from("owned");
    let mut value: String = String::from("original");
    table.insert(&key, &value).unwrap();
    key.push_str("-changed");
    value.clear();
    assert_eq!(table.search("owned"), Some("original"));
}

#[test]
fn test_delete() {
    let mut table: HashTable = HashTable::new().unwrap();
    table.insert("k", "v").unwrap();
    assert!(table.delete("k").unwrap());
    assert_eq!(table.search("k"), None);
    assert!(table.is_empty());
}

#[test]
fn test_reinsert_after_delete() {
    let mut table: HashTable = HashTable::new().unwrap();
    table.insert("k", "v1").unwrap();
    table.delete("k").unwrap();
    table.insert("k", "v2").unwrap();
    assert_eq!(table.search("k"), Some("v2"));
    assert_eq!(table.len(), 1);
}

#[test]
fn test_resize_up() {
    // 53 buckets until the load passes 70%, which happens on the 39th insert
    let mut table: HashTable = HashTable::new().unwrap();
    fill(&mut table, 38, "value");
    assert_eq!(table.size(), 53);

    table.insert("new key", "value").unwrap();
    assert_eq!(table.size(), 101);
    assert_eq!(table.len(), 39);
    for i in 0..38 {
        assert_eq!(table.search(&i.to_string()), Some("value"));
    }
    assert_eq!(table.search("new key"), Some("value"));
}

#[test]
fn test_resize_down() {
    let mut table: HashTable = HashTable::new().unwrap();
    fill(&mut table, 39, "vaue");
    assert_eq!(table.size(), 101);

    // load drops under 10% before the 30th delete
    for i in 0..30 {
        table.delete(&i.to_string()).unwrap();
    }
    assert_eq!(table.size(), 53);
    assert_eq!(table.len(), 9);
    for i in 30..39 {
        assert_eq!(table.search(&i.to_string()), Some("vaue"));
    }
}

#[test]
fn test_insert_lots_of_items() {
    let mut table: HashTable = HashTable::new().unwrap();
    fill(&mut table, 20000, "value");
    assert_eq!(table.len(), 20000);
    assert!(table.len() < table.size());
    assert!(is_prime(table.size()).is_prime());
    for i in 0..20000 {
        assert_eq!(table.search(&i.to_string()), Some("value"), "missing key {}", i);
    }
}

#[test]
fn test_delete_everything() {
    let mut table: HashTable = HashTable::new().unwrap();
    fill(&mut table, 1000, "value");
    for i in 0..1000 {
        assert!(table.delete(&i.to_string()).unwrap());
        assert!(table.len() < table.size());
        assert!(is_prime(table.size()).is_prime());
    }
    assert!(table.is_empty());
    assert_eq!(table.size(), 53);
}

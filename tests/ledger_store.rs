use chrono::NaiveDate;
use tempfile::TempDir;

use finance_ledger::audit::{AuditLogger, Operation};
use finance_ledger::models::{Amount, BalanceKind, Category, SearchCriteria};
use finance_ledger::storage::LedgerStore;
use finance_ledger::LedgerError;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
}

fn amount(value: f64) -> Amount {
    Amount::new(value).unwrap()
}

fn open(temp_dir: &TempDir) -> LedgerStore {
    LedgerStore::open(temp_dir.path().join("records.json")).unwrap()
}

#[test]
fn test_worked_example() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open(&temp_dir);

    store
        .add(date(3), Category::Income, amount(1000.0), "Test income")
        .unwrap();
    store
        .add(date(4), Category::Expense, amount(500.0), "Test expense")
        .unwrap();

    assert_eq!(store.balance(BalanceKind::Balance), 500.0);
    assert_eq!(store.balance(BalanceKind::Income), 1000.0);
    assert_eq!(store.balance(BalanceKind::Expenses), 500.0);
    assert_eq!(store.balance_by_selector(0).unwrap(), 500.0);

    let results = store.search(&SearchCriteria::new().category(Category::Income));
    assert_eq!(results, vec![store.records()[0].clone()]);
}

#[test]
fn test_adds_keep_insertion_order() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open(&temp_dir);

    for i in 0..10 {
        store
            .add(date(1 + i), Category::Expense, amount(i as f64 + 1.0), format!("item {}", i))
            .unwrap();
    }

    assert_eq!(store.len(), 10);
    for (i, record) in store.records().iter().enumerate() {
        assert_eq!(record.description, format!("item {}", i));
    }
}

#[test]
fn test_balance_invariant() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open(&temp_dir);
    let values = [12.5, 300.0, 0.1, 0.2, 99.99, 1000.0, 7.25];

    for (i, value) in values.iter().enumerate() {
        let category = if i % 3 == 0 {
            Category::Income
        } else {
            Category::Expense
        };
        store.add(date(1), category, amount(*value), "x").unwrap();

        let summary = store.summary();
        assert_eq!(summary.balance, summary.income - summary.expenses);
    }
}

#[test]
fn test_edit_always_stamps_modified_date() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open(&temp_dir);
    store
        .add(date(3), Category::Income, amount(1000.0), "Salary")
        .unwrap();

    let record = store.edit(0, date(20), None, Amount::zero(), "").unwrap();

    assert_eq!(record.modified_date, Some(date(20)));
    assert_eq!(record.date, date(3));
    assert_eq!(record.category, Category::Income);
    assert_eq!(record.amount, amount(1000.0));
    assert_eq!(record.description, "Salary");
}

#[test]
fn test_edit_replaces_given_fields() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open(&temp_dir);
    store
        .add(date(3), Category::Income, amount(1000.0), "Salary")
        .unwrap();

    store
        .edit(0, date(20), Some(Category::Expense), amount(40.0), "Taxi")
        .unwrap();

    let reloaded = open(&temp_dir);
    let record = &reloaded.records()[0];
    assert_eq!(record.category, Category::Expense);
    assert_eq!(record.amount, amount(40.0));
    assert_eq!(record.description, "Taxi");
}

#[test]
fn test_failed_edit_leaves_document_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open(&temp_dir);
    store
        .add(date(3), Category::Income, amount(1000.0), "Salary")
        .unwrap();
    let before = std::fs::read(store.path()).unwrap();

    let err = store
        .edit(1, date(20), Some(Category::Expense), amount(1.0), "x")
        .unwrap_err();

    assert!(matches!(err, LedgerError::IndexOutOfRange { index: 1, len: 1 }));
    assert_eq!(std::fs::read(store.path()).unwrap(), before);
}

#[test]
fn test_search_all_and_none() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open(&temp_dir);
    store.add(date(3), Category::Income, amount(1000.0), "a").unwrap();
    store.add(date(4), Category::Expense, amount(500.0), "b").unwrap();

    assert_eq!(store.search(&SearchCriteria::new()).len(), 2);
    assert!(store
        .search(&SearchCriteria::new().amount(amount(123.0)))
        .is_empty());
    assert!(store
        .search(&SearchCriteria::new().date(date(3)).category(Category::Expense))
        .is_empty());
}

#[test]
fn test_round_trip_preserves_records() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open(&temp_dir);
    store
        .add(date(3), Category::Income, amount(1000.0), "Зарплата за май")
        .unwrap();
    store
        .add(date(4), Category::Expense, amount(0.1), "Café ☕")
        .unwrap();
    store
        .edit(1, date(5), None, Amount::zero(), "")
        .unwrap();

    let reloaded = open(&temp_dir);
    assert_eq!(reloaded.records(), store.records());

    let contents = std::fs::read_to_string(store.path()).unwrap();
    assert!(contents.contains("Зарплата за май"));
}

#[test]
fn test_legacy_document_loads() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("records.json");
    std::fs::write(
        &path,
        r#"[
  {"Дата": "2024-05-03", "Категория": "Доход", "Сумма": 1000.0, "Описание": "Зарплата"},
  {"Дата": "2024-05-04", "Категория": "Расход", "Сумма": 250.0, "Описание": "Продукты",
   "Изменен": "2024-05-06"}
]"#,
    )
    .unwrap();

    let store = LedgerStore::open(&path).unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.records()[0].category, Category::Income);
    assert_eq!(store.records()[1].category, Category::Expense);
    assert_eq!(store.records()[1].modified_date, Some(date(6)));
    assert_eq!(store.balance(BalanceKind::Balance), 750.0);
    assert_ne!(store.records()[0].id, store.records()[1].id);
}

#[test]
fn test_missing_and_corrupt_documents() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("records.json");

    let store = LedgerStore::open(&path).unwrap();
    assert!(store.is_empty());
    assert_eq!(std::fs::read_to_string(&path).unwrap().trim(), "[]");

    std::fs::write(&path, r#"[{"date": "2024-05-03"}]"#).unwrap();
    let err = LedgerStore::open(&path).unwrap_err();
    assert!(err.is_corrupt());
}

#[test]
fn test_invalid_selector() {
    let temp_dir = TempDir::new().unwrap();
    let store = open(&temp_dir);

    let err = store.balance_by_selector(3).unwrap_err();
    assert!(matches!(err, LedgerError::InvalidSelector(3)));
}

#[test]
fn test_audit_trail() {
    let temp_dir = TempDir::new().unwrap();
    let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
    let mut store = open(&temp_dir).with_audit(logger.clone());

    store.add(date(3), Category::Income, amount(10.0), "a").unwrap();
    store.add(date(4), Category::Income, amount(20.0), "b").unwrap();
    store.edit(0, date(5), None, amount(15.0), "").unwrap();

    let entries = logger.read_all().unwrap();
    let operations: Vec<_> = entries.iter().map(|e| e.operation).collect();
    assert_eq!(
        operations,
        vec![Operation::Create, Operation::Create, Operation::Update]
    );
    assert!(entries[2].diff_summary.as_deref().unwrap_or("").contains("amount"));
}

//! Property tests for column layout, paging and editing invariants.

use data_grid::grid::{ColumnRegistry, page_count};
use data_grid::{Column, DataGrid, Row, Scalar};
use proptest::prelude::*;

const KEYS: [&str; 4] = ["id", "name", "email", "missing"];

fn schema() -> Vec<Column> {
    vec![
        Column::new("id", "ID", 100.0),
        Column::new("name", "Name", 200.0),
        Column::new("email", "Email", 250.0).hidden(),
    ]
}

fn rows(n: usize) -> Vec<Row> {
    (0..n)
        .map(|i| Row::new().with("id", i).with("name", format!("User {i}")))
        .collect()
}

#[derive(Debug, Clone)]
enum Nav {
    Set(usize),
    Next,
    Previous,
}

fn nav() -> impl Strategy<Value = Nav> {
    prop_oneof![
        (0usize..50).prop_map(Nav::Set),
        Just(Nav::Next),
        Just(Nav::Previous),
    ]
}

proptest! {
    #[test]
    fn toggle_twice_is_identity(
        prefix in prop::collection::vec(0usize..KEYS.len(), 0..12),
        target in 0usize..KEYS.len(),
    ) {
        let mut reg = ColumnRegistry::new(schema()).expect("unique keys");
        for k in prefix {
            reg.toggle(KEYS[k]);
        }
        let before = reg.columns().to_vec();
        reg.toggle(KEYS[target]);
        reg.toggle(KEYS[target]);
        prop_assert_eq!(reg.columns(), before.as_slice());
    }

    #[test]
    fn resize_never_below_floor(width in -1_000.0f32..2_000.0) {
        let mut reg = ColumnRegistry::new(schema()).expect("unique keys");
        reg.set_width("name", width);
        let got = reg.get("name").expect("exists").width;
        prop_assert_eq!(got, width.max(50.0));
        prop_assert!(got >= 50.0);
    }

    #[test]
    fn current_page_stays_in_range(
        row_count in 0usize..120,
        page_size in 1usize..15,
        steps in prop::collection::vec(nav(), 0..30),
    ) {
        let mut grid = DataGrid::new(schema(), rows(row_count))
            .expect("valid schema")
            .page_size(page_size);
        let expected_pages = row_count.div_ceil(page_size).max(1);
        prop_assert_eq!(grid.page_count(), expected_pages);
        prop_assert_eq!(page_count(row_count, page_size), expected_pages);

        for step in steps {
            match step {
                Nav::Set(n) => grid.set_page(n),
                Nav::Next => grid.next_page(),
                Nav::Previous => grid.previous_page(),
            }
            let page = grid.current_page();
            prop_assert!(page >= 1 && page <= expected_pages);

            let slice = grid.current_page_rows();
            prop_assert!(slice.len() <= page_size);
            if let Some(first) = slice.first() {
                prop_assert_eq!(first.index, (page - 1) * page_size);
            }
        }
    }

    #[test]
    fn commit_touches_one_field(
        row_count in 1usize..60,
        page_size in 1usize..12,
        page in 1usize..20,
        slot_seed in 0usize..1_000,
        value in "[a-z]{1,8}",
    ) {
        let mut grid = DataGrid::new(schema(), rows(row_count))
            .expect("valid schema")
            .page_size(page_size);
        grid.set_page(page);
        let on_page = grid.current_page_rows().len();
        let slot = slot_seed % on_page;
        let absolute = grid.current_page_rows()[slot].index;
        let before: Vec<Row> = (0..row_count)
            .map(|i| grid.row(i).expect("in range").clone())
            .collect();

        grid.begin_cell_edit(slot, "name").expect("addressable");
        grid.update_pending_value(value.as_str());
        grid.commit_cell_edit().expect("commit");

        for (i, original) in before.iter().enumerate() {
            let row = grid.row(i).expect("in range");
            if i == absolute {
                prop_assert_eq!(row.get("name"), Some(&Scalar::from(value.as_str())));
                prop_assert_eq!(row.get("id"), original.get("id"));
            } else {
                prop_assert_eq!(row, original);
            }
        }
    }
}

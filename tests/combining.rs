//! Join and concatenation properties.

mod common;

use common::{households_df, i64_at, more_people_df, people_df, str_at};
use polars::prelude::df;
use polars_primer::combining::{concat_rows, left_join_on_name};

#[test]
fn left_join_attaches_matching_columns() {
    let left = people_df();
    let out = left_join_on_name(&left, &households_df()).unwrap();

    assert_eq!(out.height(), left.height());
    assert_eq!(
        out.get_column_names_str(),
        &["name", "birthdate", "weight", "height", "parent", "siblings"]
    );
    // every name matches, so no nulls on the right-hand columns
    assert_eq!(out.column("parent").unwrap().null_count(), 0);

    // Alice Archer has 3 siblings in the households table
    let alice = (0..out.height())
        .find(|&row| str_at(&out, "name", row) == "Alice Archer")
        .expect("Alice Archer should survive a left join");
    assert_eq!(i64_at(&out, "siblings", alice), 3);
}

#[test]
fn left_join_null_fills_unmatched_keys() {
    let left = people_df();
    let right = df!(
        "name" => &["Alice Archer"],
        "parent" => &[false],
        "siblings" => &[3i64],
    )
    .unwrap();

    let out = left_join_on_name(&left, &right).unwrap();
    assert_eq!(out.height(), left.height(), "left rows are never dropped");
    assert_eq!(out.column("parent").unwrap().null_count(), 3);
    assert_eq!(out.column("siblings").unwrap().null_count(), 3);
}

#[test]
fn concat_sums_row_counts_in_input_order() {
    let top = people_df();
    let bottom = more_people_df();
    let out = concat_rows(&top, &bottom).unwrap();

    assert_eq!(out.height(), top.height() + bottom.height());
    assert_eq!(out.get_column_names_str(), top.get_column_names_str());
    assert_eq!(str_at(&out, "name", 0), "Alice Archer");
    assert_eq!(str_at(&out, "name", 4), "Ethan Edwards");
    assert_eq!(str_at(&out, "name", 7), "Henry Harris");
}

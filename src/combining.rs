//! Combining frames: left join on a key column and vertical concatenation.

use crate::error::PrimerError;
use polars::prelude::{concat, DataFrame, IntoLazy, UnionArgs};

/// Left join on the shared `name` column: keeps every left row and
/// attaches matching right columns, null-filling unmatched keys.
pub fn left_join_on_name(left: &DataFrame, right: &DataFrame) -> Result<DataFrame, PrimerError> {
    use polars::prelude::{col, JoinBuilder, JoinCoalesce, JoinType};
    let joined = JoinBuilder::new(left.clone().lazy())
        .with(right.clone().lazy())
        .how(JoinType::Left)
        .on(&[col("name")])
        .coalesce(JoinCoalesce::CoalesceColumns)
        .finish()
        .collect()?;
    Ok(joined)
}

/// Stack `bottom` under `top`. Column sets must match (same names, same
/// order); the result holds top's rows first, then bottom's.
pub fn concat_rows(top: &DataFrame, bottom: &DataFrame) -> Result<DataFrame, PrimerError> {
    let out = concat(
        [top.clone().lazy(), bottom.clone().lazy()],
        UnionArgs::default(),
    )?
    .collect()?;
    Ok(out)
}

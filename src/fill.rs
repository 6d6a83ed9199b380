use either::Either;

/// Fill content for a newly created row or column.
///
/// `Left` copies a single value into every new cell. `Right` supplies
/// per-cell values addressed by position (cell index for a row, row index
/// for a column); positions the sequence leaves empty fall back to the
/// grid's stored default fill, each position independently.
pub type Fill<T> = Either<T, Vec<Option<T>>>;

/// Resolves the value for one new cell.
///
/// An absent `fill` means the stored default. A supplied scalar is always
/// used verbatim, even when it equals the content type's zero value; only
/// `None` positions of a per-cell sequence fall back to `default`.
pub(crate) fn resolve<T: Clone>(
    fill: &Option<Fill<T>>,
    index: usize,
    default: &Option<T>,
) -> Option<T> {
    match fill {
        None => default.clone(),
        Some(Either::Left(value)) => Some(value.clone()),
        Some(Either::Right(cells)) => cells
            .get(index)
            .cloned()
            .flatten()
            .or_else(|| default.clone()),
    }
}

// this_file: crates/posterline-layout/src/columns.rs

//! Tracklist column packing.
//!
//! Items are laid out column-major in chunks of `max_rows`. While the packed
//! columns plus inter-column spacing are wider than the budget, the item with
//! the most characters in the widest column is dropped from the list and the
//! rest repacked. Each round removes one item and a lone item is always accepted, so packing
//! finishes within `items.len()` rounds.

use crate::typesetter::Typesetter;
use log::debug;
use serde::Serialize;

/// Accepted packing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColumnLayout {
    /// Rows of each column, column-major, index-prefixed when requested
    pub columns: Vec<Vec<String>>,
    /// Width of each column including the index label width
    pub widths: Vec<u32>,
    /// Items dropped to fit, in removal order
    pub removed: Vec<String>,
    /// Packing rounds, including the accepted one
    pub iterations: usize,
    /// Column widths plus spacing
    pub total_width: u32,
}

impl ColumnLayout {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Items kept, in order.
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().flatten().map(String::as_str)
    }
}

impl Typesetter<'_> {
    /// Pack `items` into columns of at most `max_rows` rows within
    /// `max_total_width`, measured at the configured column text size.
    ///
    /// With `index_prefix` every kept item becomes `"<i>. <item>"`, numbered
    /// from 1 in column-major order; room for the widest possible label is
    /// reserved up front so numbering never changes the widths.
    pub fn pack<S: AsRef<str>>(
        &self,
        items: &[S],
        max_rows: usize,
        max_total_width: u32,
        index_prefix: bool,
    ) -> ColumnLayout {
        if items.is_empty() {
            return ColumnLayout::default();
        }

        let size = self.config().column_text_size as f32;
        let spacing = self.config().column_spacing;
        let max_rows = max_rows.max(1);
        let index_width = if index_prefix {
            self.measure_width(&format!("{}. ", items.len()), size)
        } else {
            0
        };

        let mut kept: Vec<(String, u32)> = items
            .iter()
            .map(|item| {
                let item = item.as_ref();
                (item.to_string(), self.measure_width(item, size))
            })
            .collect();
        let mut removed = Vec::new();
        let mut iterations = 0;

        let (widths, total_width) = loop {
            iterations += 1;
            let widths: Vec<u32> = kept
                .chunks(max_rows)
                .map(|chunk| chunk.iter().map(|(_, width)| *width).max().unwrap_or(0) + index_width)
                .collect();
            let gaps = spacing * (widths.len() as u32).saturating_sub(1);
            let total_width = widths.iter().sum::<u32>() + gaps;

            if total_width <= max_total_width || kept.len() == 1 {
                break (widths, total_width);
            }

            let index = longest_in_widest_column(&kept, &widths, max_rows);
            let (item, width) = kept.remove(index);
            debug!(target: "posterline::pack", "Dropping {item:?} ({width}px); total {total_width} > {max_total_width}");
            removed.push(item);
        };

        let columns: Vec<Vec<String>> = kept
            .chunks(max_rows)
            .enumerate()
            .map(|(column, chunk)| {
                chunk
                    .iter()
                    .enumerate()
                    .map(|(row, (item, _))| {
                        if index_prefix {
                            format!("{}. {item}", column * max_rows + row + 1)
                        } else {
                            item.clone()
                        }
                    })
                    .collect()
            })
            .collect();

        debug!(
            target: "posterline::pack",
            "Packed {} items into {} columns ({total_width}px) after {iterations} rounds, {} dropped",
            kept.len(),
            columns.len(),
            removed.len()
        );
        ColumnLayout {
            columns,
            widths,
            removed,
            iterations,
            total_width,
        }
    }

    /// [`Typesetter::pack`] with the configured row count and width budget.
    pub fn pack_tracklist<S: AsRef<str>>(&self, items: &[S], index_prefix: bool) -> ColumnLayout {
        let config = self.config();
        self.pack(items, config.max_rows, config.max_columns_width, index_prefix)
    }
}

/// Position in `kept` of the item with the most characters in the widest
/// column; the first one wins every tie.
///
/// Columns compete on pixel width, items within a column on character count.
fn longest_in_widest_column(kept: &[(String, u32)], widths: &[u32], max_rows: usize) -> usize {
    let widest = first_max(widths.iter().copied()).unwrap_or(0);
    let start = widest * max_rows;
    let end = (start + max_rows).min(kept.len());
    start + first_max(kept[start..end].iter().map(|(item, _)| item.chars().count())).unwrap_or(0)
}

fn first_max<T: Ord + Copy>(values: impl Iterator<Item = T>) -> Option<usize> {
    values
        .enumerate()
        .fold(None, |best: Option<(usize, T)>, (index, value)| match best {
            Some((_, top)) if top >= value => best,
            _ => Some((index, value)),
        })
        .map(|(index, _)| index)
}

// this_file: fuzz/fuzz_targets/pack.rs

#![no_main]

use libfuzzer_sys::fuzz_target;
use posterline::Typesetter;

#[path = "../../tests/common/mod.rs"]
mod common;

fuzz_target!(|input: (Vec<String>, u8, u16, bool)| {
    let (items, max_rows, max_width, index_prefix) = input;
    let fonts = common::poster_fonts();
    let typesetter = Typesetter::new(&fonts);

    let layout = typesetter.pack(&items, usize::from(max_rows), u32::from(max_width), index_prefix);

    assert!(layout.iterations <= items.len());
    assert_eq!(layout.removed.len() + layout.items().count(), items.len());
    let single = layout.columns.len() == 1 && layout.columns[0].len() == 1;
    assert!(items.is_empty() || layout.total_width <= u32::from(max_width) || single);
});

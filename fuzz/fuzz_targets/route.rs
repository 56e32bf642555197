// this_file: fuzz/fuzz_targets/route.rs

#![no_main]

use libfuzzer_sys::fuzz_target;
use posterline::{merge_runs, route, FontSet, Typesetter, Weight};

#[path = "../../tests/common/mod.rs"]
mod common;

fuzz_target!(|text: &str| {
    let fonts = common::poster_fonts();
    let runs = route(text, &fonts);

    let joined: String = runs.iter().map(|run| run.text.as_str()).collect();
    assert_eq!(joined, text);
    assert!(runs.windows(2).all(|pair| pair[0].font != pair[1].font));
    assert_eq!(merge_runs(runs.clone()), runs);

    let typesetter = Typesetter::new(&fonts);
    let fit = typesetter.fit_heading(text, 1760, 160);
    assert!(fit.size <= 160);

    let empty = FontSet::builder(Weight::Regular).build();
    assert!(route(text, &empty).is_empty());
});

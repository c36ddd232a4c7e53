use pretty_assertions::assert_eq;

use super::*;

#[test]
fn extraction_is_idempotent() {
    let first = parse_and_extract(SAMPLE);
    let second = parse_and_extract(SAMPLE);
    assert_eq!(first, second);
}

#[test]
fn extracting_same_tree_twice_is_equal() {
    let file = ParsedFile::parse(SAMPLE).expect("parse");
    let options = ParseOptions::default();
    assert_eq!(extract(&file, &options), extract(&file, &options));
}

#[test]
fn verbose_extraction_returns_same_types() {
    let file = ParsedFile::parse(SAMPLE).expect("parse");
    let quiet = extract(&file, &ParseOptions::default());
    let verbose = extract(&file, &ParseOptions::verbose(true));
    assert_eq!(quiet, verbose);
}

#[test]
fn descriptors_outlive_the_tree_and_cross_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Type>();

    let types = {
        let file = ParsedFile::parse(TYPES).expect("parse");
        extract(&file, &ParseOptions::default())
    };
    let handle = std::thread::spawn(move || types[0].field_names());
    assert_eq!(handle.join().expect("thread"), ["FieldA", "FieldB"]);
}

use pretty_assertions::assert_eq;

use super::*;
use crate::types::{TypeKind, TypeShape};

mod determinism;
mod variadics;

const SAMPLE: &str = include_str!("../../../tests/fixtures/sample.go");
const TYPES: &str = include_str!("../../../tests/fixtures/types.go");

fn parse_and_extract(source: &str) -> Vec<Type> {
    let file = ParsedFile::parse(source).expect("source should parse");
    extract(&file, &ParseOptions::default())
}

fn find_by_name<'a>(types: &'a [Type], name: &str) -> &'a Type {
    types
        .iter()
        .find(|t| t.name() == name)
        .unwrap_or_else(|| panic!("should find type named '{name}'"))
}

#[test]
fn sample_types_in_source_order() {
    let types = parse_and_extract(SAMPLE);
    let names: Vec<_> = types.iter().map(Type::name).collect();
    assert_eq!(
        names,
        vec![
            "Config",
            "Undocumented",
            "Server",
            "Handler",
            "Reader",
            "Request",
            "Response",
            "Grouped",
            "Pair",
        ]
    );
}

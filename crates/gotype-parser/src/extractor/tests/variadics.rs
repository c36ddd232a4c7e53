use pretty_assertions::assert_eq;

use super::*;

#[test]
fn variadic_type_has_ellipsis_prefix() {
    let types = parse_and_extract(TYPES);
    let bar = types[1].method("bar").expect("bar");
    let param = &bar.params()[0];
    assert!(param.is_variadic());
    assert_eq!(param.name(), "");
    assert_eq!(param.type_name(), "...int");
    assert_eq!(param.type_kind(), TypeKind::Named);
}

#[test]
fn named_variadic_after_regular_param() {
    let types = parse_and_extract(SAMPLE);
    let listen = find_by_name(&types, "Handler")
        .method("Listen")
        .expect("Listen");
    assert_eq!(listen.param_names(), ["addr", "opts"]);
    assert_eq!(listen.param_types(), ["string", "...Option"]);
    assert!(!listen.params()[0].is_variadic());
    assert!(listen.params()[1].is_variadic());
    assert_eq!(listen.result_types(), ["error"]);
}

#[test]
fn variadic_of_composite_element() {
    let source = "package p

type L interface {
	Log(args ...interface{})
	Put(kv ...map[string]int)
}
";
    let types = parse_and_extract(source);
    let log = types[0].method("Log").expect("Log");
    assert_eq!(log.param_types(), ["...interface{}"]);
    let put = types[0].method("Put").expect("Put");
    assert_eq!(put.param_types(), ["...map[string]int"]);
    assert_eq!(put.params()[0].type_kind(), TypeKind::Map);
}

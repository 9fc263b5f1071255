//! Extraction integration tests
//!
//! Tests for merging runtime signatures with parsed docstrings.

use exdoc::commands::read_json;
use exdoc::extract::{doc, Extractor};
use exdoc::inspect::{getmembers, subclasses, ObjectInfo, ObjectKind};
use exdoc::{Config, ExdocError, Introspect};
use serde_json::{json, Value};

fn object(value: Value) -> ObjectInfo {
    serde_json::from_value(value).unwrap()
}

fn record(value: Value) -> Value {
    serde_json::to_value(doc(&object(value), &Config::default()).unwrap()).unwrap()
}

/// Sample class hierarchy: A <- B <- C, with methods on C
fn hierarchy() -> ObjectInfo {
    object(json!({
        "kind": "class",
        "name": "A",
        "module": "samples",
        "doc": " Empty class ",
        "subclasses": [{
            "kind": "class",
            "name": "B",
            "module": "samples",
            "doc": " Class with a constructor ",
            "init": {
                "kind": "method",
                "name": "__init__",
                "doc": " Constructor ",
                "signature": {"params": [
                    {"name": "self"},
                    {"name": "a"},
                    {"name": "b", "default": 1},
                    {"name": "args", "kind": "varargs"},
                    {"name": "kwargs", "kind": "kwargs"}
                ]}
            },
            "subclasses": [{
                "kind": "class",
                "name": "C",
                "module": "samples",
                "doc": " Subclass with methods ",
                "members": [
                    {
                        "kind": "method", "name": "f", "module": "samples", "owner": "C",
                        "doc": " Empty function\n\n        :return: nothing\n        ",
                        "signature": {"params": [{"name": "self"}, {"name": "a", "default": 1}]}
                    },
                    {
                        "kind": "staticmethod", "name": "s", "module": "samples", "owner": "C",
                        "doc": " Empty static method\n\n        :rtype: None\n        ",
                        "signature": {"params": [{"name": "a", "default": 2}]}
                    },
                    {
                        "kind": "classmethod", "name": "c", "module": "samples", "owner": "C",
                        "signature": {"params": [{"name": "cls"}, {"name": "a", "default": 3}]}
                    },
                    {
                        "kind": "property", "name": "p", "module": "samples", "owner": "C",
                        "doc": " Property doc ",
                        "signature": {"params": [{"name": "self"}]}
                    },
                    {
                        "kind": "method", "name": "_hidden", "module": "samples", "owner": "C",
                        "signature": {"params": [{"name": "self"}]}
                    }
                ]
            }]
        }]
    }))
}

// =============================================================================
// Functions
// =============================================================================

mod function_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tag_dialect_function() {
        let d = record(json!({
            "kind": "function",
            "name": "h",
            "module": "samples",
            "doc": " Just a function\n\n    :param a: A-value\n    :type a: int\n    :param b: B-value, no type\n    :return: nothing\n    :rtype: None\n    :raises AssertionError: sometimes\n    ",
            "signature": {"params": [
                {"name": "a"},
                {"name": "b"},
                {"name": "c", "default": true},
                {"name": "d", "default": 1},
                {"name": "args", "kind": "varargs"},
                {"name": "kwargs", "kind": "kwargs"}
            ]}
        }));

        assert_eq!(
            d,
            json!({
                "module": "samples",
                "name": "h",
                "qualname": "h",
                "doc": "Just a function",
                "clsdoc": "",
                "signature": "h(a, b, c=True, d=1, *args, **kwargs)",
                "qsignature": "h(a, b, c=True, d=1, *args, **kwargs)",
                "tsignature": "h(a: int, b, c=True, d=1, *args, **kwargs) -> None",
                "qtsignature": "h(a: int, b, c=True, d=1, *args, **kwargs) -> None",
                "rtsignature": "h(a, b, c=True, d=1, *args, **kwargs) -> None",
                "qrtsignature": "h(a, b, c=True, d=1, *args, **kwargs) -> None",
                "ret": {"doc": "nothing", "type": "None"},
                "args": [
                    {"name": "a", "type": "int", "doc": "A-value"},
                    {"name": "b", "type": null, "doc": "B-value, no type"},
                    {"name": "c", "type": null, "doc": "", "default": true},
                    {"name": "d", "type": null, "doc": "", "default": 1},
                    {"name": "*args", "type": null, "doc": ""},
                    {"name": "**kwargs", "type": null, "doc": ""}
                ],
                "exc": [{"name": "AssertionError", "doc": "sometimes"}],
                "example": null
            })
        );
    }

    #[test]
    fn test_section_dialect_function() {
        let d = record(json!({
            "kind": "function",
            "name": "search",
            "doc": "Search for users.\n\n    Args:\n        query (str): Search query.\n        limit: Maximum results,\n            at most 100.\n        **filters: Extra filters.\n\n    Returns:\n        list: Matching users.\n\n    Raises:\n        ValueError: If the query is empty.\n\n    Example:\n        search('bob', limit=1)\n    ",
            "signature": {"params": [
                {"name": "query", "annotation": "str"},
                {"name": "limit", "default": 10, "annotation": "int"},
                {"name": "filters", "kind": "kwargs"}
            ]}
        }));

        assert_eq!(d["doc"], "Search for users.");
        assert_eq!(
            d["args"],
            json!([
                {"name": "query", "type": "str", "doc": "Search query."},
                {"name": "limit", "type": "int", "doc": "Maximum results,\nat most 100.", "default": 10},
                {"name": "**filters", "type": null, "doc": "Extra filters."}
            ])
        );
        assert_eq!(d["ret"], json!({"doc": "Matching users.", "type": "list"}));
        assert_eq!(d["exc"], json!([{"name": "ValueError", "doc": "If the query is empty."}]));
        assert_eq!(d["example"], "search('bob', limit=1)");
        assert_eq!(
            d["tsignature"],
            "search(query: str, limit: int = 10, **filters) -> list"
        );
    }

    #[test]
    fn test_declared_type_beats_documented_type() {
        let d = record(json!({
            "kind": "function",
            "name": "f",
            "doc": ":param a: value\n:type a: str",
            "signature": {"params": [{"name": "a", "annotation": "int"}]}
        }));
        assert_eq!(d["args"], json!([{"name": "a", "type": "int", "doc": "value"}]));
    }

    #[test]
    fn test_parameter_count_follows_runtime() {
        let d = record(json!({
            "kind": "function",
            "name": "f",
            "doc": ":param z: not a parameter\n:param b: second",
            "signature": {"params": [{"name": "a"}, {"name": "b"}, {"name": "c"}]}
        }));
        let names: Vec<&str> = d["args"]
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(d["args"][1]["doc"], "second");
    }

    #[test]
    fn test_null_default_is_distinct_from_no_default() {
        let d = record(json!({
            "kind": "function",
            "name": "f",
            "signature": {"params": [{"name": "a"}, {"name": "b", "default": null}]}
        }));
        assert_eq!(d["signature"], "f(a, b=None)");
        assert_eq!(d["args"][0], json!({"name": "a", "type": null, "doc": ""}));
        assert_eq!(d["args"][1], json!({"name": "b", "type": null, "doc": "", "default": null}));
    }

    #[test]
    fn test_class_valued_default() {
        let d = record(json!({
            "kind": "function",
            "name": "f",
            "signature": {"params": [{"name": "arg", "default": {"class": "A"}}]}
        }));
        assert_eq!(d["signature"], "f(arg=A)");
        assert_eq!(d["qsignature"], "f(arg=A)");
    }

    #[test]
    fn test_keyword_only_parameter_after_varargs() {
        let d = record(json!({
            "kind": "function",
            "name": "f",
            "signature": {"params": [
                {"name": "a"},
                {"name": "args", "kind": "varargs"},
                {"name": "b", "default": 1},
                {"name": "kw", "kind": "kwargs"}
            ]}
        }));
        assert_eq!(d["signature"], "f(a, *args, b=1, **kw)");
        assert_eq!(d["args"][2]["name"], "b");
    }

    #[test]
    fn test_float_defaults_use_exponent_notation() {
        let d = record(json!({
            "kind": "function",
            "name": "f",
            "signature": {"params": [
                {"name": "a", "default": 1e16},
                {"name": "b", "default": 1e-5},
                {"name": "c", "default": 0.5}
            ]}
        }));
        assert_eq!(d["signature"], "f(a=1e+16, b=1e-05, c=0.5)");
    }

    #[test]
    fn test_return_annotation_without_docs() {
        let d = record(json!({
            "kind": "function",
            "name": "f",
            "doc": "Summary.",
            "signature": {"params": [], "returns": "bool"}
        }));
        assert_eq!(d["ret"], json!({"doc": "", "type": "bool"}));
        assert_eq!(d["signature"], "f()");
        assert_eq!(d["tsignature"], "f() -> bool");
    }

    #[test]
    fn test_ambiguous_docstring_fails() {
        let f = object(json!({
            "kind": "function",
            "name": "f",
            "module": "samples",
            "doc": "Summary.\n\n:param x: the x\n\nArgs:\n    x: the x"
        }));
        let err = doc(&f, &Config::default()).unwrap_err();
        assert!(matches!(err, ExdocError::AmbiguousFormat { ref unit } if unit == "samples.f"));
    }

    #[test]
    fn test_unparsed_section_fails() {
        let f = object(json!({
            "kind": "function",
            "name": "f",
            "doc": "Args:\n    a: first\n  stray text\n"
        }));
        let err = doc(&f, &Config::default()).unwrap_err();
        assert!(matches!(
            err,
            ExdocError::UnparsedSection { ref section, .. } if section == "Args"
        ));
    }

    #[test]
    fn test_forced_style_skips_detection() {
        let mut config = Config::default();
        config.docstring = serde_json::from_value(json!({"style": "sphinx"})).unwrap();

        let f = object(json!({
            "kind": "function",
            "name": "f",
            "doc": "Summary.\n\n:param x: the x\n\nArgs:\n    x: the x",
            "signature": {"params": [{"name": "x"}]}
        }));
        let d = doc(&f, &config).unwrap();
        assert_eq!(d.args[0].doc, "the x\n\nArgs:\n    x: the x");
    }
}

// =============================================================================
// Classes and constructors
// =============================================================================

mod class_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_class_without_constructor() {
        let a = hierarchy();
        let d = serde_json::to_value(doc(&a, &Config::default()).unwrap()).unwrap();

        assert_eq!(d["name"], "A");
        assert_eq!(d["qualname"], "A");
        assert_eq!(d["doc"], "Empty class");
        assert_eq!(d["clsdoc"], "Empty class");
        assert_eq!(d["signature"], "A()");
        assert_eq!(d["qsignature"], "A()");
        assert_eq!(d["ret"], Value::Null);
        assert_eq!(d["args"], json!([]));
        assert_eq!(d["exc"], json!([]));
    }

    #[test]
    fn test_class_with_constructor() {
        let a = hierarchy();
        let b = &a.subclasses[0];
        let d = serde_json::to_value(doc(b, &Config::default()).unwrap()).unwrap();

        assert_eq!(d["module"], "samples");
        assert_eq!(d["name"], "B");
        assert_eq!(d["doc"], "Constructor");
        assert_eq!(d["clsdoc"], "Class with a constructor");
        assert_eq!(d["signature"], "B(a, b=1, *args, **kwargs)");
        assert_eq!(
            d["args"],
            json!([
                {"name": "a", "type": null, "doc": ""},
                {"name": "b", "type": null, "doc": "", "default": 1},
                {"name": "*args", "type": null, "doc": ""},
                {"name": "**kwargs", "type": null, "doc": ""}
            ])
        );
    }

    #[test]
    fn test_constructor_documented_in_class_body() {
        let d = record(json!({
            "kind": "class",
            "name": "Y",
            "doc": " Constructor documented in class body\n\n        :param a: A\n        :type a: int\n    ",
            "init": {
                "kind": "method",
                "name": "__init__",
                "signature": {"params": [{"name": "self"}, {"name": "a"}, {"name": "b", "default": 1}]}
            }
        }));

        assert_eq!(d["doc"], "Constructor documented in class body");
        assert_eq!(d["clsdoc"], "Constructor documented in class body");
        assert_eq!(d["signature"], "Y(a, b=1)");
        assert_eq!(d["tsignature"], "Y(a: int, b=1)");
        assert_eq!(
            d["args"],
            json!([
                {"name": "a", "type": "int", "doc": "A"},
                {"name": "b", "type": null, "doc": "", "default": 1}
            ])
        );
    }

    #[test]
    fn test_variadic_parameters_documented_on_class() {
        let d = record(json!({
            "kind": "class",
            "name": "A",
            "doc": " Blah blah\n\n    :param a: First\n    :param args: Many arguments\n    :param kwargs: And keywords\n    ",
            "init": {
                "kind": "method",
                "name": "__init__",
                "signature": {"params": [
                    {"name": "self"},
                    {"name": "a", "default": 1},
                    {"name": "args", "kind": "varargs"},
                    {"name": "kwargs", "kind": "kwargs"}
                ]}
            }
        }));

        assert_eq!(d["signature"], "A(a=1, *args, **kwargs)");
        assert_eq!(
            d["args"],
            json!([
                {"name": "a", "type": null, "default": 1, "doc": "First"},
                {"name": "*args", "type": null, "doc": "Many arguments"},
                {"name": "**kwargs", "type": null, "doc": "And keywords"}
            ])
        );
    }

    #[test]
    fn test_placeholder_constructor_doc_is_masked() {
        let d = record(json!({
            "kind": "class",
            "name": "X",
            "doc": "old-style class",
            "init": {
                "kind": "method",
                "name": "__init__",
                "doc": "Initialize self.  See help(type(self)) for accurate signature.",
                "signature": {"params": [{"name": "self"}]}
            }
        }));
        assert_eq!(d["doc"], "old-style class");
        assert_eq!(d["clsdoc"], "old-style class");
        assert_eq!(d["signature"], "X()");
    }

    #[test]
    fn test_class_exceptions_appended_after_constructor() {
        let d = record(json!({
            "kind": "class",
            "name": "K",
            "doc": "Class.\n\n:raises KeyError: from class",
            "init": {
                "kind": "method",
                "name": "__init__",
                "doc": "Init.\n\n:raises ValueError: from init",
                "signature": {"params": [{"name": "self"}]}
            }
        }));
        assert_eq!(d["doc"], "Init.");
        assert_eq!(d["clsdoc"], "Class.");
        assert_eq!(
            d["exc"],
            json!([
                {"name": "ValueError", "doc": "from init"},
                {"name": "KeyError", "doc": "from class"}
            ])
        );
    }

    #[test]
    fn test_class_param_entry_replaces_constructor_type() {
        let d = record(json!({
            "kind": "class",
            "name": "T",
            "doc": ":param a: class doc",
            "init": {
                "kind": "method",
                "name": "__init__",
                "doc": ":param a: ctor doc\n:type a: int",
                "signature": {"params": [{"name": "self"}, {"name": "a"}]}
            }
        }));
        assert_eq!(d["args"], json!([{"name": "a", "type": null, "doc": "class doc"}]));
        assert_eq!(d["tsignature"], "T(a)");
    }

    #[test]
    fn test_class_call_signature_keeps_first_parameter() {
        let d = record(json!({
            "kind": "class",
            "name": "P",
            "signature": {"params": [{"name": "x"}, {"name": "y", "default": 0}]}
        }));
        assert_eq!(d["signature"], "P(x, y=0)");
    }
}

// =============================================================================
// Methods and properties
// =============================================================================

mod member_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn member<'a>(cls: &'a ObjectInfo, name: &str) -> &'a ObjectInfo {
        cls.members().iter().find(|m| m.name() == Some(name)).unwrap()
    }

    fn c() -> ObjectInfo {
        hierarchy().subclasses[0].subclasses[0].clone()
    }

    #[test]
    fn test_method() {
        let c = c();
        let d = serde_json::to_value(doc(member(&c, "f"), &Config::default()).unwrap()).unwrap();

        assert_eq!(d["name"], "f");
        assert_eq!(d["qualname"], "C.f");
        assert_eq!(d["doc"], "Empty function");
        assert_eq!(d["signature"], "f(a=1)");
        assert_eq!(d["qsignature"], "C.f(a=1)");
        assert_eq!(d["ret"], json!({"doc": "nothing", "type": null}));
        assert_eq!(d["args"], json!([{"name": "a", "type": null, "doc": "", "default": 1}]));
    }

    #[test]
    fn test_static_method() {
        let c = c();
        let d = serde_json::to_value(doc(member(&c, "s"), &Config::default()).unwrap()).unwrap();

        assert_eq!(d["qualname"], "C.s");
        assert_eq!(d["signature"], "s(a=2)");
        assert_eq!(d["qsignature"], "C.s(a=2)");
        assert_eq!(d["ret"], json!({"doc": "", "type": "None"}));
    }

    #[test]
    fn test_class_method() {
        let c = c();
        let d = serde_json::to_value(doc(member(&c, "c"), &Config::default()).unwrap()).unwrap();

        assert_eq!(d["qualname"], "C.c");
        assert_eq!(d["doc"], "");
        assert_eq!(d["signature"], "c(a=3)");
        assert_eq!(d["qsignature"], "C.c(a=3)");
        assert_eq!(d["ret"], Value::Null);
    }

    #[test]
    fn test_property() {
        let c = c();
        let d = serde_json::to_value(doc(member(&c, "p"), &Config::default()).unwrap()).unwrap();

        assert_eq!(d["qualname"], "C.p");
        assert_eq!(d["doc"], "Property doc");
        assert_eq!(d["signature"], "p");
        assert_eq!(d["qsignature"], "C.p");
        assert_eq!(d["args"], json!([]));
    }

    #[test]
    fn test_getmembers() {
        let c = c();
        let names: Vec<&str> = getmembers(&c, &[]).iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["c", "f", "p", "s"]);

        let skip = |name: &str, _: &ObjectInfo| name != "p" && name != "s";
        let names: Vec<&str> = getmembers(&c, &[&skip]).iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["c", "f"]);
    }

    #[test]
    fn test_subclasses() {
        let a = hierarchy();
        let all: Vec<&str> = subclasses(&a, false).iter().filter_map(|t| t.name()).collect();
        assert_eq!(all, vec!["A", "B", "C"]);

        let leaves: Vec<&str> = subclasses(&a, true).iter().filter_map(|t| t.name()).collect();
        assert_eq!(leaves, vec!["C"]);
    }
}

// =============================================================================
// Modules and unsupported objects
// =============================================================================

mod plain_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_module() {
        let d = record(json!({
            "kind": "module",
            "name": "exdoc",
            "module": "exdoc",
            "doc": " Create a python file that collects the necessary information\n    "
        }));

        assert_eq!(d["module"], Value::Null);
        assert_eq!(d["name"], "exdoc");
        assert_eq!(d["qualname"], "exdoc");
        assert_eq!(d["doc"], "Create a python file that collects the necessary information");
        assert_eq!(d["signature"], Value::Null);
        assert_eq!(d["args"], json!([]));
    }

    #[test]
    fn test_unsupported_object() {
        let obj = object(json!({"kind": "frame"}));
        let err = Extractor::new(&Config::default()).doc(&obj).unwrap_err();
        assert_eq!(err.to_string(), "unsupported object kind: frame");
        assert_eq!(obj.kind(), ObjectKind::Other("frame".to_string()));
    }

    #[test]
    fn test_object_info_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "{}",
            json!({"kind": "function", "name": "g", "signature": {"params": [{"name": "x"}]}})
        )
        .unwrap();

        let g: ObjectInfo = read_json(file.path()).unwrap();
        let d = doc(&g, &Config::default()).unwrap();
        assert_eq!(d.signature.as_deref(), Some("g(x)"));
    }
}

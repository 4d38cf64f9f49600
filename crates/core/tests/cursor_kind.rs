use cindex_core::{
    CXCursor, CursorKind, KindError, KindGroup, KindRegistry, Registered, cursor_kind_of,
};

const UNGROUPED: [CursorKind; 5] = [
    CursorKind::TRANSLATION_UNIT,
    CursorKind::MACRO_DEFINITION,
    CursorKind::MACRO_INSTANTIATION,
    CursorKind::INCLUSION_DIRECTIVE,
    CursorKind::PREPROCESSING_DIRECTIVE,
];

#[test]
fn test_bad_register() {
    let err = CursorKind::register(1, "foo").unwrap_err();
    assert!(matches!(
        err,
        KindError::DuplicateRegistration { code: 1, .. }
    ));
}

#[test]
fn test_every_registered_code_rejects_reregistration() {
    for kind in CursorKind::all_kinds() {
        assert!(
            CursorKind::register(kind.code(), "DUPLICATE").is_err(),
            "{kind} accepted a second registration"
        );
        assert_eq!(CursorKind::from_value(kind.code()).unwrap(), kind);
    }
}

#[test]
fn test_missing_value() {
    assert_eq!(
        CursorKind::from_value(-1),
        Err(KindError::UnknownCode {
            enumeration: "CursorKind",
            code: -1,
        })
    );
}

#[test]
fn test_name() {
    assert_eq!(CursorKind::UNEXPOSED_DECL.name(), "UNEXPOSED_DECL");
    assert_eq!(CursorKind::from_value(1).unwrap().name(), "UNEXPOSED_DECL");
    assert_eq!(
        CursorKind::from_name("UNEXPOSED_DECL").unwrap(),
        &CursorKind::UNEXPOSED_DECL
    );
}

#[test]
fn test_lookups_return_the_same_value() {
    let first = CursorKind::from_value(43).unwrap();
    let second = CursorKind::from_name("TYPE_REF").unwrap();
    let third = CursorKind::TYPE_REF.registered().unwrap();
    assert!(std::ptr::eq(first, second));
    assert!(std::ptr::eq(first, third));
}

#[test]
fn test_get_all_kinds() {
    let kinds = CursorKind::all_kinds();
    assert!(kinds.contains(&&CursorKind::UNEXPOSED_DECL));
    assert!(kinds.contains(&&CursorKind::TRANSLATION_UNIT));
}

#[test]
fn test_kind_groups() {
    assert!(CursorKind::UNEXPOSED_DECL.is_declaration());
    assert!(CursorKind::TYPE_REF.is_reference());
    assert!(CursorKind::DECL_REF_EXPR.is_expression());
    assert!(CursorKind::UNEXPOSED_STMT.is_statement());
    assert!(CursorKind::INVALID_FILE.is_invalid());

    assert!(CursorKind::TRANSLATION_UNIT.is_translation_unit());
    assert!(!CursorKind::TYPE_REF.is_translation_unit());

    assert!(CursorKind::PREPROCESSING_DIRECTIVE.is_preprocessing());
    assert!(!CursorKind::TYPE_REF.is_preprocessing());

    assert!(CursorKind::UNEXPOSED_DECL.is_unexposed());
    assert!(!CursorKind::TYPE_REF.is_unexposed());

    for kind in CursorKind::all_kinds() {
        let group: Vec<&str> = [
            ("is_declaration", kind.is_declaration()),
            ("is_reference", kind.is_reference()),
            ("is_expression", kind.is_expression()),
            ("is_statement", kind.is_statement()),
            ("is_invalid", kind.is_invalid()),
            ("is_attribute", kind.is_attribute()),
        ]
        .into_iter()
        .filter(|(_, holds)| *holds)
        .map(|(predicate, _)| predicate)
        .collect();

        if UNGROUPED.contains(kind) {
            assert!(group.is_empty(), "{kind} classified as {group:?}");
            assert_eq!(kind.group(), None);
        } else {
            assert_eq!(group.len(), 1, "{kind} classified as {group:?}");
            assert!(kind.group().is_some_and(|g| KindGroup::ALL.contains(&g)));
        }
    }
}

#[test]
fn test_repr() {
    assert_eq!(CursorKind::TYPE_REF.to_string(), "CursorKind.TYPE_REF");
    assert_eq!(
        format!("{}", CursorKind::from_value(300).unwrap()),
        "CursorKind.TRANSLATION_UNIT"
    );
}

#[test]
fn test_kind_of_native_cursor() {
    let cursor = CXCursor::with_kind(103);
    assert_eq!(cursor_kind_of(&cursor).unwrap(), &CursorKind::CALL_EXPR);
    assert!(cursor_kind_of(&-7).is_err());
}

#[test]
fn test_private_registry_leaves_global_table_alone() {
    let registry = KindRegistry::<CursorKind>::with_builtins();
    let omp = registry
        .register_with(232, "OMP_PARALLEL_DIRECTIVE", Some(KindGroup::Statement))
        .unwrap();

    assert!(omp.is_statement());
    assert_eq!(registry.kind_of(&CXCursor::with_kind(232)).unwrap(), omp);
    assert!(CursorKind::from_value(232).is_err());
}

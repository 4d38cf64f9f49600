use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

enumeration! {
    /// Kind of a node in a libclang translation unit (`CXCursorKind`).
    pub struct CursorKind as "CursorKind" {
        class: Option<KindGroup> = builtin_group;

        // Declarations
        1 => UNEXPOSED_DECL,
        2 => STRUCT_DECL,
        3 => UNION_DECL,
        4 => CLASS_DECL,
        5 => ENUM_DECL,
        6 => FIELD_DECL,
        7 => ENUM_CONSTANT_DECL,
        8 => FUNCTION_DECL,
        9 => VAR_DECL,
        10 => PARM_DECL,
        11 => OBJC_INTERFACE_DECL,
        12 => OBJC_CATEGORY_DECL,
        13 => OBJC_PROTOCOL_DECL,
        14 => OBJC_PROPERTY_DECL,
        15 => OBJC_IVAR_DECL,
        16 => OBJC_INSTANCE_METHOD_DECL,
        17 => OBJC_CLASS_METHOD_DECL,
        18 => OBJC_IMPLEMENTATION_DECL,
        19 => OBJC_CATEGORY_IMPL_DECL,
        20 => TYPEDEF_DECL,
        21 => CXX_METHOD,
        22 => NAMESPACE,
        23 => LINKAGE_SPEC,
        24 => CONSTRUCTOR,
        25 => DESTRUCTOR,
        26 => CONVERSION_FUNCTION,
        27 => TEMPLATE_TYPE_PARAMETER,
        28 => TEMPLATE_NON_TYPE_PARAMETER,
        29 => TEMPLATE_TEMPLATE_PARAMETER,
        30 => FUNCTION_TEMPLATE,
        31 => CLASS_TEMPLATE,
        32 => CLASS_TEMPLATE_PARTIAL_SPECIALIZATION,
        33 => NAMESPACE_ALIAS,
        34 => USING_DIRECTIVE,
        35 => USING_DECLARATION,
        36 => TYPE_ALIAS_DECL,
        37 => OBJC_SYNTHESIZE_DECL,
        38 => OBJC_DYNAMIC_DECL,
        39 => CXX_ACCESS_SPEC_DECL,

        // References
        40 => OBJC_SUPER_CLASS_REF,
        41 => OBJC_PROTOCOL_REF,
        42 => OBJC_CLASS_REF,
        43 => TYPE_REF,
        44 => CXX_BASE_SPECIFIER,
        45 => TEMPLATE_REF,
        46 => NAMESPACE_REF,
        47 => MEMBER_REF,
        48 => LABEL_REF,
        49 => OVERLOADED_DECL_REF,
        50 => VARIABLE_REF,

        // Invalid cursors
        70 => INVALID_FILE,
        71 => NO_DECL_FOUND,
        72 => NOT_IMPLEMENTED,
        73 => INVALID_CODE,

        // Expressions
        100 => UNEXPOSED_EXPR,
        101 => DECL_REF_EXPR,
        102 => MEMBER_REF_EXPR,
        103 => CALL_EXPR,
        104 => OBJC_MESSAGE_EXPR,
        105 => BLOCK_EXPR,
        106 => INTEGER_LITERAL,
        107 => FLOATING_LITERAL,
        108 => IMAGINARY_LITERAL,
        109 => STRING_LITERAL,
        110 => CHARACTER_LITERAL,
        111 => PAREN_EXPR,
        112 => UNARY_OPERATOR,
        113 => ARRAY_SUBSCRIPT_EXPR,
        114 => BINARY_OPERATOR,
        115 => COMPOUND_ASSIGNMENT_OPERATOR,
        116 => CONDITIONAL_OPERATOR,
        117 => CSTYLE_CAST_EXPR,
        118 => COMPOUND_LITERAL_EXPR,
        119 => INIT_LIST_EXPR,
        120 => ADDR_LABEL_EXPR,
        121 => STMT_EXPR,
        122 => GENERIC_SELECTION_EXPR,
        123 => GNU_NULL_EXPR,
        124 => CXX_STATIC_CAST_EXPR,
        125 => CXX_DYNAMIC_CAST_EXPR,
        126 => CXX_REINTERPRET_CAST_EXPR,
        127 => CXX_CONST_CAST_EXPR,
        128 => CXX_FUNCTIONAL_CAST_EXPR,
        129 => CXX_TYPEID_EXPR,
        130 => CXX_BOOL_LITERAL_EXPR,
        131 => CXX_NULL_PTR_LITERAL_EXPR,
        132 => CXX_THIS_EXPR,
        133 => CXX_THROW_EXPR,
        134 => CXX_NEW_EXPR,
        135 => CXX_DELETE_EXPR,
        136 => CXX_UNARY_EXPR,
        137 => OBJC_STRING_LITERAL,
        138 => OBJC_ENCODE_EXPR,
        139 => OBJC_SELECTOR_EXPR,
        140 => OBJC_PROTOCOL_EXPR,
        141 => OBJC_BRIDGE_CAST_EXPR,
        142 => PACK_EXPANSION_EXPR,
        143 => SIZE_OF_PACK_EXPR,
        144 => LAMBDA_EXPR,
        145 => OBJC_BOOL_LITERAL_EXPR,

        // Statements
        200 => UNEXPOSED_STMT,
        201 => LABEL_STMT,
        202 => COMPOUND_STMT,
        203 => CASE_STMT,
        204 => DEFAULT_STMT,
        205 => IF_STMT,
        206 => SWITCH_STMT,
        207 => WHILE_STMT,
        208 => DO_STMT,
        209 => FOR_STMT,
        210 => GOTO_STMT,
        211 => INDIRECT_GOTO_STMT,
        212 => CONTINUE_STMT,
        213 => BREAK_STMT,
        214 => RETURN_STMT,
        215 => ASM_STMT,
        216 => OBJC_AT_TRY_STMT,
        217 => OBJC_AT_CATCH_STMT,
        218 => OBJC_AT_FINALLY_STMT,
        219 => OBJC_AT_THROW_STMT,
        220 => OBJC_AT_SYNCHRONIZED_STMT,
        221 => OBJC_AUTORELEASE_POOL_STMT,
        222 => OBJC_FOR_COLLECTION_STMT,
        223 => CXX_CATCH_STMT,
        224 => CXX_TRY_STMT,
        225 => CXX_FOR_RANGE_STMT,
        226 => SEH_TRY_STMT,
        227 => SEH_EXCEPT_STMT,
        228 => SEH_FINALLY_STMT,
        229 => MS_ASM_STMT,
        230 => NULL_STMT,
        231 => DECL_STMT,

        300 => TRANSLATION_UNIT,

        // Attributes
        400 => UNEXPOSED_ATTR,
        401 => IB_ACTION_ATTR,
        402 => IB_OUTLET_ATTR,
        403 => IB_OUTLET_COLLECTION_ATTR,
        404 => CXX_FINAL_ATTR,
        405 => CXX_OVERRIDE_ATTR,
        406 => ANNOTATE_ATTR,
        407 => ASM_LABEL_ATTR,

        // Preprocessing
        500 => PREPROCESSING_DIRECTIVE,
        501 => MACRO_DEFINITION,
        502 => MACRO_INSTANTIATION,
        503 => INCLUSION_DIRECTIVE,

        // Extra declarations
        600 => MODULE_IMPORT_DECL,
    }
}

/// Group of a code as laid out by libclang's `CXCursor_First*` /
/// `CXCursor_Last*` bounds.
const fn builtin_group(code: i32) -> Option<KindGroup> {
    match code {
        1..=39 | 600 => Some(KindGroup::Declaration),
        40..=50 => Some(KindGroup::Reference),
        70..=73 => Some(KindGroup::Invalid),
        100..=145 => Some(KindGroup::Expression),
        200..=231 => Some(KindGroup::Statement),
        400..=407 => Some(KindGroup::Attribute),
        _ => None,
    }
}

/// The six mutually exclusive buckets a cursor kind can fall into.
///
/// Translation units and preprocessing entities belong to none of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum KindGroup {
    Declaration,
    Reference,
    Expression,
    Statement,
    Invalid,
    Attribute,
}

impl KindGroup {
    pub const ALL: [KindGroup; 6] = [
        KindGroup::Declaration,
        KindGroup::Reference,
        KindGroup::Expression,
        KindGroup::Statement,
        KindGroup::Invalid,
        KindGroup::Attribute,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            KindGroup::Declaration => "declaration",
            KindGroup::Reference => "reference",
            KindGroup::Expression => "expression",
            KindGroup::Statement => "statement",
            KindGroup::Invalid => "invalid",
            KindGroup::Attribute => "attribute",
        }
    }
}

impl fmt::Display for KindGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CursorKind {
    /// The group this kind is classified into, if any.
    ///
    /// Builtins are grouped by code. Extensions carry the group they were
    /// registered with.
    pub fn group(&self) -> Option<KindGroup> {
        self.class
    }

    pub fn is_declaration(&self) -> bool {
        self.group() == Some(KindGroup::Declaration)
    }

    pub fn is_reference(&self) -> bool {
        self.group() == Some(KindGroup::Reference)
    }

    pub fn is_expression(&self) -> bool {
        self.group() == Some(KindGroup::Expression)
    }

    pub fn is_statement(&self) -> bool {
        self.group() == Some(KindGroup::Statement)
    }

    pub fn is_invalid(&self) -> bool {
        self.group() == Some(KindGroup::Invalid)
    }

    pub fn is_attribute(&self) -> bool {
        self.group() == Some(KindGroup::Attribute)
    }

    pub fn is_translation_unit(&self) -> bool {
        self.code == Self::TRANSLATION_UNIT.code
    }

    pub fn is_preprocessing(&self) -> bool {
        matches!(self.code, 500..=503)
    }

    /// Whether the native library exposes this node only as an opaque
    /// "unexposed" placeholder.
    pub fn is_unexposed(&self) -> bool {
        [
            Self::UNEXPOSED_DECL,
            Self::UNEXPOSED_EXPR,
            Self::UNEXPOSED_STMT,
            Self::UNEXPOSED_ATTR,
        ]
        .iter()
        .any(|k| k.code == self.code)
    }
}

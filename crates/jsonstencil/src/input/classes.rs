//! Parser for C#-style class definition source.
//!
//! Accepted subset:
//! - `class` declarations with modifiers and at most one base type
//! - auto-properties (`public int Age { get; set; }`) and plain
//!   typed members (`public int Age;`), treated alike
//! - primitives (`int` family, `float` family, `bool`, `string`),
//!   `T?`, `T[]`, and `List<T>`, nested freely
//! - `using` directives and `namespace` blocks (block-scoped or
//!   file-scoped), which are skipped over
//! - line and block comments
//!
//! Methods, nested types, initializers, attributes, and generics other
//! than `List` are rejected with a line-numbered error rather than
//! silently misread.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::ir::{Field, FieldKind, PrimitiveKind, TypeCatalog, TypeDef};

/// Parses class definition source into a resolved [`TypeCatalog`].
///
/// Resolution validates the whole catalog: type and field names are
/// unique, base chains are acyclic, and every referenced type is either
/// a known primitive or declared in the same source. Inherited fields
/// are flattened into each definition, own fields first, then the base
/// chain's, nearest base first. Only `public` members are kept.
pub fn parse_classes(source: &str) -> Result<TypeCatalog, ResolveError> {
    let tokens = lex(source)?;
    let mut parser = Parser::new(tokens);
    let classes = parser.parse_source()?;
    resolve(classes)
}

/// Why a source could not be resolved into a catalog.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("line {line}: unexpected character `{found}`")]
    UnexpectedChar { found: char, line: usize },

    #[error("line {line}: expected {expected}, found `{found}`")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        line: usize,
    },

    #[error("unexpected end of input while expecting {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("line {line}: unsupported syntax: {detail}")]
    Unsupported { detail: String, line: usize },

    #[error("line {line}: duplicate type definition `{name}`")]
    DuplicateType { name: String, line: usize },

    #[error("line {line}: duplicate field `{field}` in type `{type_name}`")]
    DuplicateField {
        type_name: String,
        field: String,
        line: usize,
    },

    #[error("line {line}: unknown type `{name}` referenced by `{referrer}`")]
    UnknownType {
        name: String,
        referrer: String,
        line: usize,
    },

    #[error("line {line}: circular base-type chain involving `{name}`")]
    CircularInheritance { name: String, line: usize },
}

/// Declaration modifiers that may prefix a class or member.
const MODIFIERS: &[&str] = &[
    "public", "private", "protected", "internal", "static", "readonly", "sealed", "abstract",
    "partial", "virtual", "override", "required", "new", "const",
];

// ---------------------------------------------------------------------------
// Lexer

#[derive(Debug, Clone, PartialEq)]
enum TokenKind {
    Ident(String),
    /// A numeric or string literal, kept verbatim. Literals only occur in
    /// initializers, which are outside the subset; the parser never consumes
    /// one, but lexing them lets the `=` be diagnosed as the problem.
    Literal(String),
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Lt,
    Gt,
    LParen,
    RParen,
    Semi,
    Colon,
    Comma,
    Question,
    Dot,
    Eq,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ident(name) => f.write_str(name),
            TokenKind::Literal(text) => f.write_str(text),
            TokenKind::LBrace => f.write_str("{"),
            TokenKind::RBrace => f.write_str("}"),
            TokenKind::LBracket => f.write_str("["),
            TokenKind::RBracket => f.write_str("]"),
            TokenKind::Lt => f.write_str("<"),
            TokenKind::Gt => f.write_str(">"),
            TokenKind::LParen => f.write_str("("),
            TokenKind::RParen => f.write_str(")"),
            TokenKind::Semi => f.write_str(";"),
            TokenKind::Colon => f.write_str(":"),
            TokenKind::Comma => f.write_str(","),
            TokenKind::Question => f.write_str("?"),
            TokenKind::Dot => f.write_str("."),
            TokenKind::Eq => f.write_str("="),
        }
    }
}

#[derive(Debug, Clone)]
struct Tok {
    kind: TokenKind,
    line: usize,
}

fn lex(source: &str) -> Result<Vec<Tok>, ResolveError> {
    let mut tokens = Vec::new();
    let mut chars = source.chars().peekable();
    let mut line = 1;

    while let Some(ch) = chars.next() {
        match ch {
            '\n' => line += 1,
            c if c.is_whitespace() => {}
            '/' => match chars.peek() {
                Some('/') => {
                    for c in chars.by_ref() {
                        if c == '\n' {
                            line += 1;
                            break;
                        }
                    }
                }
                Some('*') => {
                    chars.next();
                    let mut closed = false;
                    let mut prev = '\0';
                    for c in chars.by_ref() {
                        if c == '\n' {
                            line += 1;
                        }
                        if prev == '*' && c == '/' {
                            closed = true;
                            break;
                        }
                        prev = c;
                    }
                    if !closed {
                        return Err(ResolveError::UnexpectedEof {
                            expected: "`*/` closing a comment",
                        });
                    }
                }
                _ => return Err(ResolveError::UnexpectedChar { found: '/', line }),
            },
            '"' => {
                let start = line;
                let mut text = String::from('"');
                let mut closed = false;
                while let Some(c) = chars.next() {
                    if c == '\n' {
                        line += 1;
                    }
                    text.push(c);
                    match c {
                        '\\' => {
                            if let Some(escaped) = chars.next() {
                                if escaped == '\n' {
                                    line += 1;
                                }
                                text.push(escaped);
                            }
                        }
                        '"' => {
                            closed = true;
                            break;
                        }
                        _ => {}
                    }
                }
                if !closed {
                    return Err(ResolveError::UnexpectedEof {
                        expected: "`\"` closing a string literal",
                    });
                }
                tokens.push(Tok {
                    kind: TokenKind::Literal(text),
                    line: start,
                });
            }
            c if c.is_ascii_digit() || (c == '-' && chars.peek().is_some_and(char::is_ascii_digit)) =>
            {
                let mut text = String::from(c);
                while let Some(&next) = chars.peek() {
                    if next.is_ascii_alphanumeric() || next == '.' || next == '_' {
                        text.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Tok {
                    kind: TokenKind::Literal(text),
                    line,
                });
            }
            c if c.is_alphabetic() || c == '_' => {
                let mut ident = String::from(c);
                while let Some(&next) = chars.peek() {
                    if next.is_alphanumeric() || next == '_' {
                        ident.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Tok {
                    kind: TokenKind::Ident(ident),
                    line,
                });
            }
            other => {
                let kind = match other {
                    '{' => TokenKind::LBrace,
                    '}' => TokenKind::RBrace,
                    '[' => TokenKind::LBracket,
                    ']' => TokenKind::RBracket,
                    '<' => TokenKind::Lt,
                    '>' => TokenKind::Gt,
                    '(' => TokenKind::LParen,
                    ')' => TokenKind::RParen,
                    ';' => TokenKind::Semi,
                    ':' => TokenKind::Colon,
                    ',' => TokenKind::Comma,
                    '?' => TokenKind::Question,
                    '.' => TokenKind::Dot,
                    '=' => TokenKind::Eq,
                    _ => return Err(ResolveError::UnexpectedChar { found: other, line }),
                };
                tokens.push(Tok { kind, line });
            }
        }
    }

    Ok(tokens)
}

// ---------------------------------------------------------------------------
// Parser

/// A class declaration as written, before resolution.
#[derive(Debug)]
struct RawClass {
    name: String,
    base: Option<String>,
    members: Vec<RawMember>,
    line: usize,
}

#[derive(Debug)]
struct RawMember {
    name: String,
    ty: RawType,
    is_public: bool,
    line: usize,
}

#[derive(Debug)]
enum RawType {
    Named(String),
    Nullable(Box<RawType>),
    Collection(Box<RawType>),
}

struct Parser {
    tokens: Vec<Tok>,
    pos: usize,
}

impl Parser {
    fn new(tokens: Vec<Tok>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&Tok> {
        self.tokens.get(self.pos)
    }

    fn peek_is(&self, kind: &TokenKind) -> bool {
        self.peek().is_some_and(|tok| tok.kind == *kind)
    }

    fn at_keyword(&self, word: &str) -> bool {
        matches!(
            self.peek(),
            Some(Tok { kind: TokenKind::Ident(name), .. }) if name == word
        )
    }

    fn bump(&mut self) -> Option<Tok> {
        let tok = self.tokens.get(self.pos).cloned();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.peek_is(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<usize, ResolveError> {
        match self.bump() {
            Some(tok) if tok.kind == kind => Ok(tok.line),
            Some(tok) => Err(ResolveError::UnexpectedToken {
                expected,
                found: tok.kind.to_string(),
                line: tok.line,
            }),
            None => Err(ResolveError::UnexpectedEof { expected }),
        }
    }

    fn expect_ident(&mut self, expected: &'static str) -> Result<(String, usize), ResolveError> {
        match self.bump() {
            Some(Tok {
                kind: TokenKind::Ident(name),
                line,
            }) => Ok((name, line)),
            Some(tok) => Err(ResolveError::UnexpectedToken {
                expected,
                found: tok.kind.to_string(),
                line: tok.line,
            }),
            None => Err(ResolveError::UnexpectedEof { expected }),
        }
    }

    /// Consumes leading modifiers; reports whether `public` was among them.
    fn eat_modifiers(&mut self) -> bool {
        let mut is_public = false;
        loop {
            let word = match self.peek() {
                Some(Tok {
                    kind: TokenKind::Ident(word),
                    ..
                }) if MODIFIERS.contains(&word.as_str()) => word.clone(),
                _ => return is_public,
            };
            self.pos += 1;
            if word == "public" {
                is_public = true;
            }
        }
    }

    fn parse_source(&mut self) -> Result<Vec<RawClass>, ResolveError> {
        let mut classes = Vec::new();
        self.parse_items(&mut classes, false)?;
        Ok(classes)
    }

    /// Parses declarations until end of input, or until the `}` closing
    /// a namespace body when `inside_block` is set.
    fn parse_items(
        &mut self,
        out: &mut Vec<RawClass>,
        inside_block: bool,
    ) -> Result<(), ResolveError> {
        loop {
            if self.peek().is_none() {
                return if inside_block {
                    Err(ResolveError::UnexpectedEof {
                        expected: "`}` closing a namespace body",
                    })
                } else {
                    Ok(())
                };
            }
            if inside_block && self.eat(&TokenKind::RBrace) {
                return Ok(());
            }
            if self.eat(&TokenKind::Semi) {
                continue;
            }
            if self.at_keyword("using") {
                self.skip_using()?;
            } else if self.at_keyword("namespace") {
                self.parse_namespace(out)?;
            } else {
                out.push(self.parse_class_decl()?);
            }
        }
    }

    fn skip_using(&mut self) -> Result<(), ResolveError> {
        self.bump();
        loop {
            match self.bump() {
                Some(tok) if tok.kind == TokenKind::Semi => return Ok(()),
                Some(_) => {}
                None => {
                    return Err(ResolveError::UnexpectedEof {
                        expected: "`;` after a using directive",
                    });
                }
            }
        }
    }

    fn parse_namespace(&mut self, out: &mut Vec<RawClass>) -> Result<(), ResolveError> {
        self.bump();
        self.expect_ident("a namespace name")?;
        while self.eat(&TokenKind::Dot) {
            self.expect_ident("a namespace name segment")?;
        }
        // File-scoped form: the rest of the input is the body.
        if self.eat(&TokenKind::Semi) {
            return Ok(());
        }
        self.expect(TokenKind::LBrace, "`{` opening a namespace body")?;
        self.parse_items(out, true)
    }

    fn parse_class_decl(&mut self) -> Result<RawClass, ResolveError> {
        self.eat_modifiers();
        let (keyword, line) = self.expect_ident("`class`")?;
        if keyword != "class" {
            return Err(match keyword.as_str() {
                "struct" | "interface" | "enum" | "record" | "delegate" => {
                    ResolveError::Unsupported {
                        detail: format!("`{keyword}` declarations"),
                        line,
                    }
                }
                _ => ResolveError::UnexpectedToken {
                    expected: "`class`",
                    found: keyword,
                    line,
                },
            });
        }

        let (name, _) = self.expect_ident("a class name")?;
        let base = if self.eat(&TokenKind::Colon) {
            let (base, base_line) = self.expect_ident("a base type name")?;
            if self.peek_is(&TokenKind::Comma) {
                return Err(ResolveError::Unsupported {
                    detail: "multiple base types".into(),
                    line: base_line,
                });
            }
            Some(base)
        } else {
            None
        };
        self.expect(TokenKind::LBrace, "`{` opening a class body")?;

        let mut members = Vec::new();
        loop {
            if self.eat(&TokenKind::RBrace) {
                break;
            }
            if self.eat(&TokenKind::Semi) {
                continue;
            }
            if self.peek().is_none() {
                return Err(ResolveError::UnexpectedEof {
                    expected: "`}` closing a class body",
                });
            }
            members.push(self.parse_member()?);
        }

        Ok(RawClass {
            name,
            base,
            members,
            line,
        })
    }

    fn parse_member(&mut self) -> Result<RawMember, ResolveError> {
        let is_public = self.eat_modifiers();

        if let Some(line) = self.at_nested_type_keyword() {
            return Err(ResolveError::Unsupported {
                detail: "nested type declarations".into(),
                line,
            });
        }

        let ty = self.parse_type_ref()?;
        let (name, line) = self.expect_ident("a field name")?;

        if self.peek_is(&TokenKind::LParen) {
            return Err(ResolveError::Unsupported {
                detail: "method declarations".into(),
                line,
            });
        }
        if self.peek_is(&TokenKind::Eq) {
            return Err(ResolveError::Unsupported {
                detail: "field initializers".into(),
                line,
            });
        }

        if self.eat(&TokenKind::Semi) {
            return Ok(RawMember {
                name,
                ty,
                is_public,
                line,
            });
        }
        if self.eat(&TokenKind::LBrace) {
            self.parse_accessor_block()?;
            if self.peek_is(&TokenKind::Eq) {
                return Err(ResolveError::Unsupported {
                    detail: "property initializers".into(),
                    line,
                });
            }
            return Ok(RawMember {
                name,
                ty,
                is_public,
                line,
            });
        }

        match self.bump() {
            Some(tok) => Err(ResolveError::UnexpectedToken {
                expected: "`;` or `{` after a field name",
                found: tok.kind.to_string(),
                line: tok.line,
            }),
            None => Err(ResolveError::UnexpectedEof {
                expected: "`;` or `{` after a field name",
            }),
        }
    }

    fn at_nested_type_keyword(&self) -> Option<usize> {
        match self.peek() {
            Some(Tok {
                kind: TokenKind::Ident(word),
                line,
            }) if matches!(
                word.as_str(),
                "class" | "struct" | "interface" | "enum" | "record"
            ) =>
            {
                Some(*line)
            }
            _ => None,
        }
    }

    /// Parses the accessor block of an auto-property; the opening `{` is
    /// already consumed. Accessors may carry their own access modifier
    /// (`private set;`), but bodies are not part of the subset.
    fn parse_accessor_block(&mut self) -> Result<(), ResolveError> {
        loop {
            match self.bump() {
                Some(tok) => match tok.kind {
                    TokenKind::RBrace => return Ok(()),
                    TokenKind::Ident(word)
                        if matches!(word.as_str(), "get" | "set" | "init") =>
                    {
                        self.eat(&TokenKind::Semi);
                    }
                    TokenKind::Ident(word) if MODIFIERS.contains(&word.as_str()) => {}
                    kind => {
                        return Err(ResolveError::UnexpectedToken {
                            expected: "`get`, `set`, or `}`",
                            found: kind.to_string(),
                            line: tok.line,
                        });
                    }
                },
                None => {
                    return Err(ResolveError::UnexpectedEof {
                        expected: "`}` closing an accessor block",
                    });
                }
            }
        }
    }

    fn parse_type_ref(&mut self) -> Result<RawType, ResolveError> {
        let (name, line) = self.expect_ident("a type name")?;

        let mut ty = if name == "List" && self.eat(&TokenKind::Lt) {
            let element = self.parse_type_ref()?;
            self.expect(TokenKind::Gt, "`>` closing a List element type")?;
            RawType::Collection(Box::new(element))
        } else {
            if self.peek_is(&TokenKind::Lt) {
                return Err(ResolveError::Unsupported {
                    detail: format!("generic type `{name}`"),
                    line,
                });
            }
            RawType::Named(name)
        };

        if self.eat(&TokenKind::Question) {
            ty = RawType::Nullable(Box::new(ty));
        }
        while self.eat(&TokenKind::LBracket) {
            self.expect(TokenKind::RBracket, "`]` closing an array suffix")?;
            ty = RawType::Collection(Box::new(ty));
            if self.eat(&TokenKind::Question) {
                ty = RawType::Nullable(Box::new(ty));
            }
        }

        Ok(ty)
    }
}

// ---------------------------------------------------------------------------
// Resolution

fn resolve(classes: Vec<RawClass>) -> Result<TypeCatalog, ResolveError> {
    let mut indices: HashMap<&str, usize> = HashMap::new();
    for (index, class) in classes.iter().enumerate() {
        if indices.insert(class.name.as_str(), index).is_some() {
            return Err(ResolveError::DuplicateType {
                name: class.name.clone(),
                line: class.line,
            });
        }
    }

    for class in &classes {
        let mut seen = HashSet::new();
        for member in &class.members {
            if !seen.insert(member.name.as_str()) {
                return Err(ResolveError::DuplicateField {
                    type_name: class.name.clone(),
                    field: member.name.clone(),
                    line: member.line,
                });
            }
        }
    }

    for class in &classes {
        let mut seen: HashSet<&str> = HashSet::from([class.name.as_str()]);
        let mut base = class.base.as_deref();
        while let Some(base_name) = base {
            let Some(&base_index) = indices.get(base_name) else {
                return Err(ResolveError::UnknownType {
                    name: base_name.to_string(),
                    referrer: class.name.clone(),
                    line: class.line,
                });
            };
            if !seen.insert(base_name) {
                return Err(ResolveError::CircularInheritance {
                    name: class.name.clone(),
                    line: class.line,
                });
            }
            base = classes[base_index].base.as_deref();
        }
    }

    let mut catalog = TypeCatalog::new();
    for class in &classes {
        let mut fields = Vec::new();
        let mut link = Some(class);
        while let Some(current) = link {
            for member in &current.members {
                if !member.is_public {
                    continue;
                }
                let referrer = format!("{}.{}", current.name, member.name);
                fields.push(Field::new(
                    member.name.clone(),
                    classify(&member.ty, &indices, &referrer, member.line)?,
                ));
            }
            link = current.base.as_deref().map(|name| &classes[indices[name]]);
        }
        catalog.add(TypeDef::new(class.name.clone(), fields));
    }

    Ok(catalog)
}

fn classify(
    ty: &RawType,
    declared: &HashMap<&str, usize>,
    referrer: &str,
    line: usize,
) -> Result<FieldKind, ResolveError> {
    match ty {
        RawType::Named(name) => match primitive_kind(name) {
            Some(kind) => Ok(FieldKind::Primitive(kind)),
            None if declared.contains_key(name.as_str()) => Ok(FieldKind::Object(name.clone())),
            None => Err(ResolveError::UnknownType {
                name: name.clone(),
                referrer: referrer.to_string(),
                line,
            }),
        },
        RawType::Nullable(inner) => Ok(match classify(inner, declared, referrer, line)? {
            // `?` on a value-type primitive switches its default to null;
            // on strings, collections, and object references it is erased.
            FieldKind::Primitive(kind) if kind != PrimitiveKind::Str => FieldKind::Nullable(kind),
            other => other,
        }),
        RawType::Collection(element) => Ok(FieldKind::Collection(Box::new(classify(
            element, declared, referrer, line,
        )?))),
    }
}

fn primitive_kind(name: &str) -> Option<PrimitiveKind> {
    match name {
        "int" | "long" | "short" | "byte" | "sbyte" | "uint" | "ulong" | "ushort" => {
            Some(PrimitiveKind::Int)
        }
        "float" | "double" | "decimal" => Some(PrimitiveKind::Float),
        "bool" => Some(PrimitiveKind::Bool),
        "string" => Some(PrimitiveKind::Str),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields_of(source: &str, type_name: &str) -> Vec<(String, FieldKind)> {
        let catalog = parse_classes(source).unwrap();
        catalog
            .get(type_name)
            .unwrap()
            .fields
            .iter()
            .map(|field| (field.name.clone(), field.kind.clone()))
            .collect()
    }

    #[test]
    fn properties_and_plain_members_are_both_fields() {
        let fields = fields_of(
            r#"
            public class Sample {
                public int Age { get; set; }
                public string Name;
            }
            "#,
            "Sample",
        );
        assert_eq!(
            fields,
            vec![
                ("Age".into(), FieldKind::Primitive(PrimitiveKind::Int)),
                ("Name".into(), FieldKind::Primitive(PrimitiveKind::Str)),
            ]
        );
    }

    #[test]
    fn only_public_members_survive() {
        let fields = fields_of(
            r#"
            public class Sample {
                public int Kept { get; set; }
                private int Hidden { get; set; }
                internal int Internal;
                protected int Protected;
                int Bare;
                public static int AlsoKept;
            }
            "#,
            "Sample",
        );
        let names: Vec<&str> = fields.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["Kept", "AlsoKept"]);
    }

    #[test]
    fn primitive_families_resolve_by_name() {
        let fields = fields_of(
            r#"
            public class Numbers {
                public long A;
                public short B;
                public byte C;
                public double D;
                public decimal E;
                public float F;
                public bool G;
            }
            "#,
            "Numbers",
        );
        let kinds: Vec<&FieldKind> = fields.iter().map(|(_, kind)| kind).collect();
        assert_eq!(
            kinds,
            vec![
                &FieldKind::Primitive(PrimitiveKind::Int),
                &FieldKind::Primitive(PrimitiveKind::Int),
                &FieldKind::Primitive(PrimitiveKind::Int),
                &FieldKind::Primitive(PrimitiveKind::Float),
                &FieldKind::Primitive(PrimitiveKind::Float),
                &FieldKind::Primitive(PrimitiveKind::Float),
                &FieldKind::Primitive(PrimitiveKind::Bool),
            ]
        );
    }

    #[test]
    fn nullable_marks_value_types_and_is_erased_on_references() {
        let fields = fields_of(
            r#"
            public class Home { public string Street; }
            public class Sample {
                public int? MaybeAge;
                public string? MaybeName;
                public Home? MaybeHome;
            }
            "#,
            "Sample",
        );
        assert_eq!(
            fields,
            vec![
                ("MaybeAge".into(), FieldKind::Nullable(PrimitiveKind::Int)),
                ("MaybeName".into(), FieldKind::Primitive(PrimitiveKind::Str)),
                ("MaybeHome".into(), FieldKind::Object("Home".into())),
            ]
        );
    }

    #[test]
    fn collection_shapes_nest() {
        let fields = fields_of(
            r#"
            public class Home { public string Street; }
            public class Sample {
                public int[] A;
                public List<string> B;
                public int?[] C;
                public int[]? D;
                public List<Home> E;
                public int[][] F;
            }
            "#,
            "Sample",
        );
        let int = || Box::new(FieldKind::Primitive(PrimitiveKind::Int));
        assert_eq!(
            fields,
            vec![
                ("A".into(), FieldKind::Collection(int())),
                (
                    "B".into(),
                    FieldKind::Collection(Box::new(FieldKind::Primitive(PrimitiveKind::Str))),
                ),
                (
                    "C".into(),
                    FieldKind::Collection(Box::new(FieldKind::Nullable(PrimitiveKind::Int))),
                ),
                ("D".into(), FieldKind::Collection(int())),
                (
                    "E".into(),
                    FieldKind::Collection(Box::new(FieldKind::Object("Home".into()))),
                ),
                (
                    "F".into(),
                    FieldKind::Collection(Box::new(FieldKind::Collection(int()))),
                ),
            ]
        );
    }

    #[test]
    fn inherited_fields_flatten_own_first() {
        let source = r#"
            public class Base { public int Id { get; set; } }
            public class Middle : Base { public bool Active { get; set; } }
            public class Derived : Middle { public string Name { get; set; } }
        "#;
        let names: Vec<String> = fields_of(source, "Derived")
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, ["Name", "Active", "Id"]);

        // The base keeps its own standalone definition too.
        assert_eq!(fields_of(source, "Base").len(), 1);
    }

    #[test]
    fn usings_namespaces_and_comments_are_skipped() {
        let catalog = parse_classes(
            r#"
            using System;
            using System.Collections.Generic;

            namespace Contoso.Models {
                // A person, minimally.
                public class Person {
                    /* multi
                       line */
                    public string Name { get; set; }
                }
            }
            "#,
        )
        .unwrap();
        assert_eq!(catalog.types.len(), 1);
        assert_eq!(catalog.types[0].name, "Person");
    }

    #[test]
    fn file_scoped_namespace_is_transparent() {
        let catalog = parse_classes(
            r#"
            namespace Contoso.Models;

            public class Person { public string Name; }
            "#,
        )
        .unwrap();
        assert_eq!(catalog.types.len(), 1);
    }

    #[test]
    fn stray_semicolons_are_tolerated() {
        let catalog = parse_classes(
            "public class A { public int X; ; } ; public class B { }",
        )
        .unwrap();
        assert_eq!(catalog.types.len(), 2);
    }

    #[test]
    fn accessor_blocks_accept_modifiers_and_init() {
        let fields = fields_of(
            r#"
            public class Sample {
                public int A { get; private set; }
                public int B { get; init; }
                public int C { get; }
            }
            "#,
            "Sample",
        );
        assert_eq!(fields.len(), 3);
    }

    #[test]
    fn comments_only_source_yields_empty_catalog() {
        let catalog = parse_classes("// nothing to see\n/* here either */").unwrap();
        assert!(catalog.types.is_empty());
    }

    #[test]
    fn unknown_field_type_is_reported_with_its_referrer() {
        let err = parse_classes(
            "public class Person {\n    public string Name;\n    public Addres Home;\n}",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ResolveError::UnknownType { ref name, ref referrer, line: 3 }
                if name == "Addres" && referrer == "Person.Home"
        ));
    }

    #[test]
    fn unknown_base_type_is_an_error() {
        let err = parse_classes("public class Derived : Missing { }").unwrap_err();
        assert!(matches!(
            err,
            ResolveError::UnknownType { ref name, ref referrer, .. }
                if name == "Missing" && referrer == "Derived"
        ));
    }

    #[test]
    fn duplicate_types_and_fields_are_errors() {
        let err = parse_classes("public class A { } public class A { }").unwrap_err();
        assert!(matches!(err, ResolveError::DuplicateType { ref name, .. } if name == "A"));

        let err =
            parse_classes("public class A { public int X; public bool X; }").unwrap_err();
        assert!(matches!(
            err,
            ResolveError::DuplicateField { ref field, .. } if field == "X"
        ));
    }

    #[test]
    fn inheritance_cycles_are_errors() {
        let err =
            parse_classes("public class A : B { } public class B : A { }").unwrap_err();
        assert!(matches!(err, ResolveError::CircularInheritance { .. }));

        let err = parse_classes("public class A : A { }").unwrap_err();
        assert!(matches!(err, ResolveError::CircularInheritance { .. }));
    }

    #[test]
    fn out_of_subset_constructs_are_rejected() {
        let unsupported = |source: &str| match parse_classes(source).unwrap_err() {
            ResolveError::Unsupported { detail, .. } => detail,
            other => panic!("expected Unsupported, got {other:?}"),
        };

        assert_eq!(
            unsupported("public class A : B, C { }"),
            "multiple base types"
        );
        assert_eq!(
            unsupported("public class A { public class B { } }"),
            "nested type declarations"
        );
        assert_eq!(
            unsupported("public class A { public int Get() { } }"),
            "method declarations"
        );
        assert_eq!(
            unsupported("public class A { public Dictionary<string> X; }"),
            "generic type `Dictionary`"
        );
        assert_eq!(
            unsupported("public class A { public int X = 5; }"),
            "field initializers"
        );
        assert_eq!(
            unsupported("public class A { public double X = -1.5; }"),
            "field initializers"
        );
        assert_eq!(
            unsupported(r#"public class A { public string X = "hi"; }"#),
            "field initializers"
        );
        assert_eq!(
            unsupported("public class A { public int X { get; set; } = 5; }"),
            "property initializers"
        );
        assert_eq!(
            unsupported("public struct A { }"),
            "`struct` declarations"
        );
    }

    #[test]
    fn lexical_errors_carry_line_numbers() {
        let err = parse_classes("public class A {\n    public int %;\n}").unwrap_err();
        assert!(matches!(
            err,
            ResolveError::UnexpectedChar { found: '%', line: 2 }
        ));

        let err = parse_classes("/* never closed").unwrap_err();
        assert!(matches!(err, ResolveError::UnexpectedEof { .. }));

        let err = parse_classes(r#"public class A { public string X = "open; }"#).unwrap_err();
        assert!(matches!(err, ResolveError::UnexpectedEof { .. }));
    }

    #[test]
    fn truncated_bodies_report_eof() {
        let err = parse_classes("public class A {").unwrap_err();
        assert!(matches!(err, ResolveError::UnexpectedEof { .. }));

        let err = parse_classes("namespace X {").unwrap_err();
        assert!(matches!(err, ResolveError::UnexpectedEof { .. }));
    }
}

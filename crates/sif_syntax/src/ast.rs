//! Abstract syntax tree for sif.
//!
//! The tree is a single tagged [`Node`] enum. Every node exclusively owns its children, and leaf
//! positions are recovered from the [`Token`]s the nodes carry.
//!
//! ## Notes
//! - `Display` renders a node as an S-expression, e.g. `(+ 1 (* 2 3))`. It is the textual form
//!   used by snapshot tests and by `sif --parse`.
//! - `FnDecl::params` is always a [`Node::ParamList`] and every block-valued field holds a
//!   [`Node::Block`].

use std::fmt;

use crate::lexer::Token;

// ============================================================================
// NODES
// ============================================================================

/// A node of the syntax tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Top-level sequence of declarations and statements.
    Program(Vec<Node>),
    Block(Block),
    IfStmt(IfStmt),
    ElifStmt(ElifStmt),
    ForStmt(ForStmt),
    /// `return expr?;`
    ReturnStmt(Option<Box<Node>>),
    /// An expression followed by `;`.
    ExprStmt(Box<Node>),
    VarDecl(VarDecl),
    FnDecl(FnDecl),
    /// Parameter names of a function declaration, each a [`Node::LiteralExpr`] identifier.
    ParamList(Vec<Node>),
    FnCallExpr(FnCallExpr),
    VarAssign(VarAssign),
    TableAccess(TableAccess),
    ArrayAccess(ArrayAccess),
    ArrayMutExpr(ArrayMutExpr),
    ArrayLiteral(Vec<Node>),
    TableLiteral(Vec<TableEntry>),
    BinaryExpr(BinaryExpr),
    UnaryExpr(UnaryExpr),
    /// Number, string, boolean or identifier reference.
    LiteralExpr(Token),
    /// A lone `;`.
    Empty,
}

/// `{ decls }` together with the scope depth it was parsed at.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub decls: Vec<Node>,
    pub scope_level: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub cond: Box<Node>,
    pub then_block: Box<Node>,
    /// Zero or more [`Node::ElifStmt`].
    pub elifs: Vec<Node>,
    pub else_block: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElifStmt {
    pub cond: Box<Node>,
    pub block: Box<Node>,
}

/// `for k (, v)? in iterable { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub vars: Vec<Token>,
    pub iterable: Box<Node>,
    pub block: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub name: Token,
    pub is_global: bool,
    pub init: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FnDecl {
    pub name: Token,
    pub params: Box<Node>,
    pub body: Box<Node>,
    /// Scope level of the function body.
    pub scope_level: usize,
}

impl FnDecl {
    /// Parameter names in declaration order.
    pub fn param_names(&self) -> Vec<&str> {
        match self.params.as_ref() {
            Node::ParamList(items) => items
                .iter()
                .filter_map(|p| match p {
                    Node::LiteralExpr(token) => Some(token.name()),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FnCallExpr {
    pub name: Token,
    pub args: Vec<Node>,
    pub is_builtin: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarAssign {
    pub target: Token,
    /// `true` when the assigned declaration lives in the global scope.
    pub is_global: bool,
    pub value: Box<Node>,
}

/// `base.key`
#[derive(Debug, Clone, PartialEq)]
pub struct TableAccess {
    pub base: Token,
    pub key: Box<Node>,
}

/// `base[index]`
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayAccess {
    pub base: Token,
    pub index: Box<Node>,
}

/// `base[index] = value`
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayMutExpr {
    pub base: Token,
    pub index: Box<Node>,
    pub value: Box<Node>,
}

/// `key => value` inside a table literal. The key is an identifier or string token.
#[derive(Debug, Clone, PartialEq)]
pub struct TableEntry {
    pub key: Token,
    pub value: Node,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub op: Token,
    pub lhs: Box<Node>,
    pub rhs: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub op: Token,
    pub operand: Box<Node>,
}

impl Node {
    /// Top-level items of a [`Node::Program`]; empty for any other node.
    pub fn items(&self) -> &[Node] {
        match self {
            Node::Program(items) => items,
            _ => &[],
        }
    }

    /// Short name of the node variant, used in logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Program(_) => "program",
            Node::Block(_) => "block",
            Node::IfStmt(_) => "if",
            Node::ElifStmt(_) => "elif",
            Node::ForStmt(_) => "for",
            Node::ReturnStmt(_) => "return",
            Node::ExprStmt(_) => "expr",
            Node::VarDecl(_) => "var",
            Node::FnDecl(_) => "fn",
            Node::ParamList(_) => "params",
            Node::FnCallExpr(_) => "call",
            Node::VarAssign(_) => "assign",
            Node::TableAccess(_) => "table-access",
            Node::ArrayAccess(_) => "array-access",
            Node::ArrayMutExpr(_) => "array-mut",
            Node::ArrayLiteral(_) => "array",
            Node::TableLiteral(_) => "table",
            Node::BinaryExpr(_) => "binary",
            Node::UnaryExpr(_) => "unary",
            Node::LiteralExpr(_) => "literal",
            Node::Empty => "empty",
        }
    }
}

// ============================================================================
// S-EXPRESSION RENDERING
// ============================================================================

fn write_spaced(f: &mut fmt::Formatter<'_>, nodes: &[Node]) -> fmt::Result {
    for node in nodes {
        write!(f, " {node}")?;
    }
    Ok(())
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Program(items) => {
                f.write_str("(program")?;
                write_spaced(f, items)?;
                f.write_str(")")
            }
            Node::Block(block) => {
                write!(f, "(block:{}", block.scope_level)?;
                write_spaced(f, &block.decls)?;
                f.write_str(")")
            }
            Node::IfStmt(stmt) => {
                write!(f, "(if {} {}", stmt.cond, stmt.then_block)?;
                write_spaced(f, &stmt.elifs)?;
                if let Some(else_block) = &stmt.else_block {
                    write!(f, " (else {else_block})")?;
                }
                f.write_str(")")
            }
            Node::ElifStmt(stmt) => write!(f, "(elif {} {})", stmt.cond, stmt.block),
            Node::ForStmt(stmt) => {
                f.write_str("(for (")?;
                for (i, var) in stmt.vars.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{var}")?;
                }
                write!(f, ") {} {})", stmt.iterable, stmt.block)
            }
            Node::ReturnStmt(Some(value)) => write!(f, "(return {value})"),
            Node::ReturnStmt(None) => f.write_str("(return)"),
            Node::ExprStmt(expr) => write!(f, "(expr {expr})"),
            Node::VarDecl(decl) => match &decl.init {
                Some(init) => write!(f, "(var {} {init})", decl.name),
                None => write!(f, "(var {})", decl.name),
            },
            Node::FnDecl(decl) => write!(f, "(fn {} {} {})", decl.name, decl.params, decl.body),
            Node::ParamList(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
            Node::FnCallExpr(call) => {
                write!(f, "(call {}", call.name)?;
                write_spaced(f, &call.args)?;
                f.write_str(")")
            }
            Node::VarAssign(assign) => write!(f, "(= {} {})", assign.target, assign.value),
            Node::TableAccess(access) => write!(f, "(. {} {})", access.base, access.key),
            Node::ArrayAccess(access) => write!(f, "([] {} {})", access.base, access.index),
            Node::ArrayMutExpr(mutation) => {
                write!(f, "([]= {} {} {})", mutation.base, mutation.index, mutation.value)
            }
            Node::ArrayLiteral(items) => {
                f.write_str("(array")?;
                write_spaced(f, items)?;
                f.write_str(")")
            }
            Node::TableLiteral(entries) => {
                f.write_str("(table")?;
                for entry in entries {
                    write!(f, " ({} {})", entry.key, entry.value)?;
                }
                f.write_str(")")
            }
            Node::BinaryExpr(expr) => write!(f, "({} {} {})", expr.op, expr.lhs, expr.rhs),
            Node::UnaryExpr(expr) => write!(f, "({} {})", expr.op, expr.operand),
            Node::LiteralExpr(token) => write!(f, "{token}"),
            Node::Empty => f.write_str("()"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;
    use sif_core::lang::operators::OperatorId;

    fn num(text: &str) -> Node {
        Node::LiteralExpr(Token::number(text, 1, 1))
    }

    #[test]
    fn test_binary_renders_prefix() {
        let node = Node::BinaryExpr(BinaryExpr {
            op: Token::new(TokenKind::Operator(OperatorId::Plus), 1, 3),
            lhs: Box::new(num("1")),
            rhs: Box::new(Node::UnaryExpr(UnaryExpr {
                op: Token::new(TokenKind::Operator(OperatorId::Minus), 1, 5),
                operand: Box::new(num("2")),
            })),
        });
        assert_eq!(node.to_string(), "(+ 1 (- 2))");
    }

    #[test]
    fn test_table_literal_quotes_string_keys() {
        let node = Node::TableLiteral(vec![
            TableEntry {
                key: Token::identifier("a", 1, 1),
                value: num("1"),
            },
            TableEntry {
                key: Token::string("b c", 1, 1),
                value: Node::LiteralExpr(Token::string("x", 1, 1)),
            },
        ]);
        assert_eq!(node.to_string(), r#"(table (a 1) ("b c" "x"))"#);
    }

    #[test]
    fn test_param_names() {
        let decl = FnDecl {
            name: Token::identifier("f", 1, 4),
            params: Box::new(Node::ParamList(vec![
                Node::LiteralExpr(Token::identifier("a", 1, 6)),
                Node::LiteralExpr(Token::identifier("b", 1, 9)),
            ])),
            body: Box::new(Node::Block(Block {
                decls: vec![],
                scope_level: 1,
            })),
            scope_level: 1,
        };
        assert_eq!(decl.param_names(), vec!["a", "b"]);
        assert_eq!(Node::FnDecl(decl).to_string(), "(fn f (a b) (block:1))");
    }

    #[test]
    fn test_items_of_non_program_is_empty() {
        assert!(Node::Empty.items().is_empty());
        assert_eq!(Node::Program(vec![Node::Empty]).items().len(), 1);
    }
}

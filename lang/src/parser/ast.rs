use serde::Serialize;

/// A statement sequence: the whole buffer, or the body of a block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Program {
    pub statements: Vec<Node>,
}

/// `range(<argument>)`, only valid as the iterable of a `for` loop.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct RangeExpression {
    pub argument: Box<Node>,
}

/// Statements and expressions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Node {
    // Control flow
    IfStatement {
        condition: Box<Node>,
        body: Program,
        else_body: Option<Program>,
    },
    WhileStatement {
        condition: Box<Node>,
        body: Program,
    },
    ForStatement {
        iterator: String,
        range: RangeExpression,
        body: Program,
    },
    FunctionDefinition {
        name: String,
        parameters: Vec<String>,
        body: Program,
    },
    ReturnStatement {
        expression: Option<Box<Node>>,
    },

    // Bindings
    Assignment {
        name: String,
        value: Box<Node>,
    },
    AugmentedAssignment {
        name: String,
        op: AugmentedOperator,
        value: Box<Node>,
    },

    // Expressions
    FunctionCall {
        name: String,
        arguments: Vec<Node>,
    },
    BinaryOp {
        left: Box<Node>,
        op: BinaryOperator,
        right: Box<Node>,
    },
    ParenthesizedExpression {
        expression: Box<Node>,
    },

    // Literals
    Number {
        value: i64,
    },
    Float {
        value: f64,
    },
    String {
        value: String,
    },
    Identifier {
        value: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinaryOperator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
    #[serde(rename = "==")]
    Equal,
    #[serde(rename = "!=")]
    NotEqual,
    #[serde(rename = "<")]
    Less,
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = "<=")]
    LessEqual,
    #[serde(rename = ">=")]
    GreaterEqual,
}

impl BinaryOperator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let op = match symbol {
            "+" => BinaryOperator::Add,
            "-" => BinaryOperator::Subtract,
            "*" => BinaryOperator::Multiply,
            "/" => BinaryOperator::Divide,
            "==" => BinaryOperator::Equal,
            "!=" => BinaryOperator::NotEqual,
            "<" => BinaryOperator::Less,
            ">" => BinaryOperator::Greater,
            "<=" => BinaryOperator::LessEqual,
            ">=" => BinaryOperator::GreaterEqual,
            _ => return None,
        };
        Some(op)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AugmentedOperator {
    #[serde(rename = "+=")]
    AddAssign,
    #[serde(rename = "-=")]
    SubtractAssign,
    #[serde(rename = "*=")]
    MultiplyAssign,
    #[serde(rename = "/=")]
    DivideAssign,
}

impl AugmentedOperator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+=" => Some(AugmentedOperator::AddAssign),
            "-=" => Some(AugmentedOperator::SubtractAssign),
            "*=" => Some(AugmentedOperator::MultiplyAssign),
            "/=" => Some(AugmentedOperator::DivideAssign),
            _ => None,
        }
    }
}

//! Calculator tool — evaluates arithmetic expressions.
//!
//! Supports `+`, `-`, `*`, `/`, `%`, `^`, parentheses, and unary
//! negation. A precedence-climbing parser, no `eval`, no dependencies
//! beyond std. Accepts either a bare expression string or an object with
//! an `expression` field, since decisions pass `tool_input` through
//! verbatim.

use async_trait::async_trait;
use reagent_core::error::ToolError;
use reagent_core::tool::Tool;

pub struct CalculatorTool;

#[async_trait]
impl Tool for CalculatorTool {
    fn name(&self) -> &str {
        "calculator"
    }

    fn description(&self) -> &str {
        "Evaluate an arithmetic expression. Supports +, -, *, /, %, ^, parentheses, \
         and decimal numbers."
    }

    fn input_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "expression": {
                    "type": "string",
                    "description": "The expression to evaluate, e.g. '(2 + 3) * 4'"
                }
            },
            "required": ["expression"]
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<String, ToolError> {
        let expr = extract_expression(&input)?;
        let value = evaluate(&expr).map_err(|reason| ToolError::ExecutionFailed {
            tool_name: "calculator".into(),
            reason,
        })?;
        Ok(format_number(value))
    }
}

/// Pulls the expression out of whatever shape the decision sent.
fn extract_expression(input: &serde_json::Value) -> Result<String, ToolError> {
    match input {
        serde_json::Value::String(s) => Ok(s.clone()),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Object(map) => map
            .get("expression")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| ToolError::InvalidInput("Missing 'expression' field".into())),
        other => Err(ToolError::InvalidInput(format!(
            "Expected an expression string or an object with 'expression', got: {other}"
        ))),
    }
}

/// Integer-valued results render without a decimal point.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

// ── Precedence-climbing expression evaluator ──────────────────────────────

/// Evaluate an arithmetic expression string.
pub fn evaluate(expr: &str) -> Result<f64, String> {
    let tokens = tokenize(expr)?;
    let mut cursor = Cursor::new(&tokens);
    let value = parse_binary(&mut cursor, 1)?;
    if let Some(tok) = cursor.peek() {
        return Err(format!("Unexpected trailing token: {tok:?}"));
    }
    Ok(value)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

impl Op {
    fn precedence(self) -> u8 {
        match self {
            Op::Add | Op::Sub => 1,
            Op::Mul | Op::Div | Op::Rem => 2,
            Op::Pow => 3,
        }
    }

    fn right_assoc(self) -> bool {
        matches!(self, Op::Pow)
    }

    fn apply(self, lhs: f64, rhs: f64) -> Result<f64, String> {
        match self {
            Op::Add => Ok(lhs + rhs),
            Op::Sub => Ok(lhs - rhs),
            Op::Mul => Ok(lhs * rhs),
            Op::Div => {
                if rhs == 0.0 {
                    Err("Division by zero".into())
                } else {
                    Ok(lhs / rhs)
                }
            }
            Op::Rem => {
                if rhs == 0.0 {
                    Err("Modulo by zero".into())
                } else {
                    Ok(lhs % rhs)
                }
            }
            Op::Pow => Ok(lhs.powf(rhs)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Op(Op),
    LParen,
    RParen,
}

fn tokenize(input: &str) -> Result<Vec<Token>, String> {
    let mut tokens = Vec::new();
    let chars: Vec<char> = input.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            ' ' | '\t' | '\n' | '\r' => i += 1,
            '+' => {
                tokens.push(Token::Op(Op::Add));
                i += 1;
            }
            '-' => {
                tokens.push(Token::Op(Op::Sub));
                i += 1;
            }
            '*' => {
                tokens.push(Token::Op(Op::Mul));
                i += 1;
            }
            '/' => {
                tokens.push(Token::Op(Op::Div));
                i += 1;
            }
            '%' => {
                tokens.push(Token::Op(Op::Rem));
                i += 1;
            }
            '^' => {
                tokens.push(Token::Op(Op::Pow));
                i += 1;
            }
            '(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            c if c.is_ascii_digit() || c == '.' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                let num_str: String = chars[start..i].iter().collect();
                let num: f64 = num_str
                    .parse()
                    .map_err(|_| format!("Invalid number: {num_str}"))?;
                tokens.push(Token::Number(num));
            }
            c => return Err(format!("Unexpected character: '{c}'")),
        }
    }

    Ok(tokens)
}

struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&Token> {
        let tok = self.tokens.get(self.pos);
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }
}

/// Climb operators at or above `min_prec`, folding as we go.
fn parse_binary(cursor: &mut Cursor, min_prec: u8) -> Result<f64, String> {
    let mut lhs = parse_atom(cursor)?;

    loop {
        let op = match cursor.peek() {
            Some(Token::Op(op)) if op.precedence() >= min_prec => *op,
            _ => break,
        };
        cursor.advance();

        let next_min = if op.right_assoc() {
            op.precedence()
        } else {
            op.precedence() + 1
        };
        let rhs = parse_binary(cursor, next_min)?;
        lhs = op.apply(lhs, rhs)?;
    }

    Ok(lhs)
}

/// atom = NUMBER | '-' atom | '(' expression ')'
fn parse_atom(cursor: &mut Cursor) -> Result<f64, String> {
    match cursor.advance() {
        Some(Token::Number(n)) => Ok(*n),
        Some(Token::Op(Op::Sub)) => Ok(-parse_atom(cursor)?),
        Some(Token::LParen) => {
            let value = parse_binary(cursor, 1)?;
            match cursor.advance() {
                Some(Token::RParen) => Ok(value),
                _ => Err("Expected closing parenthesis".into()),
            }
        }
        Some(tok) => Err(format!("Unexpected token: {tok:?}")),
        None => Err("Unexpected end of expression".into()),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────

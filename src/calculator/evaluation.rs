//! Arithmetic evaluation of normalized expressions.
//!
//! tokenize -> shunting-yard (RPN) -> stack evaluation
//!
//! The input is expected to contain only decimal literals, `+ - * /` and
//! parentheses. Anything else is rejected with an [`EvalError`] instead of
//! silently producing a number.

use crate::error::EvalError;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Num(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LPar,
    RPar,
}

/// Operators as they sit on the shunting-yard stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Neg,
    Pos,
    LPar,
}

impl Op {
    fn precedence(self) -> u8 {
        match self {
            Op::Add | Op::Sub => 1,
            Op::Mul | Op::Div => 2,
            Op::Neg | Op::Pos => 3,
            Op::LPar => 0,
        }
    }

    fn is_unary(self) -> bool {
        matches!(self, Op::Neg | Op::Pos)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Rpn {
    Num(f64),
    Op(Op),
}

fn tokenize(expr: &str) -> Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::new();
    let chars: Vec<(usize, char)> = expr.char_indices().collect();
    let mut i = 0;

    while i < chars.len() {
        let (position, c) = chars[i];

        if c.is_ascii_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '+' => Some(Token::Plus),
            '-' => Some(Token::Minus),
            '*' => Some(Token::Star),
            '/' => Some(Token::Slash),
            '(' => Some(Token::LPar),
            ')' => Some(Token::RPar),
            _ => None,
        };
        if let Some(token) = simple {
            tokens.push(token);
            i += 1;
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let start = position;
            while i < chars.len() && (chars[i].1.is_ascii_digit() || chars[i].1 == '.') {
                i += 1;
            }
            let end = chars.get(i).map(|(pos, _)| *pos).unwrap_or(expr.len());
            let literal = &expr[start..end];
            let value = literal
                .parse::<f64>()
                .map_err(|_| EvalError::InvalidNumber(literal.to_string()))?;
            tokens.push(Token::Num(value));
            continue;
        }

        return Err(EvalError::UnexpectedCharacter { ch: c, position });
    }

    Ok(tokens)
}

/// Pop operators that bind at least as tightly as `incoming`.
fn pop_while_binding(ops: &mut Vec<Op>, out: &mut Vec<Rpn>, incoming: Op) {
    while let Some(&top) = ops.last() {
        if top == Op::LPar {
            break;
        }
        // unary operators are right-associative
        let should_pop = if incoming.is_unary() {
            top.precedence() > incoming.precedence()
        } else {
            top.precedence() >= incoming.precedence()
        };
        if !should_pop {
            break;
        }
        out.push(Rpn::Op(top));
        ops.pop();
    }
}

fn to_rpn(tokens: &[Token]) -> Result<Vec<Rpn>, EvalError> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Op> = Vec::new();

    // True whenever the next token has to start an operand.
    let mut expect_operand = true;

    for &token in tokens {
        match token {
            Token::Num(value) => {
                if !expect_operand {
                    return Err(EvalError::MissingOperand);
                }
                out.push(Rpn::Num(value));
                expect_operand = false;
            }

            Token::LPar => {
                if !expect_operand {
                    return Err(EvalError::MissingOperand);
                }
                ops.push(Op::LPar);
            }

            Token::RPar => {
                if expect_operand {
                    return Err(EvalError::MissingOperand);
                }
                loop {
                    match ops.pop() {
                        Some(Op::LPar) => break,
                        Some(op) => out.push(Rpn::Op(op)),
                        None => return Err(EvalError::UnbalancedParentheses),
                    }
                }
            }

            Token::Plus | Token::Minus if expect_operand => {
                let op = if token == Token::Minus { Op::Neg } else { Op::Pos };
                pop_while_binding(&mut ops, &mut out, op);
                ops.push(op);
            }

            Token::Plus | Token::Minus | Token::Star | Token::Slash => {
                if expect_operand {
                    return Err(EvalError::MissingOperand);
                }
                let op = match token {
                    Token::Plus => Op::Add,
                    Token::Minus => Op::Sub,
                    Token::Star => Op::Mul,
                    _ => Op::Div,
                };
                pop_while_binding(&mut ops, &mut out, op);
                ops.push(op);
                expect_operand = true;
            }
        }
    }

    if expect_operand {
        return Err(EvalError::MissingOperand);
    }

    while let Some(op) = ops.pop() {
        if op == Op::LPar {
            return Err(EvalError::UnbalancedParentheses);
        }
        out.push(Rpn::Op(op));
    }

    Ok(out)
}

fn eval_rpn(rpn: &[Rpn]) -> Result<f64, EvalError> {
    let mut stack: Vec<f64> = Vec::new();

    for &item in rpn {
        match item {
            Rpn::Num(value) => stack.push(value),
            Rpn::Op(op) if op.is_unary() => {
                let x = stack.pop().ok_or(EvalError::MissingOperand)?;
                stack.push(if op == Op::Neg { -x } else { x });
            }
            Rpn::Op(op) => {
                let b = stack.pop().ok_or(EvalError::MissingOperand)?;
                let a = stack.pop().ok_or(EvalError::MissingOperand)?;
                let value = match op {
                    Op::Add => a + b,
                    Op::Sub => a - b,
                    Op::Mul => a * b,
                    Op::Div => a / b,
                    _ => return Err(EvalError::UnbalancedParentheses),
                };
                stack.push(value);
            }
        }
    }

    match (stack.pop(), stack.is_empty()) {
        (Some(value), true) => Ok(value),
        _ => Err(EvalError::MissingOperand),
    }
}

/// Evaluate a normalized arithmetic expression.
///
/// Division by zero is not an error here: it yields IEEE-754 infinity or NaN,
/// which the formatter rejects afterwards.
pub fn evaluate_arithmetic(expr: &str) -> Result<f64, EvalError> {
    let tokens = tokenize(expr)?;
    if tokens.is_empty() {
        return Err(EvalError::Empty);
    }

    let rpn = to_rpn(&tokens)?;
    let value = eval_rpn(&rpn)?;
    tracing::trace!("Evaluated {:?} = {}", expr, value);
    Ok(value)
}

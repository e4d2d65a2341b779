use crate::ast::{self, Node};
use crate::builtins::BUILTINS;
use crate::environment::Environment;
use crate::object::{EvalError, FunctionObject, HashKey, HashValue, Object, Result};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::convert::TryInto;
use std::rc::Rc;

pub fn eval(node: Node, env: &Rc<RefCell<Environment>>) -> Result<Object> {
    match node {
        Node::Program(prog) => eval_program(prog, env),
        Node::Statement(s) => match s {
            ast::Statement::Expr(stmt) => eval(stmt.expression.into(), env),
            ast::Statement::Block(stmt) => eval_block_statement(stmt, env),
            ast::Statement::Return(stmt) => Ok(Object::ReturnValue(Box::new(eval(
                stmt.return_value.into(),
                env,
            )?))),
            ast::Statement::Let(stmt) => {
                let val = eval(stmt.value.into(), env)?;
                env.borrow_mut().set(&stmt.name.value, val);

                Ok(Object::Null)
            }
        },
        Node::Expression(e) => match e {
            ast::Expression::IntegerLiteral(l) => Ok(l.value.into()),
            ast::Expression::String(s) => Ok(Object::String(s.value)),
            ast::Expression::Boolean(b) => Ok(b.value.into()),
            ast::Expression::Prefix(prefix) => {
                let right = eval((*prefix.right).into(), env)?;
                eval_prefix_expression(prefix.operator, right)
            }
            ast::Expression::Infix(infix) => {
                let left = eval((*infix.left).into(), env)?;
                let right = eval((*infix.right).into(), env)?;
                eval_infix_expression(infix.operator, left, right)
            }
            ast::Expression::If(if_expression) => eval_if_expression(if_expression, env),
            ast::Expression::Identifier(identifier) => env
                .borrow()
                .get(&identifier.value)
                .or_else(|| BUILTINS.with(|b| b.get(&identifier.value).cloned()))
                .ok_or_else(|| EvalError::IdentifierNotFound {
                    id: identifier.value.clone(),
                }),
            ast::Expression::Function(fn_literal) => Ok(Object::Function(FunctionObject {
                parameters: fn_literal.parameters,
                body: fn_literal.body,
                env: Rc::clone(env),
            })),
            ast::Expression::Call(call) => {
                let function = eval((*call.function).into(), env)?;
                let args = eval_expressions(call.arguments, env)?;
                apply_function(function, args)
            }
            ast::Expression::Array(a) => eval_expressions(a.elements, env).map(Object::Array),
            ast::Expression::Hash(h) => eval_hash_literal(h.pairs, env),
            ast::Expression::Index(i) => {
                let left = eval((*i.left).into(), env)?;
                let index = eval((*i.index).into(), env)?;
                eval_index_expression(left, index)
            }
        },
    }
}

fn eval_program(program: ast::Program, env: &Rc<RefCell<Environment>>) -> Result<Object> {
    let mut result = Object::default();

    for stmt in program.statements.into_iter() {
        result = eval(stmt.into(), env)?;

        if let Object::ReturnValue(obj) = result {
            return Ok(*obj);
        }
    }

    Ok(result)
}

fn eval_block_statement(
    block: ast::BlockStatement,
    env: &Rc<RefCell<Environment>>,
) -> Result<Object> {
    let mut result = Object::default();

    for stmt in block.statements.into_iter() {
        result = eval(stmt.into(), env)?;

        if result.is_return_value() {
            return Ok(result);
        }
    }

    Ok(result)
}

fn eval_expressions(
    exprs: Vec<ast::Expression>,
    env: &Rc<RefCell<Environment>>,
) -> Result<Vec<Object>> {
    let mut result = vec![];

    for expr in exprs.into_iter() {
        result.push(eval(expr.into(), env)?)
    }
    Ok(result)
}

fn eval_prefix_expression(operator: ast::Operator, right: Object) -> Result<Object> {
    match operator {
        ast::Operator::Bang => Ok(eval_bang_operator(right)),
        ast::Operator::Minus => eval_prefix_minus_operator(right),
        _ => Err(EvalError::UnknownPrefixOperator {
            operator,
            operand: right.type_name(),
        }),
    }
}

// Integer and string pairs dispatch on their own operator tables; identity
// comparison applies only to the types left over after that.
fn eval_infix_expression(operator: ast::Operator, left: Object, right: Object) -> Result<Object> {
    match (left, right) {
        (Object::Integer(x), Object::Integer(y)) => {
            eval_integer_infix_expression(operator, x, y)
        }
        (Object::String(a), Object::String(b)) => eval_string_infix_expression(operator, a, b),
        (a, b) => match operator {
            ast::Operator::Eq => Ok((a == b).into()),
            ast::Operator::NotEq => Ok((a != b).into()),
            op => Err(EvalError::binary_op_error(a.type_name(), op, b.type_name())),
        },
    }
}

fn eval_bang_operator(right: Object) -> Object {
    (!right.truth_value()).into()
}

fn eval_prefix_minus_operator(right: Object) -> Result<Object> {
    match right {
        Object::Integer(n) => Ok(n.wrapping_neg().into()),
        a => Err(EvalError::UnknownPrefixOperator {
            operator: ast::Operator::Minus,
            operand: a.type_name(),
        }),
    }
}

// Arithmetic wraps on overflow, matching two's-complement machine behavior.
fn eval_integer_infix_expression(operator: ast::Operator, left: i64, right: i64) -> Result<Object> {
    match operator {
        ast::Operator::Plus => Ok(left.wrapping_add(right).into()),
        ast::Operator::Minus => Ok(left.wrapping_sub(right).into()),
        ast::Operator::Asterisk => Ok(left.wrapping_mul(right).into()),
        ast::Operator::Slash => {
            if right == 0 {
                Err(EvalError::DivisionByZero { left })
            } else {
                Ok(left.wrapping_div(right).into())
            }
        }
        ast::Operator::LT => Ok((left < right).into()),
        ast::Operator::GT => Ok((left > right).into()),
        ast::Operator::Eq => Ok((left == right).into()),
        ast::Operator::NotEq => Ok((left != right).into()),
        op => Err(EvalError::UnknownInfixOperator {
            left: "INTEGER",
            operator: op,
            right: "INTEGER",
        }),
    }
}

fn eval_string_infix_expression(
    operator: ast::Operator,
    left: String,
    right: String,
) -> Result<Object> {
    match operator {
        ast::Operator::Plus => Ok(Object::String(left + &right)),
        op => Err(EvalError::UnknownInfixOperator {
            left: "STRING",
            operator: op,
            right: "STRING",
        }),
    }
}

fn eval_if_expression(
    if_expression: ast::IfExpression,
    env: &Rc<RefCell<Environment>>,
) -> Result<Object> {
    let condition = eval((*if_expression.condition).into(), env)?;

    if condition.truth_value() {
        eval(ast::Statement::Block(if_expression.consequence).into(), env)
    } else if let Some(alt) = if_expression.alternative {
        eval(ast::Statement::Block(alt).into(), env)
    } else {
        Ok(Object::Null)
    }
}

fn apply_function(func: Object, args: Vec<Object>) -> Result<Object> {
    match func {
        Object::Function(f) => {
            if args.len() != f.parameters.len() {
                return Err(EvalError::IncorrectArity {
                    got: args.len(),
                    want: f.parameters.len(),
                });
            }

            let call_env = extend_function_env(&f, args);

            eval(ast::Statement::Block(f.body).into(), &call_env).map(Object::unwrap_return)
        }
        Object::Builtin(f) => f(args),
        obj => Err(EvalError::NotAFunction {
            type_name: obj.type_name(),
        }),
    }
}

fn extend_function_env(func: &FunctionObject, args: Vec<Object>) -> Rc<RefCell<Environment>> {
    let env = Environment::with_enclosed(&func.env);

    for (param, arg) in func.parameters.iter().zip(args.into_iter()) {
        env.borrow_mut().set(&param.value, arg);
    }

    env
}

fn eval_index_expression(left: Object, index: Object) -> Result<Object> {
    match (left, index) {
        (Object::Array(arr), Object::Integer(n)) => eval_array_index_expression(arr, n),
        (Object::Hash(h), ind) => eval_hash_index_expression(h, ind),
        (a, _) => Err(EvalError::NotIndexable {
            type_name: a.type_name(),
        }),
    }
}

fn eval_array_index_expression(array: Vec<Object>, index: i64) -> Result<Object> {
    if index >= 0 && index < array.len() as i64 {
        Ok(array.into_iter().nth(index as usize).unwrap())
    } else {
        Ok(Object::Null)
    }
}

fn eval_hash_index_expression(hash: HashValue, index: Object) -> Result<Object> {
    Ok(hash
        .values
        .get(&index.try_into()?)
        .cloned()
        .unwrap_or_default())
}

fn eval_hash_literal(
    pairs: Vec<(ast::Expression, ast::Expression)>,
    env: &Rc<RefCell<Environment>>,
) -> Result<Object> {
    let mut map = BTreeMap::new();

    for (key_expr, val_expr) in pairs.into_iter() {
        let key: HashKey = eval(key_expr.into(), env)?.try_into()?;
        let value = eval(val_expr.into(), env)?;

        map.insert(key, value);
    }

    Ok(Object::Hash(HashValue { values: map }))
}

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{self, Write};
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::environment::Environment;
use crate::error::{LoxError, Result};
use crate::expr::{Expr, ExprId, LiteralValue};
use crate::stmt::Stmt;
use crate::token::{Token, TokenType};
use crate::value::{LoxFunction, Value};

/// Non-local exits during evaluation. `Return` rides the same channel as
/// errors but is caught by the nearest call frame and never reported.
enum Unwind {
    Error(LoxError),
    Return(Value),
}

impl From<LoxError> for Unwind {
    fn from(err: LoxError) -> Self {
        Unwind::Error(err)
    }
}

type Flow<T> = std::result::Result<T, Unwind>;

pub struct Interpreter {
    globals: Rc<RefCell<Environment>>,
    environment: Rc<RefCell<Environment>>,
    locals: HashMap<ExprId, usize>,
    out: Box<dyn Write>,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::with_output(Box::new(io::stdout()))
    }

    /// Route `print` output into `out` instead of stdout.
    pub fn with_output(out: Box<dyn Write>) -> Self {
        let globals = Rc::new(RefCell::new(Environment::new()));

        globals.borrow_mut().define(
            "clock",
            Value::NativeFunction {
                name: "clock".to_string(),
                arity: 0,
                func: clock_native,
            },
        );

        Interpreter {
            environment: Rc::clone(&globals),
            globals,
            locals: HashMap::new(),
            out,
        }
    }

    /// Record a variable-use site as a local found `depth` hops up the
    /// environment chain. Sites with no entry are global lookups.
    pub fn note_local(&mut self, id: ExprId, depth: usize) {
        self.locals.insert(id, depth);
    }

    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<()> {
        for stmt in statements {
            match self.execute(stmt) {
                Ok(()) => {}

                // A stray return signal is swallowed, not reported; the
                // resolver rejects `return` outside of a function.
                Err(Unwind::Return(_)) => {}

                Err(Unwind::Error(err)) => return Err(err),
            }
        }

        Ok(())
    }

    fn execute(&mut self, stmt: &Stmt) -> Flow<()> {
        match stmt {
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;

                Ok(())
            }

            Stmt::Print(expr) => {
                let value = self.evaluate(expr)?;

                writeln!(self.out, "{}", value).map_err(LoxError::from)?;

                Ok(())
            }

            Stmt::Var { name, initializer } => {
                let value: Value = if let Some(expr) = initializer {
                    self.evaluate(expr)?
                } else {
                    Value::Nil
                };

                self.environment.borrow_mut().define(&name.lexeme, value);

                Ok(())
            }

            Stmt::Block(statements) => {
                let environment = Rc::new(RefCell::new(Environment::with_enclosing(Rc::clone(
                    &self.environment,
                ))));

                self.execute_block(statements, environment)
            }

            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if is_truthy(&self.evaluate(condition)?) {
                    self.execute(then_branch)?;
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)?;
                }

                Ok(())
            }

            Stmt::While { condition, body } => {
                while is_truthy(&self.evaluate(condition)?) {
                    self.execute(body)?;
                }

                Ok(())
            }

            Stmt::Function { name, params, body } => {
                let function = Value::Function(Rc::new(LoxFunction {
                    name: name.clone(),
                    params: Rc::clone(params),
                    body: Rc::clone(body),
                    closure: Rc::clone(&self.environment),
                }));

                self.environment.borrow_mut().define(&name.lexeme, function);

                Ok(())
            }

            Stmt::Return { value, .. } => {
                let value: Value = if let Some(expr) = value {
                    self.evaluate(expr)?
                } else {
                    Value::Nil
                };

                Err(Unwind::Return(value))
            }
        }
    }

    /// Run `statements` in `environment`, restoring the previous frame on
    /// every exit path: normal completion, error, or return signal.
    fn execute_block(
        &mut self,
        statements: &[Stmt],
        environment: Rc<RefCell<Environment>>,
    ) -> Flow<()> {
        let previous = std::mem::replace(&mut self.environment, environment);

        for stmt in statements {
            if let Err(unwound) = self.execute(stmt) {
                self.environment = previous;
                return Err(unwound);
            }
        }

        self.environment = previous;

        Ok(())
    }

    fn evaluate(&mut self, expr: &Expr) -> Flow<Value> {
        match expr {
            Expr::Literal(lit) => Ok(match lit {
                LiteralValue::Number(n) => Value::Number(*n),
                LiteralValue::Str(s) => Value::String(s.clone()),
                LiteralValue::True => Value::Bool(true),
                LiteralValue::False => Value::Bool(false),
                LiteralValue::Nil => Value::Nil,
            }),

            Expr::Grouping(inner) => self.evaluate(inner),

            Expr::Unary { operator, right } => self.evaluate_unary(operator, right),

            Expr::Binary {
                left,
                operator,
                right,
            } => self.evaluate_binary(left, operator, right),

            Expr::Logical {
                left,
                operator,
                right,
            } => {
                let left_val = self.evaluate(left)?;

                if operator.token_type == TokenType::OR {
                    if is_truthy(&left_val) {
                        return Ok(left_val);
                    }
                } else if !is_truthy(&left_val) {
                    return Ok(left_val);
                }

                self.evaluate(right)
            }

            Expr::Variable { id, name } => self.look_up_variable(*id, name),

            Expr::Assign { id, name, value } => {
                let value = self.evaluate(value)?;

                match self.locals.get(id) {
                    Some(distance) => {
                        Environment::assign_at(
                            &self.environment,
                            *distance,
                            &name.lexeme,
                            value.clone(),
                        );
                    }

                    None => {
                        self.globals.borrow_mut().assign(name, value.clone())?;
                    }
                }

                Ok(value)
            }

            Expr::Call {
                callee,
                paren,
                arguments,
            } => {
                let callee_val = self.evaluate(callee)?;

                let mut args: Vec<Value> = Vec::with_capacity(arguments.len());
                for arg in arguments {
                    args.push(self.evaluate(arg)?);
                }

                self.call_value(callee_val, args, paren)
            }
        }
    }

    fn evaluate_unary(&mut self, operator: &Token, right: &Expr) -> Flow<Value> {
        let value: Value = self.evaluate(right)?;

        match operator.token_type {
            TokenType::MINUS => match value {
                Value::Number(n) => Ok(Value::Number(-n)),

                _ => Err(LoxError::runtime(operator.line, "Operand must be a number").into()),
            },

            TokenType::BANG => Ok(Value::Bool(!is_truthy(&value))),

            _ => Err(LoxError::runtime(operator.line, "Invalid unary operator").into()),
        }
    }

    fn evaluate_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> Flow<Value> {
        let left_val: Value = self.evaluate(left)?;
        let right_val: Value = self.evaluate(right)?;

        match operator.token_type {
            TokenType::PLUS => match (left_val, right_val) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),

                (Value::String(a), Value::String(b)) => Ok(Value::String(a + &b)),

                _ => Err(LoxError::runtime(
                    operator.line,
                    "Operands must be two strings or two numbers",
                )
                .into()),
            },

            TokenType::MINUS => {
                let (a, b) = check_numbers(operator, left_val, right_val)?;
                Ok(Value::Number(a - b))
            }

            TokenType::STAR => {
                let (a, b) = check_numbers(operator, left_val, right_val)?;
                Ok(Value::Number(a * b))
            }

            TokenType::SLASH => {
                let (a, b) = check_numbers(operator, left_val, right_val)?;

                if b == 0.0 {
                    Err(LoxError::divide_zero(operator.line, "Cannot divide by zero").into())
                } else {
                    Ok(Value::Number(a / b))
                }
            }

            // Both operands truncate to 64-bit integers; the result is an
            // integer-valued number.
            TokenType::PERCENT => {
                let (a, b) = check_numbers(operator, left_val, right_val)?;
                let (a, b) = (a as i64, b as i64);

                if b == 0 {
                    Err(LoxError::divide_zero(operator.line, "Cannot divide by zero").into())
                } else {
                    Ok(Value::Number((a % b) as f64))
                }
            }

            TokenType::EQUAL_EQUAL => Ok(Value::Bool(is_equal(&left_val, &right_val))),

            TokenType::BANG_EQUAL => Ok(Value::Bool(!is_equal(&left_val, &right_val))),

            TokenType::LESS => {
                let (a, b) = check_numbers(operator, left_val, right_val)?;
                Ok(Value::Bool(a < b))
            }

            TokenType::LESS_EQUAL => {
                let (a, b) = check_numbers(operator, left_val, right_val)?;
                Ok(Value::Bool(a <= b))
            }

            TokenType::GREATER => {
                let (a, b) = check_numbers(operator, left_val, right_val)?;
                Ok(Value::Bool(a > b))
            }

            TokenType::GREATER_EQUAL => {
                let (a, b) = check_numbers(operator, left_val, right_val)?;
                Ok(Value::Bool(a >= b))
            }

            _ => Err(LoxError::runtime(operator.line, "Invalid binary operator").into()),
        }
    }

    fn call_value(&mut self, callee: Value, arguments: Vec<Value>, paren: &Token) -> Flow<Value> {
        match callee {
            Value::NativeFunction { arity, func, .. } => {
                if arguments.len() != arity {
                    return Err(LoxError::runtime(
                        paren.line,
                        format!("Expected {} arguments, got {}", arity, arguments.len()),
                    )
                    .into());
                }

                func(&arguments)
                    .map_err(|msg| LoxError::runtime(paren.line, msg).into())
            }

            Value::Function(function) => {
                if arguments.len() != function.arity() {
                    return Err(LoxError::runtime(
                        paren.line,
                        format!(
                            "Expected {} arguments, got {}",
                            function.arity(),
                            arguments.len()
                        ),
                    )
                    .into());
                }

                // The call frame encloses the environment captured at
                // declaration time, not the caller's.
                let environment = Rc::new(RefCell::new(Environment::with_enclosing(Rc::clone(
                    &function.closure,
                ))));

                for (param, argument) in function.params.iter().zip(arguments) {
                    environment.borrow_mut().define(&param.lexeme, argument);
                }

                match self.execute_block(&function.body, environment) {
                    Ok(()) => Ok(Value::Nil),
                    Err(Unwind::Return(value)) => Ok(value),
                    Err(err) => Err(err),
                }
            }

            _ => Err(LoxError::runtime(paren.line, "Can only call functions and classes").into()),
        }
    }

    fn look_up_variable(&mut self, id: ExprId, name: &Token) -> Flow<Value> {
        match self.locals.get(&id) {
            Some(distance) => Ok(Environment::get_at(
                &self.environment,
                *distance,
                &name.lexeme,
            )),

            None => Ok(self.globals.borrow().get(name)?),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Nil => false,

        Value::Bool(b) => *b,

        _ => true,
    }
}

fn is_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Nil, Value::Nil) => true,

        (Value::Number(a), Value::Number(b)) => a == b,

        (Value::String(a), Value::String(b)) => a == b,

        (Value::Bool(a), Value::Bool(b)) => a == b,

        (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),

        _ => false,
    }
}

fn check_numbers(operator: &Token, left: Value, right: Value) -> Flow<(f64, f64)> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((a, b)),

        _ => Err(LoxError::runtime(operator.line, "Operands must be numbers").into()),
    }
}

fn clock_native(_args: &[Value]) -> std::result::Result<Value, String> {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| format!("Clock error: {}", e))?
        .as_secs();

    Ok(Value::Number(seconds as f64))
}

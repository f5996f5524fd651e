mod parser_tests {
    use glox as lox;

    use lox::ast_printer::AstPrinter;
    use lox::error::LoxError;
    use lox::expr::{Expr, LiteralValue};
    use lox::parser::Parser;
    use lox::scanner::Scanner;
    use lox::stmt::Stmt;

    fn parse_source(source: &str) -> (Vec<Stmt>, Vec<LoxError>) {
        let mut scanner = Scanner::new(source);
        let tokens = scanner.scan_tokens();

        assert!(!scanner.had_error(), "scan failed for {:?}", source);

        let mut parser = Parser::new(&tokens);
        parser.parse()
    }

    fn parse_expr(source: &str) -> Expr {
        let (statements, errors) = parse_source(source);

        assert!(errors.is_empty(), "parse errors: {:?}", errors);
        assert_eq!(statements.len(), 1);

        match statements.into_iter().next().unwrap() {
            Stmt::Expression(expr) | Stmt::Print(expr) => expr,
            other => panic!("expected an expression statement, got {:?}", other),
        }
    }

    fn printed(source: &str) -> String {
        AstPrinter::print(&parse_expr(source))
    }

    #[test]
    fn test_parser_01_term_factor_precedence() {
        assert_eq!(printed("1 + 2 * 3;"), "(+ 1.0 (* 2.0 3.0))");
        assert_eq!(printed("1 * 2 + 3;"), "(+ (* 1.0 2.0) 3.0)");
        assert_eq!(printed("4 % 3 * 2;"), "(* (% 4.0 3.0) 2.0)");
    }

    #[test]
    fn test_parser_02_grouping() {
        assert_eq!(printed("(1 + 2) * 3;"), "(* (group (+ 1.0 2.0)) 3.0)");
    }

    #[test]
    fn test_parser_03_unary() {
        assert_eq!(printed("!!true;"), "(! (! true))");
        assert_eq!(printed("-1 - -2;"), "(- (- 1.0) (- 2.0))");
    }

    #[test]
    fn test_parser_04_comparison_and_equality() {
        assert_eq!(printed("1 < 2 == true;"), "(== (< 1.0 2.0) true)");
        assert_eq!(printed("1 >= 2 != 3 <= 4;"), "(!= (>= 1.0 2.0) (<= 3.0 4.0))");
    }

    #[test]
    fn test_parser_05_logical_precedence() {
        assert_eq!(printed("a or b and c;"), "(or a (and b c))");
        assert_eq!(printed("a and b or c;"), "(or (and a b) c)");
    }

    #[test]
    fn test_parser_06_assignment_is_right_associative() {
        assert_eq!(printed("a = b = 1;"), "(= a (= b 1.0))");
    }

    #[test]
    fn test_parser_07_calls() {
        assert_eq!(printed("foo(1, 2)(3);"), "(call (call foo 1.0 2.0) 3.0)");
        assert_eq!(printed("foo();"), "(call foo)");
    }

    #[test]
    fn test_parser_08_literals() {
        assert_eq!(printed("nil;"), "nil");
        assert_eq!(printed("\"hi\";"), "hi");
        assert_eq!(printed("2.5;"), "2.5");
    }

    #[test]
    fn test_parser_09_printer_is_stable() {
        let source = "1 + (2 - 3) * -4;";

        let first = printed(source);
        let second = printed(source);

        assert_eq!(first, second);
        assert_eq!(first, "(+ 1.0 (* (group (- 2.0 3.0)) (- 4.0)))");
    }

    #[test]
    fn test_parser_10_var_declaration() {
        let (statements, errors) = parse_source("var x = 1; var y;");
        assert!(errors.is_empty());
        assert_eq!(statements.len(), 2);

        match &statements[0] {
            Stmt::Var { name, initializer } => {
                assert_eq!(name.lexeme, "x");
                assert!(initializer.is_some());
            }
            other => panic!("expected var declaration, got {:?}", other),
        }

        match &statements[1] {
            Stmt::Var { name, initializer } => {
                assert_eq!(name.lexeme, "y");
                assert!(initializer.is_none());
            }
            other => panic!("expected var declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_parser_11_if_else_binds_to_nearest() {
        let (statements, errors) = parse_source("if (a) if (b) print 1; else print 2;");
        assert!(errors.is_empty());
        assert_eq!(statements.len(), 1);

        match &statements[0] {
            Stmt::If {
                then_branch,
                else_branch,
                ..
            } => {
                assert!(else_branch.is_none());
                match then_branch.as_ref() {
                    Stmt::If { else_branch, .. } => assert!(else_branch.is_some()),
                    other => panic!("expected nested if, got {:?}", other),
                }
            }
            other => panic!("expected if statement, got {:?}", other),
        }
    }

    #[test]
    fn test_parser_12_for_desugars_to_while() {
        let (statements, errors) = parse_source("for (var i = 0; i < 3; i = i + 1) print i;");
        assert!(errors.is_empty());
        assert_eq!(statements.len(), 1);

        // Block([Var, While { cond, Block([Print, Expression(assign)]) }])
        let outer = match &statements[0] {
            Stmt::Block(stmts) => stmts,
            other => panic!("expected outer block, got {:?}", other),
        };
        assert_eq!(outer.len(), 2);
        assert!(matches!(outer[0], Stmt::Var { .. }));

        let (condition, body) = match &outer[1] {
            Stmt::While { condition, body } => (condition, body),
            other => panic!("expected while, got {:?}", other),
        };
        assert!(matches!(condition, Expr::Binary { .. }));

        let inner = match body.as_ref() {
            Stmt::Block(stmts) => stmts,
            other => panic!("expected body block, got {:?}", other),
        };
        assert_eq!(inner.len(), 2);
        assert!(matches!(inner[0], Stmt::Print(_)));
        assert!(matches!(inner[1], Stmt::Expression(Expr::Assign { .. })));
    }

    #[test]
    fn test_parser_13_for_with_empty_clauses() {
        let (statements, errors) = parse_source("for (;;) print 1;");
        assert!(errors.is_empty());

        match &statements[0] {
            Stmt::While { condition, body } => {
                assert!(matches!(condition, Expr::Literal(LiteralValue::True)));
                assert!(matches!(body.as_ref(), Stmt::Print(_)));
            }
            other => panic!("expected bare while, got {:?}", other),
        }
    }

    #[test]
    fn test_parser_14_function_declaration() {
        let (statements, errors) = parse_source("fun add(a, b) { return a + b; }");
        assert!(errors.is_empty());

        match &statements[0] {
            Stmt::Function { name, params, body } => {
                assert_eq!(name.lexeme, "add");
                assert_eq!(params.len(), 2);
                assert_eq!(body.len(), 1);
                assert!(matches!(body[0], Stmt::Return { .. }));
            }
            other => panic!("expected function declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_parser_15_invalid_assignment_target() {
        let (_, errors) = parse_source("1 = 2;");

        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("Invalid assignment target"));
        assert!(errors[0].to_string().starts_with("[line 1] Error:"));
    }

    #[test]
    fn test_parser_16_recovery_reports_multiple_errors() {
        let (statements, errors) = parse_source("var 1;\nprint;\nvar x = 3;");

        assert_eq!(errors.len(), 2);
        // The declaration after the second error still parses.
        assert_eq!(statements.len(), 1);
        assert!(matches!(statements[0], Stmt::Var { .. }));
    }

    #[test]
    fn test_parser_17_error_at_end() {
        let (_, errors) = parse_source("print 1");

        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("at end"));
    }

    #[test]
    fn test_parser_18_argument_cap() {
        let args = (0..256)
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let source = format!("foo({});", args);

        let (statements, errors) = parse_source(&source);

        // Reported, not fatal: the call still parses.
        assert_eq!(statements.len(), 1);
        assert_eq!(errors.len(), 1);
        assert!(errors[0]
            .to_string()
            .contains("Cannot have more than 255 arguments"));
    }

    #[test]
    fn test_parser_19_parameter_cap() {
        let params = (0..256)
            .map(|i| format!("p{}", i))
            .collect::<Vec<_>>()
            .join(", ");
        let source = format!("fun big({}) {{ return; }}", params);

        let (statements, errors) = parse_source(&source);

        assert_eq!(statements.len(), 1);
        assert_eq!(errors.len(), 1);
        assert!(errors[0]
            .to_string()
            .contains("Cannot have more than 255 parameters"));
    }
}

mod resolver_tests {
    use glox as lox;

    use lox::error::LoxError;
    use lox::interpreter::Interpreter;
    use lox::parser::Parser;
    use lox::resolver::Resolver;
    use lox::scanner::Scanner;

    fn resolve_source(source: &str) -> Result<(), LoxError> {
        let mut scanner = Scanner::new(source);
        let tokens = scanner.scan_tokens();

        assert!(!scanner.had_error(), "scan failed for {:?}", source);

        let mut parser = Parser::new(&tokens);
        let (statements, errors) = parser.parse();

        assert!(errors.is_empty(), "parse errors: {:?}", errors);

        let mut interpreter = Interpreter::new();
        let mut resolver = Resolver::new(&mut interpreter);
        resolver.resolve(&statements)
    }

    #[test]
    fn test_resolver_01_own_initializer_is_a_compile_error() {
        let err = resolve_source("{ var a = a; }").unwrap_err();

        assert!(matches!(err, LoxError::Resolve { .. }));
        assert_eq!(
            err.to_string(),
            "[line 1] CompileError: Cannot read local variable in its own initializer"
        );
    }

    #[test]
    fn test_resolver_02_own_initializer_is_fine_at_top_level() {
        // Globals resolve lazily; `var a = a;` only fails at runtime.
        assert!(resolve_source("var a = a;").is_ok());
    }

    #[test]
    fn test_resolver_03_duplicate_declaration_in_local_scope() {
        let err = resolve_source("{ var a = 1; var a = 2; }").unwrap_err();

        assert!(matches!(err, LoxError::Resolve { .. }));
        assert!(err
            .to_string()
            .contains("Variable already declared in this scope"));
    }

    #[test]
    fn test_resolver_04_redeclaring_a_global_is_allowed() {
        assert!(resolve_source("var a = 1; var a = 2;").is_ok());
    }

    #[test]
    fn test_resolver_05_return_outside_function() {
        let err = resolve_source("return 1;").unwrap_err();

        assert!(matches!(err, LoxError::Resolve { .. }));
        assert!(err.to_string().contains("'return' used outside of function"));
    }

    #[test]
    fn test_resolver_06_return_inside_function_is_fine() {
        assert!(resolve_source("fun f() { return 1; }").is_ok());
        assert!(resolve_source("fun f() { if (true) return; }").is_ok());
    }

    #[test]
    fn test_resolver_07_parameters_are_visible_in_the_body() {
        assert!(resolve_source("fun f(x) { { var y = x; } return x; }").is_ok());
    }

    #[test]
    fn test_resolver_08_recursion_resolves() {
        assert!(resolve_source("fun f(n) { if (n > 0) f(n - 1); }").is_ok());
    }

    #[test]
    fn test_resolver_09_shadowing_in_nested_blocks() {
        assert!(resolve_source("var a = 1; { var a = 2; { var a = 3; print a; } }").is_ok());
    }

    #[test]
    fn test_resolver_10_closure_over_enclosing_function_scope() {
        let source = "
            fun outer() {
                var x = 1;
                fun inner() { print x; }
                return inner;
            }
        ";
        assert!(resolve_source(source).is_ok());
    }
}

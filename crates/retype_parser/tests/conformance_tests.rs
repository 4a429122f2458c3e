//! Conformance corpus for the parser.
//!
//! Runs a table of small programs grouped by category, each either expected
//! to parse or expected to fail with a given first error, and prints a
//! per-category summary before asserting that every case behaved as listed.

use bumpalo::Bump;
use retype_ast::NodeFactory;
use retype_parser::{ParseOptions, Parser};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy)]
enum Expect {
    Accept,
    Reject(&'static str),
}

#[derive(Debug)]
struct CaseResult {
    name: &'static str,
    category: &'static str,
    passed: bool,
    detail: Option<String>,
}

fn run_case(name: &'static str, category: &'static str, source: &str, expect: Expect) -> CaseResult {
    let arena = Bump::new();
    let factory = NodeFactory::new(&arena);
    let outcome = Parser::new(&factory, source, ParseOptions::default())
        .and_then(|mut parser| parser.parse_program().map(|_| ()));

    let (passed, detail) = match (expect, outcome) {
        (Expect::Accept, Ok(())) => (true, None),
        (Expect::Accept, Err(err)) => (false, Some(err.message)),
        (Expect::Reject(message), Err(err)) if err.message == message => (true, None),
        (Expect::Reject(message), Err(err)) => {
            (false, Some(format!("expected '{message}', got '{}'", err.message)))
        }
        (Expect::Reject(message), Ok(())) => (false, Some(format!("expected '{message}', parsed"))),
    };
    CaseResult {
        name,
        category,
        passed,
        detail,
    }
}

struct ConformanceSuite {
    results: Vec<CaseResult>,
}

impl ConformanceSuite {
    fn new() -> Self {
        Self { results: Vec::new() }
    }

    fn accept(&mut self, name: &'static str, category: &'static str, source: &str) {
        self.results.push(run_case(name, category, source, Expect::Accept));
    }

    fn reject(&mut self, name: &'static str, category: &'static str, source: &str, message: &'static str) {
        self.results
            .push(run_case(name, category, source, Expect::Reject(message)));
    }

    fn print_summary(&self) {
        let total = self.results.len();
        let passed = self.results.iter().filter(|r| r.passed).count();
        println!("\n=== Parser Conformance Summary ===");
        println!("Passed: {passed}/{total}");

        let mut categories: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
        for result in &self.results {
            let entry = categories.entry(result.category).or_insert((0, 0));
            if result.passed {
                entry.0 += 1;
            }
            entry.1 += 1;
        }
        println!("\n--- Results by Category ---");
        for (category, (passed, total)) in &categories {
            println!("  {category}: {passed}/{total}");
        }

        let failures: Vec<_> = self.results.iter().filter(|r| !r.passed).collect();
        if !failures.is_empty() {
            println!("\n--- Failed Cases ---");
            for failure in &failures {
                println!(
                    "  [{}] {}: {}",
                    failure.category,
                    failure.name,
                    failure.detail.as_deref().unwrap_or("unknown")
                );
            }
        }
    }

    fn failures(&self) -> Vec<&'static str> {
        self.results
            .iter()
            .filter(|r| !r.passed)
            .map(|r| r.name)
            .collect()
    }
}

// ============================================================================
// Cases
// ============================================================================

#[test]
fn test_parser_conformance() {
    let mut suite = ConformanceSuite::new();

    // Expressions
    suite.accept("precedence", "expressions", "x = a || b && c | d ^ e & f == g < h << i + j * k;");
    suite.accept("unsigned_shift_assign", "expressions", "x >>>= 1; y >>= 2; z >= 3;");
    suite.accept("conditional_chain", "expressions", "r = a ? b : c ? d : e;");
    suite.accept("new_with_arguments", "expressions", "new Foo<T>(1).bar(new Baz);");
    suite.accept("template_nesting", "expressions", "s = `a${`b${c}`}d`;");
    suite.accept("regex_after_operator", "expressions", "ok = /ab+c/gi.test(s) && 1 / 2;");
    suite.accept("object_literal_members", "expressions", "o = { a, b: 1, 'c': 2, 3: 4, [k]: 5, get g() { return 1; }, set s(v) {}, m() {}, *gen() {} };");
    suite.accept("array_elision_spread", "expressions", "a = [, 1, , ...rest];");
    suite.accept("generic_call", "expressions", "f<string, number>(x);");
    suite.accept("less_than_is_comparison", "expressions", "b = a < c;");
    suite.accept("as_expression", "expressions", "n = value as number;");
    suite.reject("shorthand_initializer", "expressions", "({ a = 1 } = b);", "Property assignment expected.");
    suite.reject("missing_operand", "expressions", "x = 1 +;", "Expression expected.");
    suite.reject("unclosed_paren", "expressions", "f(a, b;", "')' expected.");

    // Arrow functions
    suite.accept("arrow_bare", "arrows", "f = x => x * 2;");
    suite.accept("arrow_typed", "arrows", "f = (a: number, b?: string): void => { return; };");
    suite.accept("arrow_generic", "arrows", "f = <T>(x: T) => x;");
    suite.accept("arrow_destructuring", "arrows", "f = ({ a, b }, [c]) => a;");
    suite.accept("arrow_rest", "arrows", "f = (...args: any[]) => args;");
    suite.reject("arrow_parameter_order", "arrows", "f = (a: number, b?: string, c: number) => 1;", "A required parameter cannot follow an optional parameter.");

    // Types
    suite.accept("union_intersection", "types", "var v: A & B | C;");
    suite.accept("function_type", "types", "var f: (x: number, ...rest: string[]) => void;");
    suite.accept("constructor_type", "types", "var c: new (x: number) => Foo;");
    suite.accept("object_type", "types", "var o: { a: number; b?: string; (x): void; new (): Foo; [k: string]: any; m(): void };");
    suite.accept("tuple_array", "types", "var t: [number, string][];");
    suite.accept("type_query", "types", "var q: typeof a.b.c;");
    suite.accept("nested_generics", "types", "var m: Map<string, Array<Set<number>>>;");
    suite.reject("missing_type", "types", "var x: = 1;", "Type expected.");

    // Statements
    suite.accept("label_continue", "statements", "outer: while (true) { for (;;) { continue outer; } }");
    suite.accept("switch_fallthrough", "statements", "switch (x) { case 1: case 2: break; default: }");
    suite.accept("try_catch_finally", "statements", "try { a(); } catch (e) { b(); } finally { c(); }");
    suite.accept("for_in_expression", "statements", "for (x in o) {}");
    suite.accept("for_of_destructuring", "statements", "for (let { a, b } of xs) {}");
    suite.accept("with_statement", "statements", "with (o) { a; }");
    suite.accept("debugger", "statements", "debugger;");
    suite.accept("regex_after_if_head", "statements", "if (x) /re/.test(s);");
    suite.accept("regex_after_block", "statements", "function f() {} /re/.test(s); { } /x/g.exec(t);");
    suite.accept("division_after_object", "statements", "n = { a: 1 }.a / 2; m = (a + b) / 2;");
    suite.reject("throw_line_break", "statements", "throw\nnew Error();", "Line break not permitted here.");
    suite.reject("for_of_initializer", "statements", "for (var x = 1 of xs) {}", "The variable declaration of a 'for...of' statement cannot have an initializer.");

    // Declarations
    suite.accept("generic_function", "declarations", "function id<T extends object>(x: T): T { return x; }");
    suite.accept("generator_function", "declarations", "function* g() { var x = yield 1; yield* g(); }");
    suite.accept("class_full", "declarations", "class A<T> extends B<T> implements C { public static x: number; private y?: string = 'y'; constructor(protected z) { super(); } get v() { return 1; } set v(n) {} }");
    suite.accept("class_expression", "declarations", "var K = class extends Base {};");
    suite.accept("interface_extends", "declarations", "interface A extends B, C<D> { x: number; f?(): void; }");
    suite.accept("type_alias_generic", "declarations", "type Fn<T> = (x: T) => T;");
    suite.accept("enum_trailing_comma", "declarations", "enum Color { Red, Green = 'g', Blue, }");
    suite.reject("class_without_name", "declarations", "class {}", "Identifier expected.");
    suite.reject("getter_with_parameter", "declarations", "class A { get x(v) {} }", "A 'get' accessor must have no parameters.");
    suite.reject("setter_without_parameter", "declarations", "class A { set x() {} }", "A 'set' accessor must have exactly one parameter.");
    suite.reject("optional_with_initializer", "declarations", "function f(a?: number = 1) {}", "Parameter cannot have question mark and initializer.");

    // Modules
    suite.accept("import_all_forms", "modules", "import a from 'a'; import * as b from 'b'; import { c, d as e } from 'c'; import f, { g } from 'f'; import 'side';");
    suite.accept("export_all_forms", "modules", "export * from 'a'; export { b as c }; export var d = 1; export function e() {} export default 1;");
    suite.reject("import_missing_from", "modules", "import { a } 'a';", "'from' expected.");

    // Strict mode
    suite.accept("legacy_octal", "strict", "x = 017;");
    suite.reject("strict_octal", "strict", "'use strict'; x = 017;", "Octal literals are not allowed in strict mode.");
    suite.accept("surrogate_pair_escape", "strict", "var s = '\\uD83D\\uDE00';");
    suite.accept("sloppy_reserved_words", "strict", "var yield, let, static, implements;");
    suite.reject("strict_directive", "strict", "'use strict'; var static;", "Identifier expected. 'static' is a reserved word in strict mode.");
    suite.reject("always_reserved", "strict", "var enum;", "Identifier expected. 'enum' is a reserved word.");

    suite.print_summary();
    assert!(suite.failures().is_empty(), "failed: {:?}", suite.failures());
}

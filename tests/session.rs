use boredcalc::{Environment, Reply, Session, error::ErrorKind};

fn run(session: &mut Session, line: &str) -> Reply {
    session.run_line(line)
           .unwrap_or_else(|e| panic!("Line {line:?} failed: {e}"))
}

#[test]
fn assignment_round_trip() {
    let mut session = Session::new();
    assert_eq!(run(&mut session, "x = 5"),
               Reply::Assigned { name:  "x".to_string(),
                                 value: 5.0, });
    assert_eq!(run(&mut session, "x"), Reply::Value(5.0));
    assert_eq!(session.environment().get("x"), Some(5.0));
}

#[test]
fn assignment_reads_previous_bindings() {
    let mut session = Session::new();
    run(&mut session, "x = 5");
    run(&mut session, "y = x + 1");
    run(&mut session, "x = x * 10");
    assert_eq!(run(&mut session, "x + y"), Reply::Value(56.0));
}

#[test]
fn constants_can_be_overwritten() {
    let mut session = Session::new();
    run(&mut session, "PI = 3");
    assert_eq!(run(&mut session, "PI * 2"), Reply::Value(6.0));
}

#[test]
fn names_are_case_sensitive() {
    let mut session = Session::new();
    run(&mut session, "Speed = 3");
    run(&mut session, "speed = 4");
    assert_eq!(run(&mut session, "Speed * 10 + speed"), Reply::Value(34.0));
}

#[test]
fn invalid_assignments() {
    let mut session = Session::new();

    for line in ["x1 = 2", "my_var = 2", "= 2", "2 = 2", "x y = 1"] {
        let err = session.run_line(line).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AssignmentSyntax, "{line}");
        assert_eq!(err.to_string(), "Invalid variable name.");
    }

    let err = session.run_line("a = b = 1").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownIdentifier);
    assert!(session.run_line("a = 1 = 1").is_err());
    assert!(session.run_line("x =").is_err());
    assert!(!session.environment().contains("a"));
    assert!(!session.environment().contains("x"));
}

#[test]
fn failed_assignment_leaves_bindings_untouched() {
    let mut session = Session::new();
    run(&mut session, "x = 1");
    assert!(session.run_line("x = fact(-1)").is_err());
    assert!(session.run_line("x = (2").is_err());
    assert_eq!(run(&mut session, "x"), Reply::Value(1.0));
}

#[test]
fn commands_are_case_insensitive() {
    let mut session = Session::new();
    assert_eq!(run(&mut session, "exit"), Reply::Exit);
    assert_eq!(run(&mut session, "  ExIt "), Reply::Exit);
    assert_eq!(run(&mut session, "HELP"), Reply::Help);
    assert_eq!(run(&mut session, "help"), Reply::Help);
    assert_eq!(run(&mut session, ""), Reply::Empty);
    assert_eq!(run(&mut session, "   "), Reply::Empty);
}

#[test]
fn vars_lists_bindings_in_name_order() {
    let mut session = Session::with_environment(Environment::empty());
    run(&mut session, "b = 2");
    run(&mut session, "a = 1");
    assert_eq!(run(&mut session, ":vars"),
               Reply::Bindings(vec![("a".to_string(), 1.0), ("b".to_string(), 2.0)]));
}

#[test]
fn vars_is_an_ordinary_variable_name() {
    let mut session = Session::with_environment(Environment::empty());
    run(&mut session, "vars = 3");
    assert_eq!(run(&mut session, "vars"), Reply::Value(3.0));
    assert_eq!(run(&mut session, ":VARS"),
               Reply::Bindings(vec![("vars".to_string(), 3.0)]));
}

#[test]
fn deeply_nested_line_keeps_the_session() {
    let mut session = Session::new();
    run(&mut session, "x = 2");

    let line = format!("{}x{}", "(".repeat(50_000), ")".repeat(50_000));
    let err = session.run_line(&line).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(run(&mut session, "x * 3"), Reply::Value(6.0));
}

#[test]
fn empty_environment_has_no_constants() {
    let mut session = Session::with_environment(Environment::empty());
    let err = session.run_line("PI").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
}

#[test]
fn errors_do_not_end_the_session() {
    let mut session = Session::new();
    assert!(session.run_line("foo(1)").is_err());
    assert!(session.run_line("fact(2.5)").is_err());
    assert_eq!(run(&mut session, "1 + 1"), Reply::Value(2.0));
}

#[test]
fn reply_display() {
    assert_eq!(Reply::Value(8.0).to_string(), "Result > 8.0");
    assert_eq!(Reply::Value(0.5).to_string(), "Result > 0.5");
    assert_eq!(Reply::Assigned { name:  "x".to_string(),
                                 value: 5.0, }.to_string(),
               "Assigned - x = 5.0");
    assert_eq!(Reply::Exit.to_string(), "Exiting...");
    assert_eq!(Reply::Empty.to_string(), "");
    assert!(Reply::Help.to_string().contains("sqrt, sin, cos"));
    assert_eq!(Reply::Bindings(vec![("a".to_string(), 1.0), ("b".to_string(), 2.5)]).to_string(),
               "a = 1.0\nb = 2.5");
}

#[test]
fn environment_reset_restores_constants() {
    let mut env = Environment::new();
    env.set("PI", 3.0).unwrap();
    env.set("x", 1.0).unwrap();
    env.reset();
    assert_eq!(env.get("PI"), Some(std::f64::consts::PI));
    assert!(!env.contains("x"));
    assert_eq!(env.len(), 3);
}

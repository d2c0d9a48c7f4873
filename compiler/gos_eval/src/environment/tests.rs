use super::*;

#[test]
fn test_scope_define_lookup() {
    let mut scope = Scope::new();
    scope.define("x", Value::Int(42));
    assert_eq!(scope.lookup("x"), Some(Value::Int(42)));
    assert_eq!(scope.lookup("y"), None);
}

#[test]
fn test_scope_shadowing() {
    let parent = LocalScope::new(Scope::new());
    parent.borrow_mut().define("x", Value::Int(1));

    let mut child = Scope::with_parent(parent.clone());
    child.define("x", Value::Int(2));

    // Child's binding shadows parent's
    assert_eq!(child.lookup("x"), Some(Value::Int(2)));
    assert_eq!(parent.borrow().lookup("x"), Some(Value::Int(1)));
}

#[test]
fn test_lookup_walks_the_whole_chain() {
    let global = Environment::new();
    global.define("depth", Value::Int(0));
    let middle = Environment::enclosed(&global);
    let inner = Environment::enclosed(&middle);

    assert_eq!(inner.lookup("depth"), Some(Value::Int(0)));
    assert_eq!(inner.lookup("missing"), None);
}

#[test]
fn test_redefinition_replaces_binding() {
    let env = Environment::new();
    env.define("a", Value::Int(1));
    env.define("a", Value::string("one"));
    assert_eq!(env.lookup("a"), Some(Value::string("one")));
    assert_eq!(env.local_names(), vec!["a".to_string()]);
}

#[test]
fn test_define_in_child_does_not_touch_parent() {
    let global = Environment::new();
    let child = Environment::enclosed(&global);
    child.define("x", Value::Bool(true));

    assert_eq!(child.local_names(), vec!["x".to_string()]);
    assert!(global.local_names().is_empty());
    assert_eq!(global.lookup("x"), None);
}

#[test]
fn test_parent_bindings_added_later_are_visible() {
    let global = Environment::new();
    let child = Environment::enclosed(&global);
    global.define("late", Value::Int(7));
    assert_eq!(child.lookup("late"), Some(Value::Int(7)));
}

#[test]
fn test_clones_share_scope() {
    let env = Environment::new();
    let alias = env.clone();
    alias.define("x", Value::Null);

    assert_eq!(env.lookup("x"), Some(Value::Null));
    assert_eq!(Environment::new().lookup("x"), None);
}

use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Box<dyn FnOnce()>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let log_for_make = Rc::clone(&log);
    let make = move |name: &'static str| -> Box<dyn FnOnce()> {
        let log = Rc::clone(&log_for_make);
        Box::new(move || log.borrow_mut().push(name))
    };
    (log, make)
}

#[test]
fn dispose_runs_in_reverse_registration_order() {
    let (log, make) = recorder();
    let mut scope = Scope::new();
    scope.on_dispose(make("scroll"));
    scope.on_dispose(make("resize"));
    scope.on_dispose(make("observer"));
    scope.dispose();
    assert_eq!(*log.borrow(), vec!["observer", "resize", "scroll"]);
}

#[test]
fn dispose_empties_the_scope() {
    let (log, make) = recorder();
    let mut scope = Scope::new();
    scope.on_dispose(make("a"));
    assert_eq!(scope.len(), 1);
    scope.dispose();
    assert!(scope.is_empty());
    scope.dispose();
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn drop_disposes() {
    let (log, make) = recorder();
    {
        let mut scope = Scope::new();
        scope.on_dispose(make("a"));
    }
    assert_eq!(*log.borrow(), vec!["a"]);
}

#[test]
fn hold_drops_value_on_dispose() {
    struct Flag(Rc<RefCell<bool>>);
    impl Drop for Flag {
        fn drop(&mut self) {
            *self.0.borrow_mut() = true;
        }
    }

    let dropped = Rc::new(RefCell::new(false));
    let mut scope = Scope::new();
    scope.hold(Flag(Rc::clone(&dropped)));
    assert!(!*dropped.borrow());
    scope.dispose();
    assert!(*dropped.borrow());
}

#[test]
fn absorbed_registrations_dispose_with_the_parent() {
    let (log, make) = recorder();
    let mut parent = Scope::new();
    let mut child = Scope::new();
    parent.on_dispose(make("parent"));
    child.on_dispose(make("child"));
    parent.absorb(child);
    assert_eq!(parent.len(), 2);
    parent.dispose();
    assert_eq!(*log.borrow(), vec!["child", "parent"]);
}

#[test]
fn scope_is_reusable_after_dispose() {
    let (log, make) = recorder();
    let mut scope = Scope::new();
    scope.on_dispose(make("first"));
    scope.dispose();
    scope.on_dispose(make("second"));
    scope.dispose();
    assert_eq!(*log.borrow(), vec!["first", "second"]);
}

#[test]
fn debug_reports_registration_count() {
    let mut scope = Scope::new();
    scope.on_dispose(|| {});
    assert_eq!(format!("{scope:?}"), "Scope { registrations: 1 }");
}

#[test]
fn try_build_keeps_registrations_on_success() {
    let (log, make) = recorder();
    let built: Result<Scope, &str> = Scope::try_build(|scope| {
        scope.on_dispose(make("scroll"));
        scope.on_dispose(make("resize"));
        Ok(())
    });
    let mut scope = built.unwrap();
    assert_eq!(scope.len(), 2);
    assert!(log.borrow().is_empty());
    scope.dispose();
    assert_eq!(*log.borrow(), vec!["resize", "scroll"]);
}

#[test]
fn try_build_failure_tears_down_partial_registrations() {
    let (log, make) = recorder();
    let built: Result<Scope, &str> = Scope::try_build(|scope| {
        scope.on_dispose(make("js class"));
        scope.on_dispose(make("click"));
        Err("DOMContentLoaded listener rejected")
    });
    assert_eq!(built.unwrap_err(), "DOMContentLoaded listener rejected");
    assert_eq!(*log.borrow(), vec!["click", "js class"]);
}

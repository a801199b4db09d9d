use optres::{InvalidUnwrap, Optional, Result};
use std::cell::Cell;

#[test]
fn ok_xor_err() {
    let ok = Result::<i32, i32>::ok(0);
    assert!(ok.is_ok());
    assert!(!ok.is_err());

    let err = Result::<i32, i32>::err(0);
    assert!(err.is_err());
    assert!(!err.is_ok());
}

#[test]
fn unwrap() {
    assert_eq!(Result::<i32, ()>::ok(1).unwrap(), 1);
    assert_eq!(Result::<(), &str>::err("ko").unwrap_err(), "ko");
}

#[test]
#[should_panic(expected = "called `Result::unwrap()` on an `Err` value")]
fn unwrap_err_result_panics() {
    Result::<i32, &str>::err("ko").unwrap();
}

#[test]
#[should_panic(expected = "called `Result::unwrap_err()` on an `Ok` value")]
fn unwrap_err_on_ok_panics() {
    Result::<i32, &str>::ok(1).unwrap_err();
}

#[test]
fn try_unwrap() {
    assert_eq!(Result::<i32, ()>::ok(1).try_unwrap().unwrap(), 1);
    assert!(matches!(
        Result::<i32, ()>::err(()).try_unwrap(),
        Err(InvalidUnwrap::ErrResult)
    ));
    assert_eq!(Result::<(), i32>::err(2).try_unwrap_err().unwrap(), 2);
    assert!(matches!(
        Result::<(), i32>::ok(()).try_unwrap_err(),
        Err(InvalidUnwrap::OkResult)
    ));
}

#[test]
fn unwrap_or() {
    assert_eq!(Result::<&str, &str>::ok("ok").unwrap_or("ko"), "ok");
    assert_eq!(Result::<&str, &str>::err("err").unwrap_or("ko"), "ko");
    assert_eq!(Result::<&str, &str>::ok("oh yes").unwrap_err_or("ko"), "ko");
    assert_eq!(Result::<&str, &str>::err("err").unwrap_err_or("ko"), "err");
}

#[test]
fn from_thrower_ok() {
    let result = Result::from_thrower(|| 5i32);
    assert_eq!(result.unwrap(), 5);
}

#[test]
fn from_thrower_captures_panic() {
    let result = Result::from_thrower(|| -> i32 { panic!("oh no") });
    assert!(result.is_err());

    let panic = result.unwrap_err();
    assert_eq!(panic.message(), "oh no");
    assert!(!panic.is_synthesized());
}

#[derive(Clone, Debug, PartialEq)]
struct Reason(u32);

#[test]
fn from_thrower_keeps_payload_verbatim() {
    let result = Result::from_thrower(|| -> () { std::panic::panic_any(Reason(7)) });
    let payload = result.unwrap_err().into_payload().unwrap();
    assert_eq!(payload.downcast_ref::<Reason>(), Some(&Reason(7)));
}

#[test]
fn cloned_err_result_keeps_payload_in_both_copies() {
    let original = Result::from_thrower(|| -> () { std::panic::panic_any(Reason(7)) });
    let copy = original.clone();

    let copied = copy.unwrap_err();
    assert_eq!(copied.downcast_payload::<Reason>(), Some(Reason(7)));
    assert!(copied.into_payload().is_err());

    let panic = original.unwrap_err();
    assert_eq!(panic.downcast_payload::<Reason>(), Some(Reason(7)));
    let payload = panic.into_payload().unwrap();
    assert_eq!(payload.downcast_ref::<Reason>(), Some(&Reason(7)));
}

#[test]
fn captured_unwrap_panic_carries_invalid_unwrap_message() {
    let empty = Result::from_thrower(|| Optional::<i32>::empty().unwrap()).unwrap_err();
    assert_eq!(empty.message(), InvalidUnwrap::EmptyOptional.to_string());
    assert!(empty.payload_is::<String>());

    let err = Result::from_thrower(|| Result::<i32, &str>::err("ko").unwrap()).unwrap_err();
    assert_eq!(err.message(), InvalidUnwrap::ErrResult.to_string());

    let ok = Result::from_thrower(|| Result::<i32, &str>::ok(1).unwrap_err()).unwrap_err();
    assert_eq!(ok.message(), InvalidUnwrap::OkResult.to_string());
}

#[test]
fn from_thrower_synthesizes_missing_payload() {
    let result = Result::from_thrower(|| -> () { std::panic::resume_unwind(Box::new(())) });
    let panic = result.unwrap_err();
    assert!(panic.is_synthesized());
    assert!(!panic.message().is_empty());
}

#[test]
fn captured_panic_can_resume() {
    let inner = Result::from_thrower(|| -> () { panic!("inner") }).unwrap_err();
    let outer = Result::from_thrower(move || inner.resume());
    assert_eq!(outer.unwrap_err().message(), "inner");
}

#[test]
fn as_ref_and_as_mut() {
    let mut result = Result::<Vec<i32>, String>::ok(vec![1]);
    assert_eq!(result.as_ref().map(Vec::len).unwrap(), 1);

    if let Result::Ok(values) = result.as_mut() {
        values.push(2);
    }
    assert_eq!(result.unwrap(), vec![1, 2]);
}

#[test]
fn map() {
    assert_eq!(Result::<i32, ()>::ok(2).map(|v| v + 1).unwrap(), 3);
    let err = Result::<i32, &str>::err("ko").map(|_| -> i32 { panic!("must not run") });
    assert_eq!(err.unwrap_err(), "ko");
}

#[test]
fn map_err() {
    assert_eq!(Result::<(), &str>::err("four").map_err(str::len).unwrap_err(), 4);
    let ok = Result::<i32, &str>::ok(1).map_err(|_| -> usize { panic!("must not run") });
    assert_eq!(ok.unwrap(), 1);
}

#[test]
fn flat_map() {
    let checked = |v: i32| {
        if v > 0 {
            Result::ok(v * 2)
        } else {
            Result::err("not positive")
        }
    };

    assert_eq!(Result::ok(2).flat_map(checked).unwrap(), 4);
    assert_eq!(Result::ok(-1).flat_map(checked).unwrap_err(), "not positive");
    assert_eq!(
        Result::<i32, &str>::err("first")
            .flat_map(|_| -> Result<i32, &str> { panic!("must not run") })
            .unwrap_err(),
        "first"
    );
}

#[test]
fn flat_map_err() {
    let recover = |e: &'static str| {
        if e == "retry" {
            Result::ok(0i32)
        } else {
            Result::err(e.len())
        }
    };

    assert_eq!(Result::err("retry").flat_map_err(recover).unwrap(), 0);
    assert_eq!(Result::err("fatal").flat_map_err(recover).unwrap_err(), 5);
    assert_eq!(
        Result::<i32, &str>::ok(9)
            .flat_map_err(|_| -> Result<i32, usize> { panic!("must not run") })
            .unwrap(),
        9
    );
}

#[test]
fn if_ok_and_if_err() {
    let ok_calls = Cell::new(0);
    let err_calls = Cell::new(0);

    let ok = Result::<i32, i32>::ok(1)
        .if_ok(|v| ok_calls.set(ok_calls.get() + *v))
        .if_err(|_| err_calls.set(err_calls.get() + 1));
    assert_eq!((ok_calls.get(), err_calls.get()), (1, 0));
    assert_eq!(ok.unwrap(), 1);

    let err = Result::<i32, i32>::err(5)
        .if_ok(|_| ok_calls.set(ok_calls.get() + 1))
        .if_err(|e| err_calls.set(err_calls.get() + *e));
    assert_eq!((ok_calls.get(), err_calls.get()), (1, 5));
    assert_eq!(err.unwrap_err(), 5);
}

#[test]
fn when_fires_only_err_handler() {
    let ok_calls = Cell::new(0);
    let seen = Cell::new("");

    let _ = Result::<i32, &str>::err("x").when(
        |_| ok_calls.set(ok_calls.get() + 1),
        Some(|e: &&'static str| seen.set(*e)),
    );
    assert_eq!(ok_calls.get(), 0);
    assert_eq!(seen.get(), "x");
}

#[test]
fn when_without_err_handler() {
    let ok_calls = Cell::new(0);
    let result = Result::<i32, &str>::err("x").when(
        |_| ok_calls.set(ok_calls.get() + 1),
        None::<fn(&&str)>,
    );
    assert_eq!(ok_calls.get(), 0);
    assert_eq!(result.unwrap_err(), "x");
}

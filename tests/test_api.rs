use collections_rs::types::Value;
use collections_rs::{List, ListError};

#[test]
fn test_counting_and_removal() {
    let mut l: List<i64> = vec![1, 2, 2, 3].into();

    assert_eq!(l.count_of(&2), 2);
    l.remove_all(&2).unwrap();
    assert_eq!(l.to_vec(), vec![1, 3]);
    assert_eq!(l.remove_all(&2), Err(ListError::ItemNotFound));
}

#[test]
fn test_positional_access() {
    let l: List<i64> = vec![1, 2, 3].into();

    assert_eq!(l.get(1), Ok(&2));
    assert_eq!(l.get(5), Err(ListError::IndexOutOfRange { index: 5, len: 3 }));
}

#[test]
fn test_rendering() {
    let l: List<String> = vec!["a".into(), "b".into()].into();
    assert_eq!(l.to_string(), "[a,b]");
    assert_eq!(List::<String>::with_capacity(0).to_string(), "[]");
}

#[test]
fn test_transformation_pipeline() {
    let l: List<i64> = vec![1, 2, 3].into();

    let mut target = List::<i64>::new();
    target.copy_from(l.map(|x, _| Value::from(x * 10))).unwrap();
    assert_eq!(target.to_vec(), vec![10, 20, 30]);
}

#[test]
fn test_transformation_mismatch_keeps_prior_values() {
    let l: List<i64> = vec![1, 2, 3].into();
    let t = l.map(|x, i| {
        if i == 1 {
            Value::from(format!("#{x}"))
        } else {
            Value::from(x * 10)
        }
    });

    let mut target = List::<i64>::new();
    let err = target.copy_from(t).unwrap_err();
    assert!(matches!(err, ListError::TypeMismatch { index: 1, .. }));
    assert_eq!(target.to_vec(), vec![10]);
}

#[test]
fn test_derivations_do_not_alias() {
    let l: List<i64> = vec![1, 1, 2, 3].into();

    let mut d = l.distinct();
    let mut f = l.filter(|e| *e > 1);
    d.push(9);
    f.push(9);

    assert_eq!(l.to_vec(), vec![1, 1, 2, 3]);
    assert_eq!(d.to_vec(), vec![1, 2, 3, 9]);
    assert_eq!(f.to_vec(), vec![2, 3, 9]);
}

use crate::scanner::{Scanner, Sign};

#[test]
fn strips_spaces() {
    let s = Scanner::new(" 2x +  3 ");
    assert_eq!(s.to_string(), "2x+3");
    assert_eq!(s.len(), 4);
    assert!(Scanner::new("   ").is_empty());
}

#[test]
fn test_accept() {
    let mut s = Scanner::new("-12.5x");
    assert!(!s.accept('+'));
    assert_eq!(s.pos(), 0);
    assert_eq!(s.accept_any(&['+', '-']), Some('-'));
    assert_eq!(s.accept_any(&['+', '-']), None);
    assert_eq!(s.peek(), Some('1'));
    assert!(s.skip_digits());
    assert!(!s.skip_digits());
    assert_eq!(s.pos(), 3);
    assert!(s.accept('.'));
    assert!(s.skip_digits());
    assert!(s.accept('x'));
    assert!(s.at_end());
    assert_eq!(s.peek(), None);
    assert!(!s.accept('x'));
}

#[test]
fn test_backtrack() {
    let mut s = Scanner::new("3+x");
    assert!(s.set_pos(3));
    assert!(s.at_end());
    assert!(!s.set_pos(4));
    assert_eq!(s.pos(), 3);
    assert!(s.set_pos(1));
    assert_eq!(s.scan_sign(), Some(Sign::Plus));
    assert_eq!(s.span(0, s.pos()), "3+");
}

#[test]
fn scan_signs() {
    let mut s = Scanner::new("+-x");
    assert_eq!(s.scan_sign(), Some(Sign::Plus));
    assert_eq!(s.scan_sign(), Some(Sign::Minus));
    assert_eq!(s.scan_sign(), None);
    assert_eq!(s.pos(), 2);
    assert_eq!(Sign::Minus.apply(2.5), -2.5);
    assert_eq!(Sign::Plus.apply(2.5), 2.5);
}

#[test]
fn scan_unsigned() {
    let tests = vec!["0", "3", "007", "41.98", "0.5", "10.01"];
    for t in tests.iter() {
        let mut s = Scanner::new(t);
        assert_eq!(s.scan_unsigned(), Some(t.to_string()));
        assert!(s.at_end());
    }
}

#[test]
fn scan_unsigned_dangling_point() {
    let mut s = Scanner::new("3.");
    assert_eq!(s.scan_unsigned(), Some("3".to_string()));
    assert_eq!(s.peek(), Some('.'));

    let mut s = Scanner::new(".3");
    assert_eq!(s.scan_unsigned(), None);
    assert_eq!(s.pos(), 0);

    let mut s = Scanner::new("3.x");
    assert_eq!(s.scan_unsigned(), Some("3".to_string()));
    assert_eq!(s.pos(), 1);
}

#[test]
fn test_without() {
    let s = Scanner::new("-1.5 - 2.3x");
    let mut rest = s.without(4, 9);
    assert_eq!(rest.to_string(), "-1.5");
    assert_eq!(rest.scan_sign(), Some(Sign::Minus));
    assert_eq!(rest.scan_unsigned(), Some("1.5".to_string()));
    assert!(rest.at_end());
    assert!(s.without(0, s.len()).is_empty());
}

//! Formatter → tokenizer round trip
//!
//! Any command the formatter can produce must tokenize back to the
//! same letter and integer argument sequence.

use motionio_communication::{parse_reply, Command, TokenKind};
use proptest::prelude::*;

proptest! {
    #[test]
    fn roundtrip_preserves_integer_args(
        letter in proptest::char::range('a', 'z'),
        args in proptest::collection::vec(any::<i64>(), 0..=9),
    ) {
        let mut cmd = Command::new(letter);
        for &a in &args {
            cmd = cmd.arg(a);
        }

        let tokens = parse_reply(&cmd.encode()).unwrap();

        prop_assert_eq!(tokens.len(), args.len() + 1);
        let expected_letter = letter.to_string();
        prop_assert_eq!(tokens[0].raw.as_str(), expected_letter.as_str());

        for (token, &expected) in tokens[1..].iter().zip(&args) {
            prop_assert_eq!(token.kind, TokenKind::Integer);
            prop_assert_eq!(token.int_value, Some(expected));
        }
    }
}

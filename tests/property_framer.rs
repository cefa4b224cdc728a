// tests/property_framer.rs

use linestamp::frame::{frame, TERMINATOR};
use proptest::prelude::*;

// Bias towards terminators so chunks actually contain several lines.
fn chunk_strategy() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(
        prop_oneof![3 => Just(TERMINATOR), 7 => any::<u8>()],
        0..256,
    )
}

proptest! {
    #[test]
    fn n_terminators_give_n_complete_lines(chunk in chunk_strategy()) {
        let framed = frame(&chunk);
        let terminators = chunk.iter().filter(|&&b| b == TERMINATOR).count();

        prop_assert_eq!(framed.lines.len(), terminators);

        let expect_trailing = !chunk.is_empty() && chunk.last() != Some(&TERMINATOR);
        prop_assert_eq!(framed.trailing.is_some(), expect_trailing);
    }

    #[test]
    fn framed_lines_rejoin_to_the_original_chunk(chunk in chunk_strategy()) {
        let framed = frame(&chunk);

        let mut rebuilt = Vec::with_capacity(chunk.len());
        for line in &framed.lines {
            rebuilt.extend_from_slice(line);
            rebuilt.push(TERMINATOR);
        }
        if let Some(tail) = framed.trailing {
            rebuilt.extend_from_slice(tail);
        }

        prop_assert_eq!(rebuilt, chunk);
    }

    #[test]
    fn no_line_contains_a_terminator(chunk in chunk_strategy()) {
        let framed = frame(&chunk);
        for (line, _) in framed.iter() {
            prop_assert!(!line.contains(&TERMINATOR));
        }
    }
}

//! Property-based tests for markdown rendering.

use proptest::prelude::*;
use standout_mdtable::{one_line, render};

// ============================================================================
// Strategies
// ============================================================================

// Single-line, already trimmed, pipe-free cells.
fn clean_cell() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]([A-Za-z0-9 ]{0,8}[A-Za-z0-9])?"
}

fn table_strategy() -> impl Strategy<Value = (Vec<String>, Vec<Vec<String>>)> {
    (1usize..6).prop_flat_map(|width| {
        (
            prop::collection::vec(clean_cell(), width),
            prop::collection::vec(prop::collection::vec(clean_cell(), width), 1..10),
        )
    })
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Every line has one pipe fewer than columns, one line per row.
    #[test]
    fn render_preserves_shape((headers, matrix) in table_strategy()) {
        let out = render(&headers, &matrix).unwrap().unwrap();
        let lines: Vec<&str> = out.lines().collect();

        prop_assert_eq!(lines.len(), matrix.len() + 2);
        prop_assert_eq!(lines[0].matches('|').count(), headers.len() - 1);
        for line in &lines[2..] {
            prop_assert_eq!(line.matches('|').count(), headers.len() - 1);
        }
    }

    /// Clean cells pass through rendering untouched.
    #[test]
    fn render_keeps_clean_cells((headers, matrix) in table_strategy()) {
        let out = render(&headers, &matrix).unwrap().unwrap();
        let lines: Vec<&str> = out.lines().collect();

        prop_assert_eq!(lines[0], headers.join("|"));
        for (line, row) in lines[2..].iter().zip(&matrix) {
            prop_assert_eq!(*line, row.join("|"));
        }
    }

    /// Normalizing twice is the same as normalizing once.
    #[test]
    fn one_line_is_idempotent(s in any::<String>()) {
        let once = one_line(&s);
        prop_assert_eq!(one_line(&once), once.clone());
    }

    /// Normalized cells never contain a newline.
    #[test]
    fn one_line_is_single_line(s in any::<String>()) {
        let cell = one_line(&s);
        prop_assert!(!cell.contains('\n'));
        prop_assert!(!cell.contains('\r'));
    }

    /// Any width mismatch is rejected.
    #[test]
    fn mismatched_rows_fail(
        headers in prop::collection::vec(clean_cell(), 1..6),
        extra in 1usize..4,
    ) {
        let row = vec!["x".to_string(); headers.len() + extra];
        prop_assert!(render(&headers, [row]).is_err());
    }
}

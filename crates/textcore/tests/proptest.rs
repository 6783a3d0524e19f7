//! Property-based tests for textcore using proptest.

use proptest::prelude::*;
use textcore::{
    distribute_gaps, distribute_sides, reflow, Alignment, BorderStyle, CharGrid, FillPattern,
    LineCaps, Measure, PadLine, Panel, ReflowOptions, TrimMethod,
};

// ============================================================================
// Strategies
// ============================================================================

fn alignment_strategy() -> impl Strategy<Value = Alignment> {
    prop_oneof![
        Just(Alignment::Leading),
        Just(Alignment::Center),
        Just(Alignment::Trailing),
    ]
}

fn caps_strategy() -> impl Strategy<Value = Option<LineCaps>> {
    prop::option::of(("[<|/]{0,3}", "[>|/]{0,3}", any::<bool>()).prop_map(
        |(leading, trailing, spaces)| LineCaps::new(leading, trailing).extra_spaces(spaces),
    ))
}

fn padder_strategy() -> impl Strategy<Value = PadLine> {
    (
        0usize..60,
        alignment_strategy(),
        caps_strategy(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(width, alignment, caps, spaced, keep_empty)| {
            let padder = PadLine::new(width)
                .glyph('.')
                .align(alignment)
                .space_around_text(spaced)
                .keep_empty_segments(keep_empty);
            match caps {
                Some(caps) => padder.caps(caps),
                None => padder,
            }
        })
}

fn grid_strategy() -> impl Strategy<Value = CharGrid> {
    prop::collection::vec("[a-z#]{0,8}", 0..6).prop_map(CharGrid::from_lines)
}

// ============================================================================
// Padding
// ============================================================================

proptest! {
    /// A padded line is never shorter than the target, and exactly the
    /// target whenever the fixed content fits.
    #[test]
    fn padded_length_is_target_or_fixed(padder in padder_strategy(), text in "[a-z @]{0,30}") {
        let layout = padder.layout(&text);
        let line = layout.render();
        let len = line.chars().count();

        prop_assert!(len >= padder.width);
        prop_assert_eq!(len, padder.width.max(layout.fixed_width()));
        if layout.fixed_width() <= padder.width {
            prop_assert_eq!(len, padder.width);
        }
    }

    /// Filler placed equals the available filler.
    #[test]
    fn layout_places_all_available_filler(padder in padder_strategy(), text in "[a-z@]{0,20}") {
        let layout = padder.layout(&text);
        prop_assert_eq!(layout.fill().total(), layout.available());
        prop_assert_eq!(layout.available(), padder.width.saturating_sub(layout.fixed_width()));
    }

    /// Centered text never has more filler on the left.
    #[test]
    fn center_split_favors_right(available in 0usize..1000) {
        let (left, right) = distribute_sides(available, Alignment::Center);
        prop_assert!(left <= right);
        prop_assert_eq!(left + right, available);
    }

    /// Gap filler sums to the available filler, front-loaded, differing by at most one.
    #[test]
    fn gap_distribution_is_even(available in 0usize..1000, gaps in 1usize..20) {
        let filler = distribute_gaps(available, gaps);
        prop_assert_eq!(filler.len(), gaps);
        prop_assert_eq!(filler.iter().sum::<usize>(), available);

        let max = *filler.iter().max().unwrap();
        let min = *filler.iter().min().unwrap();
        prop_assert!(max - min <= 1);

        let remainder = available % gaps;
        for (index, &gap) in filler.iter().enumerate() {
            let expected = available / gaps + usize::from(index < remainder);
            prop_assert_eq!(gap, expected);
        }
    }
}

// ============================================================================
// Grids
// ============================================================================

proptest! {
    /// Parsing then rendering a string gives it back.
    #[test]
    fn grid_render_round_trips(text in "[a-z #\n]{0,60}") {
        prop_assert_eq!(CharGrid::parse(&text).render(), text);
    }

    /// Each row of a horizontal join is the two source rows concatenated.
    #[test]
    fn horizontal_join_concatenates_rows(left in grid_strategy(), right in grid_strategy()) {
        let joined = left.join_horizontally(&right, None);
        prop_assert_eq!(joined.height(), left.height().max(right.height()));
        for index in 0..joined.height() {
            let expected: Vec<char> = left.row(index).iter().chain(right.row(index)).copied().collect();
            prop_assert_eq!(joined.row(index), expected.as_slice());
        }
    }

    /// Horizontal joins are associative.
    #[test]
    fn horizontal_join_is_associative(
        a in grid_strategy(),
        b in grid_strategy(),
        c in grid_strategy(),
    ) {
        let left_first = a.join_horizontally(&b, None).join_horizontally(&c, None);
        let right_first = a.join_horizontally(&b.join_horizontally(&c, None), None);
        prop_assert_eq!(left_first, right_first);
    }

    /// Repeating multiplies the width.
    #[test]
    fn repeated_multiplies_width(grid in grid_strategy(), count in 0usize..6) {
        let tiled = grid.repeated(count);
        prop_assert_eq!(tiled.width(), grid.width() * count);
        if count == 0 {
            prop_assert!(tiled.is_empty());
        }
    }

    /// Tiling to a width gives rows of exactly that width.
    #[test]
    fn repeat_to_width_is_exact(
        grid in grid_strategy(),
        width in 0usize..50,
        crop in any::<bool>(),
    ) {
        let trim = if crop { TrimMethod::Crop } else { TrimMethod::LeaveSpace };
        let tiled = grid.repeat_to_width(width, ' ', trim);
        if grid.width() == 0 {
            prop_assert_eq!(tiled, CharGrid::new());
        } else {
            prop_assert_eq!(tiled.height(), grid.height());
            for row in tiled.rows() {
                prop_assert_eq!(row.len(), width);
            }
        }
    }

    /// Every row of a bordered panel has the same width under the padder's measure.
    #[test]
    fn panel_rows_share_width(
        padder in padder_strategy(),
        columns in any::<bool>(),
        lines in prop::collection::vec("[a-z @日本語]{0,25}", 0..5),
        titled in any::<bool>(),
    ) {
        let measure = if columns { Measure::Columns } else { Measure::Chars };
        let mut panel = Panel::new(padder.measure(measure)).border(BorderStyle::Light);
        if titled {
            panel = panel.title("表題");
        }
        let grid = panel.render(&lines);
        let widths: Vec<usize> = (0..grid.height())
            .map(|index| measure.width(&grid.row_string(index)))
            .collect();
        for width in &widths {
            prop_assert_eq!(*width, widths[0]);
        }
    }
}

// ============================================================================
// Patterns and reflow
// ============================================================================

proptest! {
    /// A pattern with any non-zero run renders exactly the requested length.
    #[test]
    fn pattern_renders_total(
        parts in prop::collection::vec((prop::char::range('a', 'z'), 0usize..5), 1..5),
        total in 0usize..200,
    ) {
        let pattern = FillPattern::new(parts);
        let rendered = pattern.render(total);
        if pattern.period() == 0 {
            prop_assert!(rendered.is_empty());
        } else {
            prop_assert_eq!(rendered.chars().count(), total);
        }
    }

    /// When every word fits, every reflowed line is exactly the width.
    #[test]
    fn reflow_lines_fill_width(
        words in prop::collection::vec("[a-z]{1,8}", 0..30),
        width in 8usize..40,
    ) {
        let text = words.join(" ");
        let lines = reflow(&text, width, &ReflowOptions::default());
        for line in &lines {
            prop_assert_eq!(line.chars().count(), width);
        }
        let rejoined: Vec<&str> = lines.iter().flat_map(|line| line.split_whitespace()).collect();
        prop_assert_eq!(rejoined, words.iter().map(String::as_str).collect::<Vec<_>>());
    }
}

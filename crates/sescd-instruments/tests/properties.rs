use proptest::prelude::*;
use sescd_core::{Score, ScoreMatrix, Segment, Variable};
use sescd_instruments::aggregate::aggregate;
use sescd_instruments::instruments::mm_ses_cd::MmSesCd;
use sescd_instruments::multiplier::Multipliers;
use sescd_instruments::Instrument;

// --- STRATEGIES ---

fn arb_cell() -> impl Strategy<Value = Option<Score>> {
    prop::option::of((0i64..=3).prop_map(|v| Score::new(v).unwrap()))
}

prop_compose! {
    fn arb_matrix()(cells in prop::collection::vec(arb_cell(), 20)) -> ScoreMatrix {
        let mut matrix = ScoreMatrix::default();
        for (i, cell) in cells.into_iter().enumerate() {
            matrix.set(Segment::ALL[i / 4], Variable::ALL[i % 4], cell);
        }
        matrix
    }
}

fn weight(segment: Segment, variable: Variable) -> f64 {
    let m = Multipliers::for_segment(segment);
    match variable {
        Variable::UlcerSize => m.a,
        Variable::UlcerSurface => m.b,
        Variable::AffectedSurface => m.c,
        Variable::Stenosis => m.d,
    }
}

proptest! {
    #[test]
    fn ses_cd_is_sum_of_cells_and_in_range(matrix in arb_matrix()) {
        let expected: u32 = Segment::ALL
            .iter()
            .flat_map(|&s| Variable::ALL.iter().map(move |&v| (s, v)))
            .map(|(s, v)| matrix.get(s, v).map_or(0, |sc| u32::from(sc.value())))
            .sum();
        let result = aggregate(&matrix);
        prop_assert_eq!(result.ses_cd_total, expected);
        prop_assert!(result.ses_cd_total <= 60);
        prop_assert!(result.severity_bar_percent <= 100.0);
    }

    #[test]
    fn mm_ses_cd_total_is_sum_of_segment_values(matrix in arb_matrix()) {
        let result = aggregate(&matrix);
        let expected: f64 = Segment::ALL
            .iter()
            .map(|&s| MmSesCd.segment_value(s, matrix.segment(s)))
            .sum();
        prop_assert!((result.mm_ses_cd_total - expected).abs() < 1e-9);
        let affected = result.segments.iter().filter(|s| s.mm_ses_cd > 0.0).count() as u32;
        prop_assert_eq!(result.affected_segments, affected);
    }

    #[test]
    fn single_cell_change_is_its_marginal_contribution(
        matrix in arb_matrix(),
        seg in 0usize..5,
        var in 0usize..4,
        new_value in 0i64..=3,
    ) {
        let segment = Segment::ALL[seg];
        let variable = Variable::ALL[var];
        let old = matrix.get(segment, variable).map_or(0, |s| i64::from(s.value()));

        let mut changed = matrix.clone();
        changed.set(segment, variable, Some(Score::new(new_value).unwrap()));

        let before = aggregate(&matrix);
        let after = aggregate(&changed);

        prop_assert_eq!(
            i64::from(after.ses_cd_total) - i64::from(before.ses_cd_total),
            new_value - old
        );

        let mut expected_delta = (new_value - old) as f64 * weight(segment, variable);
        if variable == Variable::UlcerSize {
            let flag = |v: i64| if v > 0 { 1.0 } else { 0.0 };
            expected_delta += (flag(new_value) - flag(old)) * Multipliers::for_segment(segment).e;
        }
        prop_assert!((after.mm_ses_cd_total - before.mm_ses_cd_total - expected_delta).abs() < 1e-9);
    }
}

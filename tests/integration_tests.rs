use vdotrs::{
    build_report, estimate_vdot, parse_time_string, predict_and_prescribe, predict_duration,
    race_predictions, training_paces, EffortLevel, RaceInput,
};

/// Integration tests that run the complete race-to-report workflow

#[cfg(test)]
mod integration_tests {
    use super::*;

    /// 5K in 20:00, entered the way a user would type it
    fn reference_race() -> RaceInput {
        RaceInput::new(5000.0, parse_time_string("20:00")).unwrap()
    }

    #[test]
    fn test_complete_report_workflow() {
        let report = build_report(&reference_race());

        assert!((report.vdot - 49.8).abs() < 0.5);
        assert_eq!(report.training_paces.len(), 5);
        assert_eq!(report.race_predictions.len(), 6);
    }

    #[test]
    fn test_training_paces_fixed_order() {
        let paces = training_paces(5000.0, 1200);
        let names: Vec<String> = paces.iter().map(|p| p.level.to_string()).collect();
        assert_eq!(names, vec!["easy", "marathon", "threshold", "interval", "maximal"]);
        assert_eq!(paces[3].level, EffortLevel::Interval);
    }

    #[test]
    fn test_paces_get_faster_with_effort() {
        let paces = training_paces(5000.0, 1200);
        for pair in paces.windows(2) {
            let slower = parse_time_string(&pair[0].slow);
            let faster = parse_time_string(&pair[1].slow);
            assert!(slower > faster, "{} vs {}", pair[0].level, pair[1].level);
        }
    }

    #[test]
    fn test_race_predictions_reference() {
        let predictions = race_predictions(5000.0, 1200);
        let expected = [
            (800, 164),
            (1500, 325),
            (3000, 696),
            (5000, 1200),
            (10_000, 2488),
            (21_095, 5509),
        ];

        for (prediction, (distance, seconds)) in predictions.iter().zip(expected) {
            assert_eq!(prediction.distance_meters, distance);
            let time = parse_time_string(prediction.time.as_deref().unwrap());
            assert!(time.abs_diff(seconds) <= 2, "{}m: {}", distance, time);
        }
    }

    #[test]
    fn test_equivalent_races_agree() {
        // Predict a 10K from a 5K, then feed the 10K back in
        let vdot_5k = estimate_vdot(5000.0, 1200);
        let ten_k = predict_duration(vdot_5k, 10_000.0).unwrap();
        let vdot_10k = estimate_vdot(10_000.0, ten_k);

        assert!((vdot_5k - vdot_10k).abs() < 0.05);
        let five_k = predict_duration(vdot_10k, 5000.0).unwrap();
        assert!(five_k.abs_diff(1200) <= 2, "5K: {}", five_k);
    }

    #[test]
    fn test_predict_and_prescribe_matches_report() {
        let (paces, predictions) = predict_and_prescribe(10_000.0, 2700);
        let report = build_report(&RaceInput::new(10_000.0, 2700).unwrap());

        assert_eq!(paces, report.training_paces);
        assert_eq!(predictions, report.race_predictions);
    }

    #[test]
    fn test_hour_long_half_marathon_formatting() {
        let predictions = race_predictions(21_095.0, 5400);
        assert_eq!(predictions[5].time.as_deref(), Some("90'00"));
    }

    #[test]
    fn test_zero_duration_rejected_before_calculation() {
        let seconds = parse_time_string("garbage");
        assert_eq!(seconds, 0);
        assert!(RaceInput::new(5000.0, seconds).is_err());
    }

    #[test]
    fn test_padded_time_argument_parses_like_plain() {
        for typed in ["20:00 ", " 20:00", "\t20:00\n"] {
            let input = RaceInput::new(5000.0, parse_time_string(typed)).unwrap();
            assert_eq!(input, reference_race());
        }
    }

    #[test]
    fn test_vdot_alone_matches_full_report() {
        let input = reference_race();
        let vdot = estimate_vdot(input.distance_meters, input.duration_seconds);
        assert_eq!(vdot, build_report(&input).vdot);
    }

    #[test]
    fn test_hopelessly_slow_race_rejected() {
        assert!(RaceInput::new(100.0, parse_time_string("3:53:20")).is_err());
    }
}

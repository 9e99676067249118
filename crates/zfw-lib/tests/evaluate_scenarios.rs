use zfw_lib::{
    evaluate, AircraftType, CargoSpec, EvaluationRequest, PassengerCounts, PassengerSpec,
    Season, Verdict,
};

fn standard(male: u32, female: u32, child: u32, infant: u32) -> PassengerSpec {
    PassengerSpec::StandardCounts(PassengerCounts::new(male, female, child, infant))
}

#[test]
fn cj2_summer_two_couples_within_limits() {
    let result = evaluate(
        AircraftType::Cj2,
        Season::Summer,
        &standard(2, 2, 0, 0),
        CargoSpec::Default,
    )
    .expect("valid request");

    assert_eq!(result.total_passengers, 4);
    assert_eq!(result.passenger_weight_lb, 704.0);
    assert_eq!(result.cargo_weight_lb, 120.0);
    assert_eq!(result.total_payload_lb, 824.0);
    assert_eq!(result.max_allowed_lb, 1086.0);
    assert_eq!(result.margin_lb, 262.0);
    assert!(result.within_limits);
    assert_eq!(result.verdict(), Verdict::WithinLimits { margin_lb: 262.0 });
}

#[test]
fn cj3_winter_ten_passengers_over_limit() {
    let result = evaluate(
        AircraftType::Cj3,
        Season::Winter,
        &standard(6, 4, 0, 0),
        CargoSpec::Default,
    )
    .expect("valid request");

    assert_eq!(result.passenger_weight_lb, 1854.0);
    assert_eq!(result.cargo_weight_lb, 300.0);
    assert_eq!(result.total_payload_lb, 2154.0);
    assert_eq!(result.max_allowed_lb, 1550.0);
    assert_eq!(result.margin_lb, -604.0);
    assert!(!result.within_limits);
    assert_eq!(result.verdict(), Verdict::OverLimit { excess_lb: 604.0 });
}

#[test]
fn embraer_summer_explicit_weights_with_cargo_override() {
    let request = EvaluationRequest::new(
        AircraftType::Embraer,
        Season::Summer,
        PassengerSpec::explicit(vec![180.0, 175.0, 160.0]),
        CargoSpec::Override(50.0),
    );
    let result = request.evaluate().expect("valid request");

    assert_eq!(result.total_passengers, 3);
    assert_eq!(result.passenger_weight_lb, 515.0);
    assert_eq!(result.cargo_weight_lb, 50.0);
    assert_eq!(result.total_payload_lb, 565.0);
    assert_eq!(result.max_allowed_lb, 2116.0);
    assert_eq!(result.margin_lb, 1551.0);
    assert_eq!(result.verdict(), Verdict::WithinLimits { margin_lb: 1551.0 });
}

#[test]
fn empty_loading_suppresses_verdict() {
    let result = evaluate(
        AircraftType::Cj2,
        Season::Winter,
        &standard(0, 0, 0, 0),
        CargoSpec::Default,
    )
    .expect("valid request");

    assert!(result.is_empty());
    assert_eq!(result.verdict(), Verdict::NoInput);

    let explicit = evaluate(
        AircraftType::Cj2,
        Season::Winter,
        &PassengerSpec::explicit(Vec::new()),
        CargoSpec::Override(0.0),
    )
    .expect("valid request");
    assert_eq!(explicit.verdict(), Verdict::NoInput);
}

#[test]
fn zero_margin_counts_as_within_limits() {
    // 4 winter males weigh 796 lb; cargo makes up the rest of the CJ2 winter maximum.
    let result = evaluate(
        AircraftType::Cj2,
        Season::Winter,
        &standard(4, 0, 0, 0),
        CargoSpec::Override(1034.0 - 796.0),
    )
    .expect("valid request");

    assert_eq!(result.margin_lb, 0.0);
    assert!(result.within_limits);
    assert_eq!(result.verdict(), Verdict::WithinLimits { margin_lb: 0.0 });
}

#[test]
fn standard_weight_matches_table_formula_for_every_season() {
    for season in Season::ALL {
        let w = zfw_lib::StandardWeights::for_season(season);
        for (m, f, c, i) in [(0, 0, 0, 0), (1, 2, 3, 4), (7, 0, 2, 1), (13, 11, 5, 3)] {
            let weight = standard(m, f, c, i).weight_lb(season).expect("valid spec");
            let expected = m * w.male + f * w.female + c * w.child + i * w.infant;
            assert_eq!(weight, f64::from(expected), "{season} {m}/{f}/{c}/{i}");
        }
    }
}

#[test]
fn default_cargo_tracks_total_passenger_count() {
    for (spec, count) in [
        (standard(1, 1, 1, 1), 4u64),
        (standard(0, 0, 0, 9), 9),
        (PassengerSpec::explicit(vec![100.0; 7]), 7),
    ] {
        let result = evaluate(AircraftType::Cj3, Season::Summer, &spec, CargoSpec::Default)
            .expect("valid request");
        assert_eq!(result.total_passengers, count);
        assert_eq!(result.cargo_weight_lb, 30.0 * count as f64);
    }
}

#[test]
fn margin_is_max_minus_total_and_sign_decides_limits() {
    for aircraft in AircraftType::ALL {
        for season in Season::ALL {
            for cargo in [0.0, 250.5, 900.0, 2500.0] {
                let result = evaluate(
                    aircraft,
                    season,
                    &standard(2, 1, 1, 0),
                    CargoSpec::Override(cargo),
                )
                .expect("valid request");
                assert_eq!(
                    result.margin_lb,
                    result.max_allowed_lb - (result.passenger_weight_lb + result.cargo_weight_lb)
                );
                assert_eq!(result.within_limits, result.margin_lb >= 0.0);
            }
        }
    }
}

#[test]
fn repeated_evaluation_is_identical() {
    let request = EvaluationRequest::new(
        AircraftType::Embraer,
        Season::Winter,
        PassengerSpec::explicit(vec![201.3, 99.9, 12.25]),
        CargoSpec::Default,
    );
    let first = request.evaluate().expect("valid request");
    let second = request.evaluate().expect("valid request");
    assert_eq!(first, second);
    assert_eq!(first.margin_lb.to_bits(), second.margin_lb.to_bits());
}

#[test]
fn result_serializes_to_json() {
    let result = evaluate(
        AircraftType::Cj2,
        Season::Summer,
        &standard(2, 2, 0, 0),
        CargoSpec::Default,
    )
    .expect("valid request");
    let value = serde_json::to_value(result).expect("serialize");
    assert_eq!(value["total_payload_lb"], 824.0);
    assert_eq!(value["within_limits"], true);

    let verdict = serde_json::to_value(result.verdict()).expect("serialize");
    assert_eq!(verdict["status"], "within_limits");
    assert_eq!(verdict["margin_lb"], 262.0);
}

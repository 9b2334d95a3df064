//! End-to-end pipeline test on the 20-plant central-Thailand sample.

use mgplan_algo::siting::{
    build_cost_matrices, compare_selections, formulate, generate_candidate_sites, solve_siting,
    SitingProblem, SitingSolver, SolveStatus, SolverBackend,
};
use mgplan_core::{GeoBounds, PowerPlant};

#[rustfmt::skip]
fn thailand_plants() -> Vec<PowerPlant> {
    let rows: [(f64, f64, f64); 20] = [
        (13.579769, 100.199597, 802_639.8),
        (13.713126, 100.480011, 160_624.86),
        (13.819949, 100.447445, 158_469.12),
        (13.855095, 100.541760, 157_962.96),
        (13.765851, 100.642171, 157_962.96),
        (13.828218, 100.679821, 157_907.1),
        (13.575961, 101.003370, 200_553.132),
        (14.169086, 100.552823, 2_501_433.6),
        (14.168982, 100.553059, 3_908_490.0),
        (13.975430, 100.183765, 958_414.188),
        (13.984066, 100.196286, 471_395.7),
        (14.000489, 100.200201, 1_131_538.464),
        (14.107629, 100.173778, 5_639_930.208),
        (14.136762, 100.143243, 3_738_735.336),
        (14.138385, 100.150625, 1_523_781.342),
        (14.154260, 100.137729, 1_869_693.252),
        (14.222448, 100.112873, 1_100_657.46),
        (14.244619, 100.127588, 157_290.36),
        (14.321900, 100.302216, 267_252.138),
        (14.217274, 100.277866, 471_980.52),
    ];
    rows.iter().map(|&(lat, lon, rev)| PowerPlant::new(lat, lon, rev)).collect()
}

fn thailand_problem() -> SitingProblem {
    let plants = thailand_plants();
    let bounds = GeoBounds::from_points(plants.iter().map(|p| &p.location)).unwrap();
    let sites = generate_candidate_sites(&bounds, 20, 42).unwrap();

    SitingProblem::builder(plants, sites)
        .min_sites(1)
        .max_sites(15)
        .build()
        .unwrap()
}

#[test]
fn exact_solve_respects_band_and_objective() {
    let problem = thailand_problem();
    let solution = solve_siting(&problem, &SitingSolver::new()).unwrap();

    assert_eq!(solution.status, SolveStatus::Optimal);
    let selection = solution.selection.clone().unwrap();
    assert_eq!(selection.len(), 20);

    let selected = solution.num_selected();
    assert!((1..=15).contains(&selected), "selected {selected}");

    // The reported objective is the model objective of the selection.
    let costs = build_cost_matrices(&problem).unwrap();
    let model = formulate(&costs, problem.min_sites, problem.max_sites);
    let expected = model.evaluate(&selection);
    assert!((solution.objective.unwrap() - expected).abs() < 1e-6);
}

#[test]
fn relaxed_solve_never_beats_exact() {
    let problem = thailand_problem();

    let exact = solve_siting(&problem, &SitingSolver::new()).unwrap();
    let relaxed = solve_siting(
        &problem,
        &SitingSolver::new().with_backend(SolverBackend::LpRelaxation),
    )
    .unwrap();

    assert_eq!(exact.status, SolveStatus::Optimal);
    assert_eq!(relaxed.status, SolveStatus::Optimal);
    assert!(exact.objective.unwrap() <= relaxed.objective.unwrap() + 1e-6);

    let cmp = compare_selections(
        exact.selection.as_deref().unwrap(),
        relaxed.selection.as_deref().unwrap(),
    )
    .unwrap();
    assert_eq!(cmp.lhs_selected, exact.num_selected());
    assert_eq!(cmp.rhs_selected, relaxed.num_selected());
}

#[test]
fn regenerating_sites_changes_the_problem() {
    let plants = thailand_plants();
    let bounds = GeoBounds::from_points(plants.iter().map(|p| &p.location)).unwrap();

    let a = generate_candidate_sites(&bounds, 20, 42).unwrap();
    let b = generate_candidate_sites(&bounds, 20, 7).unwrap();
    assert_ne!(a, b);

    // Cost matrices are scoped to one site list; different lists give
    // different plant-connection costs.
    let problem_a = SitingProblem::builder(plants.clone(), a).build().unwrap();
    let problem_b = SitingProblem::builder(plants, b).build().unwrap();
    let costs_a = build_cost_matrices(&problem_a).unwrap();
    let costs_b = build_cost_matrices(&problem_b).unwrap();
    assert_ne!(costs_a.site_to_plant, costs_b.site_to_plant);
}

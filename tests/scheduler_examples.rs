use stepdag::dag::{DependencyGraph, WorkerScheduler};
use stepdag::solve;
use stepdag_test_utils::builders::{
    ConstraintSetBuilder, SAMPLE_INPUT, SchedulerConfigBuilder, step,
};
use stepdag_test_utils::init_tracing;

fn run_sample(workers: usize, base_worktime: u32) -> stepdag::dag::Execution {
    let cfg = SchedulerConfigBuilder::new()
        .workers(workers)
        .base_worktime(base_worktime)
        .build();
    WorkerScheduler::from_text(SAMPLE_INPUT, &cfg)
        .expect("sample input parses")
        .execute()
}

#[test]
fn single_worker_orders_sample_alphabetically() {
    init_tracing();

    let result = run_sample(1, 0);

    assert_eq!(result.order, "CABDFE");
    // One worker does everything back to back: 3+1+2+4+6+5.
    assert_eq!(result.ticks, 21);
    assert!(result.trace.is_none());
}

#[test]
fn two_workers_finish_sample_in_fifteen_ticks() {
    init_tracing();

    let result = run_sample(2, 0);

    assert_eq!(result.ticks, 15);
    assert_eq!(result.order, "CABFDE");
}

#[test]
fn single_worker_order_ignores_base_worktime() {
    let result = run_sample(1, 60);

    assert_eq!(result.order, "CABDFE");
    assert_eq!(result.ticks, 21 + 6 * 60);
}

#[test]
fn empty_input_finishes_immediately() {
    let cfg = SchedulerConfigBuilder::new().workers(3).trace(true).build();
    let result = WorkerScheduler::from_text("", &cfg).unwrap().execute();

    assert_eq!(result.order, "");
    assert_eq!(result.ticks, 0);

    let trace = result.trace.expect("trace requested");
    assert_eq!(trace.rows.len(), 1);
    assert_eq!(trace.rows[0].tick, 0);
    assert_eq!(trace.rows[0].assignments, vec![None, None, None]);
}

#[test]
fn single_constraint_runs_predecessor_first() {
    let constraints = ConstraintSetBuilder::new().edge('A', 'B').build();
    let cfg = SchedulerConfigBuilder::new().workers(1).build();

    let result = solve(&constraints, &cfg).unwrap();

    assert_eq!(result.order, "AB");
    assert_eq!(result.ticks, 3);
}

#[test]
fn more_workers_never_slow_down_the_sample() {
    for base in [0, 60] {
        let mut previous = u64::MAX;
        for workers in 1..=6 {
            let ticks = run_sample(workers, base).ticks;
            assert!(
                ticks <= previous,
                "{workers} workers took {ticks} ticks, more than with fewer workers ({previous})"
            );
            previous = ticks;
        }
    }
}

#[test]
fn lowest_worker_gets_alphabetically_first_ready_step() {
    // C, B and A are all ready at tick 0 and all feed X.
    let constraints = ConstraintSetBuilder::new()
        .edge('C', 'X')
        .edge('B', 'X')
        .edge('A', 'X')
        .build();
    let cfg = SchedulerConfigBuilder::new().workers(2).trace(true).build();

    let result = solve(&constraints, &cfg).unwrap();
    let trace = result.trace.expect("trace requested");

    assert_eq!(trace.rows[0].assignments, vec![Some(step('A')), Some(step('B'))]);
    // A (1 tick) frees worker 1, which then picks up C.
    assert_eq!(trace.rows[1].assignments, vec![Some(step('C')), Some(step('B'))]);
    assert_eq!(result.order, "ABCX");
    // C runs ticks 1..=3, X (24 ticks) runs 4..=27.
    assert_eq!(result.ticks, 28);
}

#[test]
fn freed_worker_ids_are_reused_in_ascending_order() {
    // Worker 2 frees up (after B) before worker 1 (after C); D and E only
    // become ready once both are idle, and must still go to workers 1, 2.
    let constraints = ConstraintSetBuilder::new()
        .edge('A', 'D')
        .edge('B', 'D')
        .edge('C', 'D')
        .edge('B', 'E')
        .edge('C', 'E')
        .build();
    let cfg = SchedulerConfigBuilder::new().workers(2).trace(true).build();

    let result = solve(&constraints, &cfg).unwrap();
    let trace = result.trace.expect("trace requested");

    let rows: Vec<_> = trace.rows.iter().map(|r| r.assignments.clone()).collect();
    assert_eq!(rows[0], vec![Some(step('A')), Some(step('B'))]);
    assert_eq!(rows[1], vec![Some(step('C')), Some(step('B'))]);
    assert_eq!(rows[2], vec![Some(step('C')), None]);
    assert_eq!(rows[3], vec![Some(step('C')), None]);
    assert_eq!(rows[4], vec![Some(step('D')), Some(step('E'))]);

    assert_eq!(result.order, "ABCDE");
    // E (5 ticks) runs 4..=8.
    assert_eq!(result.ticks, 9);
}

#[test]
fn sample_trace_matches_worker_table() {
    let cfg = SchedulerConfigBuilder::new().workers(2).trace(true).build();
    let result = WorkerScheduler::from_text(SAMPLE_INPUT, &cfg)
        .unwrap()
        .execute();

    let expected = "\
Second\tWorker 1\tWorker 2\tDone
0\tC\t.\t
1\tC\t.\t
2\tC\t.\tC
3\tA\tF\tCA
4\tB\tF\tCA
5\tB\tF\tCAB
6\tD\tF\tCAB
7\tD\tF\tCAB
8\tD\tF\tCABF
9\tD\t.\tCABFD
10\tE\t.\tCABFD
11\tE\t.\tCABFD
12\tE\t.\tCABFD
13\tE\t.\tCABFD
14\tE\t.\tCABFDE
15\t.\t.\tCABFDE
";

    let trace = result.trace.expect("trace requested");
    assert_eq!(trace.to_string(), expected);
    assert_eq!(trace.rows.len() as u64, result.ticks + 1);
}

#[test]
fn steps_named_only_as_predecessors_are_scheduled() {
    // Q and P never appear as dependents.
    let constraints = ConstraintSetBuilder::new()
        .edge('Q', 'Z')
        .edge('P', 'Z')
        .build();
    let graph = DependencyGraph::from_constraints(&constraints, 0);
    assert_eq!(graph.len(), 3);

    let cfg = SchedulerConfigBuilder::new().workers(1).build();
    let result = WorkerScheduler::new(graph, &cfg).execute();

    assert_eq!(result.order, "PQZ");
    assert_eq!(result.ticks, 16 + 17 + 26);
}

#[test]
fn identical_runs_are_identical() {
    let a = run_sample(3, 5);
    let b = run_sample(3, 5);
    assert_eq!(a, b);
}

#[test]
fn report_shows_order_ticks_and_optional_trace() {
    let plain = run_sample(2, 0);
    assert_eq!(stepdag::render_report(&plain), "order: CABFDE\nticks: 15\n");

    let cfg = SchedulerConfigBuilder::new().workers(2).trace(true).build();
    let traced = WorkerScheduler::from_text(SAMPLE_INPUT, &cfg)
        .unwrap()
        .execute();
    let report = stepdag::render_report(&traced);
    assert!(report.starts_with("order: CABFDE\nticks: 15\n\nSecond\tWorker 1\tWorker 2\tDone\n"));
    assert!(report.ends_with("15\t.\t.\tCABFDE\n"));
}

#[test]
fn solve_rejects_cycles_before_simulating() {
    let constraints = ConstraintSetBuilder::new().chain("ABA").build();
    let cfg = SchedulerConfigBuilder::new().build();
    assert!(matches!(
        solve(&constraints, &cfg),
        Err(stepdag::errors::StepdagError::DagCycle(_))
    ));
}

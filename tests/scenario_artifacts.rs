//! End-to-end tests: load shipped scenario files, plan, and render.

use marga_grid::render::{SvgConfig, SvgRenderer, render_ascii, save_pgm};
use marga_grid::{Scenario, pathfinding};
use tempfile::TempDir;

fn load_scenario(name: &str) -> Scenario {
    let path = format!(
        "{}/scenarios/{}.yaml",
        env!("CARGO_MANIFEST_DIR"),
        name
    );
    Scenario::from_file(&path)
        .unwrap_or_else(|e| panic!("failed to load scenario {}: {}", name, e))
}

#[test]
fn test_shipped_demo_file_matches_builtin() {
    let from_file = load_scenario("corner_to_corner");
    let builtin = Scenario::demo();

    assert_eq!(from_file.name, builtin.name);
    assert_eq!(from_file.start, builtin.start);
    assert_eq!(from_file.goal, builtin.goal);
    assert_eq!(from_file.grid.rows(), builtin.grid.rows());
    assert_eq!(from_file.grid.cols(), builtin.grid.cols());
    for (coord, kind) in builtin.grid.iter() {
        assert_eq!(from_file.grid.kind_at(coord), Some(kind));
    }
}

#[test]
fn test_corner_to_corner_plan() {
    let scenario = load_scenario("corner_to_corner");
    let result = pathfinding::find_path(&scenario.grid, scenario.start, scenario.goal);

    assert!(result.success);
    assert_eq!(result.cost, 18);
}

#[test]
fn test_switchback_plan() {
    let scenario = load_scenario("switchback");
    let result = pathfinding::find_path(&scenario.grid, scenario.start, scenario.goal);

    assert!(result.success);
    assert_eq!(result.cost, 32);
    assert!(
        result
            .path
            .iter()
            .any(|c| c.row == 3 && (c.col == 8 || c.col == 9))
    );
}

#[test]
fn test_malformed_yaml_is_rejected() {
    assert!(Scenario::from_yaml("name: [unclosed").is_err());
    assert!(Scenario::from_yaml("rows: 5\ncols: 5").is_err());
}

#[test]
fn test_ascii_output_shows_endpoints() {
    let scenario = load_scenario("switchback");
    let result = pathfinding::find_path(&scenario.grid, scenario.start, scenario.goal);

    let text = render_ascii(&scenario, &result);
    assert!(text.starts_with('S'));
    assert!(text.trim_end().ends_with('G'));
    assert_eq!(text.matches('#').count(), 16);
}

#[test]
fn test_failed_plan_remains_renderable() {
    // Mirrors the binary's flow: read the failure reason, then keep
    // using the same result for every renderer
    let yaml = r#"
name: sealed_goal
rows: 4
cols: 4
walls:
  - { row: 3, col: 3 }
start: { row: 0, col: 0 }
goal: { row: 3, col: 3 }
"#;
    let scenario = Scenario::from_yaml(yaml).unwrap();
    let result = pathfinding::find_path(&scenario.grid, scenario.start, scenario.goal);

    assert!(!result.success);
    if let Some(reason) = &result.failure_reason {
        assert_eq!(format!("{:?}", reason), "GoalBlocked");
    } else {
        panic!("expected a failure reason");
    }

    let text = render_ascii(&scenario, &result);
    assert!(text.starts_with('S'));
    assert!(!text.contains('*'));

    let temp_dir = TempDir::new().unwrap();
    let svg_path = temp_dir.path().join("sealed_goal.svg");
    SvgRenderer::new(&scenario, SvgConfig::default())
        .with_result(&result)
        .save(&svg_path)
        .unwrap();
    let svg = std::fs::read_to_string(&svg_path).unwrap();
    assert!(svg.contains("No path found"));

    let pgm_path = temp_dir.path().join("sealed_goal.pgm");
    save_pgm(&scenario, &result, &pgm_path).unwrap();
    let bytes = std::fs::read(&pgm_path).unwrap();
    assert!(bytes.starts_with(b"P5\n4 4\n255\n"));
    assert_eq!(bytes.len(), 11 + 16);
}

#[test]
fn test_render_artifacts_to_disk() {
    let temp_dir = TempDir::new().unwrap();

    let scenario = load_scenario("corner_to_corner");
    let result = pathfinding::find_path(&scenario.grid, scenario.start, scenario.goal);

    let svg_path = temp_dir.path().join("demo.svg");
    SvgRenderer::new(&scenario, SvgConfig::default())
        .with_result(&result)
        .save(&svg_path)
        .unwrap();
    let svg = std::fs::read_to_string(&svg_path).unwrap();
    assert!(svg.contains("corner_to_corner"));
    assert!(svg.contains("Cost: 18"));

    let pgm_path = temp_dir.path().join("demo.pgm");
    save_pgm(&scenario, &result, &pgm_path).unwrap();
    let bytes = std::fs::read(&pgm_path).unwrap();
    assert!(bytes.starts_with(b"P5\n10 10\n255\n"));
    assert_eq!(bytes.len(), 13 + 100);
}

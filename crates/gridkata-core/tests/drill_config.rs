//! Integration tests for DrillConfig defaults and serialization.

use gridkata_core::DrillConfig;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn default_values_match_the_exercises() {
    let cfg = DrillConfig::default();
    assert_eq!(cfg.fill_shape, (3, 4));
    assert_eq!(cfg.fill_value, 1.0);
    assert_eq!(cfg.source_shape, (6, 6));
    assert_eq!(cfg.block_rows, 3);
    assert_eq!(cfg.block_cols, 4);
    assert_eq!(cfg.cube_side, 4);
    assert_eq!(cfg.seq_len, 200);
    assert_eq!(cfg.seq_start, 0.05);
    assert_eq!(cfg.seq_stop, 10.0);
    assert_eq!(cfg.overwrite_stride, 15);
    assert_eq!(cfg.overwrite_value, 15.0);
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[test]
fn config_serializes_to_json() {
    let cfg = DrillConfig::default();
    let json = serde_json::to_string_pretty(&cfg).unwrap();
    assert!(json.contains("fill_shape"));
    assert!(json.contains("overwrite_stride"));
}

#[test]
fn config_round_trips_json() {
    let cfg = DrillConfig::default();
    let json = serde_json::to_string(&cfg).unwrap();
    let cfg2: DrillConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(cfg.fill_shape, cfg2.fill_shape);
    assert_eq!(cfg.seq_len, cfg2.seq_len);
    assert!((cfg.seq_start - cfg2.seq_start).abs() < 1e-12);
    assert_eq!(cfg.overwrite_stride, cfg2.overwrite_stride);
}

#[test]
fn empty_json_object_uses_defaults() {
    let cfg: DrillConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg.seq_len, 200);
    assert_eq!(cfg.cube_side, 4);
}

#[test]
fn partial_json_overrides_single_field() {
    let cfg: DrillConfig = serde_json::from_str(r#"{"cube_side": 3}"#).unwrap();
    assert_eq!(cfg.cube_side, 3);
    assert_eq!(cfg.seq_len, 200);
}

use assert_cmd::Command;
use predicates::prelude::*;

fn write_black_png(path: &std::path::Path, width: u32, height: u32) {
    let img = image::RgbImage::new(width, height);
    img.save(path).expect("write png");
}

#[test]
fn empty_scene_prints_empty_json_array() {
    let dir = tempfile::tempdir().expect("tempdir");
    let png = dir.path().join("scene.png");
    write_black_png(&png, 320, 240);

    Command::cargo_bin("stone-wrangler")
        .expect("binary")
        .arg(&png)
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn missing_image_fails_with_context() {
    Command::cargo_bin("stone-wrangler")
        .expect("binary")
        .arg("does-not-exist.png")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn malformed_params_file_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let png = dir.path().join("scene.png");
    write_black_png(&png, 64, 64);

    let params = dir.path().join("params.json");
    std::fs::write(&params, "{ not json").expect("write params");

    Command::cargo_bin("stone-wrangler")
        .expect("binary")
        .arg(&png)
        .arg("--params")
        .arg(&params)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"));
}

#[test]
fn custom_calibration_file_is_accepted() {
    let dir = tempfile::tempdir().expect("tempdir");
    let png = dir.path().join("scene.png");
    write_black_png(&png, 200, 200);

    let calibration = dir.path().join("calibration.json");
    std::fs::write(
        &calibration,
        r#"{
            "frame_points": [[0, 0], [200, 0], [200, 200], [0, 200]],
            "world_points": [[-10, 20], [10, 20], [10, 0], [-10, 0]],
            "scale": { "pixel_size": 0.1, "area_x": 20.0, "area_y": 20.0 }
        }"#,
    )
    .expect("write calibration");

    Command::cargo_bin("stone-wrangler")
        .expect("binary")
        .arg(&png)
        .arg("--calibration")
        .arg(&calibration)
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

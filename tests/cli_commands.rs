//! Tests for CLI commands (serve, generate)

use std::process::Command;

use temp_dir::TempDir;

fn mealmate() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mealmate"))
}

#[test]
fn test_cli_help_shows_all_commands() {
    let output = mealmate()
        .arg("--help")
        .output()
        .expect("Failed to run mealmate --help");

    let help_text = String::from_utf8_lossy(&output.stdout);

    assert!(help_text.contains("serve"), "serve command not in help");
    assert!(help_text.contains("generate"), "generate command not in help");
}

#[test]
fn test_generate_csv_from_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.child("request.json");
    std::fs::write(
        &input,
        r#"{
            "householdId": "h1",
            "meals": [
                {"name": "Pancakes", "ingredients": [
                    {"name": "Milk", "amount": "1 cup"},
                    {"name": "Flour", "amount": "2 cups"}
                ]},
                {"name": "Latte", "ingredients": [{"name": "milk", "amount": "8 oz"}]}
            ]
        }"#,
    )
    .unwrap();

    let output = mealmate()
        .args(["generate", "--format", "csv", "--input"])
        .arg(&input)
        .output()
        .expect("Failed to run mealmate generate");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "Name,Quantity,Aisle,Sources\n\"Milk\",\"1 cup, 8 oz\",\"Dairy & Eggs\",\"Pancakes; Latte\"\n\n"
    );
}

#[test]
fn test_generate_rejects_unknown_format() {
    let output = mealmate()
        .args(["generate", "--format", "pdf"])
        .output()
        .expect("Failed to run mealmate generate");

    assert!(!output.status.success());
}

#[test]
fn test_generate_fails_on_missing_input() {
    let dir = TempDir::new().unwrap();

    let output = mealmate()
        .args(["generate", "--input"])
        .arg(dir.child("missing.json"))
        .output()
        .expect("Failed to run mealmate generate");

    assert!(!output.status.success());
}

//! End-to-end tests for `aacboard category` and `aacboard item` commands.

use aacboard::parser::parse_board_str;
use serde::Deserialize;
use std::fs;

mod fixtures;
use fixtures::*;

#[derive(Debug, Deserialize)]
struct CategoryEntry {
    image: String,
    name: String,
    items: usize,
}

#[derive(Debug, Deserialize)]
struct ListCategoriesResponse {
    categories: Vec<CategoryEntry>,
    count: usize,
}

fn reload(path: &std::path::Path) -> aacboard::Board {
    parse_board_str(&fs::read_to_string(path).unwrap()).unwrap()
}

// ============================================================================
// List Command Tests
// ============================================================================

#[test]
fn test_category_list_empty_board() {
    let (board_path, _temp_dir) = create_temp_board_file("");

    let output = run(&["category", "list", "--board", board_path.to_str().unwrap()]);
    assert_exit(&output, 0, "Empty board should list successfully");
    assert!(stdout(&output).contains("No categories"));
}

#[test]
fn test_category_list_json() {
    let (board_path, _temp_dir) = create_temp_board_file(SAMPLE_BOARD);

    let output = run(&[
        "category",
        "list",
        "--board",
        board_path.to_str().unwrap(),
        "--json",
    ]);
    assert_exit(&output, 0, "List should succeed");

    let response: ListCategoriesResponse =
        serde_json::from_str(&stdout(&output)).expect("Should parse JSON output");
    assert_eq!(response.count, 2);

    let food = response
        .categories
        .iter()
        .find(|c| c.image == "img/food/plate.png")
        .expect("food category listed");
    assert_eq!(food.name, "food");
    assert_eq!(food.items, 2);
}

// ============================================================================
// Add Command Tests
// ============================================================================

#[test]
fn test_category_add_creates_board_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let board_path = temp_dir.path().join("new_board.txt");

    let output = run(&[
        "category",
        "add",
        "--board",
        board_path.to_str().unwrap(),
        "--image",
        "img/toys/ball.png",
        "--name",
        "toys",
    ]);
    assert_exit(&output, 0, "Add should create the board file");
    assert_eq!(
        fs::read_to_string(&board_path).unwrap(),
        "img/toys/ball.png toys\n"
    );
}

#[test]
fn test_category_add_duplicate() {
    let (board_path, _temp_dir) = create_temp_board_file(SAMPLE_BOARD);

    let output = run(&[
        "category",
        "add",
        "--board",
        board_path.to_str().unwrap(),
        "--image",
        "img/food/plate.png",
        "--name",
        "meals",
    ]);
    assert_exit(&output, 1, "Duplicate category should fail");
    assert_eq!(fs::read_to_string(&board_path).unwrap(), SAMPLE_BOARD);
}

#[test]
fn test_category_add_rejects_image_with_space() {
    let (board_path, _temp_dir) = create_temp_board_file(SAMPLE_BOARD);

    let output = run(&[
        "category",
        "add",
        "--board",
        board_path.to_str().unwrap(),
        "--image",
        "img/my toys.png",
        "--name",
        "toys",
    ]);
    assert_exit(&output, 1, "Image with a space cannot be saved");
}

// ============================================================================
// Remove Command Tests
// ============================================================================

#[test]
fn test_category_remove_requires_force_when_not_empty() {
    let (board_path, _temp_dir) = create_temp_board_file(SAMPLE_BOARD);
    let path = board_path.to_str().unwrap();

    let output = run(&["category", "remove", "--board", path, "--image", "img/food/plate.png"]);
    assert_exit(&output, 1, "Non-empty category needs --force");
    assert!(String::from_utf8_lossy(&output.stderr).contains("--force"));

    let output = run(&[
        "category",
        "remove",
        "--board",
        path,
        "--image",
        "img/food/plate.png",
        "--force",
    ]);
    assert_exit(&output, 0, "Forced remove should succeed");

    let board = reload(&board_path);
    assert_eq!(board.category_count(), 1);
    assert!(!board.has_category("img/food/plate.png"));
    assert_eq!(board.home().len(), 1);
}

#[test]
fn test_category_remove_unknown() {
    let (board_path, _temp_dir) = create_temp_board_file(SAMPLE_BOARD);

    let output = run(&[
        "category",
        "remove",
        "--board",
        board_path.to_str().unwrap(),
        "--image",
        "img/toys/ball.png",
    ]);
    assert_exit(&output, 1, "Unknown category");
    assert!(String::from_utf8_lossy(&output.stderr).contains("not found"));
}

// ============================================================================
// Item Command Tests
// ============================================================================

#[test]
fn test_item_add_and_remove() {
    let (board_path, _temp_dir) = create_temp_board_file(SAMPLE_BOARD);
    let path = board_path.to_str().unwrap();

    let output = run(&[
        "item",
        "add",
        "--board",
        path,
        "--category",
        "img/clothing/hanger.png",
        "--image",
        "img/clothing/socks.png",
        "--text",
        "warm socks",
    ]);
    assert_exit(&output, 0, "Item add should succeed");

    let board = reload(&board_path);
    let clothing = board.category("img/clothing/hanger.png").unwrap();
    assert_eq!(clothing.speak("img/clothing/socks.png").unwrap(), "warm socks");

    let output = run(&[
        "item",
        "remove",
        "--board",
        path,
        "--category",
        "img/clothing/hanger.png",
        "--image",
        "img/clothing/socks.png",
    ]);
    assert_exit(&output, 0, "Item remove should succeed");

    let board = reload(&board_path);
    assert_eq!(board.category("img/clothing/hanger.png").unwrap().len(), 1);
}

#[test]
fn test_item_add_replaces_text() {
    let (board_path, _temp_dir) = create_temp_board_file(SAMPLE_BOARD);

    let output = run(&[
        "item",
        "add",
        "--board",
        board_path.to_str().unwrap(),
        "--category",
        "img/food/plate.png",
        "--image",
        "img/food/fries.png",
        "--text",
        "chips",
    ]);
    assert_exit(&output, 0, "Re-adding an image replaces its text");

    let board = reload(&board_path);
    let food = board.category("img/food/plate.png").unwrap();
    assert_eq!(food.len(), 2);
    assert_eq!(food.speak("img/food/fries.png").unwrap(), "chips");
}

#[test]
fn test_item_add_unknown_category() {
    let (board_path, _temp_dir) = create_temp_board_file(SAMPLE_BOARD);

    let output = run(&[
        "item",
        "add",
        "--board",
        board_path.to_str().unwrap(),
        "--category",
        "img/toys/ball.png",
        "--image",
        "img/toys/car.png",
        "--text",
        "car",
    ]);
    assert_exit(&output, 1, "Unknown category");
    assert_eq!(fs::read_to_string(&board_path).unwrap(), SAMPLE_BOARD);
}

#[test]
fn test_item_remove_missing_item() {
    let (board_path, _temp_dir) = create_temp_board_file(SAMPLE_BOARD);

    let output = run(&[
        "item",
        "remove",
        "--board",
        board_path.to_str().unwrap(),
        "--category",
        "img/food/plate.png",
        "--image",
        "img/clothing/shirt.png",
    ]);
    assert_exit(&output, 1, "Item lives in another category");
    assert!(String::from_utf8_lossy(&output.stderr).contains("not found"));
}

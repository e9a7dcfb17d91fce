use hometools::core::tools::{all_categories, category_summary, find_category};
use hometools::errors::AppError;
use predicates::str::contains;

mod common;
use common::{ht, test_home};

#[test]
fn test_category_summary() {
    let summary = category_summary();
    assert_eq!(summary.len(), 8);
    assert_eq!(summary[0], ("Essentials - Driving & Fastening", 4));
    assert_eq!(summary.iter().map(|(_, n)| n).sum::<usize>(), 40);

    let all = all_categories();
    assert_eq!(all.len(), summary.len());
    assert_eq!(all[7].tools[0].name, "Shovel (Round or Square Point)");
}

#[test]
fn test_find_category_by_name_fragment_or_number() {
    let cat = find_category("safety & utility").unwrap();
    assert_eq!(cat.name, "Safety & Utility");
    assert_eq!(cat.tools.len(), 5);

    let cat = find_category("power").unwrap();
    assert_eq!(cat.name, "Good Additions (Power Tools)");
    assert_eq!(cat.tools[0].name, "Cordless Drill/Driver");

    let cat = find_category(" 5 ").unwrap();
    assert_eq!(cat.name, "Plumbing & Electrical Basics");
}

#[test]
fn test_find_category_failures() {
    assert!(matches!(find_category("rockets"), Err(AppError::NotFound(_))));
    assert!(matches!(find_category("0"), Err(AppError::NotFound(_))));
    assert!(matches!(find_category("9"), Err(AppError::NotFound(_))));
    assert!(matches!(find_category(""), Err(AppError::InvalidInput(_))));

    let err = find_category("essentials").unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
    assert!(err.to_string().contains("several categories"));
}

#[test]
fn test_cli_tools() {
    let home = test_home("cli_tools");
    ht(&home).args(["--test", "init"]).assert().success();

    ht(&home)
        .arg("tools")
        .assert()
        .success()
        .stdout(contains("Outdoor & Garden Basics"))
        .stdout(contains("Tool categories"));

    ht(&home)
        .args(["tools", "garden"])
        .assert()
        .success()
        .stdout(contains("Wheelbarrow or Garden Cart"))
        .stdout(contains("For moving soil"));

    ht(&home)
        .args(["tools", "--all"])
        .assert()
        .success()
        .stdout(contains("Claw Hammer"))
        .stdout(contains("Shop Vacuum"));

    ht(&home)
        .args(["tools", "rockets"])
        .assert()
        .failure()
        .stderr(contains("rockets"));
}

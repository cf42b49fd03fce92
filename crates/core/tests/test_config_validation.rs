use hexen::{Grid, GridConfig, GridPoint, Path, PathConfig};
use validator::ValidationErrors;

#[test]
fn test_grid_config_validation() {
    let config = GridConfig {
        xsize: 0,        // invalid
        ysize: 10001,    // invalid (too big)
        elevation: -5.0, // valid (but weird)
        ..Default::default()
    };

    // This is a bit of a lazy check but it works well enough
    let err = Grid::from_config(&config).unwrap_err();
    let validation_errors = err.downcast::<ValidationErrors>().unwrap();
    let mut error_fields = validation_errors
        .errors()
        .keys()
        .copied()
        .collect::<Vec<&str>>();
    error_fields.sort_unstable();
    assert_eq!(
        error_fields,
        vec!["xsize", "ysize"],
        "incorrect validation errors in {:#?}",
        validation_errors
    );
}

#[test]
fn test_path_config_validation() {
    let grid = Grid::new(2, 2);
    let config = PathConfig { max_steps: 0 }; // invalid
    let err = Path::with_config(
        &grid,
        GridPoint::new(0, 0),
        GridPoint::new(1, 1),
        &config,
    )
    .unwrap_err();
    let validation_errors = err.downcast::<ValidationErrors>().unwrap();
    assert_eq!(
        validation_errors.errors().keys().copied().collect::<Vec<&str>>(),
        vec!["max_steps"],
        "incorrect validation errors in {:#?}",
        validation_errors
    );
}

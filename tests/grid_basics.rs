use pixel_forge::{Color, EditorError, Grid};

#[test]
fn test_new_grid_is_transparent() {
    let grid = Grid::new(16, 8).unwrap();

    assert_eq!(grid.width(), 16);
    assert_eq!(grid.height(), 8);
    assert!(grid.is_blank());
    assert_eq!(grid.rows().count(), 8);
    assert!(grid.rows().all(|row| row.len() == 16));
    assert_eq!(grid.get(15, 7), Some(Color::Transparent));
}

#[test]
fn test_dimensions_outside_range_are_rejected() {
    for (width, height) in [(7, 32), (32, 7), (257, 32), (32, 257), (0, 0)] {
        let result = Grid::new(width, height);
        assert!(
            matches!(result, Err(EditorError::InvalidDimensions { .. })),
            "{}x{} should be rejected",
            width,
            height
        );
    }
    assert!(Grid::new(8, 8).is_ok());
    assert!(Grid::new(256, 256).is_ok());
}

#[test]
fn test_get_out_of_bounds_is_none() {
    let grid = Grid::new(8, 8).unwrap();
    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(0, -1), None);
    assert_eq!(grid.get(8, 0), None);
    assert_eq!(grid.get(0, 8), None);
}

#[test]
fn test_set_cell_returns_new_grid() {
    let original = Grid::new(8, 8).unwrap();
    let edited = original.set_cell(2, 3, Color::RED);

    assert_eq!(edited.get(2, 3), Some(Color::RED));
    assert_eq!(edited.count(Color::RED), 1);
    // The source snapshot is untouched
    assert!(original.is_blank());
    assert_ne!(original, edited);
}

#[test]
fn test_set_cell_out_of_bounds_is_dropped() {
    let grid = Grid::new(8, 8).unwrap();
    let same = grid.set_cell(8, 8, Color::RED).set_cell(-3, 1, Color::RED);
    assert_eq!(same, grid);
}

#[test]
fn test_overwrite_keeps_last_color() {
    let grid = Grid::new(8, 8).unwrap().set_cell(0, 0, Color::BLUE);
    let twice = grid.set_cell(4, 4, Color::RED).set_cell(4, 4, Color::GREEN);

    assert_eq!(twice.get(4, 4), Some(Color::GREEN));
    assert_eq!(twice.set_cell(4, 4, Color::Transparent), grid);
}

#[test]
fn test_equality_is_by_value() {
    let a = Grid::new(8, 8).unwrap().set_cell(1, 1, Color::RED);
    let b = Grid::new(8, 8).unwrap().set_cell(1, 1, Color::rgb(0xFF, 0, 0));
    assert_eq!(a, b);

    let other_size = Grid::new(9, 8).unwrap();
    assert_ne!(Grid::new(8, 8).unwrap(), other_size);
}

#[test]
fn test_flat_image_with_background() {
    let grid = Grid::new(8, 8).unwrap();
    let image = grid.to_flat_image("#FF0000".parse().unwrap());

    assert_eq!(image.dimensions(), (8, 8));
    assert!(image.pixels().all(|p| p.0 == [0xFF, 0x00, 0x00, 0xFF]));
}

#[test]
fn test_flat_image_with_transparent_background() {
    let grid = Grid::new(8, 8).unwrap();
    let image = grid.to_flat_image(Color::Transparent);

    assert_eq!(image.pixels().count(), 64);
    assert!(image.pixels().all(|p| p.0[3] == 0));
}

#[test]
fn test_flat_image_keeps_painted_cells() {
    let grid = Grid::new(8, 8)
        .unwrap()
        .set_cell(3, 5, Color::rgb(0x12, 0x34, 0x56));
    let image = grid.to_flat_image(Color::WHITE);

    assert_eq!(image.get_pixel(3, 5).0, [0x12, 0x34, 0x56, 0xFF]);
    assert_eq!(image.get_pixel(0, 0).0, [0xFF, 0xFF, 0xFF, 0xFF]);
}

#[test]
fn test_color_parsing_normalizes() {
    assert_eq!("#ff8800".parse::<Color>().unwrap(), Color::rgb(0xFF, 0x88, 0x00));
    assert_eq!("FF8800".parse::<Color>().unwrap(), Color::rgb(0xFF, 0x88, 0x00));
    assert_eq!("#f80".parse::<Color>().unwrap(), Color::rgb(0xFF, 0x88, 0x00));
    assert_eq!("Transparent".parse::<Color>().unwrap(), Color::Transparent);
    assert_eq!(Color::rgb(0xAB, 0x01, 0xEF).to_hex(), "#AB01EF");
    assert_eq!(Color::Transparent.to_hex(), "transparent");

    for bad in ["", "#12345", "#GGGGGG", "red", "#1234567"] {
        let parsed = bad.parse::<Color>();
        assert!(matches!(parsed, Err(EditorError::InvalidColor(_))), "{bad}");
    }
}

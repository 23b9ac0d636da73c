use image::{GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use visual_detect::classifier::{
    color_variance, is_image_like, mean_intensity, window_stats, UNIFORM_VARIANCE_THRESHOLD,
    WINDOW_HEIGHT, WINDOW_WIDTH,
};
use visual_detect::preprocess::to_grayscale;
use visual_detect::{Detector, DetectorConfig, DetectorError, ElementType};

fn save_gray(dir: &Path, name: &str, image: &GrayImage) -> PathBuf {
    let path = dir.join(name);
    image.save(&path).unwrap();
    path
}

/// 60x40 screen: dark button top-left, bright field top-middle,
/// mid-tone link top-right, busy gradient along the bottom row
fn mock_screen() -> GrayImage {
    GrayImage::from_fn(60, 40, |x, y| {
        let v = match (x / 20, y / 20) {
            (0, 0) => 20,
            (1, 0) => 240,
            (2, 0) => 140,
            _ => ((x * 7 + y * 13) % 256) as u8,
        };
        Luma([v])
    })
}

#[test]
fn detects_each_region_kind() {
    let dir = tempfile::tempdir().unwrap();
    let path = save_gray(dir.path(), "screen.png", &mock_screen());

    let elements = Detector::default().detect_elements(&path).unwrap();

    let buttons: Vec<_> = elements
        .iter()
        .filter(|e| e.element_type == ElementType::Button)
        .collect();
    assert_eq!(buttons.len(), 1);
    assert_eq!(buttons[0].selector, "button[0,0]");
    assert_eq!(buttons[0].attribute("clickable"), Some("true"));
    assert_eq!(buttons[0].attribute("color"), Some("#141414ff"));

    let fields: Vec<_> = elements
        .iter()
        .filter(|e| e.element_type == ElementType::TextField)
        .collect();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].selector, "textfield[20,0]");

    let links: Vec<_> = elements
        .iter()
        .filter(|e| e.element_type == ElementType::Link)
        .collect();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].attribute("href"), Some("#"));

    let images: Vec<_> = elements
        .iter()
        .filter(|e| e.element_type == ElementType::Image)
        .collect();
    assert_eq!(images.len(), 3);
    assert!(images.iter().all(|e| e.position.y == 20));
    assert_eq!(images[0].attribute("src"), Some("screen.png#xywh=0,20,20,20"));

    for element in &elements {
        assert_eq!((element.size.width, element.size.height), (WINDOW_WIDTH, WINDOW_HEIGHT));
        assert!((0.0..=1.0).contains(&element.confidence));
        assert!(element.text.is_empty());
    }
}

#[test]
fn output_order_is_fixed_by_pass() {
    let dir = tempfile::tempdir().unwrap();
    let path = save_gray(dir.path(), "screen.png", &mock_screen());

    let elements = Detector::default().detect_elements(&path).unwrap();
    let mut types: Vec<_> = elements.iter().map(|e| e.element_type).collect();
    types.dedup();
    assert_eq!(types, ElementType::ALL);
}

#[test]
fn repeated_detection_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let path = save_gray(dir.path(), "screen.png", &mock_screen());
    let detector = Detector::default();

    let first = detector.detect_elements(&path).unwrap();
    let second = detector.detect_elements(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn disabled_detector_touches_no_files() {
    let detector = Detector::new(DetectorConfig::disabled());
    let err = detector.detect_elements("/no/such/screenshot.png").unwrap_err();
    assert!(matches!(err, DetectorError::Disabled));
}

#[test]
fn unreadable_files_are_load_errors() {
    let dir = tempfile::tempdir().unwrap();
    let detector = Detector::default();

    let missing = dir.path().join("missing.png");
    assert!(matches!(
        detector.detect_elements(&missing),
        Err(DetectorError::ImageLoad { .. })
    ));

    let corrupt = dir.path().join("corrupt.png");
    std::fs::write(&corrupt, [0x89, b'P', b'N', b'G', 0, 0, 0]).unwrap();
    let err = detector.detect_elements(&corrupt).unwrap_err();
    assert!(err.to_string().contains("corrupt.png"));
}

#[test]
fn blank_middle_gray_yields_empty_result() {
    let dir = tempfile::tempdir().unwrap();
    let path = save_gray(dir.path(), "blank.png", &GrayImage::from_pixel(40, 40, Luma([90])));

    let elements = Detector::default().detect_elements(&path).unwrap();
    assert!(elements.is_empty());
}

#[test]
fn tiny_images_are_never_classified() {
    let dir = tempfile::tempdir().unwrap();
    let path = save_gray(dir.path(), "tiny.png", &GrayImage::from_pixel(19, 50, Luma([0])));

    assert!(Detector::default().detect_elements(&path).unwrap().is_empty());
}

#[test]
fn uniform_regions_trigger_at_most_one_uniform_pass() {
    let detector = Detector::default();
    for level in (0..=255u8).step_by(5) {
        let image = image::DynamicImage::ImageLuma8(GrayImage::from_pixel(20, 20, Luma([level])));
        let map = to_grayscale(&image);
        assert_eq!(color_variance(&map, 0, 0, 20, 20), 0.0);

        let elements = detector.detect_image(&image, None).unwrap();
        assert!(elements.len() <= 1, "level {level}: {elements:?}");
        assert!(elements.iter().all(|e| e.element_type != ElementType::Image));
    }
}

#[test]
fn shallow_diagonal_gradients_are_images() {
    let detector = Detector::default();
    for k in 1..=6u32 {
        let gradient = GrayImage::from_fn(20, 20, |x, y| Luma([((x * k + y * k) % 256) as u8]));
        let image = image::DynamicImage::ImageLuma8(gradient);

        let stats = window_stats(&to_grayscale(&image), 0, 0, 20, 20).unwrap();
        assert!(stats.variance > 0.0, "k={k}");
        assert!(is_image_like(&stats), "k={k}: {stats:?}");

        let types: Vec<_> = detector
            .detect_image(&image, None)
            .unwrap()
            .into_iter()
            .map(|e| e.element_type)
            .collect();
        assert_eq!(types, vec![ElementType::Image], "k={k}");
    }
}

#[test]
fn coordinate_dependent_pattern_is_image_like() {
    let image = GrayImage::from_fn(40, 40, |x, y| Luma([((x * 5 + y * 5) % 256) as u8]));
    let map = to_grayscale(&image::DynamicImage::ImageLuma8(image));

    let stats = window_stats(&map, 0, 0, 20, 20).unwrap();
    assert!(stats.variance >= UNIFORM_VARIANCE_THRESHOLD);
    assert!(is_image_like(&stats));
    assert!(mean_intensity(&map, 0, 0, 20, 20).is_some());
    assert_eq!(mean_intensity(&map, 30, 30, 20, 20), None);
}

#[test]
fn colour_formats_agree_on_classification() {
    let rgb = RgbImage::from_pixel(20, 20, Rgb([250, 250, 250]));
    let rgba = RgbaImage::from_pixel(20, 20, Rgba([250, 250, 250, 128]));
    let detector = Detector::default();

    let from_rgb = detector
        .detect_image(&image::DynamicImage::ImageRgb8(rgb), None)
        .unwrap();
    let from_rgba = detector
        .detect_image(&image::DynamicImage::ImageRgba8(rgba), None)
        .unwrap();

    assert_eq!(from_rgb.len(), 1);
    assert_eq!(from_rgba.len(), 1);
    assert_eq!(from_rgb[0].element_type, ElementType::TextField);
    assert_eq!(from_rgba[0].element_type, ElementType::TextField);
    assert_eq!(from_rgba[0].attribute("color"), Some("#fafafa80"));
}

#[test]
fn parallel_callers_share_one_detector() {
    let dir = tempfile::tempdir().unwrap();
    let path = save_gray(dir.path(), "screen.png", &mock_screen());
    let detector = Detector::default();
    let expected = detector.detect_elements(&path).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| detector.detect_elements(&path).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

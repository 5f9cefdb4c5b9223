use img2pdf::{ConvertError, ConvertOptions, convert_to_pdf, convert_to_pdf_bytes, load_images};
use std::io::Cursor;
use std::path::PathBuf;
use tempfile::tempdir;

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([200, 60, 60, 255]));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

fn write_test_images(dir: &std::path::Path, dims: &[(u32, u32)]) -> Vec<PathBuf> {
    dims.iter()
        .enumerate()
        .map(|(i, &(w, h))| {
            let path = dir.join(format!("img_{i}.png"));
            std::fs::write(&path, png_bytes(w, h)).unwrap();
            path
        })
        .collect()
}

#[tokio::test]
async fn test_load_images_preserves_selection_order() {
    let dir = tempdir().unwrap();
    let paths = write_test_images(dir.path(), &[(8, 4), (3, 9), (5, 5)]);

    let images = load_images(&paths).await.unwrap();

    assert_eq!(images.len(), 3);
    assert_eq!(images[0].name, "img_0.png");
    assert_eq!((images[0].width, images[0].height), (8, 4));
    assert_eq!(images[1].name, "img_1.png");
    assert_eq!((images[1].width, images[1].height), (3, 9));
    assert_eq!(images[2].name, "img_2.png");
    assert_eq!((images[2].width, images[2].height), (5, 5));
}

#[tokio::test]
async fn test_load_missing_file_names_the_path() {
    let dir = tempdir().unwrap();
    let mut paths = write_test_images(dir.path(), &[(4, 4)]);
    paths.push(dir.path().join("does_not_exist.png"));

    let err = load_images(&paths).await.unwrap_err();

    match err {
        ConvertError::Read { path, .. } => {
            assert!(path.ends_with("does_not_exist.png"));
        }
        other => panic!("expected Read error, got: {other}"),
    }
}

#[tokio::test]
async fn test_load_undecodable_file_names_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"not an image at all").unwrap();

    let err = load_images(std::slice::from_ref(&path)).await.unwrap_err();

    match err {
        ConvertError::Decode { name, .. } => assert_eq!(name, "broken.png"),
        other => panic!("expected Decode error, got: {other}"),
    }
}

#[tokio::test]
async fn test_one_page_per_image_in_order() {
    let dir = tempdir().unwrap();
    let paths = write_test_images(dir.path(), &[(8, 4), (3, 9), (5, 5), (2, 2)]);
    let images = load_images(&paths).await.unwrap();

    let bytes = convert_to_pdf_bytes(&images, &ConvertOptions::default()).unwrap();

    let doc = lopdf::Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 4);
}

#[tokio::test]
async fn test_single_image_has_no_trailing_blank_page() {
    let dir = tempdir().unwrap();
    let paths = write_test_images(dir.path(), &[(6, 6)]);
    let images = load_images(&paths).await.unwrap();

    let bytes = convert_to_pdf_bytes(&images, &ConvertOptions::default()).unwrap();

    let doc = lopdf::Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
}

#[test]
fn test_zero_images_is_rejected() {
    let err = convert_to_pdf_bytes(&[], &ConvertOptions::default()).unwrap_err();

    assert!(matches!(err, ConvertError::NoImages));
    assert_eq!(err.to_string(), "No images to convert!");
}

#[tokio::test]
async fn test_convert_to_pdf_writes_output_file() {
    let dir = tempdir().unwrap();
    let paths = write_test_images(dir.path(), &[(8, 4), (3, 9)]);
    let images = load_images(&paths).await.unwrap();

    let output = dir.path().join("out.pdf");
    convert_to_pdf(&images, &ConvertOptions::default(), &output)
        .await
        .unwrap();

    let bytes = std::fs::read(&output).unwrap();
    let doc = lopdf::Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 2);
}

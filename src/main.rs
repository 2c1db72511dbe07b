use pixel_filters::filter::blur;
use pixel_filters::gaussian::weight_image;
use pixel_filters::PixelMatrix;

fn main() {
    env_logger::init();

    // Demo stub: renders a Gaussian weight image and blurs it
    let (w, h) = (64usize, 48usize);
    let map = match weight_image(w, h) {
        Ok(img) => img,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };
    let matrix = PixelMatrix::from_image(&map);
    let blurred = blur(&matrix, 2);
    let peak = blurred.pixels().map(|px| px.r()).max().unwrap_or(0);
    println!(
        "size={}x{} peak_before={} peak_after={}",
        blurred.width(),
        blurred.height(),
        map.pixel(w / 2, h / 2).r(),
        peak
    );
}

use argh::FromArgs;
use image::DynamicImage;
use log::info;
use wristy_core::bitmap::Bitmap;

const MAX_EXTENT: u32 = 256;

#[derive(FromArgs)]
/// Conversion options
struct Args {
    /// input image path
    #[argh(option, short = 'i')]
    input_path: String,

    /// icon name used for the generated constant
    #[argh(option, short = 'n')]
    name: String,

    /// output Rust module path
    #[argh(option, short = 'o')]
    output_path: String,

    /// luma threshold above which a pixel counts as lit
    #[argh(option, default = "128")]
    threshold: u8,

    /// treat dark pixels as lit instead of bright ones
    #[argh(switch)]
    invert: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    let image = image::open(&args.input_path).expect("Failed to open input image");

    let width = image.width();
    let height = image.height();
    if width == 0 || height == 0 || width > MAX_EXTENT || height > MAX_EXTENT {
        panic!("Input image must be between 1x1 and {MAX_EXTENT}x{MAX_EXTENT}");
    }
    info!("Packing {} ({}x{})", args.input_path, width, height);

    let buffer = pack(image, args.threshold, args.invert);
    let bitmap = Bitmap::try_new(width as u16, height as u16, &buffer)
        .expect("Packed buffer does not match the image dimensions");

    let rust_code = render_module(&args.name, &bitmap);
    std::fs::write(&args.output_path, rust_code).expect("Failed to write icon module");
    info!(
        "Wrote {} ({}x{}, {} bytes)",
        args.output_path,
        bitmap.width(),
        bitmap.height(),
        bitmap.data().len()
    );
}

fn pack(img: DynamicImage, threshold: u8, invert: bool) -> Vec<u8> {
    let image = img.into_luma8();
    let width = image.width() as usize;
    let height = image.height() as usize;
    let stride = width.div_ceil(8);
    let mut buffer = vec![0u8; stride * height];
    for y in 0..height {
        for x in 0..width {
            let luma = image.get_pixel(x as u32, y as u32)[0];
            let lit = if invert { luma < threshold } else { luma >= threshold };
            if lit {
                let byte_index = y * stride + x / 8;
                let bit_index = 7 - (x % 8);
                buffer[byte_index] |= 1 << bit_index;
            }
        }
    }
    buffer
}

fn render_module(name: &str, bitmap: &Bitmap) -> String {
    let constant = name.to_ascii_uppercase().replace([' ', '-'], "_");
    let mut rust_code = String::new();
    rust_code.push_str("// Auto-generated icon file\n");
    rust_code.push_str(&format!("// Icon: {}\n\n", name));
    rust_code.push_str("use crate::bitmap::Bitmap;\n\n");
    rust_code.push_str("#[rustfmt::skip]\n");
    rust_code.push_str(&format!(
        "pub static {}: Bitmap<'static> = Bitmap::new({}, {}, &[\n",
        constant,
        bitmap.width(),
        bitmap.height()
    ));
    for chunk in bitmap.data().chunks(8) {
        rust_code.push_str("   ");
        for byte in chunk {
            rust_code.push_str(&format!(" 0x{:02X},", byte));
        }
        rust_code.push('\n');
    }
    rust_code.push_str("]);\n");
    rust_code
}

use argh::FromArgs;
use embedded_graphics::{Pixel, pixelcolor::BinaryColor};
use log::info;
use strum::IntoEnumIterator;
use wristy_core::res::icon::Icon;

#[derive(FromArgs)]
/// Render options
struct Args {
    /// icon name, as printed by --list
    #[argh(option, short = 'i', default = "String::from(\"bluetooth\")")]
    icon: String,

    /// output image path, defaults to <name>.png
    #[argh(option, short = 'o')]
    output_path: Option<String>,

    /// pixel scale factor
    #[argh(option, short = 's', default = "16")]
    scale: usize,

    /// list the icons compiled into the table and exit
    #[argh(switch)]
    list: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    if args.list {
        for icon in Icon::iter() {
            let bitmap = icon.bitmap();
            println!("{} ({}x{})", icon.repr(), bitmap.width(), bitmap.height());
        }
        return;
    }

    let Some(icon) = Icon::iter().find(|icon| icon.repr() == args.icon) else {
        panic!("No icon named {:?} in the table, try --list", args.icon);
    };
    if args.scale == 0 {
        panic!("Scale must be at least 1");
    }

    let bitmap = icon.bitmap();
    let output_path = args
        .output_path
        .unwrap_or_else(|| format!("{}.png", icon.repr()));

    let width = bitmap.width() as usize * args.scale;
    let height = bitmap.height() as usize * args.scale;
    let mut blowup = vec![0u8; width * height];
    for Pixel(point, color) in bitmap.pixels() {
        let luma = match color {
            BinaryColor::On => 0xFFu8,
            BinaryColor::Off => 0x00u8,
        };
        for dy in 0..args.scale {
            let offset = (point.y as usize * args.scale + dy) * width + point.x as usize * args.scale;
            blowup[offset..offset + args.scale].fill(luma);
        }
    }

    image::save_buffer(
        &std::path::Path::new(&output_path),
        &blowup,
        width as u32,
        height as u32,
        image::ColorType::L8,
    )
    .expect("Failed to save image");
    info!(
        "Wrote {} ({}x{} at {}x scale)",
        output_path,
        bitmap.width(),
        bitmap.height(),
        args.scale
    );
}

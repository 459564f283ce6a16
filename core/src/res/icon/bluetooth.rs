// Placeholder for the 16x16 bluetooth status icon, in the layout icongen
// emits.  Every bit is clear, so the icon draws as a blank cell.
// TODO: run icongen on the real artwork once the status bar design lands.

use crate::bitmap::Bitmap;

#[rustfmt::skip]
pub static BLUETOOTH: Bitmap<'static> = Bitmap::new(16, 16, &[
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
]);
